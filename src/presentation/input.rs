use crate::application::{App, Screen};
use crossterm::event::KeyCode;

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode) {
        if matches!(app.navigator.screen(), Screen::Detail(_)) {
            Self::handle_detail_keys(app, key);
        } else {
            Self::handle_list_keys(app, key);
        }
    }

    fn handle_list_keys(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next(),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => app.open_selected(),
            _ => {}
        }
    }

    fn handle_detail_keys(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
                app.go_back()
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_move_selection() {
        let mut app = App::default();

        InputHandler::handle_key_event(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 1);

        InputHandler::handle_key_event(&mut app, KeyCode::Up);
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_vim_keys_move_selection() {
        let mut app = App::default();

        InputHandler::handle_key_event(&mut app, KeyCode::Char('j'));
        InputHandler::handle_key_event(&mut app, KeyCode::Char('j'));
        assert_eq!(app.selected, 2);

        InputHandler::handle_key_event(&mut app, KeyCode::Char('k'));
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_enter_opens_detail_screen() {
        let mut app = App::default();
        InputHandler::handle_key_event(&mut app, KeyCode::Enter);

        let Screen::Detail(puppy) = app.navigator.screen() else {
            panic!("expected detail screen");
        };
        assert_eq!(puppy.name, "Brno");
    }

    #[test]
    fn test_escape_returns_to_list() {
        let mut app = App::default();
        InputHandler::handle_key_event(&mut app, KeyCode::Enter);
        InputHandler::handle_key_event(&mut app, KeyCode::Esc);

        assert!(matches!(app.navigator.screen(), Screen::List));
    }

    #[test]
    fn test_list_keys_ignored_on_detail_screen() {
        let mut app = App::default();
        InputHandler::handle_key_event(&mut app, KeyCode::Enter);

        // Selection must not move while the detail screen is shown
        InputHandler::handle_key_event(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 0);
        assert!(matches!(app.navigator.screen(), Screen::Detail(_)));
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut app = App::default();
        InputHandler::handle_key_event(&mut app, KeyCode::Char('x'));
        InputHandler::handle_key_event(&mut app, KeyCode::Tab);

        assert_eq!(app.selected, 0);
        assert!(matches!(app.navigator.screen(), Screen::List));
    }
}
