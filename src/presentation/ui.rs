use crate::application::{App, Screen};
use crate::domain::Puppy;
use crate::infrastructure::AssetStore;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    match app.navigator.screen() {
        Screen::List => render_list(f, app, chunks[1]),
        Screen::Detail(puppy) => render_detail(f, puppy, chunks[1]),
    }
    render_status_bar(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!(
        "pupdex - Puppy Adoption | {} puppies",
        app.puppies.len()
    ))
    .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_list(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .puppies
        .iter()
        .enumerate()
        .map(|(i, puppy)| {
            let style = if i == app.selected {
                Style::default().bg(Color::Blue).fg(Color::White)
            } else {
                Style::default()
            };
            let thumbnail_style = if i == app.selected {
                Style::default().bg(Color::Blue).fg(Color::White)
            } else {
                Style::default().fg(Color::Yellow)
            };

            let lines = vec![
                Line::from(vec![
                    Span::styled(AssetStore::thumbnail(puppy.image), thumbnail_style),
                    Span::raw(format!("  Name : {}", puppy.name)),
                ]),
                Line::from("         Type Dog"),
                Line::from(format!("         Age {}", puppy.age)),
                Line::from(""),
            ];
            ListItem::new(Text::from(lines)).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Puppies"));
    f.render_widget(list, area);
}

fn render_detail(f: &mut Frame, puppy: &Puppy, area: Rect) {
    let art = AssetStore::art(puppy.image);
    let art_height = art.lines().count() as u16 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(art_height), Constraint::Min(0)])
        .split(area);

    let image = Paragraph::new(art)
        .block(Block::default().borders(Borders::ALL).title(puppy.name.clone()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(image, chunks[0]);

    let info = vec![
        Line::from(Span::styled(
            puppy.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(puppy.description.clone()),
        Line::from(format!("Age {}", puppy.age)),
    ];
    let details = Paragraph::new(info)
        .block(Block::default().borders(Borders::ALL).title("Details"))
        .wrap(Wrap { trim: true });
    f.render_widget(details, chunks[1]);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = if let Some(ref status) = app.status_message {
        status.clone()
    } else {
        match app.navigator.screen() {
            Screen::List => "up/down or j/k: move | Enter: open | q: quit".to_string(),
            Screen::Detail(_) => "Esc/Backspace: back | q: quit".to_string(),
        }
    };

    let style = if app.status_message.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(status, area);
}
