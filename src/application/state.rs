//! Application state management for the puppy browser.
//!
//! This module contains the route grammar, the two-state navigator, and
//! the main application state driven by the terminal user interface.

use std::fmt;

use crate::domain::{get_puppies, DomainError, DomainResult, PayloadCodec, Puppy};

/// A navigable destination plus its payload, in typed form.
///
/// The string grammar of the navigation boundary is `"list"` and
/// `"detail/{payload}"`, where the payload is a serialized puppy.
/// [`Route::parse`] and the `Display` impl convert between the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Detail(String),
}

impl Route {
    /// Parses a route string. Returns `None` for anything outside the
    /// two-route grammar.
    pub fn parse(route: &str) -> Option<Route> {
        if route == "list" {
            return Some(Route::List);
        }
        route
            .strip_prefix("detail/")
            .map(|payload| Route::Detail(payload.to_string()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::List => write!(f, "list"),
            Route::Detail(payload) => write!(f, "detail/{}", payload),
        }
    }
}

/// The screen currently shown. `Detail` owns its own reconstruction of
/// the selected puppy, decoded from the route payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    List,
    Detail(Puppy),
}

/// Two-state router connecting the list screen to the detail screen.
///
/// Held and passed explicitly by [`App`]; the current screen is the only
/// mutable navigation state in the program.
#[derive(Debug)]
pub struct Navigator {
    screen: Screen,
}

impl Default for Navigator {
    fn default() -> Self {
        Self { screen: Screen::List }
    }
}

impl Navigator {
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Pushes the screen identified by `route`.
    ///
    /// Entering the detail screen decodes the payload first; a payload
    /// that fails to decode leaves the current screen untouched and is
    /// the only error this method returns. An unparseable route string
    /// is treated the same way.
    pub fn navigate(&mut self, route: &str) -> DomainResult<()> {
        let route = Route::parse(route)
            .ok_or_else(|| DomainError::MalformedPayload(format!("unknown route: {}", route)))?;

        match route {
            Route::List => self.screen = Screen::List,
            Route::Detail(payload) => {
                let puppy = PayloadCodec::deserialize(&payload)?;
                self.screen = Screen::Detail(puppy);
            }
        }
        Ok(())
    }

    /// Pops back to the list screen. A no-op when already there.
    pub fn back(&mut self) {
        self.screen = Screen::List;
    }
}

/// Main application state: the catalog, the navigator, and the list
/// selection.
///
/// # Examples
///
/// ```
/// use pupdex::application::{App, Screen};
///
/// let app = App::default();
/// assert_eq!(app.puppies.len(), 5);
/// assert_eq!(app.selected, 0);
/// assert!(matches!(app.navigator.screen(), Screen::List));
/// ```
#[derive(Debug)]
pub struct App {
    /// The fixed puppy catalog, built once and never mutated
    pub puppies: Vec<Puppy>,
    /// Router owning the current screen
    pub navigator: Navigator,
    /// Currently highlighted list row (zero-based)
    pub selected: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            puppies: get_puppies(),
            navigator: Navigator::default(),
            selected: 0,
            status_message: None,
        }
    }
}

impl App {
    /// Moves the list highlight up one row, stopping at the top.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Moves the list highlight down one row, stopping at the bottom.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.puppies.len() {
            self.selected += 1;
        }
    }

    /// Opens the detail screen for the highlighted puppy.
    ///
    /// The puppy is serialized into a detail route and driven through
    /// [`App::navigate`], so the detail screen always renders a decoded
    /// reconstruction rather than the catalog's own instance.
    pub fn open_selected(&mut self) {
        let Some(puppy) = self.puppies.get(self.selected) else {
            return;
        };
        let route = Route::Detail(PayloadCodec::serialize(puppy)).to_string();
        self.navigate(&route);
    }

    /// Navigates to `route`, absorbing failure.
    ///
    /// A malformed payload never crashes or renders a broken detail
    /// screen: the navigator stays where it is and the failure surfaces
    /// as a status-bar message.
    pub fn navigate(&mut self, route: &str) {
        match self.navigator.navigate(route) {
            Ok(()) => self.status_message = None,
            Err(err) => self.status_message = Some(err.to_string()),
        }
    }

    /// Returns from the detail screen to the list.
    pub fn go_back(&mut self) {
        self.navigator.back();
        self.status_message = None;
    }
}
