//! Application layer managing state and navigation workflows.
//!
//! This module coordinates between the domain layer and presentation layer,
//! managing the screen state machine and the list selection.

pub mod state;

pub use state::*;
