//! pupdex - Terminal Puppy Browser Library
//!
//! A terminal application showing a fixed puppy catalog with a list
//! screen and a detail screen, built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
