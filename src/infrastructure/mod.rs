//! Infrastructure layer providing external resource integrations.
//!
//! This module contains the bundled image-asset store, the only
//! system-level resource the application consumes.

pub mod assets;

pub use assets::*;
