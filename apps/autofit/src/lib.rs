//! Largest-font-size fitting for text in a bounded rectangle.
//!
//! See [`layout::FitOrchestrator`] for the entry point.

pub mod config;
pub mod errors;
pub mod layout;

pub use errors::FitError;
pub use layout::*;
