//! Browser-side services.
//!
//! # Services
//!
//! - [`analysis`] - Dataset validation and the simulated analysis state machine
//! - [`clipboard`] - Async clipboard writes for the "Copy" buttons

pub mod analysis;
pub mod clipboard;

pub use analysis::*;
pub use clipboard::*;
