//! UI Components for the OnceEquity application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Brand and API status badge
//! - [`NavBar`] - Tab bar switching between screens
//! - [`Hero`] - Title and feature cards on the upload screen
//! - [`Footer`] - Page footer
//! - [`Toaster`] - Transient notifications
//!
//! # Feature Components
//! - [`UploadSection`] - Dataset upload with drag & drop and simulated analysis
//! - [`ProgressSection`] - Progress bar and analysis checklist
//! - [`QualityDashboard`] - Mock quality report
//! - [`ApiDocumentation`] - Static API reference with copyable snippets

mod header;
mod nav;
mod hero;
mod upload;
mod progress;
mod dashboard;
mod api_docs;
mod toast;
mod footer;

pub use header::*;
pub use nav::*;
pub use hero::*;
pub use upload::*;
pub use progress::*;
pub use dashboard::*;
pub use api_docs::*;
pub use toast::*;
pub use footer::*;
