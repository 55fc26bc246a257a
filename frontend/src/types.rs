//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Navigation Types** - Root page state and its events
//! - **Notification Types** - Transient toasts shown to the user
//! - **Report Types** - Status of a quality check
//! - **Error Types** - Frontend error handling

use std::fmt;

use thiserror::Error;

// =============================================================================
// Navigation Types
// =============================================================================

/// Top-level screens reachable from the navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Upload,
    Dashboard,
    Api,
}

impl Tab {
    /// All tabs, in navigation bar order.
    pub const ALL: [Tab; 3] = [Tab::Upload, Tab::Dashboard, Tab::Api];

    /// Label shown in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Upload => "Upload Dataset",
            Tab::Dashboard => "Quality Dashboard",
            Tab::Api => "API Documentation",
        }
    }

    /// Icon glyph shown before the label.
    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Upload => "📄",
            Tab::Dashboard => "📊",
            Tab::Api => "👥",
        }
    }
}

/// Messages accepted by [`NavigationState::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    /// The user clicked a tab.
    Select(Tab),
    /// The upload panel finished its analysis.
    ResultsReady,
}

/// State owned by the root page.
///
/// `has_results` is a latch: only [`NavEvent::ResultsReady`] sets it and
/// nothing clears it short of a page reload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub active_tab: Tab,
    pub has_results: bool,
}

impl NavigationState {
    pub fn apply(&mut self, event: NavEvent) {
        match event {
            NavEvent::Select(tab) => self.active_tab = tab,
            NavEvent::ResultsReady => self.has_results = true,
        }
    }

    /// Whether the marketing hero is shown above the upload panel.
    pub fn shows_hero(&self) -> bool {
        self.active_tab == Tab::Upload && !self.has_results
    }
}

// =============================================================================
// Notification Types
// =============================================================================

/// Visual style of a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

impl NotificationVariant {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationVariant::Default => "toast",
            NotificationVariant::Destructive => "toast toast-destructive",
        }
    }
}

/// A transient message shown in the toaster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NotificationVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn analysis_complete() -> Self {
        Self::new(
            "Analysis Complete",
            "Your dataset has been analyzed successfully.",
        )
    }

    pub fn copied() -> Self {
        Self::new("Copied to clipboard", "Code snippet copied successfully")
    }

    pub fn copy_failed(error: &AppError) -> Self {
        Self::destructive("Copy failed", error.to_string())
    }

    /// Notification for a rejected upload.
    pub fn rejected(error: &UploadError) -> Self {
        match error {
            UploadError::UnsupportedFormat(_) => Self::destructive(
                "Invalid file type",
                "Please upload a CSV, TSV, XLSX, or JSON file.",
            ),
            UploadError::TooLarge { .. } => {
                Self::destructive("File too large", error.to_string())
            }
        }
    }
}

// =============================================================================
// Report Types
// =============================================================================

/// Outcome of a single batch check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warning,
    Fail,
}

impl CheckStatus {
    /// Get CSS class for the status colour.
    pub fn css_class(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "text-success",
            CheckStatus::Warning => "text-warning",
            CheckStatus::Fail => "text-destructive",
        }
    }

    /// Get CSS class for the status badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "badge badge-default",
            CheckStatus::Warning => "badge badge-secondary",
            CheckStatus::Fail => "badge badge-destructive",
        }
    }

    /// Get icon for display.
    pub fn icon(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "✔",
            CheckStatus::Warning => "⚠",
            CheckStatus::Fail => "✖",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Warning => "WARNING",
            CheckStatus::Fail => "FAIL",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Reasons a dataset is refused before the analysis starts.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    /// Extension is not one of csv, tsv, xlsx, json.
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    /// File exceeds [`MAX_FILE_SIZE`](crate::config::MAX_FILE_SIZE).
    #[error("{name} is {size} bytes, the limit is 50 MB")]
    TooLarge { name: String, size: u64 },
}

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    /// Dataset refused by the upload panel.
    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),

    /// Clipboard unavailable or write refused.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Missing browser API (window, location...).
    #[error("Browser error: {0}")]
    Browser(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
