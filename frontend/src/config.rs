//! Application configuration.
//!
//! Centralized configuration for the OnceEquity frontend.
//! Everything is compile-time: the demo has no backend to fetch settings from.

/// Product name shown in the header and page title.
pub const APP_NAME: &str = "OnceEquity";

/// Base URL of the documented quality-check API.
///
/// Display only, nothing in the frontend calls it.
pub const API_BASE_URL: &str = "https://api.cancerqc.com";

/// Dataset extensions accepted by the upload panel (lower case, no dot).
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["csv", "tsv", "xlsx", "json"];

/// Value of the file input `accept` attribute.
pub const ACCEPT_ATTRIBUTE: &str = ".csv,.tsv,.xlsx,.json";

/// Maximum file size for upload (in bytes).
///
/// 50 MB limit.
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Period of the progress tick while the analysis is "running".
pub const PROGRESS_TICK_MS: u32 = 200;

/// Percentage added on every tick.
pub const PROGRESS_STEP: u8 = 10;

/// Ticks never push the bar past this value; only completion reaches 100.
pub const PROGRESS_CAP: u8 = 90;

/// Delay between acceptance and completion of the simulated analysis.
pub const COMPLETION_DELAY_MS: u32 = 3000;

/// How long a notification stays on screen.
pub const NOTIFICATION_LIFETIME_MS: u32 = 5000;

/// Maximum notifications kept on screen at once.
pub const MAX_NOTIFICATIONS: usize = 3;
