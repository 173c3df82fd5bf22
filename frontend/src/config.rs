//! Application configuration.
//!
//! Centralized configuration for the Sortcycle frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Prediction API base URL.
///
/// The external classification service (opaque collaborator).
pub const API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Application name, shown in the page header.
pub const APP_NAME: &str = "Smart Garbage Classifier";

/// Maximum file size mentioned in the upload hint (in bytes).
///
/// 10 MB. Display only; the endpoint enforces its own limits.
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;

/// Delay before the result card fades in, in milliseconds.
pub const RESULT_REVEAL_DELAY_MS: u32 = 100;
