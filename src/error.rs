//! Error types for `clapsense`
//!
//! This module defines all error types used throughout the crate.
//! Nothing in the detection core is fatal: sensor absence degrades to a
//! status message, feedback failures are logged and swallowed, and malformed
//! readings are treated as "far".
//!
//! Error variants use `#[source]` to preserve error chains for better
//! observability and debugging.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for `clapsense`
#[derive(Debug, Error)]
pub enum ClapSenseError {
    /// No proximity sensor is present; detection never runs
    #[error("proximity sensor unavailable")]
    SensorUnavailable,

    /// A feedback sink (audio or haptic) failed to dispatch
    /// Preserves the underlying error source for full error chain transparency
    #[error("feedback dispatch failed: {0}")]
    FeedbackDispatchFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error
    /// Preserves the underlying error source for full error chain transparency
    #[error("configuration error: {0}")]
    ConfigError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for `clapsense` operations
pub type Result<T> = std::result::Result<T, ClapSenseError>;

/// Convert an error to a status message suitable for the display surface
///
/// The returned text is what the shell shows in `DisplayState::status_text`
/// when an error condition needs to be surfaced to the user.
pub fn status_message(error: &ClapSenseError) -> String {
    match error {
        ClapSenseError::SensorUnavailable => "Proximity sensor not found!".to_string(),
        ClapSenseError::FeedbackDispatchFailed(_) => {
            "Feedback unavailable (detection still running)".to_string()
        }
        ClapSenseError::ConfigError(_) | ClapSenseError::Json(_) => {
            "Configuration could not be loaded; using defaults".to_string()
        }
        ClapSenseError::Io(e) => format!("File system error: {e}"),
    }
}
