//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers all error
//! cases in the library.
//!
//! Unparseable transcript lines are *not* errors: they are dropped by the line
//! parser. The only transcript-level failure is [`ChatlensError::NoValidData`],
//! raised when a whole transcript yields zero messages.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::Message;
///
/// fn first_sender(messages: &[Message]) -> Result<&str> {
///     messages
///         .first()
///         .map(Message::sender)
///         .ok_or_else(|| chatlens::ChatlensError::no_valid_data(None))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// Reading the export or writing the output failed.
    ///
    /// A file that is not valid UTF-8 also lands here.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The transcript did not contain a single parseable message line.
    #[error("No valid chat data found{}. Please check the file format.", path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    NoValidData {
        /// The file path, if the transcript came from a file
        path: Option<PathBuf>,
    },

    /// The requested output format is unknown.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What kind of format was being resolved (e.g. "output")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date in a filter selection.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// The log subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates a "no valid data" error, optionally tagged with the source file.
    pub fn no_valid_data(path: Option<PathBuf>) -> Self {
        ChatlensError::NoValidData { path }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates a logging setup error.
    pub fn logging(message: impl Into<String>) -> Self {
        ChatlensError::Logging(message.into())
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if the transcript yielded no messages.
    pub fn is_no_valid_data(&self) -> bool {
        matches!(self, ChatlensError::NoValidData { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlensError::InvalidDate { .. })
    }

    /// Returns `true` if logging setup failed.
    pub fn is_logging(&self) -> bool {
        matches!(self, ChatlensError::Logging(_))
    }
}
