//! Output format types for the chatlens library.
//!
//! This module provides library-first format types that don't depend on CLI
//! frameworks. [`render`] turns a [`TranscriptView`] into the projection a
//! format stands for:
//!
//! | Format | Content |
//! |--------|---------|
//! | [`Text`](OutputFormat::Text) | Human readable report of every aggregate table |
//! | [`Json`](OutputFormat::Json) | The [`Report`](crate::core::Report) as pretty-printed JSON |
//! | [`Csv`](OutputFormat::Csv) | The enriched message table, `;` delimited |
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatlens::Result<()> {
//! use chatlens::config::AnalyzerConfig;
//! use chatlens::core::Transcript;
//! use chatlens::format::{OutputFormat, render};
//!
//! let transcript = Transcript::from_text(
//!     "12/31/20, 9:34 PM - John Doe: Happy New Year!",
//!     &AnalyzerConfig::default(),
//! )?;
//!
//! let csv = render(&transcript.all(), OutputFormat::Csv)?;
//! assert!(csv.starts_with("Timestamp;Sender;Body"));
//!
//! let format = OutputFormat::from_path("report.json")?;
//! assert_eq!(format, OutputFormat::Json);
//! # Ok(())
//! # }
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::TranscriptView;
use crate::core::output::to_text;
use crate::error::{ChatlensError, Result};

/// Output format of a run.
///
/// # Example
///
/// ```rust
/// use chatlens::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("csv").unwrap();
/// assert_eq!(format, OutputFormat::Csv);
/// assert_eq!(format.extension(), "csv");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// Plain text report (default)
    #[default]
    Text,

    /// JSON report of every aggregate table
    Json,

    /// CSV of the enriched message table with semicolon delimiter
    Csv,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// ```rust
    /// use chatlens::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Text.extension(), "txt");
    /// assert_eq!(OutputFormat::Json.extension(), "json");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "json", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Text, OutputFormat::Json, OutputFormat::Csv]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text/plain",
            OutputFormat::Json => "application/json",
            OutputFormat::Csv => "text/csv",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// ```rust
    /// use chatlens::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out.CSV").unwrap(), OutputFormat::Csv);
    /// assert!(OutputFormat::from_path("out.xlsx").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "txt" | "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ChatlensError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: txt, json, csv"),
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Renders `view` in the given format.
///
/// The text and JSON reports are sized by the transcript's
/// [`AnalyzerConfig`](crate::config::AnalyzerConfig).
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - Serialization fails
pub fn render(view: &TranscriptView<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(to_text(&view.report())),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::report_to_json(&view.report()),
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(view.messages()),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Renders `view` and writes the result to `path`.
pub fn write_to_format(
    view: &TranscriptView<'_>,
    path: impl AsRef<Path>,
    format: OutputFormat,
) -> Result<()> {
    let rendered = render(view, format)?;
    let mut file = File::create(path)?;
    file.write_all(rendered.as_bytes())?;
    Ok(())
}

#[allow(dead_code)]
fn missing_feature(format: OutputFormat) -> ChatlensError {
    ChatlensError::invalid_format(
        "output",
        format!(
            "Output format {:?} requires the '{}' feature to be enabled",
            format,
            match format {
                OutputFormat::Csv => "csv-output",
                _ => "json-output",
            }
        ),
    )
}
