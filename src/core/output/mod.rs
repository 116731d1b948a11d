//! Output format writers.
//!
//! This module provides writers for the serialized projections:
//! - [`to_text`] / [`day_to_text`] - plain text report and one-day transcript
//! - [`write_csv`] / [`to_csv`] - enriched message table, semicolon delimited - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - enriched messages as a JSON array - requires `json-output` feature
//! - [`write_report_json`] / [`report_to_json`] - every aggregate table of a view - requires `json-output` feature
//!
//! The sentiment label column is computed at write time from the stored
//! polarity.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::config::AnalyzerConfig;
//! use chatlens::core::Transcript;
//! use chatlens::core::output::{report_to_json, write_csv};
//!
//! let transcript = Transcript::from_path("chat.txt", &AnalyzerConfig::default())?;
//! let view = transcript.all();
//!
//! write_csv(view.messages(), "messages.csv")?;
//! let json = report_to_json(&view.report())?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
mod text_writer;
#[cfg(feature = "json-output")]
mod json_writer;

pub use text_writer::{day_to_text, to_text};

#[cfg(feature = "csv-output")]
pub use csv_writer::{CSV_HEADER, to_csv, write_csv, write_csv_to};
#[cfg(feature = "json-output")]
pub use json_writer::{report_to_json, to_json, write_json, write_report_json};
