//! Core analysis logic for chatlens.
//!
//! This module contains:
//! - [`filter`] - Message filtering by sender and date range
//! - [`aggregate`] - The analyzed [`Transcript`], its filtered views and tables
//! - [`models`] - Row types of the aggregate tables
//! - [`output`] - Format writers (text, CSV, JSON)
//!
//! # Quick Start
//!
//! ```rust
//! use chatlens::config::AnalyzerConfig;
//! use chatlens::core::{FilterConfig, Transcript};
//!
//! # fn main() -> chatlens::Result<()> {
//! let transcript = Transcript::from_text(
//!     "1/4/21, 9:00 AM - Alice: morning\n1/4/21, 9:05 AM - Bob: hi",
//!     &AnalyzerConfig::default(),
//! )?;
//!
//! let filter = FilterConfig::new()
//!     .with_date_from("2021-01-01")?
//!     .with_date_to("2021-01-31")?;
//! let weekdays = transcript.view(&filter).weekday_counts();
//!
//! assert_eq!(weekdays.len(), 7);
//! assert_eq!(weekdays[0].count, 2);
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod filter;
pub mod models;
pub mod output;

// Re-export main types for convenience
pub use aggregate::{Transcript, TranscriptView, WEEKDAYS};
pub use filter::{FilterConfig, apply_filters, parse_date};
pub use models::{
    DailyCount, EmojiCount, HourlyCount, LengthBin, Overview, Report, SentimentDistribution,
    WeekdayCount, WordCount, weekday_name,
};

// Re-export Message from the crate root
pub use crate::Message;

pub use output::{day_to_text, to_text};
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{report_to_json, to_json, write_json, write_report_json};
