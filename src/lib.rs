//! # Chatlens
//!
//! A Rust library for analyzing WhatsApp "Export chat" transcripts.
//!
//! ## Overview
//!
//! Chatlens turns a `.txt` export into typed messages, derives per-message
//! features and aggregates them for presentation:
//! - **Parsing**: one message per `M/D/YY, H:MM AM - Sender: body` line, with
//!   a day-first fallback for dates that are not valid month-first
//! - **Features**: date, hour, weekday, length, emojis and a lexicon-based
//!   sentiment polarity with a Positive / Neutral / Negative label
//! - **Aggregation**: activity per day, hour and weekday, emoji and word
//!   frequencies, sentiment distribution and length histogram, all over a
//!   view filtered by sender and date range
//!
//! Lines that do not look like a message (continuation lines, system notices)
//! are dropped. A transcript with no message line at all is an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let content = "12/31/20, 9:34 PM - John Doe: Happy New Year! 🎉\n\
//!                    13/01/21, 8:00 AM - Jane: back to work 😩";
//!
//!     let transcript = Transcript::from_text(content, &AnalyzerConfig::default())?;
//!     let view = transcript.view(&FilterConfig::new().with_sender("John Doe"));
//!
//!     let report = view.report();
//!     assert_eq!(report.overview.total_messages, 1);
//!     assert_eq!(report.sentiment.positive, 1);
//!     assert_eq!(report.weekday_counts.len(), 7);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] - Line-level parsing
//!   - [`parse_line`](parsing::parse_line), [`parse_message`](parsing::parse_message)
//!   - [`resolve_timestamp`](parsing::resolve_timestamp), [`DateOrder`](parsing::DateOrder)
//! - [`parser`] - Whole-transcript parsing ([`TranscriptParser`](parser::TranscriptParser))
//! - [`features`] - Per-message features
//!   - [`FeatureExtractor`](features::FeatureExtractor), [`SentimentScorer`](features::SentimentScorer),
//!     [`SentimentLabel`](features::SentimentLabel), [`extract_emojis`](features::extract_emojis)
//! - [`core`] - Filtering and aggregation
//!   - [`Transcript`](core::Transcript), [`TranscriptView`](core::TranscriptView),
//!     [`FilterConfig`](core::FilterConfig), [`Report`](core::Report)
//!   - [`core::output`] - Text, CSV and JSON writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and [`render`](format::render)
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`AnalyzerConfig`](config::AnalyzerConfig)
//! - [`error`] - Unified error types ([`ChatlensError`], [`Result`])
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod format;
#[cfg(feature = "cli")]
pub mod logging;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use message::Message;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Core message type
    pub use crate::Message;

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::parser::{ParseStats, TranscriptParser};
    pub use crate::parsing::{DateOrder, parse_line, parse_message};

    // Configuration
    pub use crate::config::{AnalyzerConfig, ParserConfig, SentimentThresholds};

    // Features
    pub use crate::features::{
        AnalyzedMessage, FeatureExtractor, Features, LexiconScorer, SentimentLabel,
        SentimentScorer, extract_emojis,
    };

    // Filtering and aggregation
    pub use crate::core::{FilterConfig, Report, Transcript, TranscriptView, apply_filters};

    // Output
    pub use crate::format::{OutputFormat, render, write_to_format};
}
