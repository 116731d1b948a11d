//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! [`Args`] also knows how to turn itself into the library's filter and
//! configuration types, so the binary stays a thin driver.
//!
//! ```rust
//! use chatlens::cli::Args;
//! use clap::Parser;
//!
//! # fn main() -> chatlens::Result<()> {
//! let args = Args::parse_from(["chatlens", "chat.txt", "--sender", "Jane", "--top", "5"]);
//! let filter = args.filter_config()?;
//!
//! assert_eq!(filter.sender.as_deref(), Some("Jane"));
//! assert_eq!(args.analyzer_config().top_n, 5);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{AnalyzerConfig, ParserConfig};
use crate::core::filter::{FilterConfig, parse_date};
use crate::error::Result;

/// Analyze a WhatsApp chat export: activity over time, emoji use,
/// sentiment and frequent words.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --sender \"John Doe\"
    chatlens chat.txt --from 2021-01-01 --to 2021-03-31
    chatlens chat.txt -f json -o report.json
    chatlens chat.txt -f csv -o messages.csv
    chatlens chat.txt --day 2020-12-31
    chatlens chat.txt --stopword lol --stopword haha --top 20")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: PathBuf,

    /// Only messages from this sender (exact match; default: all senders)
    #[arg(long, value_name = "NAME")]
    pub sender: Option<String>,

    /// Start of the date range (YYYY-MM-DD); needs --to as well
    #[arg(long, value_name = "DATE")]
    pub from: Option<String>,

    /// End of the date range (YYYY-MM-DD); needs --from as well
    #[arg(long, value_name = "DATE")]
    pub to: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Number of emojis and words listed in reports
    #[arg(long, value_name = "N", default_value_t = 10)]
    pub top: usize,

    /// Number of bins in the message length histogram
    #[arg(long, value_name = "N", default_value_t = 30)]
    pub bins: usize,

    /// Print the messages of one day (YYYY-MM-DD) instead of the report.
    /// The listing is always plain text, so `--format` is rejected here
    #[arg(long, value_name = "DATE", conflicts_with = "format")]
    pub day: Option<String>,

    /// Extra word to leave out of word frequencies (repeatable)
    #[arg(long = "stopword", value_name = "WORD")]
    pub stopwords: Vec<String>,

    /// Skip messages whose body is empty
    #[arg(long)]
    pub skip_empty: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Builds the filter from `--sender`, `--from` and `--to`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`](crate::ChatlensError::InvalidDate)
    /// if a date is not `YYYY-MM-DD`.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut filter = FilterConfig::new();

        if let Some(ref from) = self.from {
            filter = filter.with_date_from(from)?;
        }
        if let Some(ref to) = self.to {
            filter = filter.with_date_to(to)?;
        }
        if let Some(ref sender) = self.sender {
            filter = filter.with_sender(sender.clone());
        }

        Ok(filter)
    }

    /// Builds the analyzer configuration from `--top`, `--bins` and `--stopword`.
    pub fn analyzer_config(&self) -> AnalyzerConfig {
        AnalyzerConfig::new()
            .with_top_n(self.top)
            .with_histogram_bins(self.bins)
            .with_extra_stopwords(&self.stopwords)
    }

    /// Builds the parser configuration.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new()
            .with_skip_empty_bodies(self.skip_empty)
            .with_trace_dropped_lines(self.verbose >= 3)
    }

    /// Parses `--day`, if given.
    pub fn day(&self) -> Result<Option<NaiveDate>> {
        self.day.as_deref().map(parse_date).transpose()
    }
}

/// Output format options.
///
/// - [`Text`](OutputFormat::Text) - Human readable report (default)
/// - [`Json`](OutputFormat::Json) - Every aggregate table as JSON
/// - [`Csv`](OutputFormat::Csv) - Enriched message table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text report
    #[default]
    #[value(alias = "txt")]
    Text,

    /// JSON report
    Json,

    /// CSV with semicolon delimiter
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Text => crate::format::OutputFormat::Text,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
        }
    }
}
