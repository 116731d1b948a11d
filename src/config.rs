//! Configuration types for parsing and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - transcript parsing settings
//! - [`AnalyzerConfig`] - feature extraction and aggregation settings
//! - [`SentimentThresholds`] - polarity cut-offs for sentiment labels
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::AnalyzerConfig;
//!
//! let config = AnalyzerConfig::new()
//!     .with_extra_stopwords(["lol", "haha"])
//!     .with_histogram_bins(20);
//!
//! assert_eq!(config.histogram_bins, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
///
/// let config = ParserConfig::new().with_trace_dropped_lines(true);
/// assert!(config.trace_dropped_lines);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Emit a `trace` event for every line that did not parse (default: false)
    pub trace_dropped_lines: bool,

    /// Skip lines whose body is empty after trimming (default: false)
    pub skip_empty_bodies: bool,
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables per-line tracing of dropped lines.
    #[must_use]
    pub fn with_trace_dropped_lines(mut self, enabled: bool) -> Self {
        self.trace_dropped_lines = enabled;
        self
    }

    /// Sets whether messages with an empty body are skipped.
    #[must_use]
    pub fn with_skip_empty_bodies(mut self, skip: bool) -> Self {
        self.skip_empty_bodies = skip;
        self
    }
}

/// Polarity cut-offs for [`SentimentLabel`](crate::features::SentimentLabel).
///
/// A polarity strictly above `positive` is Positive, strictly below
/// `negative` is Negative, and everything else (including both boundary
/// values) is Neutral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentThresholds {
    /// Lower exclusive bound for Positive (default: 0.1)
    pub positive: f64,
    /// Upper exclusive bound for Negative (default: -0.1)
    pub negative: f64,
}

impl Default for SentimentThresholds {
    fn default() -> Self {
        Self {
            positive: 0.1,
            negative: -0.1,
        }
    }
}

/// Configuration for feature extraction and aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Sentiment label cut-offs (default: ±0.1)
    pub thresholds: SentimentThresholds,

    /// Words removed from word-frequency tables on top of the built-in set
    pub extra_stopwords: Vec<String>,

    /// Number of bins in the message length histogram (default: 30)
    pub histogram_bins: usize,

    /// Number of entries in "top" tables such as emojis and words (default: 10)
    pub top_n: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            thresholds: SentimentThresholds::default(),
            extra_stopwords: Vec::new(),
            histogram_bins: 30,
            top_n: 10,
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sentiment thresholds.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: SentimentThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Adds extra stopwords. Words are lowercased.
    #[must_use]
    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_stopwords
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Sets the number of histogram bins. Zero is bumped to one.
    #[must_use]
    pub fn with_histogram_bins(mut self, bins: usize) -> Self {
        self.histogram_bins = bins.max(1);
        self
    }

    /// Sets the size of "top N" tables.
    #[must_use]
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }
}
