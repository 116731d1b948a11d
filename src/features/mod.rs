//! Per-message feature extraction.
//!
//! [`FeatureExtractor`] turns a [`Message`] into [`Features`]: calendar
//! attributes of the timestamp, body length, emoji list and sentiment
//! polarity. The sentiment label is never stored; [`Features::sentiment_label`]
//! derives it from the polarity each time.
//!
//! # Example
//!
//! ```rust
//! use chatlens::features::{FeatureExtractor, SentimentLabel};
//! use chatlens::parsing::parse_message;
//!
//! let msg = parse_message("12/31/20, 9:34 PM - John Doe: Happy New Year! 🎉").unwrap();
//! let features = FeatureExtractor::default().extract(&msg);
//!
//! assert_eq!(features.hour, 21);
//! assert_eq!(features.emojis, vec!['🎉']);
//! assert_eq!(features.sentiment_label(), SentimentLabel::Positive);
//! ```

pub mod emoji;
pub mod sentiment;
pub mod stopwords;

use std::fmt;

use chrono::{Datelike, NaiveDate, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::Message;
use crate::config::{AnalyzerConfig, SentimentThresholds};

pub use emoji::{extract_emojis, is_emoji};
pub use sentiment::{LexiconScorer, SentimentLabel, SentimentScorer};
pub use stopwords::{Stopwords, tokenize};

/// Features derived from one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Features {
    /// Calendar date of the timestamp
    pub date: NaiveDate,
    /// Hour of day, 0-23
    pub hour: u32,
    /// Day of week
    pub weekday: Weekday,
    /// Body length in characters
    pub length: usize,
    /// Sentiment polarity in [-1.0, 1.0]
    pub polarity: f64,
    /// Emoji code points in order of appearance
    pub emojis: Vec<char>,
    #[serde(skip)]
    thresholds: SentimentThresholds,
}

impl Features {
    /// Sentiment label for the stored polarity.
    pub fn sentiment_label(&self) -> SentimentLabel {
        SentimentLabel::classify(self.polarity, &self.thresholds)
    }

    /// Number of emojis in the body.
    pub fn emoji_count(&self) -> usize {
        self.emojis.len()
    }

    /// Emojis as one string, e.g. `"😂😂👍"`.
    pub fn emoji_string(&self) -> String {
        self.emojis.iter().collect()
    }
}

/// A message together with its derived features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedMessage {
    /// The parsed message
    pub message: Message,
    /// Features derived from it
    pub features: Features,
}

impl AnalyzedMessage {
    /// Shortcut for `self.message.sender`.
    pub fn sender(&self) -> &str {
        &self.message.sender
    }

    /// Shortcut for `self.message.body`.
    pub fn body(&self) -> &str {
        &self.message.body
    }

    /// Shortcut for the feature-derived sentiment label.
    pub fn sentiment_label(&self) -> SentimentLabel {
        self.features.sentiment_label()
    }
}

/// Computes [`Features`] for messages.
pub struct FeatureExtractor {
    scorer: Box<dyn SentimentScorer>,
    thresholds: SentimentThresholds,
}

impl FeatureExtractor {
    /// Creates an extractor with the lexicon scorer and the configured thresholds.
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            scorer: Box::new(LexiconScorer::new()),
            thresholds: config.thresholds,
        }
    }

    /// Replaces the sentiment scorer.
    #[must_use]
    pub fn with_scorer<S: SentimentScorer + 'static>(mut self, scorer: S) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    /// Derives the features of `message`.
    pub fn extract(&self, message: &Message) -> Features {
        let ts = message.timestamp;
        let polarity = self.scorer.polarity(&message.body);

        Features {
            date: ts.date(),
            hour: ts.hour(),
            weekday: ts.weekday(),
            length: message.body.chars().count(),
            polarity: if polarity.is_nan() {
                0.0
            } else {
                polarity.clamp(-1.0, 1.0)
            },
            emojis: extract_emojis(&message.body),
            thresholds: self.thresholds,
        }
    }

    /// Derives the features of `message` and pairs them with it.
    pub fn analyze(&self, message: Message) -> AnalyzedMessage {
        let features = self.extract(&message);
        AnalyzedMessage { message, features }
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(&AnalyzerConfig::default())
    }
}

impl fmt::Debug for FeatureExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureExtractor")
            .field("thresholds", &self.thresholds)
            .finish_non_exhaustive()
    }
}
