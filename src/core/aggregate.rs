//! The analyzed transcript and its aggregate tables.
//!
//! A [`Transcript`] owns every [`AnalyzedMessage`] of one export and never
//! changes after construction. Filtering borrows it into a
//! [`TranscriptView`], and every table is recomputed from the view on each
//! call.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::AnalyzerConfig;
//! use chatlens::core::{FilterConfig, Transcript};
//!
//! let content = "12/31/20, 9:34 PM - John Doe: Happy New Year! 🎉\n\
//!                1/1/21, 12:01 AM - Jane: Same to you 🎉🎉";
//!
//! let transcript = Transcript::from_text(content, &AnalyzerConfig::default())?;
//! let view = transcript.view(&FilterConfig::new().with_sender("Jane"));
//!
//! assert_eq!(view.len(), 1);
//! assert_eq!(view.top_emojis(1)[0].count, 2);
//! assert_eq!(view.hourly_counts()[0].count, 1);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::path::Path;

use chrono::{NaiveDate, Weekday};
use tracing::debug;

use super::filter::{FilterConfig, apply_filters};
use super::models::{
    DailyCount, EmojiCount, HourlyCount, LengthBin, Overview, Report, SentimentDistribution,
    WeekdayCount, WordCount,
};
use crate::Message;
use crate::config::AnalyzerConfig;
use crate::error::{ChatlensError, Result};
use crate::features::{AnalyzedMessage, FeatureExtractor, Stopwords, tokenize};
use crate::parser::{ParseStats, TranscriptParser};

/// Days of the week in display order.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// All analyzed messages of one export.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<AnalyzedMessage>,
    config: AnalyzerConfig,
    stopwords: Stopwords,
    parse_stats: Option<ParseStats>,
}

impl Transcript {
    /// Analyzes already parsed messages. An empty list is allowed.
    pub fn from_messages(messages: Vec<Message>, config: &AnalyzerConfig) -> Self {
        let extractor = FeatureExtractor::new(config);
        Self::with_extractor(messages, config, &extractor)
    }

    /// Analyzes messages with a custom extractor (e.g. another sentiment scorer).
    pub fn with_extractor(
        messages: Vec<Message>,
        config: &AnalyzerConfig,
        extractor: &FeatureExtractor,
    ) -> Self {
        let messages: Vec<AnalyzedMessage> =
            messages.into_iter().map(|m| extractor.analyze(m)).collect();
        debug!(messages = messages.len(), "analyzed transcript");

        Self {
            messages,
            stopwords: Stopwords::with_extra(&config.extra_stopwords),
            config: config.clone(),
            parse_stats: None,
        }
    }

    /// Parses and analyzes export content.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::NoValidData`](crate::ChatlensError::NoValidData)
    /// if no line parses.
    pub fn from_text(content: &str, config: &AnalyzerConfig) -> Result<Self> {
        Self::from_text_with_parser(content, &TranscriptParser::new(), config)
    }

    /// Like [`from_text`](Self::from_text) with an explicit parser.
    pub fn from_text_with_parser(
        content: &str,
        parser: &TranscriptParser,
        config: &AnalyzerConfig,
    ) -> Result<Self> {
        let (messages, stats) = parser.parse_str_with_stats(content)?;
        let mut transcript = Self::from_messages(messages, config);
        transcript.parse_stats = Some(stats);
        Ok(transcript)
    }

    /// Reads, parses and analyzes an export file.
    ///
    /// # Errors
    ///
    /// - [`ChatlensError::Io`](crate::ChatlensError::Io) if the file cannot be read
    /// - [`ChatlensError::NoValidData`](crate::ChatlensError::NoValidData) if no line parses
    pub fn from_path(path: impl AsRef<Path>, config: &AnalyzerConfig) -> Result<Self> {
        Self::from_path_with_parser(path, &TranscriptParser::new(), config)
    }

    /// Like [`from_path`](Self::from_path) with an explicit parser.
    pub fn from_path_with_parser(
        path: impl AsRef<Path>,
        parser: &TranscriptParser,
        config: &AnalyzerConfig,
    ) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_text_with_parser(&content, parser, config).map_err(|e| {
            if e.is_no_valid_data() {
                ChatlensError::no_valid_data(Some(path.to_path_buf()))
            } else {
                e
            }
        })
    }

    pub fn messages(&self) -> &[AnalyzedMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Line counts, when the transcript was built from text.
    pub fn parse_stats(&self) -> Option<ParseStats> {
        self.parse_stats
    }

    /// Applies `filter` and returns the matching messages as a view.
    pub fn view(&self, filter: &FilterConfig) -> TranscriptView<'_> {
        let messages = apply_filters(&self.messages, filter);

        debug!(
            total = self.messages.len(),
            selected = messages.len(),
            sender = filter.sender.as_deref().unwrap_or("All"),
            date_range = filter.has_date_filter(),
            "applied filters"
        );

        TranscriptView {
            transcript: self,
            filter: filter.clone(),
            messages,
        }
    }

    /// A view over every message.
    pub fn all(&self) -> TranscriptView<'_> {
        self.view(&FilterConfig::default())
    }

    /// Distinct senders of the whole transcript in first-appearance order.
    pub fn senders(&self) -> Vec<String> {
        self.all().senders()
    }

    /// Earliest and latest date of the whole transcript.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.all().date_bounds()
    }

    /// Sorted distinct dates of the whole transcript.
    pub fn unique_dates(&self) -> Vec<NaiveDate> {
        self.all().unique_dates()
    }
}

/// A filtered, borrowed selection of a [`Transcript`].
#[derive(Debug, Clone)]
pub struct TranscriptView<'a> {
    transcript: &'a Transcript,
    filter: FilterConfig,
    messages: Vec<&'a AnalyzedMessage>,
}

impl<'a> TranscriptView<'a> {
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The filter this view was built from.
    pub fn filter(&self) -> &FilterConfig {
        &self.filter
    }

    /// The selected messages in transcript order.
    pub fn messages(&self) -> &[&'a AnalyzedMessage] {
        &self.messages
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a AnalyzedMessage> + '_ {
        self.messages.iter().copied()
    }

    /// Total, unique senders, media placeholders, first/last timestamp and
    /// mean length.
    pub fn overview(&self) -> Overview {
        if self.is_empty() {
            return Overview::default();
        }

        let unique_senders = self
            .iter()
            .map(|m| m.sender())
            .collect::<HashSet<_>>()
            .len();
        let total_length: usize = self.iter().map(|m| m.features.length).sum();

        Overview {
            total_messages: self.len(),
            unique_senders,
            media_messages: self.iter().filter(|m| m.message.is_media_placeholder()).count(),
            first_timestamp: self.iter().map(|m| m.message.timestamp).min(),
            last_timestamp: self.iter().map(|m| m.message.timestamp).max(),
            average_length: total_length as f64 / self.len() as f64,
        }
    }

    /// Messages per day, ascending by date. Days without messages are absent.
    pub fn daily_counts(&self) -> Vec<DailyCount> {
        let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
        for m in self.iter() {
            *counts.entry(m.features.date).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(date, count)| DailyCount { date, count })
            .collect()
    }

    /// Messages per hour of day; always 24 entries, hours 0-23.
    pub fn hourly_counts(&self) -> Vec<HourlyCount> {
        let mut counts = [0usize; 24];
        for m in self.iter() {
            if let Some(slot) = counts.get_mut(m.features.hour as usize) {
                *slot += 1;
            }
        }
        (0u32..)
            .zip(counts)
            .map(|(hour, count)| HourlyCount { hour, count })
            .collect()
    }

    /// Messages per weekday; always 7 entries, Monday through Sunday.
    pub fn weekday_counts(&self) -> Vec<WeekdayCount> {
        let mut counts = [0usize; 7];
        for m in self.iter() {
            counts[m.features.weekday.num_days_from_monday() as usize] += 1;
        }
        WEEKDAYS
            .iter()
            .zip(counts)
            .map(|(&weekday, count)| WeekdayCount { weekday, count })
            .collect()
    }

    /// Emoji counts, most frequent first; ties keep first-encountered order.
    pub fn emoji_frequencies(&self) -> Vec<EmojiCount> {
        let emojis = self.iter().flat_map(|m| m.features.emojis.iter().copied());
        rank_by_count(emojis)
            .into_iter()
            .map(|(emoji, count)| EmojiCount { emoji, count })
            .collect()
    }

    /// The `n` most frequent emojis.
    pub fn top_emojis(&self, n: usize) -> Vec<EmojiCount> {
        let mut ranked = self.emoji_frequencies();
        ranked.truncate(n);
        ranked
    }

    /// Message counts per sentiment label.
    pub fn sentiment_distribution(&self) -> SentimentDistribution {
        let mut dist = SentimentDistribution::default();
        for m in self.iter() {
            dist.record(m.sentiment_label());
        }
        dist
    }

    /// Every body joined with a single space.
    pub fn joined_text(&self) -> String {
        self.iter().map(|m| m.body()).collect::<Vec<_>>().join(" ")
    }

    /// Word counts of the joined text without stopwords, most frequent
    /// first; ties keep first-occurrence order.
    pub fn word_frequencies(&self) -> Vec<WordCount> {
        let stopwords = &self.transcript.stopwords;
        let words = self
            .iter()
            .flat_map(|m| tokenize(m.body()))
            .filter(|w| !stopwords.contains(w));
        rank_by_count(words)
            .into_iter()
            .map(|(word, count)| WordCount { word, count })
            .collect()
    }

    /// The `n` most frequent words.
    pub fn top_words(&self, n: usize) -> Vec<WordCount> {
        let mut ranked = self.word_frequencies();
        ranked.truncate(n);
        ranked
    }

    /// Equal-width histogram of body lengths.
    ///
    /// The bins span the observed minimum to maximum. When every message
    /// has the same length the span is widened by half a character on each
    /// side. An empty view yields no bins; `bins` of zero is treated as one.
    pub fn length_histogram(&self, bins: usize) -> Vec<LengthBin> {
        let bins = bins.max(1);
        let lengths: Vec<usize> = self.iter().map(|m| m.features.length).collect();
        let (Some(&min), Some(&max)) = (lengths.iter().min(), lengths.iter().max()) else {
            return Vec::new();
        };

        let (lo, hi) = if min == max {
            (min as f64 - 0.5, max as f64 + 0.5)
        } else {
            (min as f64, max as f64)
        };
        let width = (hi - lo) / bins as f64;

        let mut counts = vec![0usize; bins];
        for len in lengths {
            let idx = ((len as f64 - lo) / width).floor() as usize;
            counts[idx.min(bins - 1)] += 1;
        }

        counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| LengthBin {
                start: lo + width * i as f64,
                end: if i + 1 == bins {
                    hi
                } else {
                    lo + width * (i + 1) as f64
                },
                count,
            })
            .collect()
    }

    /// Distinct senders in first-appearance order.
    pub fn senders(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.iter()
            .filter(|&m| seen.insert(m.sender()))
            .map(|m| m.sender().to_string())
            .collect()
    }

    /// Earliest and latest message date.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.iter().map(|m| m.features.date).min()?;
        let max = self.iter().map(|m| m.features.date).max()?;
        Some((min, max))
    }

    /// Sorted distinct message dates.
    pub fn unique_dates(&self) -> Vec<NaiveDate> {
        self.iter()
            .map(|m| m.features.date)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Messages of one day, sorted by timestamp.
    pub fn messages_on(&self, date: NaiveDate) -> Vec<&'a AnalyzedMessage> {
        let mut day: Vec<&AnalyzedMessage> =
            self.iter().filter(|m| m.features.date == date).collect();
        day.sort_by_key(|m| m.message.timestamp);
        day
    }

    /// All tables, sized by the transcript's [`AnalyzerConfig`].
    pub fn report(&self) -> Report {
        let config = &self.transcript.config;
        Report {
            filter: self.filter.clone(),
            overview: self.overview(),
            senders: self.senders(),
            daily_counts: self.daily_counts(),
            hourly_counts: self.hourly_counts(),
            weekday_counts: self.weekday_counts(),
            length_histogram: self.length_histogram(config.histogram_bins),
            top_emojis: self.top_emojis(config.top_n),
            sentiment: self.sentiment_distribution(),
            top_words: self.top_words(config.top_n),
        }
    }
}

/// Counts items and orders them by count descending. The sort is stable,
/// so equal counts stay in first-seen order.
fn rank_by_count<T, I>(items: I) -> Vec<(T, usize)>
where
    T: std::hash::Hash + Eq + Clone,
    I: IntoIterator<Item = T>,
{
    let mut index: HashMap<T, usize> = HashMap::new();
    let mut ranked: Vec<(T, usize)> = Vec::new();

    for item in items {
        match index.get(&item) {
            Some(&i) => ranked[i].1 += 1,
            None => {
                index.insert(item.clone(), ranked.len());
                ranked.push((item, 1));
            }
        }
    }

    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}
