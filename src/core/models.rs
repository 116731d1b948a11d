//! Row types of the aggregate tables.

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use super::filter::FilterConfig;
use crate::features::SentimentLabel;

/// Messages sent on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    /// Calendar day
    pub date: NaiveDate,
    /// Messages on that day
    pub count: usize,
}

/// Messages sent during one hour of the day (0-23).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyCount {
    /// Hour of the day, 0-23
    pub hour: u32,
    /// Messages in that hour, across all days
    pub count: usize,
}

/// Full English name of a weekday, e.g. `"Monday"`.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Messages sent on one day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayCount {
    /// Day of the week
    pub weekday: Weekday,
    /// Messages on that weekday, across all weeks
    pub count: usize,
}

/// Occurrences of one emoji code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiCount {
    /// The emoji code point
    pub emoji: char,
    /// Occurrences, counting repeats inside one message
    pub count: usize,
}

/// Occurrences of one word in the joined text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// Lowercase token
    pub word: String,
    /// Occurrences
    pub count: usize,
}

/// One equal-width bin of the message length histogram.
///
/// Bins are half-open `[start, end)` except the last one, which also
/// includes `end`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthBin {
    /// Lower edge in characters
    pub start: f64,
    /// Upper edge in characters
    pub end: f64,
    /// Messages whose length falls in the bin
    pub count: usize,
}

/// Message counts per sentiment label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    /// Messages labeled Positive
    pub positive: usize,
    /// Messages labeled Neutral
    pub neutral: usize,
    /// Messages labeled Negative
    pub negative: usize,
}

impl SentimentDistribution {
    /// Increments the counter of `label`.
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Negative => self.negative += 1,
        }
    }

    /// Count for one label.
    pub fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Neutral => self.neutral,
            SentimentLabel::Negative => self.negative,
        }
    }

    /// Sum of all three counts.
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// Share of `label` in percent, 0.0 when there are no messages.
    pub fn percentage(&self, label: SentimentLabel) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(label) as f64 / total as f64 * 100.0
    }
}

/// Headline numbers of a view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    /// Messages in the view
    pub total_messages: usize,
    /// Distinct senders in the view
    pub unique_senders: usize,
    /// Messages that are only the `<Media omitted>` placeholder
    pub media_messages: usize,
    /// Earliest timestamp, `None` for an empty view
    pub first_timestamp: Option<NaiveDateTime>,
    /// Latest timestamp, `None` for an empty view
    pub last_timestamp: Option<NaiveDateTime>,
    /// Mean body length in characters, 0.0 for an empty view
    pub average_length: f64,
}

/// Every aggregate table of one view, ready for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Filter that produced the view
    pub filter: FilterConfig,
    /// Headline numbers
    pub overview: Overview,
    /// Senders in first-appearance order
    pub senders: Vec<String>,
    /// Per-day counts, ascending by date
    pub daily_counts: Vec<DailyCount>,
    /// 24 entries, hour 0 first
    pub hourly_counts: Vec<HourlyCount>,
    /// 7 entries, Monday first
    pub weekday_counts: Vec<WeekdayCount>,
    /// Equal-width length bins
    pub length_histogram: Vec<LengthBin>,
    /// Most frequent emojis
    pub top_emojis: Vec<EmojiCount>,
    /// Label counts
    pub sentiment: SentimentDistribution,
    /// Most frequent non-stopwords
    pub top_words: Vec<WordCount>,
}
