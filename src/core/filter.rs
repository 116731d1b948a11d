//! Filter messages by sender and date range.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for selecting the matching messages of a collection.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Start of the range (inclusive) |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | End of the range (inclusive) |
//! | Sender | [`with_sender`](FilterConfig::with_sender) | Messages from one sender |
//!
//! # Examples
//!
//! ```
//! use chatlens::core::filter::FilterConfig;
//!
//! # fn main() -> chatlens::Result<()> {
//! let config = FilterConfig::new()
//!     .with_sender("Jane")
//!     .with_date_from("2021-01-01")?
//!     .with_date_to("2021-01-31")?;
//!
//! assert!(config.has_date_filter());
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Sender matching is exact and case-sensitive
//! - The date range applies only once both endpoints are set; a lone
//!   start or end date is kept but ignored
//! - A range whose start is after its end matches nothing
//! - Multiple filters are combined with AND logic

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Message;
use crate::error::{ChatlensError, Result};
use crate::features::AnalyzedMessage;

/// Date format accepted by the string-based setters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Configuration for filtering messages by date and sender.
///
/// Filters are combined with AND logic: a message must match all active
/// filters to be included in the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Include only messages on or after this date (needs `end` to apply).
    pub start: Option<NaiveDate>,

    /// Include only messages on or before this date (needs `start` to apply).
    pub end: Option<NaiveDate>,

    /// Include only messages from this sender. `None` means all senders.
    pub sender: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date from a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        self.start = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date from a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        self.end = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the start date directly.
    #[must_use]
    pub fn with_start(mut self, date: NaiveDate) -> Self {
        self.start = Some(date);
        self
    }

    /// Sets the end date directly.
    #[must_use]
    pub fn with_end(mut self, date: NaiveDate) -> Self {
        self.end = Some(date);
        self
    }

    /// Sets both endpoints of the date range.
    #[must_use]
    pub fn with_date_range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.with_start(start).with_end(end)
    }

    /// Sets the sender filter. Matching is exact.
    ///
    /// ```
    /// use chatlens::core::filter::FilterConfig;
    ///
    /// let config = FilterConfig::new().with_sender("John Doe");
    /// assert_eq!(config.sender.as_deref(), Some("John Doe"));
    /// ```
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// The date range in effect, if both endpoints are set.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.start.zip(self.end)
    }

    /// Returns `true` if any filter is in effect.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.has_sender_filter()
    }

    /// Returns `true` if the date range is in effect.
    pub fn has_date_filter(&self) -> bool {
        self.date_range().is_some()
    }

    /// Returns `true` if only one endpoint of the date range is set.
    pub fn has_partial_date_range(&self) -> bool {
        self.start.is_some() != self.end.is_some()
    }

    /// Returns `true` if the sender filter is active.
    pub fn has_sender_filter(&self) -> bool {
        self.sender.is_some()
    }

    /// Returns `true` if `message` passes every active filter.
    pub fn matches(&self, message: &Message) -> bool {
        if let Some(ref sender) = self.sender {
            if message.sender != *sender {
                return false;
            }
        }

        if let Some((start, end)) = self.date_range() {
            let date = message.timestamp.date();
            if date < start || date > end {
                return false;
            }
        }

        true
    }
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
pub fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT)
        .map_err(|_| ChatlensError::invalid_date(date_str))
}

/// Selects the messages matching `config`, preserving order.
///
/// The collection is borrowed; nothing is copied or mutated.
///
/// # Examples
///
/// ```
/// use chatlens::core::filter::{FilterConfig, apply_filters};
/// use chatlens::features::FeatureExtractor;
/// use chatlens::parsing::parse_message;
///
/// let extractor = FeatureExtractor::default();
/// let messages: Vec<_> = [
///     "1/1/21, 9:00 AM - Jane: hi",
///     "1/1/21, 9:01 AM - Bob: hey",
///     "1/2/21, 9:00 AM - Jane: morning",
/// ]
/// .iter()
/// .filter_map(|line| parse_message(line))
/// .map(|m| extractor.analyze(m))
/// .collect();
///
/// let filtered = apply_filters(&messages, &FilterConfig::new().with_sender("Jane"));
/// assert_eq!(filtered.len(), 2);
/// ```
pub fn apply_filters<'a>(
    messages: &'a [AnalyzedMessage],
    config: &FilterConfig,
) -> Vec<&'a AnalyzedMessage> {
    if !config.is_active() {
        return messages.iter().collect();
    }

    messages
        .iter()
        .filter(|m| config.matches(&m.message))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::FeatureExtractor;
    use chrono::NaiveDateTime;

    fn make_msg(sender: &str, body: &str, date: &str) -> AnalyzedMessage {
        let ts = NaiveDateTime::parse_from_str(&format!("{date} 12:00"), "%Y-%m-%d %H:%M").unwrap();
        FeatureExtractor::default().analyze(Message::new(ts, sender, body))
    }

    fn sample() -> Vec<AnalyzedMessage> {
        vec![
            make_msg("Alice", "Old Alice", "2024-01-01"),
            make_msg("Alice", "New Alice", "2024-06-15"),
            make_msg("Bob", "New Bob", "2024-06-15"),
            make_msg("alice", "lowercase", "2024-06-20"),
        ]
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        let messages = sample();
        let filtered = apply_filters(&messages, &FilterConfig::new());
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn test_filter_by_sender_is_exact() {
        let messages = sample();
        let filtered = apply_filters(&messages, &FilterConfig::new().with_sender("Alice"));

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|m| m.sender() == "Alice"));
    }

    #[test]
    fn test_filter_by_absent_sender() {
        let messages = sample();
        let filtered = apply_filters(&messages, &FilterConfig::new().with_sender("Zed"));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_date_range_inclusive() {
        let messages = sample();
        let config = FilterConfig::new()
            .with_date_from("2024-06-15")
            .unwrap()
            .with_date_to("2024-06-15")
            .unwrap();
        let filtered = apply_filters(&messages, &config);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].body(), "New Alice");
        assert_eq!(filtered[1].body(), "New Bob");
    }

    #[test]
    fn test_single_endpoint_is_ignored() {
        let messages = sample();

        let only_start = FilterConfig::new().with_date_from("2024-06-01").unwrap();
        assert!(only_start.has_partial_date_range());
        assert!(!only_start.has_date_filter());
        assert_eq!(apply_filters(&messages, &only_start).len(), 4);

        let only_end = FilterConfig::new().with_date_to("2024-03-01").unwrap();
        assert_eq!(apply_filters(&messages, &only_end).len(), 4);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let messages = sample();
        let config = FilterConfig::new()
            .with_date_from("2024-12-31")
            .unwrap()
            .with_date_to("2024-01-01")
            .unwrap();
        assert!(apply_filters(&messages, &config).is_empty());
    }

    #[test]
    fn test_combined_filters() {
        let messages = sample();
        let config = FilterConfig::new()
            .with_sender("Alice")
            .with_date_range(
                NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            );
        let filtered = apply_filters(&messages, &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].body(), "New Alice");
    }

    #[test]
    fn test_invalid_date_format() {
        let result = FilterConfig::new().with_date_from("01-01-2024");
        assert!(matches!(result, Err(ChatlensError::InvalidDate { .. })));
        assert!(parse_date("2024-02-30").unwrap_err().is_invalid_date());
    }

    #[test]
    fn test_parse_date_trims() {
        assert_eq!(
            parse_date(" 2024-06-15 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
        );
    }

    #[test]
    fn test_is_active() {
        assert!(!FilterConfig::new().is_active());
        assert!(FilterConfig::new().with_sender("Alice").is_active());
        assert!(
            !FilterConfig::new()
                .with_date_from("2024-01-01")
                .unwrap()
                .is_active()
        );
    }
}
