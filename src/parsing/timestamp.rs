//! Timestamp resolution for WhatsApp export lines.
//!
//! Exports write dates without saying whether the month or the day comes
//! first. Resolution is done per line:
//!
//! 1. Month-first (`M/D/YY` or `M/D/YYYY`) with a 12-hour clock.
//! 2. If that is not a valid calendar date, day-first (`D/M/YY` or `D/M/YYYY`).
//! 3. If neither works the line is unparseable.
//!
//! The year must be exactly two digits, or exactly four digits without a
//! leading zero. `12/31/202` and `12/31/0020` are rejected.
//!
//! A date that is valid both ways (e.g. `01/02/20`) is always read
//! month-first. Day-first exports whose days are all `<= 12` will therefore be
//! misread; the resolver has no per-file memory to detect this.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Which component order produced a resolved timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// `MM/DD/YY` (primary interpretation)
    MonthFirst,
    /// `DD/MM/YY` (fallback)
    DayFirst,
}

impl DateOrder {
    /// Returns the orders in the sequence they are attempted.
    pub fn all() -> &'static [DateOrder] {
        &[DateOrder::MonthFirst, DateOrder::DayFirst]
    }

    /// Returns the chrono format string for this order and year width.
    pub fn parse_format(self, year: YearWidth) -> &'static str {
        match (self, year) {
            (DateOrder::MonthFirst, YearWidth::Two) => "%m/%d/%y %I:%M %p",
            (DateOrder::MonthFirst, YearWidth::Four) => "%m/%d/%Y %I:%M %p",
            (DateOrder::DayFirst, YearWidth::Two) => "%d/%m/%y %I:%M %p",
            (DateOrder::DayFirst, YearWidth::Four) => "%d/%m/%Y %I:%M %p",
        }
    }
}

/// Width of the year component of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearWidth {
    /// `YY`, read as 20YY or 19YY by chrono's `%y` rules
    Two,
    /// `YYYY` from 1000 to 9999
    Four,
}

impl YearWidth {
    /// Classifies the year component (the text after the last `/`).
    ///
    /// Returns `None` for any other width, or for a four-digit year with a
    /// leading zero.
    pub fn of(date_text: &str) -> Option<Self> {
        let year = date_text.trim().rsplit('/').next()?;
        if !year.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match year.len() {
            2 => Some(YearWidth::Two),
            4 if !year.starts_with('0') => Some(YearWidth::Four),
            _ => None,
        }
    }
}

/// Resolves a date and a time string into a timestamp.
///
/// Returns `None` when no interpretation yields a valid calendar date.
///
/// # Example
///
/// ```rust
/// use chatlens::parsing::resolve_timestamp;
///
/// let ts = resolve_timestamp("12/31/20", "9:34 PM").unwrap();
/// assert_eq!(ts.to_string(), "2020-12-31 21:34:00");
///
/// // Month 13 is impossible, so the day-first reading is used.
/// let ts = resolve_timestamp("13/01/20", "9:34 PM").unwrap();
/// assert_eq!(ts.to_string(), "2020-01-13 21:34:00");
/// ```
pub fn resolve_timestamp(date_text: &str, time_text: &str) -> Option<NaiveDateTime> {
    resolve_with_order(date_text, time_text).map(|(ts, _)| ts)
}

/// Like [`resolve_timestamp`], also reporting which [`DateOrder`] matched.
pub fn resolve_with_order(date_text: &str, time_text: &str) -> Option<(NaiveDateTime, DateOrder)> {
    // Newer exports put U+202F before AM/PM; chrono wants a plain space.
    let time = time_text.split_whitespace().collect::<Vec<_>>().join(" ");
    let datetime_str = format!("{} {}", date_text.trim(), time);

    let year = YearWidth::of(date_text)?;

    DateOrder::all().iter().find_map(|&order| {
        NaiveDateTime::parse_from_str(&datetime_str, order.parse_format(year))
            .ok()
            .map(|naive| (naive, order))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_month_first_primary() {
        let (ts, order) = resolve_with_order("12/31/20", "9:34 PM").unwrap();
        assert_eq!(order, DateOrder::MonthFirst);
        assert_eq!((ts.year(), ts.month(), ts.day()), (2020, 12, 31));
        assert_eq!((ts.hour(), ts.minute()), (21, 34));
    }

    #[test]
    fn test_day_first_fallback() {
        let (ts, order) = resolve_with_order("13/01/20", "9:34 PM").unwrap();
        assert_eq!(order, DateOrder::DayFirst);
        assert_eq!((ts.year(), ts.month(), ts.day()), (2020, 1, 13));
    }

    #[test]
    fn test_ambiguous_resolves_month_first() {
        let (ts, order) = resolve_with_order("01/02/20", "10:00 AM").unwrap();
        assert_eq!(order, DateOrder::MonthFirst);
        assert_eq!((ts.month(), ts.day()), (1, 2));
    }

    #[test]
    fn test_four_digit_year() {
        let ts = resolve_timestamp("12/31/2020", "9:34 PM").unwrap();
        assert_eq!(ts.year(), 2020);

        let ts = resolve_timestamp("25/12/2021", "8:00 AM").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2021, 12, 25));
    }

    #[test]
    fn test_year_width() {
        assert_eq!(YearWidth::of("12/31/20"), Some(YearWidth::Two));
        assert_eq!(YearWidth::of("12/31/2020"), Some(YearWidth::Four));
        assert_eq!(YearWidth::of("12/31/202"), None);
        assert_eq!(YearWidth::of("12/31/0020"), None);
        assert_eq!(YearWidth::of("12/31/2"), None);
        assert_eq!(YearWidth::of("12/31/20200"), None);
        assert_eq!(YearWidth::of("12/31/2x"), None);
    }

    #[test]
    fn test_odd_year_widths_rejected() {
        assert!(resolve_timestamp("12/31/202", "9:34 PM").is_none());
        assert!(resolve_timestamp("12/31/0020", "9:34 PM").is_none());
        assert!(resolve_timestamp("25/12/0202", "9:34 PM").is_none());
        assert!(resolve_timestamp("1/2/3", "9:34 PM").is_none());
    }

    #[test]
    fn test_single_digit_components() {
        let ts = resolve_timestamp("1/5/24", "7:05 AM").unwrap();
        assert_eq!((ts.month(), ts.day(), ts.hour(), ts.minute()), (1, 5, 7, 5));
    }

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(resolve_timestamp("3/4/22", "12:00 AM").unwrap().hour(), 0);
        assert_eq!(resolve_timestamp("3/4/22", "12:30 PM").unwrap().hour(), 12);
    }

    #[test]
    fn test_narrow_no_break_space() {
        let ts = resolve_timestamp("12/31/20", "9:34\u{202f}PM").unwrap();
        assert_eq!(ts.hour(), 21);
    }

    #[test]
    fn test_both_interpretations_invalid() {
        assert!(resolve_timestamp("13/13/20", "9:34 PM").is_none());
        assert!(resolve_timestamp("31/31/20", "9:34 PM").is_none());
    }

    #[test]
    fn test_invalid_meridiem() {
        assert!(resolve_timestamp("12/31/20", "9:34 MM").is_none());
    }

    #[test]
    fn test_invalid_clock() {
        assert!(resolve_timestamp("12/31/20", "13:34 PM").is_none());
        assert!(resolve_timestamp("12/31/20", "9:75 PM").is_none());
    }

    #[test]
    fn test_calendar_validity_drives_fallback() {
        // Neither February 30 nor month 30 exists.
        assert!(resolve_timestamp("2/30/21", "9:00 AM").is_none());
        // Neither April 31 nor month 31 exists.
        assert!(resolve_timestamp("4/31/21", "9:00 AM").is_none());
        // Month 30 is impossible, 30 April is not.
        let ts = resolve_timestamp("30/4/21", "9:00 AM").unwrap();
        assert_eq!((ts.month(), ts.day()), (4, 30));
    }
}
