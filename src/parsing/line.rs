//! Single-line parser for WhatsApp TXT exports.
//!
//! Recognized shape (Android export, US locale):
//!
//! ```text
//! 12/31/20, 9:34 PM - John Doe: Happy New Year!
//! ```
//!
//! Anything else (continuation lines of multi-line messages, "X added Y"
//! notices, the encryption banner) does not match and is dropped by the
//! caller. There is no attempt to glue continuation lines back onto the
//! previous message.

use lazy_static::lazy_static;
use regex::Regex;

use crate::Message;
use crate::parsing::timestamp::resolve_timestamp;

/// Pattern for one message line: date, time, sender, body.
pub const LINE_PATTERN: &str =
    r"^(\d{1,2}/\d{1,2}/\d{2,4}),\s(\d{1,2}:\d{2}\s[APM]{2})\s-\s([^:]+):\s(.*)$";

lazy_static! {
    static ref LINE_REGEX: Regex = Regex::new(LINE_PATTERN).expect("line pattern is valid");
}

/// The raw pieces of a matched line, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineParts<'a> {
    /// Date text, e.g. `12/31/20`
    pub date: &'a str,
    /// Time text, e.g. `9:34 PM`
    pub time: &'a str,
    /// Everything between ` - ` and the first colon
    pub sender: &'a str,
    /// Remainder of the line after `: `
    pub body: &'a str,
}

/// Splits a line into its parts, or returns `None` if it is not a message line.
///
/// This does not validate the date; see [`parse_message`] for that.
///
/// # Example
///
/// ```rust
/// use chatlens::parsing::parse_line;
///
/// let parts = parse_line("12/31/20, 9:34 PM - John Doe: Happy New Year!").unwrap();
/// assert_eq!(parts.sender, "John Doe");
/// assert_eq!(parts.body, "Happy New Year!");
///
/// assert!(parse_line("John Doe joined using this group's invite link").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<LineParts<'_>> {
    let caps = LINE_REGEX.captures(line)?;

    Some(LineParts {
        date: caps.get(1)?.as_str(),
        time: caps.get(2)?.as_str(),
        sender: caps.get(3)?.as_str(),
        body: caps.get(4)?.as_str(),
    })
}

/// Parses a line into a [`Message`], resolving its timestamp.
///
/// Returns `None` when the line does not match or when neither the
/// month-first nor the day-first reading of its date is valid.
pub fn parse_message(line: &str) -> Option<Message> {
    let parts = parse_line(line)?;
    let timestamp = resolve_timestamp(parts.date, parts.time)?;
    Some(Message::new(timestamp, parts.sender, parts.body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_line_basic() {
        let parts = parse_line("12/31/20, 9:34 PM - John Doe: Happy New Year!").unwrap();
        assert_eq!(parts.date, "12/31/20");
        assert_eq!(parts.time, "9:34 PM");
        assert_eq!(parts.sender, "John Doe");
        assert_eq!(parts.body, "Happy New Year!");
    }

    #[test]
    fn test_body_keeps_colons() {
        let parts = parse_line("1/2/21, 10:00 AM - Bob: note: meeting at 10:30").unwrap();
        assert_eq!(parts.sender, "Bob");
        assert_eq!(parts.body, "note: meeting at 10:30");
    }

    #[test]
    fn test_empty_body() {
        let parts = parse_line("1/2/21, 10:00 AM - Bob: ").unwrap();
        assert_eq!(parts.body, "");
    }

    #[test]
    fn test_four_digit_year_line() {
        let msg = parse_message("12/31/2020, 9:34 PM - Jane: Hi").unwrap();
        assert_eq!(msg.timestamp.year(), 2020);
    }

    #[test]
    fn test_missing_sender_delimiter() {
        assert!(parse_line("12/31/20, 9:34 PM - John Doe Happy New Year").is_none());
        assert!(parse_line("12/31/20, 9:34 PM John Doe: Happy New Year").is_none());
        assert!(parse_line("12/31/20, 9:34 PM - Messages are end-to-end encrypted").is_none());
    }

    #[test]
    fn test_continuation_line() {
        assert!(parse_line("and this is the second line of a message").is_none());
        assert!(parse_line("").is_none());
    }

    #[test]
    fn test_bracketed_ios_format_not_supported() {
        assert!(parse_line("[1/15/24, 10:30:45 AM] Alice: Hello").is_none());
    }

    #[test]
    fn test_24_hour_clock_not_supported() {
        assert!(parse_line("15/01/2024, 10:30 - Alice: Hello").is_none());
    }

    #[test]
    fn test_parse_message_resolves_timestamp() {
        let msg = parse_message("12/31/20, 9:34 PM - John Doe: Happy New Year!").unwrap();
        assert_eq!(msg.sender, "John Doe");
        assert_eq!(msg.body, "Happy New Year!");
        assert_eq!(
            (msg.timestamp.year(), msg.timestamp.month(), msg.timestamp.day()),
            (2020, 12, 31)
        );
        assert_eq!((msg.timestamp.hour(), msg.timestamp.minute()), (21, 34));
    }

    #[test]
    fn test_parse_message_day_first() {
        let msg = parse_message("13/01/20, 9:34 PM - Jane: Hi").unwrap();
        assert_eq!((msg.timestamp.month(), msg.timestamp.day()), (1, 13));
    }

    #[test]
    fn test_parse_message_unresolvable_date() {
        assert!(parse_line("13/13/20, 9:34 PM - Jane: Hi").is_some());
        assert!(parse_message("13/13/20, 9:34 PM - Jane: Hi").is_none());
    }

    #[test]
    fn test_narrow_no_break_space_before_meridiem() {
        let msg = parse_message("12/31/20, 9:34\u{202f}PM - Jane: Hi").unwrap();
        assert_eq!(msg.timestamp.hour(), 21);
    }
}
