//! Parsed chat message type.
//!
//! A [`Message`] is one line of a WhatsApp export that matched the expected
//! `<date>, <time> - <sender>: <body>` shape and whose timestamp could be
//! resolved. Messages are never constructed with a placeholder timestamp:
//! a line that cannot be resolved produces no message at all.
//!
//! # Examples
//!
//! ```
//! use chatlens::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2020, 12, 31)
//!     .unwrap()
//!     .and_hms_opt(21, 34, 0)
//!     .unwrap();
//! let msg = Message::new(ts, "John Doe", "Happy New Year!");
//!
//! assert_eq!(msg.sender(), "John Doe");
//! assert_eq!(msg.body(), "Happy New Year!");
//! assert!(!msg.is_media_placeholder());
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Body text WhatsApp writes in place of an attachment.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// A single parsed chat entry.
///
/// The timestamp is a local wall-clock time exactly as written in the export;
/// no timezone conversion is ever applied.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | When the message was sent |
/// | `sender` | `String` | Display name, compared by exact string equality |
/// | `body` | `String` | Raw text, may contain emoji or a media placeholder |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Resolved send time.
    pub timestamp: NaiveDateTime,

    /// Display name of the message author.
    pub sender: String,

    /// Text content of the message.
    pub body: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            sender: sender.into(),
            body: body.into(),
        }
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` if the body is the attachment placeholder.
    pub fn is_media_placeholder(&self) -> bool {
        self.body.trim() == MEDIA_PLACEHOLDER
    }

    /// Returns `true` if the body is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}
