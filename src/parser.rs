//! Whole-transcript parsing.
//!
//! [`TranscriptParser`] runs the line parser over every line of an export and
//! collects the messages. Lines that do not parse are dropped silently; the
//! only failure is a transcript that yields no messages at all.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::TranscriptParser;
//!
//! let content = "12/31/20, 9:34 PM - John Doe: Happy New Year!\n\
//!                this continuation line is dropped\n\
//!                1/1/21, 12:01 AM - Jane: Same to you";
//!
//! let parser = TranscriptParser::new();
//! let (messages, stats) = parser.parse_str_with_stats(content)?;
//!
//! assert_eq!(messages.len(), 2);
//! assert_eq!(stats.dropped_lines, 1);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, trace};

use crate::Message;
use crate::config::ParserConfig;
use crate::error::{ChatlensError, Result};
use crate::parsing::parse_message;

/// Line counts from one parsing pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Lines seen in the input
    pub total_lines: usize,
    /// Lines that produced a message
    pub parsed_lines: usize,
    /// Lines that were dropped (no match, unresolvable date, or skipped)
    pub dropped_lines: usize,
}

impl ParseStats {
    /// Share of lines that produced a message, in percent (0.0 - 100.0).
    pub fn parse_ratio(&self) -> f64 {
        if self.total_lines == 0 {
            return 0.0;
        }
        self.parsed_lines as f64 / self.total_lines as f64 * 100.0
    }
}

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust,no_run
/// use chatlens::parser::TranscriptParser;
///
/// let parser = TranscriptParser::new();
/// let messages = parser.parse("whatsapp_chat.txt".as_ref())?;
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses an export file.
    ///
    /// # Errors
    ///
    /// - [`ChatlensError::Io`] if the file cannot be read or is not UTF-8
    /// - [`ChatlensError::NoValidData`] if no line parses
    pub fn parse(&self, path: &Path) -> Result<Vec<Message>> {
        let content = fs::read_to_string(path)?;
        let (messages, stats) = self.parse_content(&content);

        if messages.is_empty() {
            debug!(path = %path.display(), lines = stats.total_lines, "no message lines found");
            return Err(ChatlensError::no_valid_data(Some(path.to_path_buf())));
        }

        Ok(messages)
    }

    /// Parses export content already in memory.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::NoValidData`] if no line parses.
    pub fn parse_str(&self, content: &str) -> Result<Vec<Message>> {
        self.parse_str_with_stats(content).map(|(messages, _)| messages)
    }

    /// Parses export content and also returns line counts.
    pub fn parse_str_with_stats(&self, content: &str) -> Result<(Vec<Message>, ParseStats)> {
        let (messages, stats) = self.parse_content(content);

        if messages.is_empty() {
            return Err(ChatlensError::no_valid_data(None));
        }

        Ok((messages, stats))
    }

    fn parse_content(&self, content: &str) -> (Vec<Message>, ParseStats) {
        let mut messages = Vec::new();
        let mut stats = ParseStats::default();

        for (idx, line) in content.lines().enumerate() {
            stats.total_lines += 1;

            let parsed = parse_message(line)
                .filter(|msg| !(self.config.skip_empty_bodies && msg.is_empty()));

            match parsed {
                Some(msg) => {
                    stats.parsed_lines += 1;
                    messages.push(msg);
                }
                None => {
                    stats.dropped_lines += 1;
                    if self.config.trace_dropped_lines {
                        trace!(line_no = idx + 1, line, "dropped line");
                    }
                }
            }
        }

        debug!(
            total = stats.total_lines,
            parsed = stats.parsed_lines,
            dropped = stats.dropped_lines,
            "parsed transcript"
        );

        (messages, stats)
    }
}
