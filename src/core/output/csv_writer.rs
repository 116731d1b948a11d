//! CSV output writer.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::core::models::weekday_name;
use crate::error::{ChatlensError, Result};
use crate::features::AnalyzedMessage;

/// Column names, in order.
pub const CSV_HEADER: [&str; 9] = [
    "Timestamp",
    "Sender",
    "Body",
    "Length",
    "Hour",
    "Weekday",
    "Polarity",
    "Sentiment",
    "Emojis",
];

/// Writes the enriched message table to a CSV file.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: see [`CSV_HEADER`]
/// - Timestamp: `YYYY-MM-DD HH:MM:SS`
/// - Polarity: four decimal places
/// - Emojis: concatenated, e.g. `😂😂👍`
/// - Encoding: UTF-8
pub fn write_csv(messages: &[&AnalyzedMessage], output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_csv_to(messages, file)
}

/// Writes the enriched message table as CSV to any writer.
pub fn write_csv_to<W: Write>(messages: &[&AnalyzedMessage], out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(CSV_HEADER)?;

    for msg in messages {
        writer.write_record(build_record(msg))?;
    }

    writer.flush()?;
    Ok(())
}

/// Converts the enriched message table to a CSV string.
pub fn to_csv(messages: &[&AnalyzedMessage]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv_to(messages, &mut buf)?;
    String::from_utf8(buf)
        .map_err(|e| ChatlensError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

fn build_record(msg: &AnalyzedMessage) -> [String; 9] {
    let f = &msg.features;
    [
        msg.message.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        msg.message.sender.clone(),
        msg.message.body.clone(),
        f.length.to_string(),
        f.hour.to_string(),
        weekday_name(f.weekday).to_string(),
        format!("{:.4}", f.polarity),
        msg.sentiment_label().to_string(),
        f.emoji_string(),
    ]
}
