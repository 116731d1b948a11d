//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::core::models::{Report, weekday_name};
use crate::error::Result;
use crate::features::{AnalyzedMessage, SentimentLabel};

/// Flat message structure for JSON output.
/// The sentiment label is computed here, it is not stored on the message.
#[derive(Serialize)]
struct JsonMessage<'a> {
    timestamp: String,
    sender: &'a str,
    body: &'a str,
    length: usize,
    hour: u32,
    weekday: &'static str,
    polarity: f64,
    sentiment: SentimentLabel,
    emojis: Vec<String>,
}

impl<'a> JsonMessage<'a> {
    fn from_analyzed(msg: &'a AnalyzedMessage) -> Self {
        let f = &msg.features;
        Self {
            timestamp: msg.message.timestamp.format("%Y-%m-%dT%H:%M:%S").to_string(),
            sender: &msg.message.sender,
            body: &msg.message.body,
            length: f.length,
            hour: f.hour,
            weekday: weekday_name(f.weekday),
            polarity: f.polarity,
            sentiment: msg.sentiment_label(),
            emojis: f.emojis.iter().map(char::to_string).collect(),
        }
    }
}

/// Writes the enriched messages to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "2020-12-31T21:34:00", "sender": "John Doe", "body": "Happy New Year!",
///    "length": 15, "hour": 21, "weekday": "Thursday", "polarity": 0.468,
///    "sentiment": "Positive", "emojis": []}
/// ]
/// ```
pub fn write_json(messages: &[&AnalyzedMessage], output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(messages)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the enriched messages to a pretty-printed JSON array.
pub fn to_json(messages: &[&AnalyzedMessage]) -> Result<String> {
    let json_messages: Vec<JsonMessage<'_>> = messages
        .iter()
        .map(|m| JsonMessage::from_analyzed(m))
        .collect();

    Ok(serde_json::to_string_pretty(&json_messages)?)
}

/// Writes a [`Report`] to a JSON file.
pub fn write_report_json(report: &Report, output_path: impl AsRef<Path>) -> Result<()> {
    let json = report_to_json(report)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts a [`Report`] to pretty-printed JSON.
pub fn report_to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Message;
    use crate::config::AnalyzerConfig;
    use crate::core::Transcript;
    use crate::features::FeatureExtractor;
    use chrono::NaiveDateTime;
    use tempfile::NamedTempFile;

    fn analyzed(ts: &str, sender: &str, body: &str) -> AnalyzedMessage {
        let ts = NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M").unwrap();
        FeatureExtractor::default().analyze(Message::new(ts, sender, body))
    }

    #[test]
    fn test_to_json_fields() {
        let m = analyzed("2020-12-31 21:34", "John Doe", "Happy New Year! 🎉");
        let json = to_json(&[&m]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let first = &value[0];
        assert_eq!(first["timestamp"], "2020-12-31T21:34:00");
        assert_eq!(first["sender"], "John Doe");
        assert_eq!(first["weekday"], "Thursday");
        assert_eq!(first["hour"], 21);
        assert_eq!(first["sentiment"], "Positive");
        assert_eq!(first["emojis"][0], "🎉");
    }

    #[test]
    fn test_to_json_empty() {
        let json = to_json(&[]).unwrap();
        assert_eq!(json.trim(), "[]");
    }

    #[test]
    fn test_write_json_file() {
        let m = analyzed("2021-01-01 10:00", "Alice", "Hello");
        let file = NamedTempFile::new().unwrap();
        write_json(&[&m], file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        assert!(content.contains("\"Alice\""));
    }

    #[test]
    fn test_report_to_json() {
        let t = Transcript::from_text(
            "1/4/21, 9:00 AM - Alice: good morning 😂\n1/4/21, 9:05 AM - Bob: morning",
            &AnalyzerConfig::default(),
        )
        .unwrap();
        let json = report_to_json(&t.all().report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["overview"]["total_messages"], 2);
        assert_eq!(value["hourly_counts"].as_array().unwrap().len(), 24);
        assert_eq!(value["weekday_counts"].as_array().unwrap().len(), 7);
        assert_eq!(value["top_emojis"][0]["emoji"], "😂");
    }

    #[test]
    fn test_write_report_json_file() {
        let t = Transcript::from_text("1/4/21, 9:00 AM - Alice: hi", &AnalyzerConfig::default())
            .unwrap();
        let file = NamedTempFile::new().unwrap();
        write_report_json(&t.all().report(), file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        assert!(content.contains("\"overview\""));
    }
}
