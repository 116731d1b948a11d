//! Plain text report writer.

use chrono::NaiveDate;

use crate::core::models::{Report, weekday_name};
use crate::features::{AnalyzedMessage, SentimentLabel};

/// Widest bar drawn for a count, in characters.
const BAR_WIDTH: usize = 40;

/// Renders every table of a [`Report`] as plain text.
pub fn to_text(report: &Report) -> String {
    let mut out = String::new();
    let o = &report.overview;

    section(&mut out, "Overview");
    out.push_str(&format!("Total messages: {}\n", o.total_messages));
    out.push_str(&format!("Unique senders: {}\n", o.unique_senders));
    out.push_str(&format!("Media messages: {}\n", o.media_messages));
    if let (Some(first), Some(last)) = (o.first_timestamp, o.last_timestamp) {
        out.push_str(&format!("First message:  {}\n", first.format("%Y-%m-%d %H:%M")));
        out.push_str(&format!("Last message:   {}\n", last.format("%Y-%m-%d %H:%M")));
    }
    out.push_str(&format!("Average length: {:.1} characters\n", o.average_length));
    if !report.senders.is_empty() {
        out.push_str(&format!("Senders:        {}\n", report.senders.join(", ")));
    }

    if report.overview.total_messages == 0 {
        out.push_str("\nNo messages match the current filters.\n");
        return out;
    }

    section(&mut out, "Messages per day");
    let max = report.daily_counts.iter().map(|d| d.count).max().unwrap_or(0);
    for d in &report.daily_counts {
        out.push_str(&format!("{}  {:>5}  {}\n", d.date, d.count, bar(d.count, max)));
    }

    section(&mut out, "Messages per hour");
    let max = report.hourly_counts.iter().map(|h| h.count).max().unwrap_or(0);
    for h in &report.hourly_counts {
        out.push_str(&format!("{:02}:00  {:>5}  {}\n", h.hour, h.count, bar(h.count, max)));
    }

    section(&mut out, "Messages per weekday");
    let max = report.weekday_counts.iter().map(|w| w.count).max().unwrap_or(0);
    for w in &report.weekday_counts {
        out.push_str(&format!(
            "{:<9}  {:>5}  {}\n",
            weekday_name(w.weekday),
            w.count,
            bar(w.count, max)
        ));
    }

    section(&mut out, "Message length");
    let max = report.length_histogram.iter().map(|b| b.count).max().unwrap_or(0);
    for b in &report.length_histogram {
        out.push_str(&format!(
            "{:>8.1} - {:>8.1}  {:>5}  {}\n",
            b.start,
            b.end,
            b.count,
            bar(b.count, max)
        ));
    }

    section(&mut out, "Top emojis");
    if report.top_emojis.is_empty() {
        out.push_str("(none)\n");
    }
    for e in &report.top_emojis {
        out.push_str(&format!("{}  {:>5}\n", e.emoji, e.count));
    }

    section(&mut out, "Sentiment");
    for &label in SentimentLabel::all() {
        out.push_str(&format!(
            "{:<8}  {:>5}  ({:.1}%)\n",
            label.to_string(),
            report.sentiment.get(label),
            report.sentiment.percentage(label)
        ));
    }

    section(&mut out, "Top words");
    if report.top_words.is_empty() {
        out.push_str("(none)\n");
    }
    for w in &report.top_words {
        out.push_str(&format!("{:<20}  {:>5}\n", w.word, w.count));
    }

    out
}

/// Renders the messages of one day, one line per message.
pub fn day_to_text(date: NaiveDate, messages: &[&AnalyzedMessage]) -> String {
    let mut out = String::new();
    section(&mut out, &format!("Messages on {date}"));

    if messages.is_empty() {
        out.push_str("(none)\n");
        return out;
    }

    for m in messages {
        out.push_str(&format!(
            "{}  {}: {}\n",
            m.message.timestamp.format("%H:%M"),
            m.sender(),
            m.body()
        ));
    }
    out
}

fn section(out: &mut String, title: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(title.chars().count()));
    out.push('\n');
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 || count == 0 {
        return String::new();
    }
    "#".repeat((count * BAR_WIDTH).div_ceil(max))
}
