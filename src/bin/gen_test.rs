//! Synthetic WhatsApp export generator for stress testing chatlens.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [messages] [output]
//! Example: cargo run --features gen-test --bin gen_test -- 100000 heavy_chat.txt

use rand::Rng;
use rand::seq::SliceRandom;
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};

const SENDERS: &[&str] = &[
    "Alice",
    "Bob",
    "John Doe",
    "Иван",
    "村上",
    "محمد",
    "🔥FireUser🔥",
    "+1 555 0199",
];

const BODIES: &[&str] = &[
    "Happy New Year!",
    "good morning",
    "I hate mondays",
    "not bad at all",
    "this is so awesome 😂",
    "see you at 7",
    "ok",
    "<Media omitted>",
    "check https://example.com/page",
    "Кириллица: Привет мир!",
    "日本語: こんにちは",
    "that was terrible :(",
    "love you <3",
    "semicolons; here; and; there",
    "\"quoted\" text",
];

const EMOJIS: &[&str] = &[
    "😀", "😂", "🤣", "😍", "🥰", "🤔", "🙄", "😱", "🔥", "👍", "❤️", "💔", "🎉", "🇺🇸",
    "👨‍👩‍👧‍👦", "👍🏽",
];

const NOTICES: &[&str] = &[
    "Messages and calls are end-to-end encrypted. No one outside of this chat can read them.",
    "Alice added Bob",
    "Bob left",
];

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map(|s| s.as_str()).unwrap_or("heavy_chat.txt");

    println!("Synthetic chat generator");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!();

    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);

    let mut rng = rand::thread_rng();
    let start = std::time::Instant::now();
    let mut bytes_written: usize = 0;

    for i in 0..count {
        let line = format!(
            "{}, {} - {}: {}\n",
            date_text(i),
            time_text(&mut rng),
            SENDERS.choose(&mut rng).copied().unwrap_or("Alice"),
            body_text(&mut rng, i)
        );
        bytes_written += line.len();
        writer.write_all(line.as_bytes())?;

        // Occasional continuation lines and system notices, both dropped by the parser
        if i % 50 == 25 {
            let extra = match rng.gen_range(0..3) {
                0 => "second line of the previous message\n".to_string(),
                1 => format!(
                    "{}, 9:00 AM - {}\n",
                    date_text(i),
                    NOTICES.choose(&mut rng).copied().unwrap_or("Bob left")
                ),
                _ => "\n".to_string(),
            };
            bytes_written += extra.len();
            writer.write_all(extra.as_bytes())?;
        }

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                bytes_written as f64 / 1_000_000.0,
                (i + 1) as f64 / elapsed
            );
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    println!("\n\nDone!");
    println!("   Size:  {:.2} MB", bytes_written as f64 / 1_000_000.0);
    println!("   Time:  {:.2}s", elapsed.as_secs_f64());
    println!("   Speed: {:.0} msg/s", count as f64 / elapsed.as_secs_f64());

    Ok(())
}

/// Walks forward one day every 200 messages. Days above 12 produce
/// day-first dates every tenth message to exercise the fallback.
fn date_text(index: usize) -> String {
    let day_index = index / 200;
    let month = day_index / 28 % 12 + 1;
    let day = day_index % 28 + 1;
    let year = 20 + day_index / (28 * 12) % 10;

    if index % 10 == 0 && day > 12 {
        format!("{}/{}/{}", day, month, year)
    } else if index % 7 == 0 {
        format!("{}/{}/20{}", month, day, year)
    } else {
        format!("{}/{}/{}", month, day, year)
    }
}

fn time_text(rng: &mut impl Rng) -> String {
    let hour = rng.gen_range(1..=12);
    let minute = rng.gen_range(0..60);
    let meridiem = if rng.gen_range(0..2) == 0 { "AM" } else { "PM" };
    format!("{}:{:02} {}", hour, minute, meridiem)
}

fn body_text(rng: &mut impl Rng, index: usize) -> String {
    let base = BODIES.choose(rng).copied().unwrap_or("ok");
    match index % 5 {
        0 => {
            let emojis: String = (0..rng.gen_range(1..6))
                .filter_map(|_| EMOJIS.choose(rng).copied())
                .collect();
            format!("{} {}", base, emojis)
        }
        1 => format!("{} #{}", base, index),
        _ => base.to_string(),
    }
}
