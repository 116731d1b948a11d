//! # chatlens CLI
//!
//! Command-line front end for the chatlens library.

use std::fs::File;
use std::io::{self, Write};
use std::process;

use clap::Parser as ClapParser;
use tracing::{info, warn};

use chatlens::ChatlensError;
use chatlens::cli::Args;
use chatlens::core::Transcript;
use chatlens::core::output::day_to_text;
use chatlens::format::{OutputFormat, render};
use chatlens::logging::{OperationTimer, init_logging};
use chatlens::parser::TranscriptParser;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatlensError> {
    let args = <Args as ClapParser>::parse();
    init_logging(args.verbose)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        input = %args.input.display(),
        format = %args.format,
        "starting"
    );

    let filter = args.filter_config()?;
    if filter.has_partial_date_range() {
        warn!("date range needs both --from and --to; ignoring it");
    }
    let day = args.day()?;

    let timer = OperationTimer::new("parse");
    let parser = TranscriptParser::with_config(args.parser_config());
    let transcript = Transcript::from_path_with_parser(&args.input, &parser, &args.analyzer_config())?;
    timer.finish();

    if let Some(stats) = transcript.parse_stats() {
        info!(
            messages = stats.parsed_lines,
            dropped = stats.dropped_lines,
            ratio = format!("{:.1}%", stats.parse_ratio()),
            "parsed chat"
        );
    }

    let timer = OperationTimer::new("render");
    let view = transcript.view(&filter);
    let rendered = match day {
        Some(date) => day_to_text(date, &view.messages_on(date)),
        None => render(&view, OutputFormat::from(args.format))?,
    };
    timer.finish();

    match args.output {
        Some(ref path) => {
            let mut file = File::create(path)?;
            file.write_all(rendered.as_bytes())?;
            println!("Output saved to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
