//! Tests for output format selection and CLI argument mapping

use chatlens::cli::{Args, OutputFormat as CliFormat};
use chatlens::format::OutputFormat;
use clap::Parser;
use std::str::FromStr;

#[test]
fn test_output_format_from_str_all_variants() {
    assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
    assert_eq!(OutputFormat::from_str("txt").unwrap(), OutputFormat::Text);
    assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);

    // Case variations
    assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
    assert_eq!(OutputFormat::from_str("Csv").unwrap(), OutputFormat::Csv);
}

#[test]
fn test_output_format_from_str_errors() {
    assert!(OutputFormat::from_str("").is_err());
    assert!(OutputFormat::from_str("xml").is_err());
    assert!(OutputFormat::from_str("jsonl").is_err());

    let err = OutputFormat::from_str("yaml").unwrap_err();
    assert!(err.contains("yaml"));
    assert!(err.contains("json"));
}

#[test]
fn test_output_format_from_path() {
    assert_eq!(OutputFormat::from_path("report.txt").unwrap(), OutputFormat::Text);
    assert_eq!(OutputFormat::from_path("report.JSON").unwrap(), OutputFormat::Json);
    assert_eq!(OutputFormat::from_path("dir/messages.csv").unwrap(), OutputFormat::Csv);

    let err = OutputFormat::from_path("report").unwrap_err();
    assert!(err.is_invalid_format());
}

#[test]
fn test_output_format_extension_roundtrip() {
    for format in OutputFormat::all() {
        let path = format!("out.{}", format.extension());
        assert_eq!(OutputFormat::from_path(&path).unwrap(), *format);
    }
}

#[test]
fn test_cli_format_maps_to_library_format() {
    assert_eq!(OutputFormat::from(CliFormat::Text), OutputFormat::Text);
    assert_eq!(OutputFormat::from(CliFormat::Json), OutputFormat::Json);
    assert_eq!(OutputFormat::from(CliFormat::Csv), OutputFormat::Csv);
    assert_eq!(CliFormat::default(), CliFormat::Text);
}

#[test]
fn test_args_full_invocation() {
    let args = Args::try_parse_from([
        "chatlens",
        "chat.txt",
        "--sender",
        "John Doe",
        "--from",
        "2021-01-01",
        "--to",
        "2021-01-31",
        "-f",
        "json",
        "-o",
        "report.json",
        "--top",
        "3",
        "--bins",
        "12",
        "--stopword",
        "lol",
        "--stopword",
        "haha",
        "-vv",
    ])
    .unwrap();

    let filter = args.filter_config().unwrap();
    assert_eq!(filter.sender.as_deref(), Some("John Doe"));
    assert!(filter.date_range().is_some());

    let config = args.analyzer_config();
    assert_eq!(config.top_n, 3);
    assert_eq!(config.histogram_bins, 12);
    assert_eq!(config.extra_stopwords, vec!["lol", "haha"]);

    assert_eq!(args.format, CliFormat::Json);
    assert_eq!(args.verbose, 2);
}

#[test]
fn test_args_reject_unknown_format() {
    assert!(Args::try_parse_from(["chatlens", "chat.txt", "-f", "xml"]).is_err());
}

#[test]
fn test_args_day_rejects_explicit_format() {
    for format in ["json", "csv"] {
        let result = Args::try_parse_from(["chatlens", "chat.txt", "--day", "2020-12-31", "--format", format]);
        assert!(result.is_err(), "--day with --format {format} should be rejected");
    }

    let args = Args::try_parse_from(["chatlens", "chat.txt", "--day", "2020-12-31", "-o", "day.txt"]).unwrap();
    assert_eq!(args.format, CliFormat::Text);
}
