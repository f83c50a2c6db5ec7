//! Tests for CLI argument parsing and conversion into the library `Config`.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use spoofx::config::{Opt, DEFAULT_LOG_PATH};
use spoofx::policy::CatchAllMode;
use spoofx::{Config, OutputFormat};

#[test]
fn test_short_domain_flag() {
    let config = Config::from(Opt::parse_from(["spoofx", "-d", "example.com"]));
    assert_eq!(config.domain.as_deref(), Some("example.com"));
    assert_eq!(config.file, None);
    assert_eq!(config.log_path, PathBuf::from(DEFAULT_LOG_PATH));
}

#[test]
fn test_domain_and_file_both_accepted() {
    // Precedence is resolved at run time, not by the parser
    let config = Config::from(Opt::parse_from([
        "spoofx",
        "domains.txt",
        "--domain",
        "example.com",
    ]));
    assert_eq!(config.domain.as_deref(), Some("example.com"));
    assert_eq!(config.file, Some(PathBuf::from("domains.txt")));
}

#[test]
fn test_output_and_timing_options() {
    let config = Config::from(Opt::parse_from([
        "spoofx",
        "domains.txt",
        "--output",
        "json",
        "--delay-ms",
        "250",
        "--dns-timeout-secs",
        "0",
        "--strict-spf-parse",
    ]));
    assert_eq!(config.output, OutputFormat::Json);
    assert_eq!(config.delay, Duration::from_millis(250));
    // A zero timeout would fail every query
    assert_eq!(config.dns_timeout, Duration::from_secs(1));
    assert_eq!(config.catch_all_mode, CatchAllMode::Mechanism);
}

#[test]
fn test_invalid_output_rejected() {
    let result = Opt::try_parse_from(["spoofx", "--output", "xml"]);
    assert!(result.is_err());
}

#[test]
fn test_invalid_concurrency_rejected() {
    let result = Opt::try_parse_from(["spoofx", "--max-concurrency", "-3"]);
    assert!(result.is_err());
}
