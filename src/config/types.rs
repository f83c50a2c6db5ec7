//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_LOG_PATH, DEFAULT_MAX_CONCURRENCY, DNS_TIMEOUT_SECS, MAX_CONCURRENCY_LIMIT,
};
use crate::policy::CatchAllMode;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How per-domain results are presented on stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable report (default)
    Console,
    /// One JSON object per domain
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use spoofx::Config;
///
/// let config = Config {
///     domain: Some("example.com".to_string()),
///     max_concurrency: 4,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Single domain to scan (takes precedence over `file` and stdin)
    pub domain: Option<String>,

    /// Line-delimited file of domains (takes precedence over stdin)
    pub file: Option<PathBuf>,

    /// Append-only CSV result log
    pub log_path: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Presenter used for per-domain output
    pub output: OutputFormat,

    /// Show full records and resolution failures in the console output
    pub verbose: bool,

    /// Disable ANSI colors in console output
    pub no_color: bool,

    /// Number of domains resolved concurrently (results stay in input order)
    pub max_concurrency: usize,

    /// Courtesy delay applied after each domain's lookups
    pub delay: Duration,

    /// Per-query DNS timeout
    pub dns_timeout: Duration,

    /// How the SPF catch-all mechanism is detected
    pub catch_all_mode: CatchAllMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: None,
            file: None,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            output: OutputFormat::Console,
            verbose: false,
            no_color: false,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            delay: Duration::ZERO,
            dns_timeout: Duration::from_secs(DNS_TIMEOUT_SECS),
            catch_all_mode: CatchAllMode::Substring,
        }
    }
}

/// Command-line options.
///
/// This struct is automatically generated by `clap` from the field attributes.
/// Input sources are mutually exclusive in practice; when several are given,
/// `--domain` wins over the file, and the file wins over piped stdin.
///
/// # Examples
///
/// ```bash
/// # Single domain
/// spoofx -d example.com
///
/// # File of domains, two lookups in flight, 200ms between domains
/// spoofx domains.txt --max-concurrency 2 --delay-ms 200
///
/// # Piped input with JSON output
/// cat domains.txt | spoofx --output json
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "spoofx",
    about = "Checks domains for weak or missing DMARC and SPF records."
)]
pub struct Opt {
    /// Line-delimited file of domains to scan
    #[arg(value_parser)]
    pub file: Option<PathBuf>,

    /// Scan a single domain
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Append-only CSV log of scan results
    #[arg(long, value_parser, default_value = DEFAULT_LOG_PATH)]
    pub log_path: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Result output: console|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub output: OutputFormat,

    /// Print resolution failures alongside each result
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Maximum domains resolved concurrently (output order is preserved)
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Delay in milliseconds after each domain, to go easy on the resolver
    #[arg(long, default_value_t = 0)]
    pub delay_ms: u64,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub dns_timeout_secs: u64,

    /// Detect the SPF catch-all by parsing mechanisms instead of substring search.
    ///
    /// Avoids false matches such as `include:spf-all.example.net`, at the cost of
    /// differing from the classic substring heuristic on unusual records.
    #[arg(long)]
    pub strict_spf_parse: bool,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            domain: opt.domain,
            file: opt.file,
            log_path: opt.log_path,
            log_level: opt.log_level,
            log_format: opt.log_format,
            output: opt.output,
            verbose: opt.verbose,
            no_color: opt.no_color,
            max_concurrency: opt.max_concurrency.clamp(1, MAX_CONCURRENCY_LIMIT),
            delay: Duration::from_millis(opt.delay_ms),
            dns_timeout: Duration::from_secs(opt.dns_timeout_secs.max(1)),
            catch_all_mode: if opt.strict_spf_parse {
                CatchAllMode::Mechanism
            } else {
                CatchAllMode::Substring
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_concurrency, 1);
        assert_eq!(config.delay, Duration::ZERO);
        assert_eq!(config.dns_timeout, Duration::from_secs(5));
        assert_eq!(config.log_path, PathBuf::from("log.csv"));
        assert_eq!(config.output, OutputFormat::Console);
        assert_eq!(config.catch_all_mode, CatchAllMode::Substring);
        assert!(config.domain.is_none());
        assert!(config.file.is_none());
        assert!(!config.verbose);
    }

    #[test]
    fn test_opt_defaults_convert_to_config() {
        let opt = Opt::parse_from(["spoofx", "domains.txt"]);
        let config = Config::from(opt);
        assert_eq!(config.file, Some(PathBuf::from("domains.txt")));
        assert!(config.domain.is_none());
        assert_eq!(config.max_concurrency, 1);
        assert_eq!(config.catch_all_mode, CatchAllMode::Substring);
    }

    #[test]
    fn test_opt_flags() {
        let opt = Opt::parse_from([
            "spoofx",
            "-d",
            "example.com",
            "--delay-ms",
            "250",
            "--strict-spf-parse",
            "--output",
            "json",
            "-v",
        ]);
        let config = Config::from(opt);
        assert_eq!(config.domain.as_deref(), Some("example.com"));
        assert_eq!(config.delay, Duration::from_millis(250));
        assert_eq!(config.catch_all_mode, CatchAllMode::Mechanism);
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.verbose);
    }

    #[test]
    fn test_max_concurrency_is_clamped() {
        let zero = Config::from(Opt::parse_from(["spoofx", "--max-concurrency", "0"]));
        assert_eq!(zero.max_concurrency, 1);

        let huge = Config::from(Opt::parse_from(["spoofx", "--max-concurrency", "100000"]));
        assert_eq!(huge.max_concurrency, MAX_CONCURRENCY_LIMIT);
    }
}
