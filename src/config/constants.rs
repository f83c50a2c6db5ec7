//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including DNS naming, default paths, timeouts and the result log format.

/// Label prepended to a domain to locate its DMARC policy record.
pub const DMARC_LABEL: &str = "_dmarc";

/// Marker that identifies a DMARC record. Matched as a substring.
pub const DMARC_VERSION_MARKER: &str = "v=DMARC1";

/// Marker that identifies an SPF record. Matched as an exact prefix.
pub const SPF_VERSION_PREFIX: &str = "v=spf1";

/// Default path of the append-only result log.
pub const DEFAULT_LOG_PATH: &str = "log.csv";

/// Timestamp format for the result log (`YYYY-MM-DD HH:MM:SS`, local time).
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Network operation timeouts
/// DNS query timeout in seconds
/// Matches the resolver default; TXT answers for `_dmarc` names are small and
/// usually arrive well under a second.
pub const DNS_TIMEOUT_SECS: u64 = 5;
/// DNS query attempts per name
pub const DNS_ATTEMPTS: usize = 2;

/// Default number of domains resolved concurrently.
/// 1 keeps the scan strictly sequential.
pub const DEFAULT_MAX_CONCURRENCY: usize = 1;

/// Upper bound for `--max-concurrency` to avoid hammering the upstream resolver.
pub const MAX_CONCURRENCY_LIMIT: usize = 64;

/// Width of the separator line printed after each domain by the console presenter.
pub const SEPARATOR_WIDTH: usize = 50;

/// Progress is logged every this many scanned domains.
pub const PROGRESS_LOG_INTERVAL: usize = 100;
