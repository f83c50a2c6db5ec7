//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! events counted by [`ScanStats`](super::ScanStats).

use std::path::PathBuf;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the DNS resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// Failure to obtain the list of domains to scan.
///
/// Always fatal: nothing is scanned when input cannot be read.
#[derive(Error, Debug)]
pub enum InputError {
    /// The named input file could not be opened.
    #[error("Failed to open input file {}: {source}", path.display())]
    Open {
        /// Path involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Reading from the input file or stdin failed part-way.
    #[error("Failed to read domains from {origin}: {source}")]
    Read {
        /// `stdin` or the file path
        origin: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// No domain, no file, and stdin is an interactive terminal.
    #[error("No input: pass a domain with --domain, a file of domains, or pipe domains on stdin")]
    NoInput,
}

/// Failure to append a record to the result log.
///
/// Never fatal: the scan continues and the domain is still presented.
#[derive(Error, Debug)]
pub enum LogWriteError {
    /// The log file could not be opened or created.
    #[error("Failed to open result log {}: {source}", path.display())]
    Open {
        /// Path involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The record could not be encoded.
    #[error("Failed to encode log record: {0}")]
    Encode(#[from] csv::Error),

    /// The record could not be written to the log file.
    #[error("Failed to write result log {}: {source}", path.display())]
    Write {
        /// Path involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The blocking write task did not complete.
    #[error("Result log write task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// The record was written but could not be synced to disk.
    #[error("Failed to sync result log {}: {source}", path.display())]
    Sync {
        /// Path involved
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// DNS infrastructure failure for a TXT query.
///
/// "Name does not exist" and "no TXT records" are not failures; they resolve to an
/// empty answer set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// The query timed out.
    #[error("DNS query timed out")]
    Timeout,

    /// The server answered with an error response code (e.g. SERVFAIL, REFUSED).
    #[error("DNS server failure: {0}")]
    ServerFailure(String),

    /// Transport or protocol error.
    #[error("DNS error: {0}")]
    Other(String),
}

/// Failure of a presenter to emit a result.
#[derive(Error, Debug)]
pub enum PresentError {
    /// Writing to the output stream failed.
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing a result failed.
    #[error("Failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

/// Events counted during a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ScanEvent {
    /// A domain completed both lookups
    DomainScanned,
    /// A domain raised at least one weakness flag
    DomainFlagged,
    /// A DMARC or SPF TXT query failed at the DNS layer
    ResolutionFailure,
    /// A record was durably appended to the result log
    LogWritten,
    /// A record could not be appended to the result log
    LogWriteFailure,
    /// The presenter failed to emit a result
    PresentFailure,
}

impl ScanEvent {
    /// Human-readable label used in the end-of-run summary.
    pub fn label(self) -> &'static str {
        match self {
            ScanEvent::DomainScanned => "Domains scanned",
            ScanEvent::DomainFlagged => "Domains with weaknesses",
            ScanEvent::ResolutionFailure => "DNS resolution failures",
            ScanEvent::LogWritten => "Log records written",
            ScanEvent::LogWriteFailure => "Log write failures",
            ScanEvent::PresentFailure => "Output failures",
        }
    }
}
