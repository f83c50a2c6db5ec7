//! spoofx library: DMARC and SPF anti-spoofing posture scanning
//!
//! This library looks up the DMARC record (`_dmarc.<domain>`) and the SPF record
//! (`<domain>`) for each input domain, flags weak or missing policies, appends
//! every result to an append-only CSV log and presents it on stdout.
//!
//! # Example
//!
//! ```no_run
//! use spoofx::{Config, run_scan};
//! use tokio;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     file: Some(std::path::PathBuf::from("domains.txt")),
//!     max_concurrency: 4,
//!     ..Default::default()
//! };
//!
//! let report = run_scan(config).await?;
//! println!("Scanned {} domains: {} flagged",
//!          report.total_domains, report.flagged);
//! # Ok(())
//! # }
//! ```
//!
//! The record interpretation is available on its own:
//!
//! ```
//! use spoofx::policy::{classify, parse_dmarc, parse_spf, WeaknessFlag};
//!
//! let dmarc = parse_dmarc(&["v=DMARC1; p=none".to_string()]);
//! let spf = parse_spf(&["v=spf1 include:_spf.example.net ~all".to_string()]);
//! let flags = classify(&dmarc, &spf);
//! assert!(flags.contains(&WeaknessFlag::DmarcWeakNone));
//! assert_eq!(flags.len(), 1);
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod initialization;
pub mod models;
pub mod policy;
pub mod presenter;
mod run;
pub mod storage;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use dns::{HickoryTxtResolver, TxtResolver};
pub use error_handling::{
    InitializationError, InputError, LogWriteError, PresentError, ResolutionError,
};
pub use models::{DomainScanResult, LookupStatus};
pub use run::{run_scan, run_scan_with, scan_domain, scan_domains, ScanOptions, ScanReport};
pub use storage::ResultLog;
