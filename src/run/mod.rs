//! Scan orchestration.
//!
//! Reads the input domains, scans them through the resolver and fans every result
//! out to the result log and the presenter.

mod scan;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::pin::pin;
use std::time::Instant;

use anyhow::{Context, Result};
use futures::StreamExt;
use log::{debug, error, info, warn};

use crate::app::input::normalize_domain;
use crate::app::{log_progress, read_domains, resolve_input_source};
use crate::config::{Config, PROGRESS_LOG_INTERVAL};
use crate::dns::{HickoryTxtResolver, TxtResolver};
use crate::error_handling::{ScanEvent, ScanStats};
use crate::initialization::init_resolver;
use crate::policy::classify;
use crate::presenter::{stdout_presenter, Presenter};
use crate::storage::ResultLog;

pub use scan::{scan_domain, scan_domains, ScanOptions};

/// Results of a scan run.
///
/// Contains summary statistics about the completed scan.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Number of domains scanned
    pub total_domains: usize,
    /// Domains with at least one weakness flag
    pub flagged: usize,
    /// Records durably appended to the result log
    pub logged: usize,
    /// Results that could not be logged
    pub log_failures: usize,
    /// Individual TXT queries that failed at the DNS layer
    pub resolution_failures: usize,
    /// Path of the result log
    pub log_path: PathBuf,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Runs a scan with the provided configuration.
///
/// This is the main entry point for the library. It reads the domains from the
/// configured source, resolves them with the system DNS configuration, appends
/// every result to the result log and prints it to stdout.
///
/// # Errors
///
/// This function will return an error if:
/// - No input source is available or the input file cannot be read
/// - The DNS resolver cannot be initialized
///
/// DNS failures, log write failures and output failures for individual domains are
/// reported and skipped.
///
/// # Example
///
/// ```no_run
/// use spoofx::{run_scan, Config};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = Config {
///     domain: Some("example.com".to_string()),
///     ..Default::default()
/// };
/// let report = run_scan(config).await?;
/// println!("{} domain(s) with weaknesses", report.flagged);
/// # Ok(())
/// # }
/// ```
pub async fn run_scan(config: Config) -> Result<ScanReport> {
    let source = resolve_input_source(
        config.domain.as_deref(),
        config.file.as_deref(),
        std::io::stdin().is_terminal(),
    )?;
    let domains = read_domains(&source)
        .await
        .context("Failed to read input domains")?;
    info!("Loaded {} domain(s) from {:?}", domains.len(), source);

    let resolver = init_resolver(config.dns_timeout).context("Failed to initialize DNS resolver")?;
    let resolver = HickoryTxtResolver::new(resolver);

    let log = ResultLog::new(&config.log_path);
    let mut presenter = stdout_presenter(config.output, config.verbose, !config.no_color);

    let report = run_scan_with(
        &resolver,
        domains,
        ScanOptions::from(&config),
        &log,
        presenter.as_mut(),
    )
    .await;

    if let Err(e) = presenter.finish(&report) {
        warn!("Failed to print summary: {e}");
    }
    Ok(report)
}

/// Scans `domains` and hands every result to the log and the presenter.
///
/// This loop is the only writer to the result log, so records are appended one at
/// a time in input order even when lookups run concurrently. A failed log write or
/// presenter call is reported and counted; the scan always continues.
pub async fn run_scan_with<R>(
    resolver: &R,
    domains: Vec<String>,
    options: ScanOptions,
    log: &ResultLog,
    presenter: &mut dyn Presenter,
) -> ScanReport
where
    R: TxtResolver,
{
    let start_time = Instant::now();
    let total = domains
        .iter()
        .filter(|domain| normalize_domain(domain).is_some())
        .count();
    let stats = ScanStats::new();

    let mut results = pin!(scan_domains(resolver, domains, options));
    while let Some(result) = results.next().await {
        stats.increment(ScanEvent::DomainScanned);
        for lookup in [&result.dmarc_lookup, &result.spf_lookup] {
            if lookup.is_failed() {
                stats.increment(ScanEvent::ResolutionFailure);
            }
        }

        let flags = classify(&result.dmarc, &result.spf);
        if !flags.is_empty() {
            stats.increment(ScanEvent::DomainFlagged);
        }
        debug!(
            "Scanned {}: {}",
            result.domain,
            if flags.is_empty() {
                "no weaknesses".to_string()
            } else {
                flags
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        );

        match log.append_async(&result).await {
            Ok(()) => stats.increment(ScanEvent::LogWritten),
            Err(e) => {
                error!("Failed to log result for {}: {e}", result.domain);
                stats.increment(ScanEvent::LogWriteFailure);
            }
        }

        if let Err(e) = presenter.present(&result, &flags) {
            warn!("Failed to present result for {}: {e}", result.domain);
            stats.increment(ScanEvent::PresentFailure);
        }

        let scanned = stats.get(ScanEvent::DomainScanned);
        if scanned % PROGRESS_LOG_INTERVAL == 0 {
            log_progress(start_time, scanned, total);
        }
    }

    stats.log_summary();

    ScanReport {
        total_domains: stats.get(ScanEvent::DomainScanned),
        flagged: stats.get(ScanEvent::DomainFlagged),
        logged: stats.get(ScanEvent::LogWritten),
        log_failures: stats.get(ScanEvent::LogWriteFailure),
        resolution_failures: stats.get(ScanEvent::ResolutionFailure),
        log_path: log.path().to_path_buf(),
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    }
}
