//! Per-domain scanning.
//!
//! Resolves both TXT names for a domain, interprets the answers and builds the
//! `DomainScanResult`. Batches are scanned as an ordered stream with a bounded
//! number of domains in flight.

use std::time::Duration;

use chrono::Local;
use futures::stream::{self, Stream, StreamExt};

use crate::app::input::normalize_domain;
use crate::config::Config;
use crate::dns::{dmarc_name, TxtResolver};
use crate::models::{DomainScanResult, LookupStatus};
use crate::policy::{parse_dmarc, parse_spf_with, CatchAllMode};

/// Knobs for scanning a batch of domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Domains resolved concurrently; results are still yielded in input order
    pub max_concurrency: usize,
    /// Courtesy delay after each domain's lookups
    pub delay: Duration,
    /// SPF catch-all detection mode
    pub catch_all_mode: CatchAllMode,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_concurrency: 1,
            delay: Duration::ZERO,
            catch_all_mode: CatchAllMode::Substring,
        }
    }
}

impl From<&Config> for ScanOptions {
    fn from(config: &Config) -> Self {
        Self {
            max_concurrency: config.max_concurrency,
            delay: config.delay,
            catch_all_mode: config.catch_all_mode,
        }
    }
}

/// Scans a single domain.
///
/// Issues exactly two TXT queries, `_dmarc.<domain>` then `<domain>`. A failed
/// query is interpreted as an empty answer set and recorded in the result's lookup
/// status. The timestamp is taken once both lookups have completed.
///
/// # Arguments
///
/// * `resolver` - TXT record source
/// * `domain` - Domain to scan, already trimmed and non-empty
/// * `mode` - SPF catch-all detection mode
pub async fn scan_domain<R>(resolver: &R, domain: &str, mode: CatchAllMode) -> DomainScanResult
where
    R: TxtResolver,
{
    let (dmarc_records, dmarc_lookup) = resolve_txt(resolver, &dmarc_name(domain)).await;
    let (spf_records, spf_lookup) = resolve_txt(resolver, domain).await;

    DomainScanResult {
        domain: domain.to_string(),
        dmarc: parse_dmarc(&dmarc_records),
        spf: parse_spf_with(&spf_records, mode),
        timestamp: Local::now(),
        dmarc_lookup,
        spf_lookup,
    }
}

async fn resolve_txt<R>(resolver: &R, name: &str) -> (Vec<String>, LookupStatus)
where
    R: TxtResolver,
{
    match resolver.lookup_txt(name).await {
        Ok(records) => (records, LookupStatus::Answered),
        Err(e) => (Vec::new(), LookupStatus::Failed(e)),
    }
}

/// Scans a batch of domains as a lazy, finite stream.
///
/// Entries are trimmed and blank ones skipped. Domains are scanned in input order
/// and results come out in the same order, one per remaining entry (duplicates are
/// scanned again). Up to `max_concurrency` domains are resolved at once; with the
/// default of 1 the scan is strictly sequential. Nothing is resolved until the
/// stream is polled.
pub fn scan_domains<'a, R>(
    resolver: &'a R,
    domains: Vec<String>,
    options: ScanOptions,
) -> impl Stream<Item = DomainScanResult> + 'a
where
    R: TxtResolver,
{
    let entries = domains
        .into_iter()
        .filter_map(|domain| normalize_domain(&domain));

    stream::iter(entries)
        .map(move |domain| async move {
            let result = scan_domain(resolver, &domain, options.catch_all_mode).await;
            if !options.delay.is_zero() {
                tokio::time::sleep(options.delay).await;
            }
            result
        })
        .buffered(options.max_concurrency.max(1))
}

