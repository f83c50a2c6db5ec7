//! DNS resolver initialization.
//!
//! This module provides functions to initialize the DNS resolver with proper
//! timeout configuration.

use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;

use crate::config::DNS_ATTEMPTS;
use crate::error_handling::InitializationError;

/// Initializes the DNS resolver for TXT lookups.
///
/// Uses the system resolver configuration (`/etc/resolv.conf` on Unix), falling
/// back to hickory's default upstreams when it cannot be read.
///
/// # Arguments
///
/// * `timeout` - Per-query timeout
///
/// # Returns
///
/// A configured `TokioAsyncResolver` wrapped in `Arc` for sharing across tasks,
/// or an error if initialization fails.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if a zero timeout is requested.
pub fn init_resolver(timeout: Duration) -> Result<Arc<TokioAsyncResolver>, InitializationError> {
    if timeout.is_zero() {
        return Err(InitializationError::DnsResolverError(
            "DNS timeout must be greater than zero".to_string(),
        ));
    }

    let (config, opts) = match read_system_conf() {
        Ok(conf) => conf,
        Err(e) => {
            log::warn!("Failed to read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    let opts = scan_resolver_opts(opts, timeout);

    log::debug!(
        "DNS resolver initialized (timeout: {:?}, attempts: {})",
        opts.timeout,
        opts.attempts
    );

    Ok(Arc::new(TokioAsyncResolver::tokio(config, opts)))
}

/// Applies the scan's resolver settings on top of the system options.
///
/// Every name is queried as given (`ndots = 0`, no search-domain expansion) and
/// answers are never cached, so a domain listed twice is resolved twice.
fn scan_resolver_opts(mut opts: ResolverOpts, timeout: Duration) -> ResolverOpts {
    opts.timeout = timeout;
    opts.attempts = DNS_ATTEMPTS;
    opts.ndots = 0;
    opts.cache_size = 0;
    opts
}
