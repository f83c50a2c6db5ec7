//! TXT record queries.

use hickory_resolver::proto::rr::rdata::TXT;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::config::DMARC_LABEL;
use crate::error_handling::{categorize_resolve_error, ResolutionError};

/// Name queried for a domain's DMARC policy: `_dmarc.<domain>`.
pub fn dmarc_name(domain: &str) -> String {
    format!("{DMARC_LABEL}.{domain}")
}

/// Queries TXT (text) records for a name.
///
/// # Arguments
///
/// * `name` - The DNS name to query, used as-is
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// The TXT answers in the order the resolver returned them. A name that does not
/// exist or has no TXT records yields an empty vector.
///
/// # Errors
///
/// Returns a `ResolutionError` for timeouts, error response codes and transport
/// failures.
pub async fn lookup_txt_records(
    name: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, ResolutionError> {
    match resolver.lookup(name, RecordType::TXT).await {
        Ok(lookup) => {
            let txt_records: Vec<String> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::TXT(txt) = rdata {
                        Some(txt_to_string(txt))
                    } else {
                        None
                    }
                })
                .collect();
            Ok(txt_records)
        }
        Err(e) => match categorize_resolve_error(&e) {
            None => {
                log::debug!("No TXT records for {name}: {e}");
                Ok(Vec::new())
            }
            Some(failure) => {
                log::warn!("Failed to lookup TXT records for {name}: {e}");
                Err(failure)
            }
        },
    }
}

/// Joins the character-strings of one TXT answer into a single record.
///
/// Long SPF and DMARC records are split into 255-byte chunks on the wire and must be
/// concatenated without a separator.
pub fn txt_to_string(txt: &TXT) -> String {
    txt.iter()
        .map(|bytes| String::from_utf8_lossy(bytes))
        .collect::<Vec<_>>()
        .concat()
}
