//! Scan result types shared by the scan, the log and the presenters.

use chrono::{DateTime, Local};

use crate::error_handling::ResolutionError;
use crate::policy::{DmarcResult, SpfResult};

/// Outcome of the TXT query behind a result.
///
/// A failed query is interpreted as an empty answer set, so the result reads as
/// "absent"; this keeps the failure visible to presenters and statistics.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LookupStatus {
    /// The resolver answered (possibly with no records)
    #[default]
    Answered,
    /// The query failed at the DNS layer
    Failed(ResolutionError),
}

impl LookupStatus {
    /// True when the query failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, LookupStatus::Failed(_))
    }

    /// Failure message, if the lookup failed.
    pub fn failure(&self) -> Option<String> {
        match self {
            LookupStatus::Answered => None,
            LookupStatus::Failed(e) => Some(e.to_string()),
        }
    }
}

/// Completed scan of one domain.
///
/// Built once by the scan orchestrator and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainScanResult {
    /// Domain as given in the input, trimmed
    pub domain: String,
    /// Interpreted `_dmarc` answers
    pub dmarc: DmarcResult,
    /// Interpreted apex answers
    pub spf: SpfResult,
    /// When both lookups completed
    pub timestamp: DateTime<Local>,
    /// Status of the `_dmarc.<domain>` TXT query
    pub dmarc_lookup: LookupStatus,
    /// Status of the `<domain>` TXT query
    pub spf_lookup: LookupStatus,
}

impl DomainScanResult {
    /// True when either TXT query failed at the DNS layer.
    pub fn has_resolution_failure(&self) -> bool {
        self.dmarc_lookup.is_failed() || self.spf_lookup.is_failed()
    }
}
