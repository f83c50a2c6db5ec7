//! DMARC record selection and tag extraction.

use serde::Serialize;

use crate::config::DMARC_VERSION_MARKER;

/// Policy fields extracted from the selected `_dmarc` TXT record.
///
/// Every field is `None` when no record was selected. A selected record without a
/// `p=` tag leaves `policy` as `None` while `raw_record` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DmarcResult {
    /// Value of `p=` (`none`, `quarantine`, `reject`)
    pub policy: Option<String>,
    /// Value of `rua=`
    pub aggregate_report_target: Option<String>,
    /// Value of `ruf=`
    pub forensic_report_target: Option<String>,
    /// Full text of the selected record, verbatim
    pub raw_record: Option<String>,
}

impl DmarcResult {
    /// True when a record containing `v=DMARC1` was selected.
    pub fn is_present(&self) -> bool {
        self.raw_record.is_some()
    }
}

/// Selects the DMARC record from a TXT answer set and extracts `p`, `rua` and `ruf`.
///
/// The first answer containing `v=DMARC1` anywhere in its text is selected; later
/// matches are ignored. The record is split on `;` and each segment trimmed. For each
/// tag the first segment carrying it wins, and all other tags (`sp=`, `pct=`,
/// `adkim=`, ...) are ignored.
///
/// # Arguments
///
/// * `records` - TXT answers for `_dmarc.<domain>`, in resolver order
///
/// # Examples
///
/// ```
/// use spoofx::policy::parse_dmarc;
///
/// let records = vec!["v=DMARC1; p=reject; rua=mailto:a@x.com".to_string()];
/// let dmarc = parse_dmarc(&records);
/// assert_eq!(dmarc.policy.as_deref(), Some("reject"));
/// assert_eq!(dmarc.forensic_report_target, None);
/// ```
pub fn parse_dmarc(records: &[String]) -> DmarcResult {
    let Some(record) = records
        .iter()
        .find(|txt| txt.contains(DMARC_VERSION_MARKER))
    else {
        return DmarcResult::default();
    };

    let segments: Vec<&str> = record.split(';').map(str::trim).collect();

    DmarcResult {
        policy: tag_value(&segments, "p="),
        aggregate_report_target: tag_value(&segments, "rua="),
        forensic_report_target: tag_value(&segments, "ruf="),
        raw_record: Some(record.clone()),
    }
}

/// Value of the first segment starting with `prefix`; an empty value counts as absent.
fn tag_value(segments: &[&str], prefix: &str) -> Option<String> {
    segments
        .iter()
        .find_map(|segment| segment.strip_prefix(prefix))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
