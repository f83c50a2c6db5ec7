//! Posture classification: weakness flags derived from DMARC and SPF results.

use std::collections::BTreeSet;

use serde::Serialize;
use strum_macros::{Display, EnumIter};

use super::dmarc::DmarcResult;
use super::spf::{SpfResult, SpfStrictness};

/// An anti-spoofing weakness found for a domain.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, Serialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeaknessFlag {
    /// No DMARC record, or a record without a `p=` tag
    DmarcMissing,
    /// DMARC policy is `none` (monitoring only)
    DmarcWeakNone,
    /// No SPF record
    SpfMissing,
    /// SPF catch-all is neutral or could not be determined
    SpfWeak,
}

impl WeaknessFlag {
    /// Operator-facing description of the finding.
    pub fn description(self) -> &'static str {
        match self {
            WeaknessFlag::DmarcMissing => "No DMARC policy found",
            WeaknessFlag::DmarcWeakNone => "DMARC policy is weak: none",
            WeaknessFlag::SpfMissing => "No SPF record found",
            WeaknessFlag::SpfWeak => "SPF is weak or undefined",
        }
    }
}

/// Weakness flags for one domain, in a stable order.
pub type WeaknessFlags = BTreeSet<WeaknessFlag>;

/// Derives the weakness flags for a DMARC and SPF result pair.
///
/// Each rule fires independently:
/// - `DMARC_MISSING` when there is no policy (no record or no `p=` tag)
/// - `DMARC_WEAK_NONE` when the policy is exactly `none`
/// - `SPF_MISSING` when no SPF record was selected
/// - `SPF_WEAK` when strictness is neutral or unknown (never together with `SPF_MISSING`)
///
/// Strict or soft SPF and `quarantine`/`reject` DMARC raise nothing.
///
/// # Examples
///
/// ```
/// use spoofx::policy::{classify, DmarcResult, SpfResult, WeaknessFlag};
///
/// let dmarc = DmarcResult { policy: Some("none".into()), ..Default::default() };
/// let flags = classify(&dmarc, &SpfResult::absent());
/// assert!(flags.contains(&WeaknessFlag::DmarcWeakNone));
/// assert!(flags.contains(&WeaknessFlag::SpfMissing));
/// ```
pub fn classify(dmarc: &DmarcResult, spf: &SpfResult) -> WeaknessFlags {
    let mut flags = WeaknessFlags::new();

    match dmarc.policy.as_deref() {
        None | Some("") => {
            flags.insert(WeaknessFlag::DmarcMissing);
        }
        Some("none") => {
            flags.insert(WeaknessFlag::DmarcWeakNone);
        }
        Some(_) => {}
    }

    if spf.raw_record.is_none() {
        flags.insert(WeaknessFlag::SpfMissing);
    } else if matches!(
        spf.strictness,
        SpfStrictness::Neutral | SpfStrictness::Unknown
    ) {
        flags.insert(WeaknessFlag::SpfWeak);
    }

    flags
}
