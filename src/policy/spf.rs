//! SPF record selection and catch-all classification.

use serde::Serialize;
use strum_macros::Display;

use crate::config::SPF_VERSION_PREFIX;

/// Strictness of an SPF record, derived from its catch-all (`all`) mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SpfStrictness {
    /// `-all`: unlisted senders fail
    Strict,
    /// `~all`: unlisted senders soft-fail
    Soft,
    /// `?all`: no assertion about unlisted senders
    Neutral,
    /// No recognised catch-all (missing, bare `all`, `+all`, or malformed)
    Unknown,
    /// No SPF record was selected
    Absent,
}

/// How the catch-all mechanism is located in a selected record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatchAllMode {
    /// Substring search for `-all`, then `~all`, then `?all` anywhere in the record.
    ///
    /// Can misfire when a domain name or macro elsewhere in the record contains one
    /// of those substrings.
    #[default]
    Substring,
    /// Whitespace-tokenized terms; the last term whose mechanism is `all` decides.
    Mechanism,
}

/// The selected SPF record and its strictness.
///
/// `strictness` is [`SpfStrictness::Absent`] exactly when `raw_record` is `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpfResult {
    /// Full text of the selected record, verbatim
    pub raw_record: Option<String>,
    /// Catch-all classification of the selected record
    pub strictness: SpfStrictness,
}

impl SpfResult {
    /// Result for an answer set with no SPF record.
    pub fn absent() -> Self {
        Self {
            raw_record: None,
            strictness: SpfStrictness::Absent,
        }
    }

    /// True when a record starting with `v=spf1` was selected.
    pub fn is_present(&self) -> bool {
        self.raw_record.is_some()
    }
}

impl Default for SpfResult {
    fn default() -> Self {
        Self::absent()
    }
}

/// Selects the SPF record from a TXT answer set using substring catch-all detection.
///
/// See [`parse_spf_with`].
///
/// # Examples
///
/// ```
/// use spoofx::policy::{parse_spf, SpfStrictness};
///
/// let records = vec!["v=spf1 include:_spf.google.com ~all".to_string()];
/// assert_eq!(parse_spf(&records).strictness, SpfStrictness::Soft);
/// ```
pub fn parse_spf(records: &[String]) -> SpfResult {
    parse_spf_with(records, CatchAllMode::Substring)
}

/// Selects the SPF record from a TXT answer set and classifies its strictness.
///
/// The first answer that starts with exactly `v=spf1` is selected; later matches are
/// ignored. Unlike DMARC selection this is a prefix match, so leading whitespace or
/// text before the version tag disqualifies a record.
///
/// # Arguments
///
/// * `records` - TXT answers for the apex name, in resolver order
/// * `mode` - How to locate the catch-all mechanism
pub fn parse_spf_with(records: &[String], mode: CatchAllMode) -> SpfResult {
    let Some(record) = records
        .iter()
        .find(|txt| txt.starts_with(SPF_VERSION_PREFIX))
    else {
        return SpfResult::absent();
    };

    let strictness = match mode {
        CatchAllMode::Substring => strictness_by_substring(record),
        CatchAllMode::Mechanism => strictness_by_mechanism(record),
    };

    SpfResult {
        raw_record: Some(record.clone()),
        strictness,
    }
}

fn strictness_by_substring(record: &str) -> SpfStrictness {
    if record.contains("-all") {
        SpfStrictness::Strict
    } else if record.contains("~all") {
        SpfStrictness::Soft
    } else if record.contains("?all") {
        SpfStrictness::Neutral
    } else {
        SpfStrictness::Unknown
    }
}

fn strictness_by_mechanism(record: &str) -> SpfStrictness {
    record
        .split_whitespace()
        .skip(1) // version term
        .filter_map(|term| {
            let (qualifier, mechanism) = match term.chars().next() {
                Some(q @ ('+' | '-' | '~' | '?')) => (Some(q), &term[1..]),
                _ => (None, term),
            };
            mechanism
                .eq_ignore_ascii_case("all")
                .then_some(qualifier)
        })
        .last()
        .map(|qualifier| match qualifier {
            Some('-') => SpfStrictness::Strict,
            Some('~') => SpfStrictness::Soft,
            Some('?') => SpfStrictness::Neutral,
            _ => SpfStrictness::Unknown,
        })
        .unwrap_or(SpfStrictness::Unknown)
}
