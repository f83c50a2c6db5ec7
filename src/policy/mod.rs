//! DMARC and SPF interpretation.
//!
//! This module turns raw TXT answer sets into structured results and derives
//! weakness flags from them:
//! - `dmarc`: selects the `v=DMARC1` record and extracts `p`, `rua`, `ruf`
//! - `spf`: selects the `v=spf1` record and classifies its catch-all
//! - `classify`: maps both results to a set of [`WeaknessFlag`]s
//!
//! Everything here is pure; no I/O happens in this module.

mod classify;
mod dmarc;
mod spf;

// Re-export public API
pub use classify::{classify, WeaknessFlag, WeaknessFlags};
pub use dmarc::{parse_dmarc, DmarcResult};
pub use spf::{parse_spf, parse_spf_with, CatchAllMode, SpfResult, SpfStrictness};
