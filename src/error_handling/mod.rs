//! Error handling and scan statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, input, log write, DNS resolution, output)
//! - Categorization of resolver errors into "absent" vs "failed"
//! - Scan statistics tracking
//!
//! Only input and initialization errors abort a run. Resolution failures degrade
//! to an absent record set, and log or output failures are reported and skipped.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_resolve_error, categorize_response_code};
pub use stats::ScanStats;
pub use types::{
    InitializationError, InputError, LogWriteError, PresentError, ResolutionError, ScanEvent,
};
