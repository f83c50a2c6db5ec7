//! Main application modules.
//!
//! This module provides input source selection and progress logging used by the
//! scan run.

pub mod input;
pub mod logging;

// Re-export public API
pub use input::{parse_domain_lines, read_domains, resolve_input_source, InputSource};
pub use logging::log_progress;
