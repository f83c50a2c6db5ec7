//! DNS TXT resolution.
//!
//! This module provides async TXT lookups using `hickory-resolver`:
//! - `lookup_txt_records`: one TXT query, with "no records" folded into an empty answer
//! - `TxtResolver`: the trait the scan resolves through
//! - `dmarc_name`: the `_dmarc.<domain>` name for a domain
//!
//! Lookups are async and use the system DNS configuration.

mod records;
mod resolver;

// Re-export public API
pub use records::{dmarc_name, lookup_txt_records, txt_to_string};
pub use resolver::{HickoryTxtResolver, TxtResolver};
