// storage/mod.rs
// Result log persistence

pub mod result_log;

// Re-export commonly used items
pub use result_log::{format_log_record, ResultLog};
