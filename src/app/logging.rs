//! Progress logging utilities.

use log::info;

/// Logs progress information about domain scanning.
///
/// # Arguments
///
/// * `start_time` - The start time of the scan
/// * `completed` - Domains scanned so far
/// * `total` - Domains in the input
pub fn log_progress(start_time: std::time::Instant, completed: usize, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Scanned {}/{} domains in {:.2} seconds (~{:.2} domains/sec)",
        completed, total, elapsed_secs, rate
    );
}
