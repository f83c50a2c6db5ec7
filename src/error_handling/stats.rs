//! Scan statistics tracking.
//!
//! Thread-safe counters for the events that happen while scanning a batch of
//! domains.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ScanEvent;

/// Thread-safe scan statistics tracker.
///
/// Every [`ScanEvent`] is initialized to zero on creation, so counters can be
/// incremented from concurrent lookups through a shared `Arc`.
pub struct ScanStats {
    events: HashMap<ScanEvent, AtomicUsize>,
}

impl ScanStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut events = HashMap::new();
        for event in ScanEvent::iter() {
            events.insert(event, AtomicUsize::new(0));
        }
        ScanStats { events }
    }

    /// Increment an event counter.
    pub fn increment(&self, event: ScanEvent) {
        if let Some(counter) = self.events.get(&event) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment counter for {:?} which is not in the map. \
                 This indicates a bug in ScanStats initialization.",
                event
            );
        }
    }

    /// Current count for an event.
    pub fn get(&self, event: ScanEvent) -> usize {
        self.events
            .get(&event)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Logs the non-zero counters as one debug line.
    ///
    /// The operator-facing summary is printed by the presenter; this is the
    /// diagnostic breakdown.
    pub fn log_summary(&self) {
        let counters: Vec<String> = ScanEvent::iter()
            .filter_map(|event| {
                let count = self.get(event);
                (count > 0).then(|| format!("{}: {}", event.label(), count))
            })
            .collect();
        if !counters.is_empty() {
            log::debug!("Scan counters: {}", counters.join(", "));
        }
    }
}

impl Default for ScanStats {
    fn default() -> Self {
        Self::new()
    }
}
