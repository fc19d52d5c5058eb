//! Ranking monitor counters
//!
//! - Counters only
//! - Monotonic increase
//! - Reset only on process start
//! - Thread-safe but lock-free

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters kept by the ranking monitor.
///
/// Uses Relaxed ordering; counters carry no synchronization duties.
#[derive(Debug, Default)]
pub struct MonitorMetrics {
    refreshes: AtomicU64,
    promotions: AtomicU64,
    first_place_changes: AtomicU64,
    skipped_busy: AtomicU64,
    empty_snapshots: AtomicU64,
    source_failures: AtomicU64,
}

impl MonitorMetrics {
    /// Create a new registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_refreshes(&self) {
        self.refreshes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_promotions(&self) {
        self.promotions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_first_place_changes(&self) {
        self.first_place_changes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_skipped_busy(&self) {
        self.skipped_busy.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_empty_snapshots(&self) {
        self.empty_snapshots.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_source_failures(&self) {
        self.source_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all counters as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            refreshes: self.refreshes.load(Ordering::Relaxed),
            promotions: self.promotions.load(Ordering::Relaxed),
            first_place_changes: self.first_place_changes.load(Ordering::Relaxed),
            skipped_busy: self.skipped_busy.load(Ordering::Relaxed),
            empty_snapshots: self.empty_snapshots.load(Ordering::Relaxed),
            source_failures: self.source_failures.load(Ordering::Relaxed),
        }
    }

    /// Current counters as a JSON object
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }
}

/// A point-in-time snapshot of all counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub refreshes: u64,
    pub promotions: u64,
    pub first_place_changes: u64,
    pub skipped_busy: u64,
    pub empty_snapshots: u64,
    pub source_failures: u64,
}
