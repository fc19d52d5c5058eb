//! Leaderboard records and podium derivation

use serde::{Deserialize, Serialize};

/// Number of places on the podium.
pub const PODIUM_SIZE: usize = 3;

/// One agent's score on the leaderboard.
///
/// `metric_seconds` is the average handling time; lower is better.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub id: String,
    pub display_name: String,
    pub metric_seconds: f64,
}

impl PerformanceRecord {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, metric_seconds: f64) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            metric_seconds,
        }
    }
}

/// A podium place. Derived from a ranking, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodiumEntry {
    pub id: String,
    pub display_name: String,
    /// 1, 2 or 3; always `position + 1`
    pub rank: u8,
}

/// Derive the podium from an unsorted ranking.
///
/// Sort is ascending by `metric_seconds`, stable, and total over `f64`
/// (NaN sorts last), so identical inputs always produce identical podiums.
/// Duplicate ids are kept as-is.
pub fn derive_podium(ranking: &[PerformanceRecord]) -> Vec<PodiumEntry> {
    let mut sorted: Vec<&PerformanceRecord> = ranking.iter().collect();
    sorted.sort_by(|a, b| a.metric_seconds.total_cmp(&b.metric_seconds));

    sorted
        .into_iter()
        .take(PODIUM_SIZE)
        .enumerate()
        .map(|(index, record)| PodiumEntry {
            id: record.id.clone(),
            display_name: record.display_name.clone(),
            rank: index as u8 + 1,
        })
        .collect()
}
