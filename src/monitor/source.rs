//! Performance sources
//!
//! A source produces a fresh leaderboard each time it is asked. How it gets
//! the data is its own concern.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use super::errors::{MonitorError, MonitorResult};
use crate::performance::{aggregate, HandledTicket};
use crate::ranking::PerformanceRecord;

/// Supplier of leaderboard snapshots.
pub trait PerformanceSource {
    fn fetch(&mut self) -> MonitorResult<Vec<PerformanceRecord>>;
}

impl<F> PerformanceSource for F
where
    F: FnMut() -> MonitorResult<Vec<PerformanceRecord>>,
{
    fn fetch(&mut self) -> MonitorResult<Vec<PerformanceRecord>> {
        self()
    }
}

/// Reads a JSON array of handled tickets on every fetch and aggregates it.
#[derive(Debug, Clone)]
pub struct TicketFileSource {
    path: PathBuf,
}

impl TicketFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the raw tickets without aggregating.
    pub fn load_tickets(&self) -> MonitorResult<Vec<HandledTicket>> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            MonitorError::SourceUnavailable(format!("{}: {}", self.path.display(), e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            MonitorError::MalformedSnapshot(format!("{}: {}", self.path.display(), e))
        })
    }
}

impl PerformanceSource for TicketFileSource {
    fn fetch(&mut self) -> MonitorResult<Vec<PerformanceRecord>> {
        let tickets = self.load_tickets()?;
        Ok(aggregate(&tickets).iter().map(|row| row.to_record()).collect())
    }
}

/// Replays a fixed sequence of snapshots, then reports empty leaderboards.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    queue: VecDeque<MonitorResult<Vec<PerformanceRecord>>>,
}

impl StaticSource {
    pub fn new(snapshots: Vec<Vec<PerformanceRecord>>) -> Self {
        Self {
            queue: snapshots.into_iter().map(Ok).collect(),
        }
    }

    /// Queue a snapshot.
    pub fn push(&mut self, snapshot: Vec<PerformanceRecord>) {
        self.queue.push_back(Ok(snapshot));
    }

    /// Queue a failing fetch.
    pub fn push_failure(&mut self, error: MonitorError) {
        self.queue.push_back(Err(error));
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl PerformanceSource for StaticSource {
    fn fetch(&mut self) -> MonitorResult<Vec<PerformanceRecord>> {
        self.queue.pop_front().unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const TICKETS: &str = r#"[
        {"agent_id":"1","agent_name":"Ana Silva","created_at":"2024-05-01T09:00:00Z","left_first_stage_at":"2024-05-01T09:02:15Z"},
        {"agent_id":"2","agent_name":"Carlos Oliveira","created_at":"2024-05-01T09:00:00Z","left_first_stage_at":"2024-05-01T09:03:00Z"}
    ]"#;

    #[test]
    fn test_ticket_file_source_aggregates() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(TICKETS.as_bytes()).unwrap();

        let mut source = TicketFileSource::new(file.path());
        let records = source.fetch().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "1");
        assert_eq!(records[0].metric_seconds, 135.0);
        assert_eq!(records[1].metric_seconds, 180.0);
    }

    #[test]
    fn test_ticket_file_source_missing_file() {
        let mut source = TicketFileSource::new("/nonexistent/tickets.json");
        let err = source.fetch().unwrap_err();
        assert_eq!(err.code(), "PODIUM_SOURCE_UNAVAILABLE");
    }

    #[test]
    fn test_ticket_file_source_malformed() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{\"not\":\"an array\"}").unwrap();

        let err = TicketFileSource::new(file.path()).fetch().unwrap_err();
        assert!(matches!(err, MonitorError::MalformedSnapshot(_)));
    }

    #[test]
    fn test_static_source_replays_then_empty() {
        let mut source = StaticSource::new(vec![vec![PerformanceRecord::new("a", "Ana", 1.0)]]);
        source.push_failure(MonitorError::SourceUnavailable("down".into()));

        assert_eq!(source.fetch().unwrap().len(), 1);
        assert!(source.fetch().is_err());
        assert!(source.fetch().unwrap().is_empty());
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn test_closure_source() {
        let mut calls = 0;
        let mut source = || -> MonitorResult<Vec<PerformanceRecord>> {
            calls += 1;
            Ok(vec![PerformanceRecord::new("a", "Ana", 1.0)])
        };

        assert_eq!(PerformanceSource::fetch(&mut source).unwrap().len(), 1);
        drop(source);
        assert_eq!(calls, 1);
    }
}
