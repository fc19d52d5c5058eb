//! Monitor Refresh Tests
//!
//! End-to-end passes from a ticket file through aggregation, detection and
//! celebration dispatch.

use std::fs;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use podium::monitor::{MonitorError, RankingMonitor, StaticSource, TicketFileSource};
use podium::notification::{Celebration, CelebrationSink, SoundSettings};
use podium::ranking::{CelebrationKind, PerformanceRecord, PromotionEvent, RankingTransitionDetector};
use tempfile::TempDir;

#[derive(Clone, Default)]
struct Collected(Arc<Mutex<Vec<Celebration>>>);

impl Collected {
    fn all(&self) -> Vec<Celebration> {
        self.0.lock().unwrap().clone()
    }
}

impl CelebrationSink for Collected {
    fn celebrate(&mut self, celebration: &Celebration) {
        self.0.lock().unwrap().push(celebration.clone());
    }
}

fn ticket(agent: &str, name: &str, handled_secs: u32) -> serde_json::Value {
    let minutes = handled_secs / 60;
    let seconds = handled_secs % 60;
    serde_json::json!({
        "agent_id": agent,
        "agent_name": name,
        "created_at": "2024-05-01T09:00:00Z",
        "left_first_stage_at": format!("2024-05-01T09:{:02}:{:02}Z", minutes, seconds),
    })
}

fn write_tickets(dir: &TempDir, tickets: &[serde_json::Value]) -> std::path::PathBuf {
    let path = dir.path().join("tickets.json");
    fs::write(&path, serde_json::to_string(tickets).unwrap()).unwrap();
    path
}

/// The leaderboard file changes between refreshes; each change is picked up.
#[test]
fn test_file_backed_refresh_cycle() {
    let dir = TempDir::new().unwrap();
    let path = write_tickets(
        &dir,
        &[
            ticket("1", "Ana Silva", 135),
            ticket("2", "Carlos Oliveira", 180),
            ticket("3", "Mariana Santos", 210),
            ticket("4", "Pedro Costa", 250),
        ],
    );

    let collected = Collected::default();
    let mut monitor = RankingMonitor::new(
        Arc::new(RankingTransitionDetector::new()),
        TicketFileSource::new(&path),
        SoundSettings::default(),
    );
    monitor.add_sink(Box::new(collected.clone()));

    // Startup: Ana takes first
    let event = monitor.refresh().unwrap();
    assert!(matches!(event, PromotionEvent::NewFirstPlace { .. }));

    // Unchanged file: quiet
    assert_eq!(monitor.refresh().unwrap(), PromotionEvent::NoChange);

    // Pedro gets fast and passes Mariana and Carlos
    write_tickets(
        &dir,
        &[
            ticket("1", "Ana Silva", 135),
            ticket("2", "Carlos Oliveira", 180),
            ticket("3", "Mariana Santos", 210),
            ticket("4", "Pedro Costa", 150),
        ],
    );
    let event = monitor.refresh().unwrap();
    assert_eq!(
        event,
        PromotionEvent::EnteredPodium {
            display_name: "Pedro Costa".into(),
            rank: 2,
        }
    );

    let celebrations = collected.all();
    assert_eq!(celebrations.len(), 2);
    assert_eq!(celebrations[0].kind, CelebrationKind::FirstPlace);
    assert_eq!(celebrations[1].kind, CelebrationKind::Podium);
    assert_eq!(
        celebrations[1].announcement.message,
        "Pedro entered the podium! Now in 2nd place!"
    );
    assert_eq!(celebrations[1].cue.as_ref().unwrap().sound, "cashregister");

    let metrics = monitor.metrics();
    assert_eq!(metrics.refreshes, 3);
    assert_eq!(metrics.promotions, 2);
    assert_eq!(metrics.first_place_changes, 1);
}

/// A missing file fails the refresh without touching the detector.
#[test]
fn test_missing_file_leaves_detector_alone() {
    let dir = TempDir::new().unwrap();
    let detector = Arc::new(RankingTransitionDetector::new());
    let mut monitor = RankingMonitor::new(
        Arc::clone(&detector),
        TicketFileSource::new(dir.path().join("absent.json")),
        SoundSettings::default(),
    );

    let err = monitor.refresh().unwrap_err();
    assert!(matches!(err, MonitorError::SourceUnavailable(_)));
    assert!(detector.retained_podium().is_empty());
    assert_eq!(monitor.metrics().source_failures, 1);
}

/// Silenced sounds still produce an announcement.
#[test]
fn test_silenced_first_place_sound() {
    let sounds = SoundSettings {
        first_place_sound: "none".into(),
        ..SoundSettings::default()
    };
    let collected = Collected::default();
    let mut monitor = RankingMonitor::new(
        Arc::new(RankingTransitionDetector::new()),
        StaticSource::new(vec![vec![PerformanceRecord::new("1", "Ana Silva", 135.0)]]),
        sounds,
    );
    monitor.add_sink(Box::new(collected.clone()));

    monitor.refresh().unwrap();

    let celebrations = collected.all();
    assert_eq!(celebrations.len(), 1);
    assert!(celebrations[0].cue.is_none());
    assert_eq!(celebrations[0].announcement.message, "Ana is the new FIRST PLACE!");
}

/// The timer loop keeps going after a failed refresh.
#[tokio::test(start_paused = true)]
async fn test_run_survives_source_failure() {
    let mut source = StaticSource::default();
    source.push_failure(MonitorError::SourceUnavailable("db down".into()));
    source.push(vec![PerformanceRecord::new("1", "Ana Silva", 135.0)]);

    let collected = Collected::default();
    let mut monitor = RankingMonitor::new(
        Arc::new(RankingTransitionDetector::new()),
        source,
        SoundSettings::default(),
    );
    monitor.add_sink(Box::new(collected.clone()));

    monitor
        .run(
            Duration::from_secs(60),
            tokio::time::sleep(Duration::from_secs(61)),
        )
        .await;

    let metrics = monitor.metrics();
    assert_eq!(metrics.refreshes, 2);
    assert_eq!(metrics.source_failures, 1);
    assert_eq!(collected.all().len(), 1);
}
