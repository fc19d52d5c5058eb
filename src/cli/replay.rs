//! Replay session
//!
//! Drives one detector from line-delimited requests, exposing its whole call
//! surface:
//!
//! ```text
//! {"op":"update","ranking":[{"id":"1","display_name":"Ana Silva","metric_seconds":135}]}
//! {"op":"clear_celebration"}
//! {"op":"celebration_state"}
//! ```

use serde::Deserialize;
use serde_json::{json, Value};

use super::errors::{CliError, CliResult};
use crate::notification::{Celebration, SoundSettings};
use crate::observability::{log_event, log_event_with_fields, Event};
use crate::ranking::{PerformanceRecord, RankingTransitionDetector};

/// One replay request
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ReplayRequest {
    Update { ranking: Vec<PerformanceRecord> },
    ClearCelebration,
    CelebrationState,
}

/// Detector plus the settings needed to resolve celebrations.
pub struct ReplaySession {
    detector: RankingTransitionDetector,
    sounds: SoundSettings,
}

impl ReplaySession {
    pub fn new(sounds: SoundSettings) -> Self {
        Self {
            detector: RankingTransitionDetector::new(),
            sounds,
        }
    }

    pub fn detector(&self) -> &RankingTransitionDetector {
        &self.detector
    }

    /// Decode and handle a raw request value.
    pub fn handle_value(&self, request: Value) -> CliResult<Value> {
        let request: ReplayRequest = serde_json::from_value(request)
            .map_err(|e| CliError::invalid_request(format!("Invalid request: {}", e)))?;
        Ok(self.handle(request))
    }

    /// Handle a decoded request and return the response payload.
    pub fn handle(&self, request: ReplayRequest) -> Value {
        match request {
            ReplayRequest::Update { ranking } => {
                let event = self.detector.update(&ranking);

                if event.is_change() {
                    log_event_with_fields(
                        Event::PromotionDetected,
                        &[
                            ("type", event.event_name()),
                            ("subject", event.display_name().unwrap_or_default()),
                        ],
                    );
                } else {
                    log_event(Event::PodiumUnchanged);
                }

                let celebration = Celebration::resolve(&event, &self.sounds);
                json!({
                    "event": event,
                    "celebration": self.detector.celebration_state(),
                    "cue": celebration.as_ref().and_then(|c| c.cue.clone()),
                    "announcement": celebration.map(|c| c.announcement),
                })
            }
            ReplayRequest::ClearCelebration => {
                self.detector.clear_celebration();
                log_event(Event::CelebrationCleared);
                json!({ "celebration": self.detector.celebration_state() })
            }
            ReplayRequest::CelebrationState => {
                json!({ "celebration": self.detector.celebration_state() })
            }
        }
    }
}
