//! Celebration sinks
//!
//! A sink is the consumer side of a detection: it plays the cue, shows the
//! announcement, and is done. Sink failures are the sink's own business and
//! never reach the detector.

use serde::{Deserialize, Serialize};

use super::announcement::Announcement;
use super::sound::{SoundCue, SoundEvent, SoundSettings};
use crate::observability::{log_event_with_fields, Event};
use crate::ranking::{first_name, CelebrationKind, PromotionEvent};

/// Everything a consumer needs to present one promotion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Celebration {
    pub event: PromotionEvent,
    pub kind: CelebrationKind,
    pub subject_name: String,
    /// `None` when the sound for this kind is silenced
    pub cue: Option<SoundCue>,
    pub announcement: Announcement,
}

impl Celebration {
    /// Resolve the celebration for `event`. `NoChange` yields `None`.
    pub fn resolve(event: &PromotionEvent, sounds: &SoundSettings) -> Option<Self> {
        let kind = event.celebration_kind()?;
        let announcement = Announcement::for_event(event)?;
        let subject_name = first_name(event.display_name()?);

        Some(Self {
            event: event.clone(),
            kind,
            subject_name,
            cue: sounds.resolve(SoundEvent::for_kind(kind), None),
            announcement,
        })
    }
}

/// Consumer of resolved celebrations.
pub trait CelebrationSink {
    fn celebrate(&mut self, celebration: &Celebration);
}

/// Writes each celebration as a structured log line.
#[derive(Debug, Default)]
pub struct LogSink;

impl CelebrationSink for LogSink {
    fn celebrate(&mut self, celebration: &Celebration) {
        let sound = celebration
            .cue
            .as_ref()
            .map(|c| c.sound.as_str())
            .unwrap_or("none");

        log_event_with_fields(
            Event::CelebrationDispatched,
            &[
                ("kind", celebration.kind.as_str()),
                ("message", celebration.announcement.message.as_str()),
                ("sound", sound),
                ("subject", celebration.subject_name.as_str()),
            ],
        );
    }
}

/// Keeps every celebration it receives.
#[derive(Debug, Default)]
pub struct RecordingSink {
    celebrations: Vec<Celebration>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn celebrations(&self) -> &[Celebration] {
        &self.celebrations
    }

    /// Drain everything received so far.
    pub fn take(&mut self) -> Vec<Celebration> {
        std::mem::take(&mut self.celebrations)
    }
}

impl CelebrationSink for RecordingSink {
    fn celebrate(&mut self, celebration: &Celebration) {
        self.celebrations.push(celebration.clone());
    }
}
