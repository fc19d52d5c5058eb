//! Promotion events and celebration state
//!
//! Events DESCRIBE a podium change; they never decide what gets played or
//! shown. That is left to the consumer.

use serde::{Deserialize, Serialize};

use super::names::first_name;

/// The most significant podium change observed by one update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PromotionEvent {
    /// ranking.podium.new_first_place
    /// Someone took first place. `previous_first_place_display_name` is
    /// absent when nobody held first place before.
    NewFirstPlace {
        display_name: String,
        previous_first_place_display_name: Option<String>,
    },

    /// ranking.podium.entered
    /// An agent not on the previous podium now holds 2nd or 3rd.
    EnteredPodium { display_name: String, rank: u8 },

    /// ranking.podium.improved
    /// An agent already on the podium moved to a better place.
    ImprovedPodiumRank {
        display_name: String,
        old_rank: u8,
        new_rank: u8,
    },

    /// ranking.podium.unchanged
    NoChange,
}

impl PromotionEvent {
    /// Get the event name for logging.
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::NewFirstPlace { .. } => "ranking.podium.new_first_place",
            Self::EnteredPodium { .. } => "ranking.podium.entered",
            Self::ImprovedPodiumRank { .. } => "ranking.podium.improved",
            Self::NoChange => "ranking.podium.unchanged",
        }
    }

    /// True for every variant except `NoChange`.
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::NoChange)
    }

    /// Display name of the agent being celebrated.
    pub fn display_name(&self) -> Option<&str> {
        match self {
            Self::NewFirstPlace { display_name, .. }
            | Self::EnteredPodium { display_name, .. }
            | Self::ImprovedPodiumRank { display_name, .. } => Some(display_name),
            Self::NoChange => None,
        }
    }

    /// Which celebration this event calls for, if any.
    pub fn celebration_kind(&self) -> Option<CelebrationKind> {
        match self {
            Self::NewFirstPlace { .. } => Some(CelebrationKind::FirstPlace),
            Self::EnteredPodium { .. } | Self::ImprovedPodiumRank { .. } => {
                Some(CelebrationKind::Podium)
            }
            Self::NoChange => None,
        }
    }
}

/// Celebration flavour; selects the sound and animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CelebrationKind {
    #[default]
    Podium,
    FirstPlace,
}

impl CelebrationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Podium => "podium",
            Self::FirstPlace => "first-place",
        }
    }
}

/// Transient signal telling the consumer to celebrate.
///
/// Set by a detection pass, cleared only by the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CelebrationState {
    pub active: bool,
    pub kind: CelebrationKind,
    pub subject_name: Option<String>,
}

impl CelebrationState {
    /// Celebration for `event`, or `None` for `NoChange`.
    pub fn for_event(event: &PromotionEvent) -> Option<Self> {
        let kind = event.celebration_kind()?;
        let name = event.display_name()?;
        Some(Self {
            active: true,
            kind,
            subject_name: Some(first_name(name)),
        })
    }

    /// Deactivate and drop the subject. `kind` is kept.
    pub fn clear(&mut self) {
        self.active = false;
        self.subject_name = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        let first = PromotionEvent::NewFirstPlace {
            display_name: "Ana Silva".into(),
            previous_first_place_display_name: None,
        };
        assert_eq!(first.event_name(), "ranking.podium.new_first_place");
        assert_eq!(PromotionEvent::NoChange.event_name(), "ranking.podium.unchanged");
    }

    #[test]
    fn test_celebration_kind_mapping() {
        let entered = PromotionEvent::EnteredPodium {
            display_name: "Pedro".into(),
            rank: 3,
        };
        let improved = PromotionEvent::ImprovedPodiumRank {
            display_name: "Juliana".into(),
            old_rank: 3,
            new_rank: 2,
        };
        let first = PromotionEvent::NewFirstPlace {
            display_name: "Ana".into(),
            previous_first_place_display_name: Some("Carlos".into()),
        };

        assert_eq!(entered.celebration_kind(), Some(CelebrationKind::Podium));
        assert_eq!(improved.celebration_kind(), Some(CelebrationKind::Podium));
        assert_eq!(first.celebration_kind(), Some(CelebrationKind::FirstPlace));
        assert_eq!(PromotionEvent::NoChange.celebration_kind(), None);
        assert!(!PromotionEvent::NoChange.is_change());
    }

    #[test]
    fn test_celebration_for_event_uses_first_name() {
        let event = PromotionEvent::EnteredPodium {
            display_name: "Mariana Santos".into(),
            rank: 2,
        };
        let state = CelebrationState::for_event(&event).unwrap();

        assert!(state.active);
        assert_eq!(state.kind, CelebrationKind::Podium);
        assert_eq!(state.subject_name.as_deref(), Some("Mariana"));
        assert!(CelebrationState::for_event(&PromotionEvent::NoChange).is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut state = CelebrationState::default();
        state.clear();
        state.clear();
        assert!(!state.active);
        assert!(state.subject_name.is_none());
    }

    #[test]
    fn test_event_json_shape() {
        let event = PromotionEvent::ImprovedPodiumRank {
            display_name: "Carlos".into(),
            old_rank: 3,
            new_rank: 2,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "improved_podium_rank");
        assert_eq!(json["old_rank"], 3);

        let kind = serde_json::to_value(CelebrationKind::FirstPlace).unwrap();
        assert_eq!(kind, "first-place");
    }
}
