//! Toast text for promotion events

use serde::{Deserialize, Serialize};

use crate::ranking::{first_name, ordinal, PromotionEvent};

/// How long a celebration toast stays on screen.
pub const ANNOUNCEMENT_DURATION_MS: u64 = 6000;

/// A message for the display sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub message: String,
    pub icon: String,
    /// Presentation hint, e.g. `first-place-toast`
    pub style: String,
    pub duration_ms: u64,
}

impl Announcement {
    /// Build the announcement for an event. `NoChange` has none.
    pub fn for_event(event: &PromotionEvent) -> Option<Self> {
        let (message, icon, style) = match event {
            PromotionEvent::NewFirstPlace { display_name, .. } => (
                format!("{} is the new FIRST PLACE!", first_name(display_name)),
                "🏆",
                "first-place-toast",
            ),
            PromotionEvent::EnteredPodium { display_name, rank } => (
                format!(
                    "{} entered the podium! Now in {} place!",
                    first_name(display_name),
                    ordinal(*rank)
                ),
                "🏆",
                "podium-toast",
            ),
            PromotionEvent::ImprovedPodiumRank {
                display_name,
                new_rank,
                ..
            } => (
                format!(
                    "{} moved up to {} place on the podium!",
                    first_name(display_name),
                    ordinal(*new_rank)
                ),
                "🎉",
                "podium-toast",
            ),
            PromotionEvent::NoChange => return None,
        };

        Some(Self {
            message,
            icon: icon.to_string(),
            style: style.to_string(),
            duration_ms: ANNOUNCEMENT_DURATION_MS,
        })
    }
}
