//! Ranking Transition Subsystem
//!
//! Watches the agent leaderboard and decides when the podium changed in a
//! way worth celebrating.
//!
//! - The podium is the top 3 agents by ascending handling time
//! - At most one promotion event per update
//! - A first-place change always wins over any other change
//! - Regressions are never reported
//! - Celebration state is cleared by the consumer, never by a timer
//! - Concurrent updates are dropped, not queued

mod detector;
mod event;
mod names;
mod record;

pub use detector::{detect_transition, RankingTransitionDetector};
pub use event::{CelebrationKind, CelebrationState, PromotionEvent};
pub use names::{first_name, ordinal};
pub use record::{derive_podium, PerformanceRecord, PodiumEntry, PODIUM_SIZE};
