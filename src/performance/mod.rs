//! Agent performance reporting
//!
//! Builds the leaderboard the ranking detector consumes, plus the overdue
//! ticket report shown alongside it.
//!
//! - Pure functions over ticket snapshots
//! - Deterministic ordering (stable sorts, first-seen grouping)
//! - No I/O; callers load tickets however they like

mod aggregate;
mod duration;
mod strikes;
mod ticket;

pub use aggregate::{aggregate, AgentPerformance};
pub use duration::format_duration;
pub use strikes::{count_strikes, StrikeCount, UNASSIGNED_ID, UNASSIGNED_NAME};
pub use ticket::{HandledTicket, PendingTicket};
