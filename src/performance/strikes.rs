//! Overdue ticket ("strike") counts per agent

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::ticket::PendingTicket;

/// Id used for tickets with no agent assigned.
pub const UNASSIGNED_ID: &str = "unassigned";

/// Display name used for tickets with no agent assigned.
pub const UNASSIGNED_NAME: &str = "Unassigned";

/// Number of overdue tickets held by one agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrikeCount {
    pub id: String,
    pub display_name: String,
    pub overdue_tickets: u64,
}

/// Count tickets waiting at least `critical_minutes`, per agent.
///
/// Sorted by count descending; ties keep first-seen order.
pub fn count_strikes(
    pending: &[PendingTicket],
    critical_minutes: u32,
    now: DateTime<Utc>,
) -> Vec<StrikeCount> {
    let critical = Duration::minutes(i64::from(critical_minutes));
    let mut strikes: Vec<StrikeCount> = Vec::new();

    for ticket in pending.iter().filter(|t| now - t.created_at >= critical) {
        let id = ticket.agent_id.as_deref().unwrap_or(UNASSIGNED_ID);

        match strikes.iter_mut().find(|s| s.id == id) {
            Some(entry) => entry.overdue_tickets += 1,
            None => strikes.push(StrikeCount {
                id: id.to_string(),
                display_name: ticket
                    .agent_name
                    .clone()
                    .unwrap_or_else(|| UNASSIGNED_NAME.to_string()),
                overdue_tickets: 1,
            }),
        }
    }

    strikes.sort_by(|a, b| b.overdue_tickets.cmp(&a.overdue_tickets));
    strikes
}
