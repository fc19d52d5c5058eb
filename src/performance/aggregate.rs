//! Per-agent average handling time

use serde::{Deserialize, Serialize};

use super::duration::format_duration;
use super::ticket::HandledTicket;
use crate::ranking::PerformanceRecord;

/// Leaderboard row for one agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentPerformance {
    pub id: String,
    pub display_name: String,
    pub tickets_handled: u64,
    /// Average response time, rounded to whole seconds
    pub average_seconds: u64,
    pub average_formatted: String,
}

impl AgentPerformance {
    /// Convert to the record the ranking detector consumes.
    pub fn to_record(&self) -> PerformanceRecord {
        PerformanceRecord::new(
            self.id.clone(),
            self.display_name.clone(),
            self.average_seconds as f64,
        )
    }
}

struct Accumulator {
    id: String,
    display_name: String,
    total_seconds: f64,
    count: u64,
}

/// Group handled tickets by agent and rank them fastest first.
///
/// Agents appear in first-seen order before the stable sort, so ties keep
/// the order in which the agents first show up in `tickets`.
pub fn aggregate(tickets: &[HandledTicket]) -> Vec<AgentPerformance> {
    let mut agents: Vec<Accumulator> = Vec::new();

    for ticket in tickets {
        let seconds = ticket.response_seconds();
        match agents.iter_mut().find(|a| a.id == ticket.agent_id) {
            Some(acc) => {
                acc.total_seconds += seconds;
                acc.count += 1;
            }
            None => agents.push(Accumulator {
                id: ticket.agent_id.clone(),
                display_name: ticket.agent_name.clone(),
                total_seconds: seconds,
                count: 1,
            }),
        }
    }

    let mut rows: Vec<AgentPerformance> = agents
        .into_iter()
        .map(|acc| {
            // negative averages come from inverted timestamps
            let average_seconds = (acc.total_seconds / acc.count as f64).round().max(0.0) as u64;
            AgentPerformance {
                id: acc.id,
                display_name: acc.display_name,
                tickets_handled: acc.count,
                average_seconds,
                average_formatted: format_duration(average_seconds),
            }
        })
        .collect();

    rows.sort_by_key(|row| row.average_seconds);
    rows
}
