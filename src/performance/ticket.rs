//! Ticket snapshots as delivered by the queue backend

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A ticket that has left the first stage with an agent attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandledTicket {
    pub agent_id: String,
    pub agent_name: String,
    pub created_at: DateTime<Utc>,
    pub left_first_stage_at: DateTime<Utc>,
}

impl HandledTicket {
    /// Seconds between creation and leaving the first stage.
    ///
    /// Negative when the timestamps are inverted; not corrected here.
    pub fn response_seconds(&self) -> f64 {
        (self.left_first_stage_at - self.created_at).num_milliseconds() as f64 / 1000.0
    }
}

/// A ticket still waiting in the first stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingTicket {
    #[serde(default)]
    pub agent_id: Option<String>,
    #[serde(default)]
    pub agent_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_response_seconds() {
        let created = Utc::now();
        let ticket = HandledTicket {
            agent_id: "1".into(),
            agent_name: "Ana".into(),
            created_at: created,
            left_first_stage_at: created + Duration::milliseconds(90_500),
        };
        assert_eq!(ticket.response_seconds(), 90.5);
    }

    #[test]
    fn test_pending_ticket_optional_agent() {
        let ticket: PendingTicket =
            serde_json::from_str(r#"{"created_at":"2024-05-01T10:00:00Z"}"#).unwrap();
        assert!(ticket.agent_id.is_none());
        assert!(ticket.agent_name.is_none());
    }
}
