//! podium - leaderboard podium watcher for a ticket queue
//!
//! Detects when agents climb onto (or up) the handling-time podium and
//! tells the consumer what to celebrate.
//!
//! - `ranking`: the transition detector and its event/celebration types
//! - `performance`: leaderboard aggregation and overdue ticket counts
//! - `notification`: sound cues, announcements and sinks
//! - `monitor`: periodic refresh around one shared detector
//! - `observability`, `config`, `cli`: ambient plumbing

pub mod cli;
pub mod config;
pub mod monitor;
pub mod notification;
pub mod observability;
pub mod performance;
pub mod ranking;
