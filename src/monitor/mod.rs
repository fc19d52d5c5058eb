//! Ranking refresh loop
//!
//! Wires a performance source, one shared detector and any number of
//! celebration sinks together. The detector instance is injected, never
//! global.

mod controller;
mod errors;
mod source;

pub use controller::RankingMonitor;
pub use errors::{MonitorError, MonitorResult};
pub use source::{PerformanceSource, StaticSource, TicketFileSource};
