//! Observability for the ranking monitor
//!
//! - Structured logging (JSON, stderr)
//! - Monotonic counters
//! - Typed lifecycle events
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on detection
//! 3. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use podium::observability::{log_event_with_fields, Event, MonitorMetrics};
//!
//! log_event_with_fields(Event::PromotionDetected, &[("subject", "Ana")]);
//!
//! let metrics = MonitorMetrics::new();
//! metrics.increment_promotions();
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsSnapshot, MonitorMetrics};

/// Log a lifecycle event at its own severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
