//! Observable events
//!
//! Every log line carries one of these names. Events are explicit and typed.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Process startup
    Startup,
    /// Configuration loaded
    ConfigLoaded,
    /// Watch loop stopped
    ShutdownComplete,
    /// Ctrl-C handler could not be installed; watch runs until killed
    ShutdownSignalFailed,

    // Ranking
    /// A refresh pass begins
    RankingRefreshBegin,
    /// Detector accepted a new snapshot
    RankingUpdated,
    /// Snapshot produced no celebration
    PodiumUnchanged,
    /// Snapshot produced a promotion event
    PromotionDetected,
    /// Update dropped by the single-flight guard
    UpdateSkippedBusy,
    /// Source returned no agents; detector not called
    EmptySnapshot,
    /// Source could not produce a snapshot
    SourceFailed,

    // Celebration
    /// Celebration handed to a sink
    CelebrationDispatched,
    /// Consumer cleared the celebration
    CelebrationCleared,

    // Queue
    /// Pending tickets past the critical time
    OverdueTickets,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::Startup => "PODIUM_STARTUP",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",
            Event::ShutdownSignalFailed => "SHUTDOWN_SIGNAL_FAILED",

            Event::RankingRefreshBegin => "RANKING_REFRESH_BEGIN",
            Event::RankingUpdated => "RANKING_UPDATED",
            Event::PodiumUnchanged => "PODIUM_UNCHANGED",
            Event::PromotionDetected => "PROMOTION_DETECTED",
            Event::UpdateSkippedBusy => "UPDATE_SKIPPED_BUSY",
            Event::EmptySnapshot => "EMPTY_SNAPSHOT",
            Event::SourceFailed => "SOURCE_FAILED",

            Event::CelebrationDispatched => "CELEBRATION_DISPATCHED",
            Event::CelebrationCleared => "CELEBRATION_CLEARED",

            Event::OverdueTickets => "OVERDUE_TICKETS",
        }
    }

    /// Severity this event is logged at.
    pub fn severity(&self) -> super::Severity {
        use super::Severity;
        match self {
            Event::SourceFailed | Event::ShutdownSignalFailed => Severity::Error,
            Event::UpdateSkippedBusy | Event::EmptySnapshot | Event::OverdueTickets => {
                Severity::Warn
            }
            Event::RankingRefreshBegin | Event::PodiumUnchanged | Event::RankingUpdated => {
                Severity::Trace
            }
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
