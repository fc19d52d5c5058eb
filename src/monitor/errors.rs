//! # Monitor Errors

use thiserror::Error;

/// Result type for monitor operations
pub type MonitorResult<T> = Result<T, MonitorError>;

/// Errors raised while producing a leaderboard snapshot.
///
/// None of these reach the detector: a failed refresh leaves the retained
/// podium untouched and the next tick tries again.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MonitorError {
    /// Source could not be reached or read
    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    /// Source answered with something that is not a snapshot
    #[error("Malformed snapshot: {0}")]
    MalformedSnapshot(String),
}

impl MonitorError {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::SourceUnavailable(_) => "PODIUM_SOURCE_UNAVAILABLE",
            Self::MalformedSnapshot(_) => "PODIUM_MALFORMED_SNAPSHOT",
        }
    }
}
