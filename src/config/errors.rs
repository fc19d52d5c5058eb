//! Configuration error types
//!
//! Configuration errors are fatal at startup; nothing runs on a bad config.

use std::fmt;

/// Configuration error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorCode {
    /// File could not be read
    Read,
    /// File read but content rejected
    Invalid,
}

impl ConfigErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Read => "PODIUM_CONFIG_READ",
            Self::Invalid => "PODIUM_CONFIG_INVALID",
        }
    }
}

/// Configuration error
#[derive(Debug, Clone)]
pub struct ConfigError {
    code: ConfigErrorCode,
    message: String,
}

impl ConfigError {
    pub fn new(code: ConfigErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// File could not be read
    pub fn read(msg: impl Into<String>) -> Self {
        Self::new(ConfigErrorCode::Read, msg)
    }

    /// Content rejected
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::new(ConfigErrorCode::Invalid, msg)
    }

    pub fn code(&self) -> ConfigErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;
