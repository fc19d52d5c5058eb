//! Podium configuration
//!
//! JSON file, every field optional. Loaded once at startup and validated
//! before anything else runs.

mod errors;

pub use errors::{ConfigError, ConfigErrorCode, ConfigResult};

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::notification::SoundSettings;
use crate::observability::Severity;

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON array of handled tickets (optional, default "./tickets.json")
    #[serde(default = "default_tickets_path")]
    pub tickets_path: PathBuf,

    /// JSON array of tickets still in the first stage (optional)
    #[serde(default)]
    pub pending_tickets_path: Option<PathBuf>,

    /// Seconds between leaderboard refreshes (optional, default 60)
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    /// Minutes after which a waiting ticket counts as a strike (default 20)
    #[serde(default = "default_critical_time_minutes")]
    pub critical_time_minutes: u32,

    /// Minimum log severity (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Clear the celebration as soon as sinks have run (default true)
    #[serde(default = "default_auto_clear")]
    pub auto_clear_celebration: bool,

    #[serde(default)]
    pub sounds: SoundSettings,
}

fn default_tickets_path() -> PathBuf {
    PathBuf::from("./tickets.json")
}
fn default_refresh_interval_secs() -> u64 {
    60
}
fn default_critical_time_minutes() -> u32 {
    20
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_auto_clear() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tickets_path: default_tickets_path(),
            pending_tickets_path: None,
            refresh_interval_secs: default_refresh_interval_secs(),
            critical_time_minutes: default_critical_time_minutes(),
            log_level: default_log_level(),
            auto_clear_celebration: default_auto_clear(),
            sounds: SoundSettings::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ConfigError::read(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        Self::from_json(&content)
    }

    /// Load from file, or fall back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate configuration JSON
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| ConfigError::invalid(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.refresh_interval_secs == 0 {
            return Err(ConfigError::invalid("refresh_interval_secs must be > 0"));
        }

        if self.critical_time_minutes == 0 {
            return Err(ConfigError::invalid("critical_time_minutes must be > 0"));
        }

        if !(0.0..=1.0).contains(&self.sounds.volume) {
            return Err(ConfigError::invalid(format!(
                "sounds.volume must be within 0.0..=1.0, got {}",
                self.sounds.volume
            )));
        }

        if Severity::parse(&self.log_level).is_none() {
            return Err(ConfigError::invalid(format!(
                "Invalid log_level: '{}'. Must be one of trace, info, warn, error, fatal.",
                self.log_level
            )));
        }

        Ok(())
    }

    /// Refresh cadence as a `Duration`
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    /// Parsed log level; validated on load
    pub fn severity(&self) -> Severity {
        Severity::parse(&self.log_level).unwrap_or(Severity::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = Config::from_json("{}").unwrap();

        assert_eq!(config.tickets_path, PathBuf::from("./tickets.json"));
        assert_eq!(config.refresh_interval(), Duration::from_secs(60));
        assert_eq!(config.critical_time_minutes, 20);
        assert_eq!(config.severity(), Severity::Info);
        assert!(config.auto_clear_celebration);
        assert_eq!(config.sounds, SoundSettings::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"tickets_path":"/data/t.json","refresh_interval_secs":5,"sounds":{{"podium_sound":"none"}}}}"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.tickets_path, PathBuf::from("/data/t.json"));
        assert_eq!(config.refresh_interval_secs, 5);
        assert_eq!(config.sounds.podium_sound, "none");
        assert_eq!(config.sounds.first_place_sound, "senna");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = Config::load(Path::new("/nonexistent/podium.json")).unwrap_err();
        assert_eq!(err.code(), ConfigErrorCode::Read);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default(Path::new("/nonexistent/podium.json")).unwrap();
        assert_eq!(config.refresh_interval_secs, 60);
    }

    #[test]
    fn test_rejects_zero_interval() {
        let err = Config::from_json(r#"{"refresh_interval_secs":0}"#).unwrap_err();
        assert_eq!(err.code(), ConfigErrorCode::Invalid);
        assert!(err.message().contains("refresh_interval_secs"));
    }

    #[test]
    fn test_rejects_zero_critical_time() {
        assert!(Config::from_json(r#"{"critical_time_minutes":0}"#).is_err());
    }

    #[test]
    fn test_rejects_bad_volume() {
        let err = Config::from_json(r#"{"sounds":{"volume":1.5}}"#).unwrap_err();
        assert!(err.message().contains("volume"));
    }

    #[test]
    fn test_rejects_bad_log_level() {
        let err = Config::from_json(r#"{"log_level":"verbose"}"#).unwrap_err();
        assert!(err.to_string().starts_with("PODIUM_CONFIG_INVALID"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Config::from_json("{not json").unwrap_err();
        assert_eq!(err.code(), ConfigErrorCode::Invalid);
    }
}
