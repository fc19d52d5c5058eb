//! Sound selection per event type

use serde::{Deserialize, Serialize};

use crate::ranking::CelebrationKind;

/// Sound name meaning "do not play anything".
pub const SILENT_SOUND: &str = "none";

/// Events that can trigger a sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SoundEvent {
    /// New ticket arrived
    Notification,
    /// Ticket over the critical time
    Alert,
    Podium,
    FirstPlace,
}

impl SoundEvent {
    pub fn for_kind(kind: CelebrationKind) -> Self {
        match kind {
            CelebrationKind::Podium => Self::Podium,
            CelebrationKind::FirstPlace => Self::FirstPlace,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Notification => "notification",
            Self::Alert => "alert",
            Self::Podium => "podium",
            Self::FirstPlace => "first-place",
        }
    }
}

/// A sound to play, fully resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundCue {
    pub event: SoundEvent,
    pub sound: String,
    /// 0.0 ..= 1.0
    pub volume: f32,
}

/// Configured sound per event type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundSettings {
    #[serde(default = "default_notification_sound")]
    pub notification_sound: String,
    #[serde(default = "default_alert_sound")]
    pub alert_sound: String,
    #[serde(default = "default_podium_sound")]
    pub podium_sound: String,
    #[serde(default = "default_first_place_sound")]
    pub first_place_sound: String,
    #[serde(default = "default_volume")]
    pub volume: f32,
}

fn default_notification_sound() -> String {
    "notificacao".to_string()
}
fn default_alert_sound() -> String {
    "sireneindustrial".to_string()
}
fn default_podium_sound() -> String {
    "cashregister".to_string()
}
fn default_first_place_sound() -> String {
    "senna".to_string()
}
fn default_volume() -> f32 {
    0.5
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            notification_sound: default_notification_sound(),
            alert_sound: default_alert_sound(),
            podium_sound: default_podium_sound(),
            first_place_sound: default_first_place_sound(),
            volume: default_volume(),
        }
    }
}

impl SoundSettings {
    /// Configured sound name for an event.
    pub fn sound_for(&self, event: SoundEvent) -> &str {
        match event {
            SoundEvent::Notification => &self.notification_sound,
            SoundEvent::Alert => &self.alert_sound,
            SoundEvent::Podium => &self.podium_sound,
            SoundEvent::FirstPlace => &self.first_place_sound,
        }
    }

    /// Resolve what to play for `event`.
    ///
    /// Returns `None` when the event is silenced (`"none"` or empty).
    /// `volume_override` wins over the configured volume; both are clamped
    /// to `[0, 1]`.
    pub fn resolve(&self, event: SoundEvent, volume_override: Option<f32>) -> Option<SoundCue> {
        let sound = self.sound_for(event).trim();
        if sound.is_empty() || sound == SILENT_SOUND {
            return None;
        }

        let volume = volume_override.unwrap_or(self.volume);
        let volume = if volume.is_nan() { 0.0 } else { volume.clamp(0.0, 1.0) };

        Some(SoundCue {
            event,
            sound: sound.to_string(),
            volume,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_to_event() {
        assert_eq!(SoundEvent::for_kind(CelebrationKind::Podium), SoundEvent::Podium);
        assert_eq!(SoundEvent::for_kind(CelebrationKind::FirstPlace), SoundEvent::FirstPlace);
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = SoundSettings::default();

        let cue = settings.resolve(SoundEvent::FirstPlace, None).unwrap();
        assert_eq!(cue.sound, "senna");
        assert_eq!(cue.volume, 0.5);

        let cue = settings.resolve(SoundEvent::Podium, None).unwrap();
        assert_eq!(cue.sound, "cashregister");
    }

    #[test]
    fn test_resolve_none_is_silent() {
        let settings = SoundSettings {
            podium_sound: "none".into(),
            alert_sound: "".into(),
            ..SoundSettings::default()
        };

        assert!(settings.resolve(SoundEvent::Podium, None).is_none());
        assert!(settings.resolve(SoundEvent::Alert, None).is_none());
        assert!(settings.resolve(SoundEvent::FirstPlace, None).is_some());
    }

    #[test]
    fn test_resolve_volume_override_and_clamp() {
        let settings = SoundSettings::default();

        assert_eq!(settings.resolve(SoundEvent::Alert, Some(0.8)).unwrap().volume, 0.8);
        assert_eq!(settings.resolve(SoundEvent::Alert, Some(3.0)).unwrap().volume, 1.0);
        assert_eq!(settings.resolve(SoundEvent::Alert, Some(-1.0)).unwrap().volume, 0.0);
    }

    #[test]
    fn test_settings_json_defaults() {
        let settings: SoundSettings = serde_json::from_str(r#"{"podium_sound":"bell"}"#).unwrap();
        assert_eq!(settings.podium_sound, "bell");
        assert_eq!(settings.first_place_sound, "senna");
        assert_eq!(settings.volume, 0.5);
    }
}
