//! Celebration notifications
//!
//! Turns a promotion event into what the consumer should play and show.
//! Audio and toast rendering live outside this crate; sinks receive a fully
//! resolved [`Celebration`] and decide how to present it.

mod announcement;
mod sink;
mod sound;

pub use announcement::{Announcement, ANNOUNCEMENT_DURATION_MS};
pub use sink::{Celebration, CelebrationSink, LogSink, RecordingSink};
pub use sound::{SoundCue, SoundEvent, SoundSettings, SILENT_SOUND};
