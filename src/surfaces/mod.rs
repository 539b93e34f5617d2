//! Notification surfaces module
//!
//! The countdown core reports to three collaborators: an alert surface, a
//! haptic surface and an audio surface. All of them are best effort and are
//! called outside the timer's state lock.

pub mod alerts;
pub mod audio;
pub mod haptics;

#[cfg(test)]
pub(crate) mod recording;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

// Re-export main types
pub use alerts::{AlertBoard, AlertRecord};
pub use audio::CommandAudio;
pub use haptics::LoggingHaptics;

/// Strength of a haptic cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HapticIntensity {
    Light,
    Medium,
    Success,
}

/// Opaque token for an alarm an [`AudioSurface`] has started.
/// The surface keeps whatever resource backs it until the token is released.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct AlarmHandle(u64);

impl AlarmHandle {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Presents a user-dismissible notice
pub trait AlertSurface: Send + Sync {
    fn show(&self, title: &str, message: &str);
}

/// Best-effort tactile feedback
pub trait HapticSurface: Send + Sync {
    fn pulse(&self, intensity: HapticIntensity);
}

/// Best-effort alarm playback
pub trait AudioSurface: Send + Sync {
    /// Start playing the alarm and hand back the loaded resource
    fn play_alarm(&self) -> Result<AlarmHandle, String>;

    /// Stop and unload a previously played alarm
    fn release(&self, handle: AlarmHandle);
}

/// The set of collaborators a timer reports to
#[derive(Clone)]
pub struct Surfaces {
    pub alerts: Arc<dyn AlertSurface>,
    pub haptics: Arc<dyn HapticSurface>,
    pub audio: Arc<dyn AudioSurface>,
}

impl Surfaces {
    pub fn new(
        alerts: Arc<dyn AlertSurface>,
        haptics: Arc<dyn HapticSurface>,
        audio: Arc<dyn AudioSurface>,
    ) -> Self {
        Self { alerts, haptics, audio }
    }
}

impl std::fmt::Debug for Surfaces {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surfaces").finish_non_exhaustive()
    }
}
