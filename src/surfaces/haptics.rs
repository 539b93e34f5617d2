//! Haptic surface for hosts without a vibration motor

use tracing::debug;

use super::{HapticIntensity, HapticSurface};

/// Records haptic cues in the debug log and otherwise skips them
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingHaptics;

impl HapticSurface for LoggingHaptics {
    fn pulse(&self, intensity: HapticIntensity) {
        debug!("Haptic pulse skipped (no haptic hardware): {:?}", intensity);
    }
}
