//! Alarm playback through an external audio player

use std::{
    collections::HashMap,
    io::Write,
    path::PathBuf,
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex, PoisonError,
    },
};

use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

use super::{AlarmHandle, AudioSurface};

/// Audio surface that runs an audio player on a sound file, or rings the
/// terminal bell when no sound file is configured.
///
/// Player processes stay here, keyed by alarm id, until released. Any still
/// running when the surface is dropped are killed.
#[derive(Debug)]
pub struct CommandAudio {
    player: String,
    sound: Option<PathBuf>,
    next_id: AtomicU64,
    players: Mutex<HashMap<u64, Child>>,
}

impl CommandAudio {
    pub fn new(player: impl Into<String>, sound: Option<PathBuf>) -> Self {
        Self {
            player: player.into(),
            sound,
            next_id: AtomicU64::new(1),
            players: Mutex::new(HashMap::new()),
        }
    }

    /// Number of player processes not yet released
    pub fn active_players(&self) -> usize {
        self.players
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn ring_bell() -> Result<(), String> {
        let mut stdout = std::io::stdout();
        stdout
            .write_all(b"\x07")
            .and_then(|_| stdout.flush())
            .map_err(|e| format!("Failed to ring terminal bell: {}", e))
    }
}

impl AudioSurface for CommandAudio {
    fn play_alarm(&self) -> Result<AlarmHandle, String> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        let Some(sound) = &self.sound else {
            debug!("No alarm sound configured, ringing terminal bell");
            Self::ring_bell()?;
            return Ok(AlarmHandle::new(id));
        };

        // Child processes are reaped by the runtime, so one must be running
        tokio::runtime::Handle::try_current()
            .map_err(|e| format!("Cannot spawn {} outside a tokio runtime: {}", self.player, e))?;

        let child = Command::new(&self.player)
            .arg(sound)
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| format!("Failed to execute {}: {}", self.player, e))?;

        info!("Playing alarm {} with {} ({})", id, self.player, sound.display());
        self.players
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, child);
        Ok(AlarmHandle::new(id))
    }

    fn release(&self, handle: AlarmHandle) {
        let player = self
            .players
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&handle.id());
        let Some(mut player) = player else {
            debug!("Released alarm {} (no player process)", handle.id());
            return;
        };
        match player.try_wait() {
            Ok(Some(status)) => debug!("Alarm {} already finished ({})", handle.id(), status),
            _ => {
                if let Err(e) = player.start_kill() {
                    warn!("Failed to stop alarm {}: {}", handle.id(), e);
                } else {
                    debug!("Stopped alarm {}", handle.id());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_player_is_reported_not_fatal() {
        let audio = CommandAudio::new(
            "egg-timer-test-player-that-does-not-exist",
            Some(PathBuf::from("alarm.wav")),
        );
        let err = audio.play_alarm().unwrap_err();
        assert!(err.contains("Failed to execute"));
        assert_eq!(audio.active_players(), 0);
    }

    #[test]
    fn spawning_needs_a_runtime() {
        let audio = CommandAudio::new("paplay", Some(PathBuf::from("alarm.wav")));
        let err = audio.play_alarm().unwrap_err();
        assert!(err.contains("outside a tokio runtime"));
    }

    #[test]
    fn bell_alarms_hold_no_process() {
        let audio = CommandAudio::new("paplay", None);
        let first = audio.play_alarm().unwrap();
        let second = audio.play_alarm().unwrap();
        assert_ne!(first.id(), second.id());
        assert_eq!(audio.active_players(), 0);
        audio.release(first);
        audio.release(second);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn release_stops_the_player() {
        // `sleep` stands in for a player that is still playing
        let audio = CommandAudio::new("sleep", Some(PathBuf::from("30")));
        let alarm = audio.play_alarm().unwrap();
        assert_eq!(audio.active_players(), 1);

        audio.release(alarm);
        assert_eq!(audio.active_players(), 0);
    }
}
