//! Recording collaborators for tests

use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Mutex,
};

use super::{
    AlarmHandle, AlertSurface, AudioSurface, HapticIntensity, HapticSurface, Surfaces,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Haptic(HapticIntensity),
    AlarmPlayed(u64),
    AlarmFailed,
    AlarmReleased(u64),
    Alert { title: String, message: String },
}

/// Implements every surface and logs each call in order
#[derive(Debug, Default)]
pub struct Recorder {
    events: Mutex<Vec<Event>>,
    fail_audio: AtomicBool,
    next_alarm: AtomicU64,
}

impl Recorder {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing_audio() -> Arc<Self> {
        let recorder = Self::default();
        recorder.fail_audio.store(true, Ordering::SeqCst);
        Arc::new(recorder)
    }

    pub fn surfaces(self: &Arc<Self>) -> Surfaces {
        Surfaces::new(self.clone(), self.clone(), self.clone())
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<Event> {
        self.events()
            .into_iter()
            .filter(|event| matches!(event, Event::Alert { .. }))
            .collect()
    }

    pub fn alarms_played(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| matches!(event, Event::AlarmPlayed(_)))
            .count()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    fn record(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl AlertSurface for Recorder {
    fn show(&self, title: &str, message: &str) {
        self.record(Event::Alert {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

impl HapticSurface for Recorder {
    fn pulse(&self, intensity: HapticIntensity) {
        self.record(Event::Haptic(intensity));
    }
}

impl AudioSurface for Recorder {
    fn play_alarm(&self) -> Result<AlarmHandle, String> {
        if self.fail_audio.load(Ordering::SeqCst) {
            self.record(Event::AlarmFailed);
            return Err("audio device unavailable".to_string());
        }
        let id = self.next_alarm.fetch_add(1, Ordering::SeqCst) + 1;
        self.record(Event::AlarmPlayed(id));
        Ok(AlarmHandle::new(id))
    }

    fn release(&self, handle: AlarmHandle) {
        self.record(Event::AlarmReleased(handle.id()));
    }
}
