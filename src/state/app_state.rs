//! Application state shared with the HTTP handlers

use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Instant,
};

use chrono::{DateTime, Utc};
use tracing::info;

use super::CookTimer;
use crate::surfaces::{AlertBoard, AudioSurface, HapticSurface, Surfaces};

/// Everything the server needs: the timer, its alert board and server metadata
#[derive(Debug)]
pub struct AppState {
    pub timer: CookTimer,
    /// Alert surface the timer reports to, read back by `/alerts`
    pub alerts: Arc<AlertBoard>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last action tracking
    last_action: Mutex<Option<(String, DateTime<Utc>)>>,
}

impl AppState {
    /// Build the timer around an alert board and the given haptic and audio surfaces
    pub fn new(
        port: u16,
        host: String,
        haptics: Arc<dyn HapticSurface>,
        audio: Arc<dyn AudioSurface>,
    ) -> Self {
        let alerts = Arc::new(AlertBoard::new());
        let surfaces = Surfaces::new(alerts.clone(), haptics, audio);
        Self::with_timer(port, host, CookTimer::new(surfaces), alerts)
    }

    pub fn with_timer(port: u16, host: String, timer: CookTimer, alerts: Arc<AlertBoard>) -> Self {
        Self {
            timer,
            alerts,
            start_time: Instant::now(),
            port,
            host,
            last_action: Mutex::new(None),
        }
    }

    /// Remember the last command that changed the timer
    pub fn record_action(&self, action: &str) {
        info!("Action applied: {}", action);
        *self.last_action.lock().unwrap_or_else(PoisonError::into_inner) =
            Some((action.to_string(), Utc::now()));
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        match self
            .last_action
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            Some((action, time)) => (Some(action), Some(time)),
            None => (None, None),
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let seconds = seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
