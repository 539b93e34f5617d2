//! Alert board: keeps shown alerts around until they are dismissed

use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::AlertSurface;

/// A single alert as presented to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub title: String,
    pub message: String,
    pub shown_at: DateTime<Utc>,
    pub dismissed: bool,
}

/// Alert surface backed by an in-memory list, read by the HTTP layer
#[derive(Debug, Default)]
pub struct AlertBoard {
    alerts: Mutex<Vec<AlertRecord>>,
}

impl AlertBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// All alerts shown so far, oldest first
    pub fn alerts(&self) -> Vec<AlertRecord> {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn pending_count(&self) -> usize {
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|alert| !alert.dismissed)
            .count()
    }

    /// Mark every pending alert as dismissed, returning how many were
    pub fn dismiss_all(&self) -> usize {
        let mut alerts = self.alerts.lock().unwrap_or_else(PoisonError::into_inner);
        let mut dismissed = 0;
        for alert in alerts.iter_mut().filter(|alert| !alert.dismissed) {
            alert.dismissed = true;
            dismissed += 1;
        }
        if dismissed > 0 {
            info!("Dismissed {} alert(s)", dismissed);
        }
        dismissed
    }
}

impl AlertSurface for AlertBoard {
    fn show(&self, title: &str, message: &str) {
        info!("Alert: {} - {}", title, message);
        self.alerts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(AlertRecord {
                title: title.to_string(),
                message: message.to_string(),
                shown_at: Utc::now(),
                dismissed: false,
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shown_alerts_stay_pending_until_dismissed() {
        let board = AlertBoard::new();
        board.show("Egg", "first");
        board.show("Egg", "second");
        assert_eq!(board.pending_count(), 2);

        assert_eq!(board.dismiss_all(), 2);
        assert_eq!(board.pending_count(), 0);
        assert_eq!(board.dismiss_all(), 0);

        let alerts = board.alerts();
        assert_eq!(alerts.len(), 2);
        assert_eq!(alerts[0].message, "first");
        assert!(alerts.iter().all(|alert| alert.dismissed));
    }
}
