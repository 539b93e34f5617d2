//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    state::{format_clock, lookup_duration, Doneness, EggSize, TimerSnapshot},
    surfaces::AlertRecord,
};

/// Timer view rendered from a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerView {
    pub size: EggSize,
    pub doneness: Doneness,
    pub running: bool,
    pub display_seconds: u64,
    pub clock: String,
    pub label: String,
    /// Only present while cooking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_percent: Option<f64>,
    pub total_seconds: u64,
    pub remaining_seconds: u64,
    pub pending_alerts: usize,
    /// Cook time of the current selection in whole minutes, e.g. "5 minutes"
    pub cook_time: String,
    pub cook_description: String,
}

impl TimerView {
    pub fn new(snapshot: TimerSnapshot, pending_alerts: usize) -> Self {
        let running = snapshot.session.running;
        Self {
            size: snapshot.size,
            doneness: snapshot.doneness,
            running,
            display_seconds: snapshot.display_seconds,
            clock: format_clock(snapshot.display_seconds),
            label: if running { "Cooking..." } else { "Ready to Start" }.to_string(),
            progress_percent: running.then(|| snapshot.progress_fraction * 100.0),
            total_seconds: snapshot.session.total_seconds,
            remaining_seconds: snapshot.session.remaining_seconds,
            pending_alerts,
            cook_time: format!(
                "{} minutes",
                lookup_duration(snapshot.size, snapshot.doneness) / 60
            ),
            cook_description: format!(
                "For a {} boiled {} egg",
                snapshot.doneness, snapshot.size
            ),
        }
    }
}

/// API response structure for command endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub timer: TimerView,
}

impl ApiResponse {
    pub fn new(status: &str, message: String, timer: TimerView) -> Self {
        Self {
            status: status.to_string(),
            message,
            timestamp: Utc::now(),
            timer,
        }
    }

    /// The command changed the timer
    pub fn applied(message: String, timer: TimerView) -> Self {
        Self::new("applied", message, timer)
    }

    /// The command was a no-op in the current state
    pub fn ignored(message: String, timer: TimerView) -> Self {
        Self::new("ignored", message, timer)
    }
}

/// Body of a 4xx answer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeLink {
    pub title: String,
    pub description: String,
    pub href: String,
}

/// Landing view linking to the timer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeResponse {
    pub title: String,
    pub subtitle: String,
    pub links: Vec<HomeLink>,
}

impl HomeResponse {
    pub fn new() -> Self {
        Self {
            title: "🥚 Perfect Egg Timer".to_string(),
            subtitle: "Cook your eggs to perfection every time".to_string(),
            links: vec![HomeLink {
                title: "Start Cooking".to_string(),
                description: "Calculate the perfect cooking time for your eggs".to_string(),
                href: "/timer".to_string(),
            }],
        }
    }
}

impl Default for HomeResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// One cell of the cook-time table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableEntry {
    pub size: EggSize,
    pub size_label: String,
    pub doneness: Doneness,
    pub doneness_label: String,
    pub emoji: String,
    pub seconds: u64,
    pub clock: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableResponse {
    pub entries: Vec<TableEntry>,
}

impl TableResponse {
    pub fn full() -> Self {
        let entries = EggSize::ALL
            .iter()
            .flat_map(|&size| {
                Doneness::ALL.iter().map(move |&doneness| {
                    let seconds = lookup_duration(size, doneness);
                    TableEntry {
                        size,
                        size_label: size.label().to_string(),
                        doneness,
                        doneness_label: doneness.label().to_string(),
                        emoji: doneness.emoji().to_string(),
                        seconds,
                        clock: format_clock(seconds),
                    }
                })
            })
            .collect();
        Self { entries }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertsResponse {
    pub pending: usize,
    pub alerts: Vec<AlertRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DismissResponse {
    pub dismissed: usize,
    pub timestamp: DateTime<Utc>,
}

/// Status response with server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub timer: TimerView,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
