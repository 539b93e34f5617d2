//! State management module
//!
//! This module contains the cook-time table, the countdown session and the
//! timer state machine that owns them.

pub mod app_state;
pub mod cooking;
pub mod cook_timer;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use cook_timer::{
    completion_message, CookTimer, TickOutcome, Ticking, TimerSnapshot, WeakCookTimer,
    ALERT_TITLE,
};
pub use cooking::{format_clock, lookup_duration, Doneness, EggSize};
pub use timer_state::TimerSession;
