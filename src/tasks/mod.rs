//! Background tasks module
//!
//! This module contains the tasks that run alongside the timer state.

pub mod countdown;

// Re-export main functions
pub use countdown::{countdown_task, TICK_PERIOD};
