//! Egg Timer - a countdown state machine for boiling eggs
//!
//! The core is [`CookTimer`]: pick an egg size and doneness, start the
//! countdown, and get a haptic cue, an alarm and an alert when it is done.
//! An HTTP control surface drives the timer from the binary.

pub mod api;
pub mod config;
pub mod state;
pub mod surfaces;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use state::{AppState, CookTimer, Doneness, EggSize, TimerSession};
pub use surfaces::Surfaces;
pub use utils::signals::shutdown_signal;
