//! Countdown driver task

use std::time::Duration;

use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::state::{TickOutcome, WeakCookTimer};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Tick the session started as `generation` once per second until it ends.
///
/// Holds only a weak handle, so the task exits once the timer is dropped.
pub async fn countdown_task(timer: WeakCookTimer, generation: u64) {
    debug!("Starting countdown driver for session {}", generation);

    // First tick lands one full period after start
    let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        interval.tick().await;

        let Some(timer) = timer.upgrade() else {
            debug!("Timer dropped, countdown driver {} exiting", generation);
            break;
        };

        match timer.tick_session(generation) {
            TickOutcome::Counting(remaining) => {
                debug!("Session {}: {}s remaining", generation, remaining);
            }
            TickOutcome::Completed => {
                info!("Countdown driver {} finished", generation);
                break;
            }
            TickOutcome::Stale => {
                debug!("Session {} no longer running, driver exiting", generation);
                break;
            }
        }
    }
}
