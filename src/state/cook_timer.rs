//! The cook timer: selection, countdown session and completion sequence

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::{
    cooking::{lookup_duration, Doneness, EggSize},
    TimerSession,
};
use crate::{
    surfaces::{AlarmHandle, HapticIntensity, Surfaces},
    tasks::countdown_task,
};

pub const ALERT_TITLE: &str = "🥚 Egg is Ready!";

/// How the countdown gets its once-per-second ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ticking {
    /// A tokio task ticks the session every second
    #[default]
    Interval,
    /// The embedding layer calls [`CookTimer::tick`] itself
    Manual,
}

/// Result of applying one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still counting down, with the seconds left
    Counting(u64),
    /// This tick finished the session
    Completed,
    /// No session to tick, or the tick belonged to an earlier session
    Stale,
}

/// Consistent view of the timer taken under a single lock
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub size: EggSize,
    pub doneness: Doneness,
    pub session: TimerSession,
    pub display_seconds: u64,
    pub progress_fraction: f64,
}

#[derive(Debug, Default)]
struct TimerCore {
    size: EggSize,
    doneness: Doneness,
    session: TimerSession,
    /// Bumped on every start so ticks from an older driver are discarded
    generation: u64,
}

impl TimerCore {
    fn display_seconds(&self) -> u64 {
        if self.session.running || self.session.remaining_seconds > 0 {
            self.session.remaining_seconds
        } else {
            lookup_duration(self.size, self.doneness)
        }
    }
}

#[derive(Debug)]
struct TimerInner {
    core: Mutex<TimerCore>,
    driver: Mutex<Option<JoinHandle<()>>>,
    alarm: Mutex<Option<AlarmHandle>>,
    surfaces: Surfaces,
    ticking: Ticking,
}

impl Drop for TimerInner {
    fn drop(&mut self) {
        let driver = self.driver.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = driver.take() {
            debug!("Cook timer dropped, cancelling countdown driver");
            handle.abort();
        }
        let alarm = self.alarm.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(alarm) = alarm.take() {
            self.surfaces.audio.release(alarm);
        }
    }
}

/// Every mutation leaves the state consistent, so a poisoned lock is still usable
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Egg timer state machine.
///
/// Cloning yields another handle to the same timer. The countdown driver and
/// any playing alarm are torn down when the last handle is dropped.
#[derive(Debug, Clone)]
pub struct CookTimer {
    inner: Arc<TimerInner>,
}

/// Non-owning handle held by the countdown driver
#[derive(Debug, Clone)]
pub struct WeakCookTimer {
    inner: Weak<TimerInner>,
}

impl WeakCookTimer {
    pub fn upgrade(&self) -> Option<CookTimer> {
        self.inner.upgrade().map(|inner| CookTimer { inner })
    }
}

impl CookTimer {
    /// Create a timer driven by a tokio interval; `start` must run inside a runtime
    pub fn new(surfaces: Surfaces) -> Self {
        Self::with_ticking(surfaces, Ticking::Interval)
    }

    pub fn with_ticking(surfaces: Surfaces, ticking: Ticking) -> Self {
        Self {
            inner: Arc::new(TimerInner {
                core: Mutex::new(TimerCore::default()),
                driver: Mutex::new(None),
                alarm: Mutex::new(None),
                surfaces,
                ticking,
            }),
        }
    }

    pub fn downgrade(&self) -> WeakCookTimer {
        WeakCookTimer {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Change the egg size. Ignored while a session is running.
    pub fn select_size(&self, size: EggSize) -> bool {
        {
            let mut core = lock(&self.inner.core);
            if core.session.running {
                debug!("Ignoring size change to {} while cooking", size);
                return false;
            }
            core.size = size;
        }
        info!("Selected egg size: {}", size);
        self.inner.surfaces.haptics.pulse(HapticIntensity::Light);
        true
    }

    /// Change the doneness. Ignored while a session is running.
    pub fn select_doneness(&self, doneness: Doneness) -> bool {
        {
            let mut core = lock(&self.inner.core);
            if core.session.running {
                debug!("Ignoring doneness change to {} while cooking", doneness);
                return false;
            }
            core.doneness = doneness;
        }
        info!("Selected doneness: {}", doneness);
        self.inner.surfaces.haptics.pulse(HapticIntensity::Light);
        true
    }

    /// Start a session for the current selection. Ignored while one is running.
    ///
    /// In interval mode a tokio runtime must be current; without one the
    /// timer stays idle and `false` is returned.
    pub fn start(&self) -> bool {
        let runtime = match self.inner.ticking {
            Ticking::Interval => match tokio::runtime::Handle::try_current() {
                Ok(runtime) => Some(runtime),
                Err(e) => {
                    warn!("No tokio runtime to drive the countdown, not starting: {}", e);
                    return false;
                }
            },
            Ticking::Manual => None,
        };

        {
            let mut core = lock(&self.inner.core);
            if core.session.running {
                debug!("Timer already running, ignoring start");
                return false;
            }

            let duration = lookup_duration(core.size, core.doneness);
            core.session = TimerSession::running(duration);
            core.generation += 1;
            info!(
                "Starting timer: {} {} egg for {}s (session {})",
                core.doneness, core.size, duration, core.generation
            );

            // Spawned under the core lock so the driver slot follows the session
            if let Some(runtime) = runtime {
                let handle = runtime.spawn(countdown_task(self.downgrade(), core.generation));
                if let Some(previous) = lock(&self.inner.driver).replace(handle) {
                    previous.abort();
                }
            }
        }
        self.inner.surfaces.haptics.pulse(HapticIntensity::Medium);
        true
    }

    /// Apply one tick to the running session. Only honoured in manual mode;
    /// an interval-driven session is ticked by its driver alone.
    pub fn tick(&self) -> TickOutcome {
        self.advance(None)
    }

    /// Tick on behalf of the driver spawned for `generation`
    pub(crate) fn tick_session(&self, generation: u64) -> TickOutcome {
        self.advance(Some(generation))
    }

    fn advance(&self, generation: Option<u64>) -> TickOutcome {
        let (size, doneness) = {
            let mut core = lock(&self.inner.core);
            let foreign = match generation {
                Some(g) => g != core.generation,
                None => self.inner.ticking == Ticking::Interval,
            };
            if !core.session.running || foreign {
                return TickOutcome::Stale;
            }
            if !core.session.decrement() {
                return TickOutcome::Counting(core.session.remaining_seconds);
            }

            // Completion: the session ends before any side effect runs
            core.session.running = false;
            // Only the driver completes an interval session, and it exits on its own
            lock(&self.inner.driver).take();
            (core.size, core.doneness)
        };

        self.complete(size, doneness);
        TickOutcome::Completed
    }

    fn complete(&self, size: EggSize, doneness: Doneness) {
        info!("Timer completed: {} {} egg", doneness, size);
        let surfaces = &self.inner.surfaces;

        surfaces.haptics.pulse(HapticIntensity::Success);

        match surfaces.audio.play_alarm() {
            Ok(handle) => {
                let previous = lock(&self.inner.alarm).replace(handle);
                if let Some(previous) = previous {
                    surfaces.audio.release(previous);
                }
            }
            Err(e) => warn!("Error playing alarm: {}", e),
        }

        surfaces
            .alerts
            .show(ALERT_TITLE, &completion_message(size, doneness));
    }

    /// Cancel the running session without the completion sequence
    pub fn stop(&self) -> bool {
        {
            let mut core = lock(&self.inner.core);
            if !core.session.running {
                debug!("Timer not running, ignoring stop");
                return false;
            }
            info!(
                "Stopping timer with {}s of {}s left",
                core.session.remaining_seconds, core.session.total_seconds
            );
            core.session = TimerSession::idle();
            if let Some(handle) = lock(&self.inner.driver).take() {
                handle.abort();
            }
        }
        self.inner.surfaces.haptics.pulse(HapticIntensity::Light);
        true
    }

    pub fn selected_size(&self) -> EggSize {
        lock(&self.inner.core).size
    }

    pub fn selected_doneness(&self) -> Doneness {
        lock(&self.inner.core).doneness
    }

    pub fn session(&self) -> TimerSession {
        lock(&self.inner.core).session
    }

    pub fn is_running(&self) -> bool {
        lock(&self.inner.core).session.running
    }

    /// Seconds to show: the countdown once one has run, else a preview of the selection
    pub fn display_seconds(&self) -> u64 {
        lock(&self.inner.core).display_seconds()
    }

    pub fn progress_fraction(&self) -> f64 {
        lock(&self.inner.core).session.progress_fraction()
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        let core = lock(&self.inner.core);
        TimerSnapshot {
            size: core.size,
            doneness: core.doneness,
            session: core.session,
            display_seconds: core.display_seconds(),
            progress_fraction: core.session.progress_fraction(),
        }
    }

    #[cfg(test)]
    fn has_driver(&self) -> bool {
        lock(&self.inner.driver).is_some()
    }
}

pub fn completion_message(size: EggSize, doneness: Doneness) -> String {
    format!("Your {} boiled {} egg is done!", doneness, size)
}
