//! Countdown session structure

use serde::{Deserialize, Serialize};

/// One run of the countdown.
///
/// A cancelled or never-started session holds zeroes. A session that ran to
/// completion keeps its `total_seconds` with nothing remaining, so its
/// progress reads exactly 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimerSession {
    pub total_seconds: u64,
    pub remaining_seconds: u64,
    pub running: bool,
}

impl TimerSession {
    /// Create an idle session
    pub fn idle() -> Self {
        Self::default()
    }

    /// Create a running session with the full duration remaining
    pub fn running(total_seconds: u64) -> Self {
        Self {
            total_seconds,
            remaining_seconds: total_seconds,
            running: true,
        }
    }

    /// Decrement by one second, saturating at zero.
    /// Returns true when this tick brought the countdown to zero.
    pub fn decrement(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        self.remaining_seconds == 0
    }

    /// Fraction of the session already elapsed, in `[0, 1]`
    pub fn progress_fraction(&self) -> f64 {
        if self.total_seconds == 0 {
            return 0.0;
        }
        let elapsed = self.total_seconds.saturating_sub(self.remaining_seconds);
        elapsed as f64 / self.total_seconds as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decrement_saturates_and_reports_zero() {
        let mut session = TimerSession::running(2);
        assert!(!session.decrement());
        assert!(session.decrement());
        assert_eq!(session.remaining_seconds, 0);
        assert!(session.decrement());
        assert_eq!(session.remaining_seconds, 0);
    }

    #[test]
    fn idle_session_ignores_decrement() {
        let mut session = TimerSession::idle();
        assert!(!session.decrement());
        assert_eq!(session, TimerSession::idle());
    }

    #[test]
    fn progress_guards_zero_total() {
        assert_eq!(TimerSession::idle().progress_fraction(), 0.0);

        let mut session = TimerSession::running(4);
        session.decrement();
        assert_eq!(session.progress_fraction(), 0.25);
    }
}
