//! Cancellable repeating schedule for the clock's auto-advance.
//!
//! The ticker owns no thread or timer. The host loop asks it how long to
//! wait and polls it; a stopped ticker never fires again, so stopping
//! playback cancels any pending advance deterministically.

use std::time::{Duration, Instant};

/// A fixed-period schedule driven by the host loop.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use home_solar_sim::sim::ticker::Ticker;
///
/// let t0 = Instant::now();
/// let mut ticker = Ticker::new(Duration::from_millis(30));
/// ticker.start(t0);
/// assert!(!ticker.poll(t0));
/// assert!(ticker.poll(t0 + Duration::from_millis(30)));
/// ticker.stop();
/// assert!(!ticker.poll(t0 + Duration::from_secs(10)));
/// ```
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    /// Creates a stopped ticker with the given period.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Returns `true` while a tick is scheduled.
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Schedules the first tick one period after `now`.
    ///
    /// Starting a running ticker keeps its current schedule.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.interval);
        }
    }

    /// Cancels the pending tick.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Time left until the next tick, or `None` when stopped.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }

    /// Fires at most once per call when the pending tick is due.
    ///
    /// A fired tick reschedules one period after `now`; missed periods are
    /// not replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }
}
