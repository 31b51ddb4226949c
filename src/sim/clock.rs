/// Number of minutes in one simulated day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// A minute-of-day clock for the 24-hour dashboard model.
///
/// The `Clock` holds a single minute value in `[0, 1439]`. Manual changes
/// are clamped into range; automatic advances wrap back to midnight.
///
/// # Examples
///
/// ```
/// use home_solar_sim::sim::clock::Clock;
///
/// let mut clock = Clock::new(1439);
/// clock.advance(2);
/// assert_eq!(clock.minute(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    /// Current minute of day
    minute: u32,
}

impl Clock {
    /// Creates a new clock at the given minute, wrapped into one day.
    pub fn new(minute: u32) -> Self {
        Self {
            minute: minute % MINUTES_PER_DAY,
        }
    }

    /// Current minute of day.
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Sets the minute, clamping out-of-range input to `[0, 1439]`.
    pub fn set(&mut self, value: i64) {
        let max = i64::from(MINUTES_PER_DAY - 1);
        // Clamped into u32 range above, so the cast cannot truncate.
        self.minute = value.clamp(0, max) as u32;
    }

    /// Advances by `minutes`, resetting to midnight when the day would end.
    ///
    /// # Returns
    ///
    /// The minute after advancing.
    pub fn advance(&mut self, minutes: u32) -> u32 {
        let next = self.minute.saturating_add(minutes);
        self.minute = if next >= MINUTES_PER_DAY { 0 } else { next };
        self.minute
    }
}

impl Default for Clock {
    /// Solar noon, where the dashboard opens.
    fn default() -> Self {
        Self::new(720)
    }
}

/// Iterator over the minutes of one day at a fixed step, starting at midnight.
#[derive(Debug, Clone)]
pub struct DaySweep {
    next: u32,
    step: u32,
}

impl Iterator for DaySweep {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.next >= MINUTES_PER_DAY {
            return None;
        }
        let minute = self.next;
        self.next += self.step;
        Some(minute)
    }
}

/// Returns the minutes `0, step, 2*step, ...` below one day.
///
/// # Panics
///
/// Panics if `step_minutes` is zero.
pub fn day_sweep(step_minutes: u32) -> DaySweep {
    assert!(step_minutes > 0, "step_minutes must be > 0");
    DaySweep {
        next: 0,
        step: step_minutes,
    }
}
