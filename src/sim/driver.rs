//! Stateful drivers behind the two dashboard views.
//!
//! Each driver owns its view state and exposes command methods; the host
//! calls those methods from its own loop. Neither driver ever blocks.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::{ClockConfig, ScenarioConfig};
use crate::scenario::{CATALOG, Preset, PresetId, lookup};

use super::clock::Clock;
use super::engine::{ClockEngine, ScenarioEngine};
use super::ticker::Ticker;
use super::types::{ClockReading, EnergyFlow, SimSettings};

/// Continuous 24-hour clock with play/pause and scrubbing.
///
/// While playing, every due tick adds `minutes_per_tick` to the time and
/// wraps to midnight at the end of the day. Pausing or scrubbing cancels the
/// pending tick.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use home_solar_sim::sim::driver::ClockDriver;
///
/// let mut driver = ClockDriver::new(1439, Duration::from_millis(30), 2);
/// let t0 = Instant::now();
/// driver.play(t0);
/// assert!(driver.on_tick(t0 + Duration::from_millis(30)));
/// assert_eq!(driver.time(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct ClockDriver {
    clock: Clock,
    ticker: Ticker,
    minutes_per_tick: u32,
    engine: ClockEngine,
}

impl ClockDriver {
    /// Creates a paused driver at `start_minute`.
    pub fn new(start_minute: u32, interval: Duration, minutes_per_tick: u32) -> Self {
        Self {
            clock: Clock::new(start_minute),
            ticker: Ticker::new(interval),
            minutes_per_tick,
            engine: ClockEngine::default(),
        }
    }

    /// Builds a driver from a validated `[clock]` section.
    ///
    /// Playback starts at `now` when `autoplay` is set.
    pub fn from_config(cfg: &ClockConfig, now: Instant) -> Self {
        let mut driver = Self::new(
            cfg.start_minute,
            Duration::from_millis(cfg.tick_interval_ms),
            cfg.minutes_per_tick,
        );
        if cfg.autoplay {
            driver.play(now);
        }
        driver
    }

    /// Current minute of day.
    pub fn time(&self) -> u32 {
        self.clock.minute()
    }

    /// Returns `true` while automatic advance is active.
    pub fn is_playing(&self) -> bool {
        self.ticker.is_running()
    }

    /// Sets the time, clamping to `[0, 1439]`. Playback state is unchanged.
    pub fn set_time(&mut self, minute: i64) {
        self.clock.set(minute);
    }

    /// Manual time change from the slider: stops playback, then sets the time.
    pub fn scrub(&mut self, minute: i64) {
        self.pause();
        self.set_time(minute);
    }

    /// Starts or stops playback.
    pub fn set_playing(&mut self, playing: bool, now: Instant) {
        if playing == self.is_playing() {
            return;
        }
        if playing {
            self.ticker.start(now);
            info!(minute = self.time(), "clock playback started");
        } else {
            self.ticker.stop();
            info!(minute = self.time(), "clock playback paused");
        }
    }

    /// Starts playback.
    pub fn play(&mut self, now: Instant) {
        self.set_playing(true, now);
    }

    /// Stops playback and cancels the pending tick.
    pub fn pause(&mut self) {
        if self.is_playing() {
            self.ticker.stop();
            info!(minute = self.time(), "clock playback paused");
        }
    }

    /// Flips playback.
    pub fn toggle_playing(&mut self, now: Instant) {
        let playing = self.is_playing();
        self.set_playing(!playing, now);
    }

    /// Advances the clock if a tick is due at `now`.
    ///
    /// Returns `true` when the time changed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if !self.ticker.poll(now) {
            return false;
        }
        let minute = self.clock.advance(self.minutes_per_tick);
        if minute == 0 {
            debug!("clock wrapped to midnight");
        }
        true
    }

    /// Time until the next tick, or `None` when paused.
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until_due(now)
    }

    /// Flows at the current time.
    pub fn reading(&self) -> ClockReading {
        self.engine.evaluate(self.time())
    }

    /// Flows at an arbitrary minute, independent of the current time.
    pub fn evaluate(&self, minute: u32) -> ClockReading {
        self.engine.evaluate(minute)
    }
}

impl Default for ClockDriver {
    fn default() -> Self {
        Self::from_config(&ClockConfig::default(), Instant::now())
    }
}

/// Preset selector with live EV and battery toggles.
///
/// # Examples
///
/// ```
/// use home_solar_sim::scenario::PresetId;
/// use home_solar_sim::sim::driver::ScenarioDriver;
///
/// let mut driver = ScenarioDriver::default();
/// assert!(!driver.set_preset("dawn"));
/// assert_eq!(driver.active(), PresetId::Afternoon);
/// driver.toggle_ev();
/// assert_eq!(driver.current().load_kw, 8.8);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioDriver {
    active: PresetId,
    settings: SimSettings,
    engine: ScenarioEngine,
}

impl ScenarioDriver {
    /// Creates a driver with the given selection.
    pub fn new(active: PresetId, settings: SimSettings) -> Self {
        Self {
            active,
            settings,
            engine: ScenarioEngine::default(),
        }
    }

    /// Builds a driver from a `[scenario]` section.
    ///
    /// An unknown preset name keeps the default selection.
    pub fn from_config(cfg: &ScenarioConfig) -> Self {
        let mut driver = Self::new(
            PresetId::default(),
            SimSettings {
                ev: cfg.ev,
                battery: cfg.battery,
            },
        );
        driver.set_preset(&cfg.preset);
        driver
    }

    /// Selected scenario.
    pub fn active(&self) -> PresetId {
        self.active
    }

    /// Current toggles.
    pub fn settings(&self) -> SimSettings {
        self.settings
    }

    /// Selects the preset named `name`.
    ///
    /// Unknown names leave the selection unchanged and return `false`.
    pub fn set_preset(&mut self, name: &str) -> bool {
        match name.parse::<PresetId>() {
            Ok(id) => {
                self.select(id);
                true
            }
            Err(e) => {
                debug!(error = %e, active = %self.active, "ignoring preset change");
                false
            }
        }
    }

    /// Selects a catalog preset.
    pub fn select(&mut self, id: PresetId) {
        if id != self.active {
            debug!(from = %self.active, to = %id, "scenario selected");
            self.active = id;
        }
    }

    /// Flips the EV charger.
    pub fn toggle_ev(&mut self) {
        self.settings.ev = !self.settings.ev;
        debug!(ev = self.settings.ev, "ev charger toggled");
    }

    /// Flips the home battery.
    pub fn toggle_battery(&mut self) {
        self.settings.battery = !self.settings.battery;
        debug!(battery = self.settings.battery, "home battery toggled");
    }

    /// Catalog entry of the selected scenario.
    pub fn current_preset(&self) -> &'static Preset {
        lookup(self.active)
    }

    /// Flows of the selected scenario under the current toggles.
    pub fn current(&self) -> EnergyFlow {
        self.engine.evaluate(Some(self.current_preset()), self.settings)
    }

    /// Evaluates any preset and settings without touching the selection.
    pub fn evaluate(&self, preset: Option<&Preset>, settings: SimSettings) -> EnergyFlow {
        self.engine.evaluate(preset, settings)
    }

    /// The full catalog, for menus.
    pub fn presets(&self) -> &'static [Preset] {
        &CATALOG
    }
}
