//! TUI application state.

use std::time::{Duration, Instant};

use crate::config::DashboardConfig;
use crate::scenario::PresetId;
use crate::sim::driver::{ClockDriver, ScenarioDriver};
use crate::sim::engine::ClockEngine;
use crate::sim::types::{ClockReading, EnergyFlow};

/// Minutes moved per arrow-key scrub.
pub const SCRUB_STEP_MINUTES: i64 = 15;

/// Minutes between samples of the background day curve.
const DAY_CURVE_STEP: u32 = 10;

/// Input poll timeout while the clock is paused.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Which dashboard is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Clock,
    Scenario,
}

impl View {
    /// Title shown in the header.
    pub fn title(self) -> &'static str {
        match self {
            Self::Clock => "24h clock",
            Self::Scenario => "Scenarios",
        }
    }
}

/// TUI application state.
pub struct App {
    /// Continuous clock view.
    pub clock: ClockDriver,
    /// Preset view.
    pub scenario: ScenarioDriver,
    /// View on screen.
    pub view: View,
    /// Whole-day readings for the background chart.
    pub day: Vec<ClockReading>,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl App {
    /// Creates the app from a validated configuration.
    pub fn new(cfg: &DashboardConfig, now: Instant) -> Self {
        Self {
            clock: ClockDriver::from_config(&cfg.clock, now),
            scenario: ScenarioDriver::from_config(&cfg.scenario),
            view: View::Clock,
            day: ClockEngine::default().sweep(DAY_CURVE_STEP),
            quit: false,
        }
    }

    /// Flips between the clock and scenario views.
    pub fn switch_view(&mut self) {
        self.view = match self.view {
            View::Clock => View::Scenario,
            View::Scenario => View::Clock,
        };
    }

    /// Moves the clock by `delta` minutes, stopping playback.
    pub fn scrub_by(&mut self, delta: i64) {
        let target = i64::from(self.clock.time()) + delta;
        self.clock.scrub(target);
    }

    /// Selects the n-th catalog preset (0-based); out-of-range is ignored.
    pub fn select_preset(&mut self, index: usize) {
        if let Some(&id) = PresetId::ALL.get(index) {
            self.scenario.select(id);
        }
    }

    /// Runs a due clock tick. Returns `true` when the display changed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        self.clock.on_tick(now)
    }

    /// How long the event loop may block on input.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.clock.next_tick_in(now).map_or(IDLE_POLL, |d| d.min(IDLE_POLL))
    }

    /// Flows shown in the active view.
    pub fn current_flow(&self) -> EnergyFlow {
        match self.view {
            View::Clock => self.clock.reading().flow,
            View::Scenario => self.scenario.current(),
        }
    }

    /// Whether the battery bar is drawn in the active view.
    pub fn show_battery(&self) -> bool {
        match self.view {
            View::Clock => true,
            View::Scenario => self.scenario.settings().battery,
        }
    }

    /// Cancels playback before the terminal is released.
    pub fn shutdown(&mut self) {
        self.clock.pause();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&DashboardConfig::default(), Instant::now())
    }

    #[test]
    fn starts_on_clock_view_at_noon() {
        let app = app();
        assert_eq!(app.view, View::Clock);
        assert_eq!(app.clock.time(), 720);
        assert_eq!(app.day.len(), 144);
        assert!(app.show_battery());
    }

    #[test]
    fn switch_view_round_trips() {
        let mut app = app();
        app.switch_view();
        assert_eq!(app.view, View::Scenario);
        assert_eq!(app.current_flow(), app.scenario.current());
        app.switch_view();
        assert_eq!(app.view, View::Clock);
    }

    #[test]
    fn scrub_stops_playback() {
        let t0 = Instant::now();
        let mut app = app();
        app.clock.play(t0);
        app.scrub_by(-SCRUB_STEP_MINUTES);
        assert!(!app.clock.is_playing());
        assert_eq!(app.clock.time(), 705);
    }

    #[test]
    fn scrub_clamps_at_day_edges() {
        let mut app = app();
        app.scrub_by(-10_000);
        assert_eq!(app.clock.time(), 0);
        app.scrub_by(10_000);
        assert_eq!(app.clock.time(), 1439);
    }

    #[test]
    fn preset_index_out_of_range_ignored() {
        let mut app = app();
        app.select_preset(3);
        assert_eq!(app.scenario.active(), PresetId::Night);
        app.select_preset(9);
        assert_eq!(app.scenario.active(), PresetId::Night);
    }

    #[test]
    fn battery_bar_follows_toggle_in_scenario_view() {
        let mut app = app();
        app.switch_view();
        app.scenario.toggle_battery();
        assert!(!app.show_battery());
    }

    #[test]
    fn poll_timeout_idles_when_paused() {
        let t0 = Instant::now();
        let mut app = app();
        assert_eq!(app.poll_timeout(t0), IDLE_POLL);
        app.clock.play(t0);
        assert_eq!(app.poll_timeout(t0), Duration::from_millis(30));
    }

    #[test]
    fn shutdown_cancels_ticker() {
        let t0 = Instant::now();
        let mut app = app();
        app.clock.play(t0);
        app.shutdown();
        assert!(!app.on_tick(t0 + Duration::from_secs(1)));
    }
}
