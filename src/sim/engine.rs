//! Pure evaluators for the two dashboard models.
//!
//! Both engines own their device curves and recompute every record from
//! scratch; nothing is carried from one evaluation to the next.

use tracing::debug;

use crate::devices::{BaseLoad, Battery, Device, DeviceContext, EvCharger, SocCurve, SolarPv};
use crate::scenario::{CATALOG, Preset};

use super::clock::{MINUTES_PER_DAY, day_sweep};
use super::power_balance::{StorageAvailability, allocate, round_to};
use super::types::{BatteryState, ClockReading, EnergyFlow, ScenarioRow, SimSettings};

/// Evaluator for the continuous 24-hour model.
///
/// Holds typed device fields rather than trait objects since the device set
/// is fixed.
///
/// # Examples
///
/// ```
/// use home_solar_sim::sim::engine::ClockEngine;
///
/// let engine = ClockEngine::default();
/// let noon = engine.evaluate(720);
/// assert_eq!(noon.formatted_time, "12:00");
/// assert_eq!(noon.flow.soc_pct, 50.0);
/// ```
#[derive(Debug, Clone)]
pub struct ClockEngine {
    pv: SolarPv,
    load: BaseLoad,
    soc_curve: SocCurve,
    battery: Battery,
}

impl ClockEngine {
    /// Creates a clock engine from explicit devices.
    pub fn new(pv: SolarPv, load: BaseLoad, soc_curve: SocCurve, battery: Battery) -> Self {
        Self {
            pv,
            load,
            soc_curve,
            battery,
        }
    }

    /// Evaluates the house at `minute` (taken modulo one day).
    ///
    /// Solar, load and SoC come from their curves. The solar/load imbalance
    /// is then split between battery and grid: the battery charges while
    /// below 100% and discharges while above its reserve, within its power
    /// ceiling. Powers are rounded to 2 decimals and SoC to a whole percent;
    /// the battery state follows the unrounded flow.
    pub fn evaluate(&self, minute: u32) -> ClockReading {
        let minute = minute % MINUTES_PER_DAY;
        let context = DeviceContext::from_minute(minute);
        let hour = context.hour;

        let pv_kw = self.pv.power_kw(&context);
        let load_kw = self.load.power_kw(&context);
        let soc_pct = self.soc_curve.soc_pct(&context);

        let storage = StorageAvailability {
            can_charge: self.battery.can_charge(soc_pct),
            can_discharge: self.battery.can_discharge(soc_pct),
        };
        let split = allocate(pv_kw - load_kw, storage, self.battery.max_power_kw);
        let battery_kw = round_to(split.battery_kw, 2);

        ClockReading {
            minute,
            hour,
            flow: EnergyFlow {
                pv_kw: round_to(pv_kw, 2),
                load_kw: round_to(load_kw, 2),
                soc_pct: round_to(soc_pct, 0),
                battery_state: BatteryState::from_battery_kw(split.battery_kw),
                grid_kw: round_to(split.grid_kw, 2),
                battery_kw,
            },
            formatted_time: format_time(minute),
            is_night: ClockReading::night_at(hour),
            is_dusk: ClockReading::dusk_at(hour),
        }
    }

    /// Evaluates every `step_minutes` from midnight through the day.
    ///
    /// # Panics
    ///
    /// Panics if `step_minutes` is zero.
    pub fn sweep(&self, step_minutes: u32) -> Vec<ClockReading> {
        day_sweep(step_minutes).map(|m| self.evaluate(m)).collect()
    }
}

impl Default for ClockEngine {
    fn default() -> Self {
        Self::new(
            SolarPv::rooftop(),
            BaseLoad::household(),
            SocCurve,
            Battery::CLOCK,
        )
    }
}

/// Zero-padded `HH:MM` for a minute of day.
pub fn format_time(minute: u32) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// Evaluator for the four-preset model with live modifiers.
///
/// # Examples
///
/// ```
/// use home_solar_sim::scenario::{PresetId, lookup};
/// use home_solar_sim::sim::engine::ScenarioEngine;
/// use home_solar_sim::sim::types::{BatteryState, SimSettings};
///
/// let engine = ScenarioEngine::default();
/// let flow = engine.evaluate(Some(lookup(PresetId::Afternoon)), SimSettings::default());
/// assert_eq!(flow.grid_kw, -0.8);
/// assert_eq!(flow.battery_state, BatteryState::Charging);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioEngine {
    ev: EvCharger,
    battery: Battery,
}

impl ScenarioEngine {
    /// Creates a scenario engine from explicit devices.
    pub fn new(ev: EvCharger, battery: Battery) -> Self {
        Self { ev, battery }
    }

    /// Applies the settings to a preset's baseline and rebalances the flows.
    ///
    /// The EV charger adds its draw to the load. With a battery, a deficit
    /// discharges it and a surplus charges it, both within the power ceiling,
    /// and the SoC moves by the battery's per-kW heuristics. Without a
    /// battery the grid absorbs the whole imbalance and SoC reads zero.
    ///
    /// A missing preset yields [`EnergyFlow::zeroed`] rather than an error.
    pub fn evaluate(&self, preset: Option<&Preset>, settings: SimSettings) -> EnergyFlow {
        let Some(preset) = preset else {
            debug!("no scenario selected, returning zeroed flows");
            return EnergyFlow::zeroed();
        };
        let battery = self.battery;
        let base = preset.baseline;

        let pv_kw = base.pv_kw;
        let load_kw = base.load_kw + self.ev.draw_kw(settings.ev);
        let net_demand_kw = load_kw - pv_kw;

        let (split, soc_pct, battery_state) = if settings.battery {
            let split = allocate(pv_kw - load_kw, StorageAvailability::BOTH, battery.max_power_kw);
            if net_demand_kw > 0.0 {
                let soc = battery.drained(base.soc_pct, -split.battery_kw);
                (split, soc, BatteryState::Discharging)
            } else {
                let state = if base.soc_pct < 100.0 {
                    BatteryState::Charging
                } else {
                    BatteryState::Idle
                };
                (split, battery.charged(base.soc_pct, split.battery_kw), state)
            }
        } else {
            let split = allocate(pv_kw - load_kw, StorageAvailability::NONE, 0.0);
            (split, 0.0, BatteryState::Idle)
        };

        EnergyFlow {
            pv_kw: round_to(pv_kw, 1),
            load_kw: round_to(load_kw, 1),
            soc_pct: round_to(soc_pct, 0),
            battery_state,
            grid_kw: round_to(split.grid_kw, 1),
            battery_kw: round_to(split.battery_kw, 1),
        }
    }

    /// Evaluates every catalog preset under every settings combination.
    pub fn matrix(&self) -> Vec<ScenarioRow> {
        CATALOG
            .iter()
            .flat_map(|preset| {
                SimSettings::ALL.into_iter().map(move |settings| ScenarioRow {
                    preset: preset.id,
                    settings,
                    flow: self.evaluate(Some(preset), settings),
                })
            })
            .collect()
    }
}

impl Default for ScenarioEngine {
    fn default() -> Self {
        Self::new(EvCharger::wallbox(), Battery::SCENARIO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{PresetId, lookup};

    fn clock(minute: u32) -> ClockReading {
        ClockEngine::default().evaluate(minute)
    }

    fn scenario(id: PresetId, ev: bool, battery: bool) -> EnergyFlow {
        ScenarioEngine::default().evaluate(Some(lookup(id)), SimSettings { ev, battery })
    }

    #[test]
    fn midnight_runs_on_battery() {
        let r = clock(0);
        assert_eq!(r.formatted_time, "00:00");
        assert_eq!(r.flow.pv_kw, 0.0);
        assert_eq!(r.flow.load_kw, 0.4);
        assert_eq!(r.flow.soc_pct, 60.0);
        assert_eq!(r.flow.battery_kw, -0.4);
        assert_eq!(r.flow.grid_kw, 0.0);
        assert_eq!(r.flow.battery_state, BatteryState::Discharging);
        assert!(r.is_night);
    }

    #[test]
    fn noon_charges_at_ceiling_and_exports_rest() {
        let r = clock(720);
        assert_eq!(r.flow.pv_kw, 4.89);
        assert_eq!(r.flow.load_kw, 0.9);
        assert_eq!(r.flow.soc_pct, 50.0);
        assert_eq!(r.flow.battery_kw, 3.5);
        assert_eq!(r.flow.grid_kw, -0.49);
        assert_eq!(r.flow.battery_state, BatteryState::Charging);
        assert!(!r.is_night && !r.is_dusk);
    }

    #[test]
    fn full_battery_exports_all_surplus() {
        // 17:00: SoC curve peaks at 100%.
        let r = clock(1020);
        assert_eq!(r.flow.soc_pct, 100.0);
        assert_eq!(r.flow.battery_kw, 0.0);
        assert_eq!(r.flow.battery_state, BatteryState::Idle);
        assert_eq!(r.flow.grid_kw, -2.95);
    }

    #[test]
    fn battery_at_reserve_leaves_deficit_to_grid() {
        // 07:30: morning routine outweighs early sun, SoC at the 30% floor.
        let r = clock(450);
        assert_eq!(r.flow.soc_pct, 30.0);
        assert_eq!(r.flow.battery_kw, 0.0);
        assert_eq!(r.flow.grid_kw, 0.17);
        assert!(r.flow.is_importing());
        assert!(r.is_dusk);
    }

    #[test]
    fn trickle_charge_is_not_idle() {
        // 05:53: solar barely exceeds load, SoC well inside the band.
        let r = clock(353);
        assert_eq!(r.flow.soc_pct, 36.0);
        assert_eq!(r.flow.battery_kw, 0.0);
        assert_eq!(r.flow.battery_state, BatteryState::Charging);
    }

    #[test]
    fn minute_is_taken_modulo_one_day() {
        assert_eq!(clock(1440 + 90), clock(90));
    }

    #[test]
    fn formatted_time_is_zero_padded() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(1439), "23:59");
    }

    #[test]
    fn sweep_covers_day() {
        let readings = ClockEngine::default().sweep(60);
        assert_eq!(readings.len(), 24);
        assert_eq!(readings[13].formatted_time, "13:00");
    }

    #[test]
    fn afternoon_default_settings() {
        let f = scenario(PresetId::Afternoon, false, true);
        assert_eq!(f.pv_kw, 7.2);
        assert_eq!(f.load_kw, 1.4);
        assert_eq!(f.grid_kw, -0.8);
        assert_eq!(f.battery_kw, 5.0);
        assert_eq!(f.soc_pct, 100.0);
        assert_eq!(f.battery_state, BatteryState::Charging);
    }

    #[test]
    fn afternoon_with_ev_discharges() {
        let f = scenario(PresetId::Afternoon, true, true);
        assert_eq!(f.load_kw, 8.8);
        assert_eq!(f.grid_kw, 0.0);
        assert_eq!(f.battery_kw, -1.6);
        assert_eq!(f.soc_pct, 89.0);
        assert_eq!(f.battery_state, BatteryState::Discharging);
    }

    #[test]
    fn evening_with_ev_hits_ceiling_and_imports() {
        // load 4.5 + 7.4 = 11.9, pv 0.4: 11.5 kW short, battery covers 5.
        let f = scenario(PresetId::Evening, true, true);
        assert_eq!(f.battery_kw, -5.0);
        assert_eq!(f.grid_kw, 6.5);
        assert_eq!(f.soc_pct, 55.0);
    }

    #[test]
    fn night_battery_drains_below_display_floor() {
        // 28% - 0.8 kW * 2 = 26.4%
        let f = scenario(PresetId::Night, false, true);
        assert_eq!(f.soc_pct, 26.0);
        assert_eq!(f.grid_kw, 0.0);
    }

    #[test]
    fn no_battery_passes_net_demand_to_grid() {
        let f = scenario(PresetId::Afternoon, false, false);
        assert_eq!(f.grid_kw, -5.8);
        assert_eq!(f.soc_pct, 0.0);
        assert_eq!(f.battery_kw, 0.0);
        assert_eq!(f.battery_state, BatteryState::Idle);

        let f = scenario(PresetId::Evening, false, false);
        assert_eq!(f.grid_kw, 4.1);
    }

    #[test]
    fn missing_preset_is_zeroed() {
        let f = ScenarioEngine::default().evaluate(None, SimSettings::default());
        assert_eq!(f, EnergyFlow::zeroed());
    }

    #[test]
    fn matrix_covers_every_combination() {
        let rows = ScenarioEngine::default().matrix();
        assert_eq!(rows.len(), 16);
        assert_eq!(rows[0].preset, PresetId::Morning);
        assert_eq!(rows[0].settings, SimSettings::default());
        assert_eq!(rows[15].preset, PresetId::Night);
    }
}
