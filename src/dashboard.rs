//! Presentation projections of a flow record: bar chart, flow arrows, sky.
//!
//! Everything here is a pure function of an [`EnergyFlow`] or
//! [`ClockReading`]; the renderers only draw what these return.

use serde::Serialize;

use crate::sim::types::{BatteryState, ClockReading, EnergyFlow};

/// Bars never shrink below this share of the chart height.
pub const MIN_BAR_HEIGHT_PCT: f64 = 10.0;

/// Battery SoC is scaled onto the kW axis as if 100% were this many kW.
const BATTERY_SCALE_KW: f64 = 5.0;

/// Which quantity a bar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarKind {
    Grid,
    Usage,
    Solar,
    Battery,
}

/// Color family of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarTone {
    /// Export to the grid.
    Positive,
    /// Import from the grid.
    Negative,
    Usage,
    Solar,
    /// Battery charging or holding.
    Battery,
    /// Battery discharging.
    BatteryDrain,
}

/// One bar of the energy chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyBar {
    pub kind: BarKind,
    pub label: &'static str,
    /// Magnitude shown on the bar (kW, or % for the battery).
    pub value: f64,
    pub unit: &'static str,
    pub subtitle: &'static str,
    pub tone: BarTone,
}

/// Chart bars in display order: grid, usage, solar, then battery if shown.
pub fn energy_bars(flow: &EnergyFlow, show_battery: bool) -> Vec<EnergyBar> {
    let exporting = flow.is_exporting();
    let mut bars = vec![
        EnergyBar {
            kind: BarKind::Grid,
            label: "Grid",
            value: flow.grid_kw.abs(),
            unit: "kW",
            subtitle: if exporting { "Export" } else { "Import" },
            tone: if exporting {
                BarTone::Positive
            } else {
                BarTone::Negative
            },
        },
        EnergyBar {
            kind: BarKind::Usage,
            label: "Usage",
            value: flow.load_kw,
            unit: "kW",
            subtitle: "Home",
            tone: BarTone::Usage,
        },
        EnergyBar {
            kind: BarKind::Solar,
            label: "Solar",
            value: flow.pv_kw,
            unit: "kW",
            subtitle: "Production",
            tone: BarTone::Solar,
        },
    ];
    if show_battery {
        bars.push(EnergyBar {
            kind: BarKind::Battery,
            label: "Battery",
            value: flow.soc_pct,
            unit: "%",
            subtitle: match flow.battery_state {
                BatteryState::Charging => "Charging",
                BatteryState::Discharging => "Discharging",
                BatteryState::Idle => "Idle",
            },
            tone: if flow.battery_state == BatteryState::Discharging {
                BarTone::BatteryDrain
            } else {
                BarTone::Battery
            },
        });
    }
    bars
}

/// Full-scale value of the chart's kW axis, never below 1.
pub fn bar_scale_max(flow: &EnergyFlow, show_battery: bool) -> f64 {
    let battery = if show_battery {
        flow.soc_pct / 100.0 * BATTERY_SCALE_KW
    } else {
        0.0
    };
    [flow.grid_kw.abs(), flow.load_kw, flow.pv_kw, battery, 1.0]
        .into_iter()
        .fold(f64::MIN, f64::max)
}

/// Bar height as a percentage of the chart, floored at [`MIN_BAR_HEIGHT_PCT`].
pub fn bar_height_pct(bar: &EnergyBar, scale_max: f64) -> f64 {
    let pct = match bar.kind {
        BarKind::Battery => bar.value,
        _ if scale_max > 0.0 => bar.value / scale_max * 100.0,
        _ => 0.0,
    };
    pct.clamp(MIN_BAR_HEIGHT_PCT, 100.0)
}

/// Animated power paths of the house diagram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FlowArrows {
    pub solar_to_inverter: bool,
    pub inverter_to_home: bool,
    pub grid_import: bool,
    pub grid_export: bool,
    pub battery_charge: bool,
    pub battery_discharge: bool,
}

impl FlowArrows {
    /// Active paths for a record.
    pub fn from_flow(flow: &EnergyFlow) -> Self {
        Self {
            solar_to_inverter: flow.pv_kw > 0.0,
            inverter_to_home: flow.load_kw > 0.0,
            grid_import: flow.is_importing(),
            grid_export: flow.is_exporting(),
            battery_charge: flow.battery_state == BatteryState::Charging,
            battery_discharge: flow.battery_state == BatteryState::Discharging,
        }
    }
}

/// Background sky of the clock view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkyPhase {
    Day,
    Dusk,
    Night,
}

impl SkyPhase {
    /// Night wins over dusk where the bands overlap (20:00–21:00).
    pub fn of(reading: &ClockReading) -> Self {
        if reading.is_night {
            Self::Night
        } else if reading.is_dusk {
            Self::Dusk
        } else {
            Self::Day
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{PresetId, lookup};
    use crate::sim::engine::{ClockEngine, ScenarioEngine};
    use crate::sim::types::SimSettings;

    fn afternoon() -> EnergyFlow {
        ScenarioEngine::default().evaluate(Some(lookup(PresetId::Afternoon)), SimSettings::default())
    }

    #[test]
    fn bars_in_display_order() {
        let bars = energy_bars(&afternoon(), true);
        let kinds: Vec<BarKind> = bars.iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![BarKind::Grid, BarKind::Usage, BarKind::Solar, BarKind::Battery]
        );
        assert_eq!(energy_bars(&afternoon(), false).len(), 3);
    }

    #[test]
    fn grid_bar_shows_magnitude_and_direction() {
        let bars = energy_bars(&afternoon(), true);
        assert_eq!(bars[0].value, 0.8);
        assert_eq!(bars[0].subtitle, "Export");
        assert_eq!(bars[0].tone, BarTone::Positive);

        let evening = ScenarioEngine::default()
            .evaluate(Some(lookup(PresetId::Evening)), SimSettings { ev: true, battery: true });
        let bars = energy_bars(&evening, true);
        assert_eq!(bars[0].subtitle, "Import");
        assert_eq!(bars[0].tone, BarTone::Negative);
        assert_eq!(bars[3].subtitle, "Discharging");
        assert_eq!(bars[3].tone, BarTone::BatteryDrain);
    }

    #[test]
    fn bar_subtitles_and_battery_tone() {
        let bars = energy_bars(&afternoon(), true);
        assert_eq!(bars[1].subtitle, "Home");
        assert_eq!(bars[2].subtitle, "Production");
        assert_eq!(bars[3].tone, BarTone::Battery);

        let idle = energy_bars(&EnergyFlow::zeroed(), true);
        assert_eq!(idle[3].tone, BarTone::Battery);
    }

    #[test]
    fn scale_uses_largest_quantity() {
        let flow = afternoon();
        assert_eq!(bar_scale_max(&flow, true), 7.2);
        assert_eq!(bar_scale_max(&EnergyFlow::zeroed(), true), 1.0);
    }

    #[test]
    fn bar_height_floors_at_minimum() {
        let flow = afternoon();
        let max = bar_scale_max(&flow, true);
        let bars = energy_bars(&flow, true);
        assert_eq!(bar_height_pct(&bars[2], max), 100.0);
        // 0.8 / 7.2 = 11%
        assert!((bar_height_pct(&bars[0], max) - 100.0 / 9.0).abs() < 1e-9);
        assert_eq!(bar_height_pct(&bars[3], max), 100.0);

        let zero = energy_bars(&EnergyFlow::zeroed(), true);
        for bar in &zero {
            assert_eq!(bar_height_pct(bar, 1.0), MIN_BAR_HEIGHT_PCT);
        }
    }

    #[test]
    fn arrows_follow_flows() {
        let arrows = FlowArrows::from_flow(&afternoon());
        assert!(arrows.solar_to_inverter);
        assert!(arrows.grid_export);
        assert!(!arrows.grid_import);
        assert!(arrows.battery_charge);
        assert_eq!(FlowArrows::from_flow(&EnergyFlow::zeroed()), FlowArrows::default());
    }

    #[test]
    fn sky_phase_prefers_night() {
        let engine = ClockEngine::default();
        assert_eq!(SkyPhase::of(&engine.evaluate(720)), SkyPhase::Day);
        assert_eq!(SkyPhase::of(&engine.evaluate(420)), SkyPhase::Dusk);
        assert_eq!(SkyPhase::of(&engine.evaluate(1230)), SkyPhase::Night);
        assert_eq!(SkyPhase::of(&engine.evaluate(0)), SkyPhase::Night);
    }
}
