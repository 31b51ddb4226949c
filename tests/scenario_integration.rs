//! Integration tests for the scenario presets and their modifiers.

mod common;

use proptest::prelude::*;

use home_solar_sim::dashboard::{FlowArrows, energy_bars};
use home_solar_sim::scenario::{CATALOG, PresetId, lookup};
use home_solar_sim::sim::driver::ScenarioDriver;
use home_solar_sim::sim::types::{BatteryState, SimSettings};

#[test]
fn every_combination_balances_and_keeps_soc_in_range() {
    let all = common::every_scenario();
    assert_eq!(all.len(), 16);
    for (name, settings, flow) in &all {
        common::assert_balanced(flow, common::SCENARIO_TOLERANCE_KW);
        assert!(
            (0.0..=100.0).contains(&flow.soc_pct),
            "{name} {settings:?}: soc {}",
            flow.soc_pct
        );
        assert!(flow.battery_kw.abs() <= 5.0, "{name} {settings:?}");
    }
}

#[test]
fn disabled_battery_passes_net_demand_to_grid() {
    for (name, settings, flow) in common::every_scenario() {
        if settings.battery {
            continue;
        }
        let net_demand = flow.load_kw - flow.pv_kw;
        assert!(
            (flow.grid_kw - net_demand).abs() < 1e-9,
            "{name}: grid {} != net demand {net_demand}",
            flow.grid_kw
        );
        assert_eq!(flow.battery_kw, 0.0);
        assert_eq!(flow.soc_pct, 0.0);
        assert_eq!(flow.battery_state, BatteryState::Idle);
    }
}

#[test]
fn afternoon_worked_examples() {
    let mut driver = ScenarioDriver::default();
    let flow = driver.current();
    assert_eq!(
        (flow.pv_kw, flow.load_kw, flow.grid_kw, flow.battery_state),
        (7.2, 1.4, -0.8, BatteryState::Charging)
    );

    driver.toggle_ev();
    let flow = driver.current();
    assert_eq!(flow.load_kw, 8.8);
    assert_eq!(flow.grid_kw, 0.0);
    assert_eq!(flow.battery_state, BatteryState::Discharging);
}

#[test]
fn unknown_preset_keeps_previous_selection() {
    let mut driver = ScenarioDriver::default();
    assert!(driver.set_preset("night"));
    assert!(!driver.set_preset("bogus"));
    assert_eq!(driver.active(), PresetId::Night);
    assert_eq!(driver.current_preset().label, "Night");
}

#[test]
fn morning_surplus_charges_battery() {
    let flow = common::scenario_engine().evaluate(Some(lookup(PresetId::Morning)), SimSettings::default());
    // 2.1 kW solar against 1.8 kW load.
    assert_eq!(flow.battery_kw, 0.3);
    assert_eq!(flow.grid_kw, 0.0);
    assert_eq!(flow.soc_pct, 35.0);
    assert_eq!(flow.battery_state, BatteryState::Charging);
}

#[test]
fn night_presets_are_flagged_for_dark_sky() {
    let night: Vec<PresetId> = CATALOG
        .iter()
        .map(|p| p.id)
        .filter(PresetId::is_night_scene)
        .collect();
    assert_eq!(night, vec![PresetId::Evening, PresetId::Night]);
}

#[test]
fn projections_follow_toggles() {
    let mut driver = ScenarioDriver::default();
    assert_eq!(energy_bars(&driver.current(), driver.settings().battery).len(), 4);

    driver.toggle_battery();
    let flow = driver.current();
    assert_eq!(energy_bars(&flow, driver.settings().battery).len(), 3);
    let arrows = FlowArrows::from_flow(&flow);
    assert!(arrows.grid_export);
    assert!(!arrows.battery_charge && !arrows.battery_discharge);
}

proptest! {
    #[test]
    fn evaluation_is_idempotent(index in 0usize..4, ev: bool, battery: bool) {
        let engine = common::scenario_engine();
        let preset = &CATALOG[index];
        let settings = SimSettings { ev, battery };
        prop_assert_eq!(
            engine.evaluate(Some(preset), settings),
            engine.evaluate(Some(preset), settings)
        );
    }

    #[test]
    fn arbitrary_names_never_break_selection(name in "\\PC*") {
        let mut driver = ScenarioDriver::default();
        let before = driver.active();
        let changed = driver.set_preset(&name);
        if !changed {
            prop_assert_eq!(driver.active(), before);
        }
    }
}
