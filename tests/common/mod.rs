//! Shared test fixtures for integration tests.
#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

use home_solar_sim::scenario::CATALOG;
use home_solar_sim::sim::engine::{ClockEngine, ScenarioEngine};
use home_solar_sim::sim::types::{EnergyFlow, SimSettings};

/// Clock-model rounding: four terms at 2 decimals.
pub const CLOCK_TOLERANCE_KW: f64 = 0.02 + 1e-9;

/// Scenario-model rounding: four terms at 1 decimal.
pub const SCENARIO_TOLERANCE_KW: f64 = 0.2 + 1e-9;

/// Clock evaluator with the house's default devices.
pub fn clock_engine() -> ClockEngine {
    ClockEngine::default()
}

/// Scenario evaluator with the default EV charger and battery.
pub fn scenario_engine() -> ScenarioEngine {
    ScenarioEngine::default()
}

/// Evaluates every catalog preset under every settings combination.
pub fn every_scenario() -> Vec<(&'static str, SimSettings, EnergyFlow)> {
    let engine = scenario_engine();
    CATALOG
        .iter()
        .flat_map(|preset| {
            let engine = engine.clone();
            SimSettings::ALL
                .into_iter()
                .map(move |s| (preset.id.as_str(), s, engine.evaluate(Some(preset), s)))
        })
        .collect()
}

/// Asserts supply meets demand within `tolerance_kw`.
pub fn assert_balanced(flow: &EnergyFlow, tolerance_kw: f64) {
    let residual = flow.balance_residual_kw();
    assert!(
        residual.abs() <= tolerance_kw,
        "flows do not balance (residual {residual:.4} kW): {flow}"
    );
}

/// Path of a file under the crate's `configs/` directory.
pub fn config_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("configs")
        .join(name)
}

/// Runs the binary with `args` and returns its output.
pub fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_home-solar-sim"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("home-solar-sim process should run")
}

/// Runs the binary, asserts success, and returns stdout.
pub fn run_cli_ok(args: &[&str]) -> String {
    let output = run_cli(args);
    assert!(
        output.status.success(),
        "run failed for {args:?}: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout should be valid UTF-8")
}
