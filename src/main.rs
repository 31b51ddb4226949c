//! Home solar simulator entry point: CLI wiring and config-driven drivers.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use home_solar_sim::cli::{Cli, ClockArgs, Commands, MatrixArgs, ScenarioArgs, SweepArgs};
use home_solar_sim::config::DashboardConfig;
use home_solar_sim::dashboard::SkyPhase;
use home_solar_sim::io::export::{export_day_csv, export_matrix_csv};
use home_solar_sim::sim::driver::{ClockDriver, ScenarioDriver};
use home_solar_sim::sim::engine::{ClockEngine, ScenarioEngine};
use home_solar_sim::sim::kpi::DailySummary;
use home_solar_sim::sim::types::{ClockReading, ScenarioRow};
use home_solar_sim::telemetry::init_tracing;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The terminal UI owns the screen, so it runs without a log subscriber.
    #[cfg(feature = "tui")]
    let interactive = matches!(cli.command, Commands::Tui);
    #[cfg(not(feature = "tui"))]
    let interactive = false;
    if !interactive {
        init_tracing("info");
    }

    let cfg = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Clock(args) => run_clock(&cfg, &args, cli.json),
        Commands::Scenario(args) => run_scenario(&cfg, &args, cli.json),
        Commands::Sweep(args) => run_sweep(&cfg, &args, cli.json),
        Commands::Matrix(args) => run_matrix(&args, cli.json),
        #[cfg(feature = "tui")]
        Commands::Tui => home_solar_sim::tui::run(&cfg).context("terminal UI failed"),
    }
}

/// Loads `--config` if given, otherwise the defaults, and validates it.
fn load_config(path: Option<&Path>) -> Result<DashboardConfig> {
    let cfg = match path {
        Some(path) => DashboardConfig::from_toml_file(path)?,
        None => DashboardConfig::default(),
    };

    let errors = cfg.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        bail!("invalid configuration ({} error(s))", errors.len());
    }
    Ok(cfg)
}

fn print_json(value: &impl Serialize) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{out}");
    Ok(())
}

fn run_clock(cfg: &DashboardConfig, args: &ClockArgs, json: bool) -> Result<()> {
    let mut driver = ClockDriver::from_config(&cfg.clock, Instant::now());
    if let Some(minute) = args.time {
        driver.scrub(minute);
    }
    let reading = driver.reading();

    if json {
        return print_json(&reading);
    }
    println!("{reading}");
    println!("sky: {:?}", SkyPhase::of(&reading));
    Ok(())
}

fn run_scenario(cfg: &DashboardConfig, args: &ScenarioArgs, json: bool) -> Result<()> {
    let mut driver = ScenarioDriver::from_config(&cfg.scenario);
    if let Some(id) = args.preset {
        driver.select(id);
    }
    if args.ev && !driver.settings().ev {
        driver.toggle_ev();
    }
    if args.no_battery && driver.settings().battery {
        driver.toggle_battery();
    }

    let row = ScenarioRow {
        preset: driver.active(),
        settings: driver.settings(),
        flow: driver.current(),
    };
    if json {
        return print_json(&row);
    }
    println!("{}: {}", driver.current_preset().label, row.flow);
    Ok(())
}

#[derive(Serialize)]
struct SweepOutput<'a> {
    step_minutes: u32,
    readings: &'a [ClockReading],
    summary: &'a DailySummary,
}

fn run_sweep(cfg: &DashboardConfig, args: &SweepArgs, json: bool) -> Result<()> {
    let step = args.step_minutes.unwrap_or(cfg.export.step_minutes);
    let readings = ClockEngine::default().sweep(step);
    let summary = DailySummary::from_readings(&readings, f64::from(step) / 60.0);
    info!(step_minutes = step, readings = readings.len(), "day sweep complete");

    if let Some(path) = &args.csv {
        export_day_csv(&readings, path)
            .with_context(|| format!("failed to write CSV to {}", path.display()))?;
    }

    if json {
        return print_json(&SweepOutput {
            step_minutes: step,
            readings: &readings,
            summary: &summary,
        });
    }
    for r in &readings {
        println!("{r}");
    }
    println!("\n{summary}");
    Ok(())
}

fn run_matrix(args: &MatrixArgs, json: bool) -> Result<()> {
    let rows = ScenarioEngine::default().matrix();

    if let Some(path) = &args.csv {
        export_matrix_csv(&rows, path)
            .with_context(|| format!("failed to write CSV to {}", path.display()))?;
    }

    if json {
        return print_json(&rows);
    }
    for row in &rows {
        println!(
            "{:<9} ev={:<5} battery={:<5} | {}",
            row.preset, row.settings.ev, row.settings.battery, row.flow
        );
    }
    Ok(())
}
