//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::scenario::PresetId;

#[derive(Debug, Parser)]
#[command(name = "home-solar-sim")]
#[command(author, version, about = "Home solar energy-balance simulator")]
#[command(
    long_about = "Energy-balance engine behind the home solar dashboard.\n\
    \nEvaluates the continuous 24-hour clock model and the four time-of-day\n\
    scenarios, sweeps a whole day, and exports results as CSV.\n\
    \nExamples:\n  \
    home-solar-sim clock --time 07:30\n  \
    home-solar-sim scenario --preset evening --ev\n  \
    home-solar-sim sweep --step-minutes 30 --csv day.csv\n  \
    home-solar-sim --json matrix"
)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print records as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate the clock model at one time of day
    Clock(ClockArgs),

    /// Evaluate a scenario with the EV and battery toggles
    Scenario(ScenarioArgs),

    /// Evaluate the clock model across a whole day and summarize it
    Sweep(SweepArgs),

    /// Evaluate every scenario under every toggle combination
    Matrix(MatrixArgs),

    /// Launch the interactive terminal dashboard
    #[cfg(feature = "tui")]
    Tui,
}

#[derive(Debug, Parser)]
pub struct ClockArgs {
    /// Time as HH:MM or minutes since midnight; out-of-range values clamp
    #[arg(long, value_parser = parse_time, allow_hyphen_values = true)]
    pub time: Option<i64>,
}

#[derive(Debug, Parser)]
pub struct ScenarioArgs {
    /// Scenario to evaluate (morning, afternoon, evening, night)
    #[arg(long)]
    pub preset: Option<PresetId>,

    /// Plug in the EV charger
    #[arg(long)]
    pub ev: bool,

    /// Run without the home battery
    #[arg(long)]
    pub no_battery: bool,
}

#[derive(Debug, Parser)]
pub struct SweepArgs {
    /// Minutes between samples
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=1440))]
    pub step_minutes: Option<u32>,

    /// Write the readings to this CSV file
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct MatrixArgs {
    /// Write the matrix to this CSV file
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,
}

/// Parses `HH:MM` or a plain minute count.
///
/// Range is not checked here; the clock clamps on set. Huge hour fields
/// saturate instead of overflowing.
pub fn parse_time(s: &str) -> Result<i64, String> {
    let s = s.trim();
    if let Some((h, m)) = s.split_once(':') {
        let hours: i64 = h
            .parse()
            .map_err(|_| format!("invalid hour \"{h}\" in \"{s}\""))?;
        let minutes: i64 = m
            .parse()
            .map_err(|_| format!("invalid minute \"{m}\" in \"{s}\""))?;
        if !(0..60).contains(&minutes) {
            return Err(format!("minute must be in 0-59, got {minutes}"));
        }
        return Ok(hours.saturating_mul(60).saturating_add(minutes));
    }
    s.parse()
        .map_err(|_| format!("expected HH:MM or minutes, got \"{s}\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_time_accepts_both_forms() {
        assert_eq!(parse_time("07:30"), Ok(450));
        assert_eq!(parse_time("0:00"), Ok(0));
        assert_eq!(parse_time("23:59"), Ok(1439));
        assert_eq!(parse_time("615"), Ok(615));
        assert_eq!(parse_time("-20"), Ok(-20));
    }

    #[test]
    fn parse_time_saturates_huge_hours() {
        assert_eq!(parse_time("999999999999999999:00"), Ok(i64::MAX));
        assert_eq!(parse_time("-999999999999999999:00"), Ok(i64::MIN));

        let cli = Cli::try_parse_from(["home-solar-sim", "clock", "--time", "999999999999999999:00"])
            .expect("valid args");
        match cli.command {
            Commands::Clock(args) => {
                let mut clock = crate::sim::clock::Clock::default();
                clock.set(args.time.expect("time given"));
                assert_eq!(clock.minute(), 1439);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parse_time_rejects_garbage() {
        assert!(parse_time("noon").is_err());
        assert!(parse_time("12:75").is_err());
        assert!(parse_time("ab:10").is_err());
    }

    #[test]
    fn scenario_args_parse() {
        let cli = Cli::try_parse_from([
            "home-solar-sim",
            "--json",
            "scenario",
            "--preset",
            "evening",
            "--ev",
        ]);
        let cli = cli.expect("valid args");
        assert!(cli.json);
        match cli.command {
            Commands::Scenario(args) => {
                assert_eq!(args.preset, Some(PresetId::Evening));
                assert!(args.ev);
                assert!(!args.no_battery);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn unknown_preset_is_a_usage_error() {
        let result = Cli::try_parse_from(["home-solar-sim", "scenario", "--preset", "dawn"]);
        assert!(result.is_err());
    }

    #[test]
    fn zero_step_rejected() {
        let result = Cli::try_parse_from(["home-solar-sim", "sweep", "--step-minutes", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn clap_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
