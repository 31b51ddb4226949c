//! TOML-based dashboard configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::scenario::PresetId;
use crate::sim::clock::MINUTES_PER_DAY;

/// Top-level configuration parsed from TOML.
///
/// Every section and field has a default, so an empty file is valid. Load
/// with [`DashboardConfig::from_toml_file`] or start from
/// [`DashboardConfig::default`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    /// Continuous clock playback.
    #[serde(default)]
    pub clock: ClockConfig,
    /// Initial scenario selection and toggles.
    #[serde(default)]
    pub scenario: ScenarioConfig,
    /// Day sweep and CSV export parameters.
    #[serde(default)]
    pub export: ExportConfig,
}

/// Continuous clock playback parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClockConfig {
    /// Minute of day shown at start-up (0–1439).
    pub start_minute: u32,
    /// Wall-clock period between automatic advances (ms, must be > 0).
    pub tick_interval_ms: u64,
    /// Simulated minutes added per tick (must be > 0).
    pub minutes_per_tick: u32,
    /// Start playing immediately.
    pub autoplay: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            start_minute: 720,
            tick_interval_ms: 30,
            minutes_per_tick: 2,
            autoplay: false,
        }
    }
}

/// Initial scenario selection.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Catalog scenario selected at start-up.
    pub preset: String,
    /// EV charger toggle.
    pub ev: bool,
    /// Home battery toggle.
    pub battery: bool,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            preset: PresetId::default().as_str().to_string(),
            ev: false,
            battery: true,
        }
    }
}

/// Day sweep parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Minutes between sweep samples (1–1440).
    pub step_minutes: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { step_minutes: 15 }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"clock.minutes_per_tick"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl DashboardConfig {
    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        debug!(path = %path.display(), "loaded config file");
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let c = &self.clock;
        if c.start_minute >= MINUTES_PER_DAY {
            errors.push(ConfigError {
                field: "clock.start_minute".into(),
                message: format!("must be < {MINUTES_PER_DAY}"),
            });
        }
        if c.tick_interval_ms == 0 {
            errors.push(ConfigError {
                field: "clock.tick_interval_ms".into(),
                message: "must be > 0".into(),
            });
        }
        if c.minutes_per_tick == 0 || c.minutes_per_tick >= MINUTES_PER_DAY {
            errors.push(ConfigError {
                field: "clock.minutes_per_tick".into(),
                message: format!("must be in [1, {}]", MINUTES_PER_DAY - 1),
            });
        }

        if let Err(e) = self.scenario.preset.parse::<PresetId>() {
            errors.push(ConfigError {
                field: "scenario.preset".into(),
                message: e.to_string(),
            });
        }

        let step = self.export.step_minutes;
        if step == 0 || step > MINUTES_PER_DAY {
            errors.push(ConfigError {
                field: "export.step_minutes".into(),
                message: format!("must be in [1, {MINUTES_PER_DAY}]"),
            });
        }

        errors
    }

    /// The configured preset, falling back to the default when unknown.
    pub fn preset(&self) -> PresetId {
        self.scenario.preset.parse().unwrap_or_default()
    }
}
