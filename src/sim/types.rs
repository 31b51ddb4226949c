//! Core simulation types: flow records, battery state, and user settings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scenario::PresetId;

/// Direction of battery activity in a flow record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatteryState {
    /// Energy flowing into the battery.
    Charging,
    /// Energy flowing out of the battery.
    Discharging,
    /// No battery flow (battery full, empty at reserve, or disabled).
    #[default]
    Idle,
}

impl BatteryState {
    /// Derives the state from a battery power in charge-positive convention.
    pub fn from_battery_kw(battery_kw: f64) -> Self {
        if battery_kw > 0.0 {
            Self::Charging
        } else if battery_kw < 0.0 {
            Self::Discharging
        } else {
            Self::Idle
        }
    }

    /// Lowercase identifier used in exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Charging => "charging",
            Self::Discharging => "discharging",
            Self::Idle => "idle",
        }
    }
}

impl fmt::Display for BatteryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Instantaneous power flows of the house, as shown on the dashboard.
///
/// Both the clock model and the scenario model produce this record. Sign
/// conventions:
/// - `grid_kw`: positive = import, negative = export
/// - `battery_kw`: positive = charging, negative = discharging
///
/// Flows balance: `pv_kw + grid_kw - battery_kw == load_kw`, up to display
/// rounding.
///
/// # Examples
///
/// ```
/// use home_solar_sim::sim::types::EnergyFlow;
///
/// let flow = EnergyFlow::zeroed();
/// assert_eq!(flow.balance_residual_kw(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyFlow {
    /// Solar production (kW, non-negative).
    pub pv_kw: f64,
    /// Household consumption (kW, non-negative).
    pub load_kw: f64,
    /// Battery state of charge (%, 0 to 100).
    pub soc_pct: f64,
    /// Battery activity direction.
    pub battery_state: BatteryState,
    /// Grid interaction (kW; positive=import, negative=export).
    pub grid_kw: f64,
    /// Battery power (kW; positive=charge, negative=discharge).
    pub battery_kw: f64,
}

impl EnergyFlow {
    /// All-zero steady state, returned when there is nothing to evaluate.
    pub const fn zeroed() -> Self {
        Self {
            pv_kw: 0.0,
            load_kw: 0.0,
            soc_pct: 0.0,
            battery_state: BatteryState::Idle,
            grid_kw: 0.0,
            battery_kw: 0.0,
        }
    }

    /// Supply minus demand; zero when the record balances exactly.
    pub fn balance_residual_kw(&self) -> f64 {
        self.pv_kw + self.grid_kw - self.battery_kw - self.load_kw
    }

    /// Returns `true` when the house draws from the grid.
    pub fn is_importing(&self) -> bool {
        self.grid_kw > 0.0
    }

    /// Returns `true` when the house feeds the grid.
    pub fn is_exporting(&self) -> bool {
        self.grid_kw < 0.0
    }
}

impl Default for EnergyFlow {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl fmt::Display for EnergyFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pv={:>5.2} kW  load={:>5.2} kW | grid={:>6.2} kW | bat={:>6.2} kW \
             (SoC={:>3.0}%, {})",
            self.pv_kw, self.load_kw, self.grid_kw, self.battery_kw, self.soc_pct, self.battery_state,
        )
    }
}

/// Evaluation of the 24-hour clock model at one minute of the day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockReading {
    /// Minute of day in `[0, 1439]`.
    pub minute: u32,
    /// Hour fraction, `minute / 60`.
    pub hour: f64,
    /// Flows at this minute.
    #[serde(flatten)]
    pub flow: EnergyFlow,
    /// Zero-padded `HH:MM`.
    pub formatted_time: String,
    /// Sky is dark (`hour < 6` or `hour > 20`).
    pub is_night: bool,
    /// Sunrise or sunset glow (`6 <= hour < 8` or `19 <= hour <= 21`).
    pub is_dusk: bool,
}

impl ClockReading {
    /// Returns `true` when the hour falls in the night band.
    pub fn night_at(hour: f64) -> bool {
        hour < 6.0 || hour > 20.0
    }

    /// Returns `true` when the hour falls in a dawn or dusk band.
    pub fn dusk_at(hour: f64) -> bool {
        (6.0..8.0).contains(&hour) || (19.0..=21.0).contains(&hour)
    }
}

impl fmt::Display for ClockReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.formatted_time, self.flow)
    }
}

/// User-toggleable loads for the scenario model.
///
/// # Examples
///
/// ```
/// use home_solar_sim::sim::types::SimSettings;
///
/// let s = SimSettings::default();
/// assert!(!s.ev);
/// assert!(s.battery);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SimSettings {
    /// EV charger plugged in and drawing.
    pub ev: bool,
    /// Home battery installed and active.
    pub battery: bool,
}

impl SimSettings {
    /// Every combination of the two toggles, default first.
    pub const ALL: [SimSettings; 4] = [
        SimSettings {
            ev: false,
            battery: true,
        },
        SimSettings {
            ev: true,
            battery: true,
        },
        SimSettings {
            ev: false,
            battery: false,
        },
        SimSettings {
            ev: true,
            battery: false,
        },
    ];
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            ev: false,
            battery: true,
        }
    }
}

/// One cell of the scenario matrix: a preset evaluated under one settings pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioRow {
    pub preset: PresetId,
    #[serde(flatten)]
    pub settings: SimSettings,
    #[serde(flatten)]
    pub flow: EnergyFlow,
}
