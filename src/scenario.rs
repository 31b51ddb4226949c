//! Built-in time-of-day scenario catalog.
//!
//! Four hand-authored snapshots of the house. The table is a process-wide
//! `static` and is never written after start-up.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::types::{BatteryState, EnergyFlow};

/// Identifier of a catalog scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetId {
    Morning,
    #[default]
    Afternoon,
    Evening,
    Night,
}

impl PresetId {
    /// All identifiers in display order.
    pub const ALL: [PresetId; 4] = [
        PresetId::Morning,
        PresetId::Afternoon,
        PresetId::Evening,
        PresetId::Night,
    ];

    /// Lowercase identifier as used in config files and on the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }

    /// Scenes rendered with the dark sky.
    pub fn is_night_scene(&self) -> bool {
        matches!(self, Self::Evening | Self::Night)
    }
}

impl fmt::Display for PresetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned when parsing a name that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown preset \"{0}\", available: morning, afternoon, evening, night")]
pub struct UnknownPreset(pub String);

impl FromStr for PresetId {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}

/// One catalog entry: presentation metadata plus the baseline flows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preset {
    pub id: PresetId,
    /// Human-readable label.
    pub label: &'static str,
    /// Icon tag understood by the presentation layer.
    pub icon: &'static str,
    /// Background image reference.
    pub image: &'static str,
    /// Authored flows before modifiers are applied.
    pub baseline: EnergyFlow,
}

const fn baseline(
    pv_kw: f64,
    load_kw: f64,
    soc_pct: f64,
    battery_state: BatteryState,
    grid_kw: f64,
) -> EnergyFlow {
    EnergyFlow {
        pv_kw,
        load_kw,
        soc_pct,
        battery_state,
        grid_kw,
        battery_kw: 0.0,
    }
}

/// The scenario catalog, indexed by `PresetId` discriminant.
pub static CATALOG: [Preset; 4] = [
    Preset {
        id: PresetId::Morning,
        label: "Morning",
        icon: "SunRise",
        image: "/house_morning.webp",
        baseline: baseline(2.1, 1.8, 35.0, BatteryState::Charging, 0.0),
    },
    Preset {
        id: PresetId::Afternoon,
        label: "Afternoon",
        icon: "Sun",
        image: "/house_afternoon.webp",
        baseline: baseline(7.2, 1.4, 92.0, BatteryState::Charging, -4.8),
    },
    Preset {
        id: PresetId::Evening,
        label: "Evening",
        icon: "Sunset",
        image: "/house_evening.webp",
        baseline: baseline(0.4, 4.5, 65.0, BatteryState::Discharging, 0.0),
    },
    Preset {
        id: PresetId::Night,
        label: "Night",
        icon: "Moon",
        image: "/house_night.webp",
        baseline: baseline(0.0, 0.8, 28.0, BatteryState::Discharging, 0.0),
    },
];

/// Returns the catalog entry for `id`.
pub fn lookup(id: PresetId) -> &'static Preset {
    &CATALOG[id as usize]
}
