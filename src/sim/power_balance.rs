//! Shared energy balance: storage first, grid for the remainder.

/// Directions in which storage may take power on one evaluation.
///
/// Each model decides availability from its own rules (SoC thresholds,
/// battery installed or not) before calling [`allocate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageAvailability {
    /// Storage may absorb a surplus.
    pub can_charge: bool,
    /// Storage may cover a deficit.
    pub can_discharge: bool,
}

impl StorageAvailability {
    /// No storage on site; every imbalance goes to the grid.
    pub const NONE: Self = Self {
        can_charge: false,
        can_discharge: false,
    };

    /// Storage accepts power in both directions.
    pub const BOTH: Self = Self {
        can_charge: true,
        can_discharge: true,
    };
}

/// Battery and grid share of one imbalance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowSplit {
    /// Battery power (kW; positive=charge, negative=discharge).
    pub battery_kw: f64,
    /// Grid power (kW; positive=import, negative=export).
    pub grid_kw: f64,
}

/// Splits a production/consumption imbalance between storage and grid.
///
/// A surplus charges storage up to `ceiling_kw` and exports the rest. A
/// deficit (including an exact balance) discharges storage up to
/// `ceiling_kw` and imports the rest. When storage is unavailable in the
/// required direction the grid takes everything.
///
/// Flows balance: `net_kw == battery_kw - grid_kw`.
///
/// # Arguments
///
/// * `net_kw` - Production minus consumption (kW)
/// * `storage` - Directions the storage accepts
/// * `ceiling_kw` - Storage power limit (kW, positive)
///
/// # Examples
///
/// ```
/// use home_solar_sim::sim::power_balance::{StorageAvailability, allocate};
///
/// let split = allocate(5.0, StorageAvailability::BOTH, 3.5);
/// assert_eq!(split.battery_kw, 3.5);
/// assert_eq!(split.grid_kw, -1.5);
/// ```
pub fn allocate(net_kw: f64, storage: StorageAvailability, ceiling_kw: f64) -> FlowSplit {
    if net_kw > 0.0 {
        if storage.can_charge {
            let battery_kw = net_kw.min(ceiling_kw);
            FlowSplit {
                battery_kw,
                grid_kw: -(net_kw - battery_kw),
            }
        } else {
            FlowSplit {
                battery_kw: 0.0,
                grid_kw: -net_kw,
            }
        }
    } else {
        let needed_kw = net_kw.abs();
        if storage.can_discharge {
            let battery_kw = -needed_kw.min(ceiling_kw);
            FlowSplit {
                battery_kw,
                grid_kw: needed_kw + battery_kw,
            }
        } else {
            FlowSplit {
                battery_kw: 0.0,
                grid_kw: needed_kw,
            }
        }
    }
}

/// Rounds half-up to `decimals` places, the way the dashboard displays values.
///
/// Negative zero is normalised to zero so that `-0.00` never reaches a label.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    let rounded = (value * factor + 0.5).floor() / factor;
    rounded + 0.0
}
