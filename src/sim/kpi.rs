//! Daily energy totals from a clock sweep.

use std::fmt;

use super::types::ClockReading;

/// Daily energy totals derived from a sweep of clock readings.
///
/// Computed post-hoc by integrating each reading's powers over one sweep
/// step, so the totals always agree with the readings they came from.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct DailySummary {
    /// Solar energy produced (kWh).
    pub pv_kwh: f64,
    /// Household energy consumed (kWh).
    pub load_kwh: f64,
    /// Energy drawn from the grid (kWh).
    pub import_kwh: f64,
    /// Energy fed to the grid (kWh, positive).
    pub export_kwh: f64,
    /// Energy into the battery (kWh).
    pub battery_charge_kwh: f64,
    /// Energy out of the battery (kWh, positive).
    pub battery_discharge_kwh: f64,
    /// Peak grid import (kW, positive).
    pub peak_import_kw: f64,
    /// Peak grid export (kW, positive magnitude).
    pub peak_export_kw: f64,
    /// Share of consumption not drawn from the grid (%).
    pub self_sufficiency_pct: f64,
}

impl DailySummary {
    /// Integrates readings taken every `dt_hours`.
    ///
    /// # Arguments
    ///
    /// * `readings` - One reading per sweep step
    /// * `dt_hours` - Sweep step in hours
    ///
    /// # Returns
    ///
    /// A `DailySummary`; all zero when `readings` is empty.
    pub fn from_readings(readings: &[ClockReading], dt_hours: f64) -> Self {
        let mut s = Self::default();

        for r in readings {
            let flow = &r.flow;
            s.pv_kwh += flow.pv_kw * dt_hours;
            s.load_kwh += flow.load_kw * dt_hours;

            if flow.grid_kw > 0.0 {
                s.import_kwh += flow.grid_kw * dt_hours;
            } else {
                s.export_kwh -= flow.grid_kw * dt_hours;
            }
            if flow.battery_kw > 0.0 {
                s.battery_charge_kwh += flow.battery_kw * dt_hours;
            } else {
                s.battery_discharge_kwh -= flow.battery_kw * dt_hours;
            }

            s.peak_import_kw = s.peak_import_kw.max(flow.grid_kw);
            s.peak_export_kw = s.peak_export_kw.max(-flow.grid_kw);
        }

        s.self_sufficiency_pct = if s.load_kwh > 0.0 {
            (100.0 * (1.0 - s.import_kwh / s.load_kwh)).clamp(0.0, 100.0)
        } else {
            0.0
        };
        s
    }

    /// Energy surplus left after meeting the load (kWh). Zero when balanced.
    pub fn balance_residual_kwh(&self) -> f64 {
        self.pv_kwh + self.import_kwh + self.battery_discharge_kwh
            - self.export_kwh
            - self.battery_charge_kwh
            - self.load_kwh
    }
}

impl fmt::Display for DailySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Daily Summary ---")?;
        writeln!(f, "Solar produced:        {:.2} kWh", self.pv_kwh)?;
        writeln!(f, "Home consumed:         {:.2} kWh", self.load_kwh)?;
        writeln!(
            f,
            "Grid import/export:    {:.2} / {:.2} kWh",
            self.import_kwh, self.export_kwh
        )?;
        writeln!(
            f,
            "Battery in/out:        {:.2} / {:.2} kWh",
            self.battery_charge_kwh, self.battery_discharge_kwh
        )?;
        writeln!(f, "Peak import:           {:.2} kW", self.peak_import_kw)?;
        writeln!(f, "Peak export:           {:.2} kW", self.peak_export_kw)?;
        write!(f, "Self-sufficiency:      {:.1}%", self.self_sufficiency_pct)
    }
}
