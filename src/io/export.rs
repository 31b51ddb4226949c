//! CSV export for day sweeps and the scenario matrix.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::sim::types::{ClockReading, ScenarioRow};

/// Column header for day sweep export.
const DAY_HEADER: &str = "minute,time,pv_kw,load_kw,grid_kw,battery_kw,soc_pct,\
                          battery_state,is_night,is_dusk";

/// Column header for scenario matrix export.
const MATRIX_HEADER: &str = "preset,ev,battery,pv_kw,load_kw,grid_kw,battery_kw,\
                             soc_pct,battery_state";

/// Exports a day sweep to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_day_csv(readings: &[ClockReading], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_day_csv(readings, io::BufWriter::new(file))?;
    info!(rows = readings.len(), path = %path.display(), "wrote day sweep");
    Ok(())
}

/// Writes a day sweep as CSV to any writer, one row per reading.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_day_csv(readings: &[ClockReading], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(DAY_HEADER.split(',').map(str::trim))?;

    for r in readings {
        let f = &r.flow;
        wtr.write_record(&[
            r.minute.to_string(),
            r.formatted_time.clone(),
            format!("{:.2}", f.pv_kw),
            format!("{:.2}", f.load_kw),
            format!("{:.2}", f.grid_kw),
            format!("{:.2}", f.battery_kw),
            format!("{:.0}", f.soc_pct),
            f.battery_state.to_string(),
            r.is_night.to_string(),
            r.is_dusk.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Exports the scenario matrix to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_matrix_csv(rows: &[ScenarioRow], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_matrix_csv(rows, io::BufWriter::new(file))?;
    info!(rows = rows.len(), path = %path.display(), "wrote scenario matrix");
    Ok(())
}

/// Writes the scenario matrix as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_matrix_csv(rows: &[ScenarioRow], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(MATRIX_HEADER.split(',').map(str::trim))?;

    for row in rows {
        let f = &row.flow;
        wtr.write_record(&[
            row.preset.to_string(),
            row.settings.ev.to_string(),
            row.settings.battery.to_string(),
            format!("{:.1}", f.pv_kw),
            format!("{:.1}", f.load_kw),
            format!("{:.1}", f.grid_kw),
            format!("{:.1}", f.battery_kw),
            format!("{:.0}", f.soc_pct),
            f.battery_state.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
