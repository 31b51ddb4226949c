//! Energy-balance simulation engine behind an animated home solar dashboard.

/// Command-line argument definitions.
pub mod cli;
pub mod config;
/// Bar chart, flow arrow, and sky projections of a flow record.
pub mod dashboard;
pub mod devices;
pub mod io;
/// Built-in time-of-day scenario catalog.
pub mod scenario;
/// Clock, energy balance, engines, and drivers.
pub mod sim;
pub mod telemetry;

#[cfg(feature = "tui")]
pub mod tui;
