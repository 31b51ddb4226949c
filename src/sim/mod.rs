/// Minute-of-day clock and day sweeps.
pub mod clock;
/// Stateful drivers for the clock and scenario views.
pub mod driver;
pub mod engine;
/// Daily energy totals.
pub mod kpi;
pub mod power_balance;
/// Host-polled repeating schedule.
pub mod ticker;
pub mod types;
