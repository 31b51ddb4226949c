/// CSV export of day sweeps and the scenario matrix.
pub mod export;
