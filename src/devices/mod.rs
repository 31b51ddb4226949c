//! Device curves for the simulated home installation.

/// Household load profile made of routine windows.
pub mod baseload;
/// Battery limits and the authored state-of-charge curve.
pub mod battery;
/// Electric vehicle charger model.
pub mod ev_charger;
/// Solar photovoltaic generation model.
pub mod solar;
pub mod types;

// Re-export the main types for convenience
pub use baseload::{BaseLoad, LoadWindow};
pub use battery::{Battery, SocCurve};
pub use ev_charger::EvCharger;
pub use solar::SolarPv;
pub use types::Device;
pub use types::DeviceContext;
