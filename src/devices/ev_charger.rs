/// A residential EV wallbox drawing a fixed power while plugged in.
///
/// The dashboard treats the charger as a toggle: when enabled it adds its full
/// draw to the household load at every instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvCharger {
    /// Charging power in kilowatts.
    pub charge_kw: f64,
}

impl EvCharger {
    /// Creates a new charger drawing `charge_kw` when enabled.
    ///
    /// # Panics
    ///
    /// Panics if `charge_kw` is negative.
    pub fn new(charge_kw: f64) -> Self {
        assert!(charge_kw >= 0.0);
        Self { charge_kw }
    }

    /// A typical 7.4 kW single-phase home charger.
    pub fn wallbox() -> Self {
        Self::new(7.4)
    }

    /// Draw added to the household load, zero when the charger is off.
    pub fn draw_kw(&self, enabled: bool) -> f64 {
        if enabled { self.charge_kw } else { 0.0 }
    }
}

impl Default for EvCharger {
    fn default() -> Self {
        Self::wallbox()
    }
}
