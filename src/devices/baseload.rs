use crate::devices::types::{Device, DeviceContext};

/// An extra household draw active strictly between two hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadWindow {
    /// Window start hour (exclusive).
    pub start_hr: f64,
    /// Window end hour (exclusive).
    pub end_hr: f64,
    /// Draw added while the window is active (kW).
    pub extra_kw: f64,
}

impl LoadWindow {
    /// Returns `true` when `hour` falls strictly inside the window.
    pub fn contains(&self, hour: f64) -> bool {
        hour > self.start_hr && hour < self.end_hr
    }
}

/// A household load made of a constant baseline plus daily routine windows.
///
/// Every window that contains the sampled hour adds its draw, so overlapping
/// windows stack.
///
/// # Examples
///
/// ```
/// use home_solar_sim::devices::{BaseLoad, Device, DeviceContext};
///
/// let load = BaseLoad::household();
/// // Evening peak on top of the 0.4 kW baseline.
/// assert!((load.power_kw(&DeviceContext::new(20.0)) - 2.9).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BaseLoad {
    /// Always-on consumption in kilowatts.
    pub base_kw: f64,

    /// Routine windows, summed in order.
    pub windows: Vec<LoadWindow>,
}

impl BaseLoad {
    /// Creates a new load from a baseline and its routine windows.
    pub fn new(base_kw: f64, windows: Vec<LoadWindow>) -> Self {
        Self {
            base_kw: base_kw.max(0.0),
            windows,
        }
    }

    /// The dashboard's household: morning routine, evening peak, midday use.
    pub fn household() -> Self {
        Self::new(
            0.4,
            vec![
                LoadWindow {
                    start_hr: 6.5,
                    end_hr: 9.0,
                    extra_kw: 1.8,
                },
                LoadWindow {
                    start_hr: 18.0,
                    end_hr: 23.0,
                    extra_kw: 2.5,
                },
                LoadWindow {
                    start_hr: 10.0,
                    end_hr: 16.0,
                    extra_kw: 0.5,
                },
            ],
        )
    }
}

impl Device for BaseLoad {
    fn power_kw(&self, context: &DeviceContext) -> f64 {
        self.windows
            .iter()
            .filter(|w| w.contains(context.hour))
            .fold(self.base_kw, |kw, w| kw + w.extra_kw)
    }
}
