use std::f64::consts::PI;

use crate::devices::types::{Device, DeviceContext};

/// A rooftop solar array modelled as a half-sine bell over the daylight window.
///
/// Output is zero at and outside the window edges and peaks at the midpoint.
/// This is an authored approximation for the dashboard, not a measured curve.
///
/// # Examples
///
/// ```
/// use home_solar_sim::devices::{Device, DeviceContext, SolarPv};
///
/// let pv = SolarPv::rooftop();
/// assert_eq!(pv.power_kw(&DeviceContext::new(3.0)), 0.0);
/// assert!((pv.power_kw(&DeviceContext::new(13.0)) - 5.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SolarPv {
    /// Peak output in kilowatts at the middle of the daylight window.
    pub kw_peak: f64,

    /// Hour at which production starts (exclusive).
    pub sunrise_hr: f64,

    /// Hour at which production stops (exclusive).
    pub sunset_hr: f64,
}

impl SolarPv {
    /// Creates a new solar array.
    ///
    /// # Arguments
    ///
    /// * `kw_peak` - Peak output in kW (negative values clamp to zero)
    /// * `sunrise_hr` - Start of the daylight window
    /// * `sunset_hr` - End of the daylight window
    ///
    /// # Panics
    ///
    /// Panics if `sunrise_hr >= sunset_hr`.
    pub fn new(kw_peak: f64, sunrise_hr: f64, sunset_hr: f64) -> Self {
        assert!(sunrise_hr < sunset_hr, "sunrise must precede sunset");
        Self {
            kw_peak: kw_peak.max(0.0),
            sunrise_hr,
            sunset_hr,
        }
    }

    /// The dashboard's house: 5 kW peak between 05:30 and 20:30.
    pub fn rooftop() -> Self {
        Self::new(5.0, 5.5, 20.5)
    }

    /// Fraction of peak output at `hour`, in `[0, 1]`.
    fn daylight_frac(&self, hour: f64) -> f64 {
        if hour <= self.sunrise_hr || hour >= self.sunset_hr {
            return 0.0;
        }
        let span = self.sunset_hr - self.sunrise_hr;
        ((hour - self.sunrise_hr) * PI / span).sin().max(0.0)
    }
}

impl Device for SolarPv {
    fn power_kw(&self, context: &DeviceContext) -> f64 {
        self.kw_peak * self.daylight_frac(context.hour)
    }
}
