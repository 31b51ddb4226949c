//! Common types and traits for the dashboard's device curves.

/// Contextual information passed to devices when sampling their curves.
///
/// # Fields
/// * `hour` - Hour of day as a fraction in `[0, 24)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceContext {
    pub hour: f64,
}

impl DeviceContext {
    /// Creates a new DeviceContext at the given hour fraction.
    pub fn new(hour: f64) -> Self {
        Self { hour }
    }

    /// Creates a new DeviceContext from a minute of day (`minute / 60`).
    pub fn from_minute(minute: u32) -> Self {
        Self {
            hour: f64::from(minute) / 60.0,
        }
    }
}

/// Trait defining a device that produces or consumes electricity.
///
/// Curves are closed-form and carry no state between samples, so sampling
/// the same context twice always yields the same value.
pub trait Device {
    /// Returns the power magnitude in kilowatts at the given context.
    ///
    /// Values are never negative. Whether the power is generation or
    /// consumption is a property of the device, not of the sign.
    fn power_kw(&self, context: &DeviceContext) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_from_minute_is_hour_fraction() {
        assert_eq!(DeviceContext::from_minute(0).hour, 0.0);
        assert_eq!(DeviceContext::from_minute(90).hour, 1.5);
        assert_eq!(DeviceContext::from_minute(1439).hour, 1439.0 / 60.0);
    }
}
