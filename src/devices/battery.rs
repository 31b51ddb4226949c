use crate::devices::types::DeviceContext;

/// Battery limits and state-of-charge heuristics.
///
/// The same physical rules apply to both dashboard models, but each model
/// authors its own limits, so the two are exposed as separate constants
/// ([`Battery::CLOCK`] and [`Battery::SCENARIO`]).
///
/// # Power Flow Convention
/// - Positive power: Charging (energy into the battery)
/// - Negative power: Discharging (energy out of the battery)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Battery {
    /// Charge and discharge power ceiling in kilowatts (positive value).
    pub max_power_kw: f64,

    /// State of charge (%) at or below which the battery refuses to discharge.
    pub reserve_pct: f64,

    /// SoC points lost per kW discharged in one evaluation.
    pub drain_pct_per_kw: f64,

    /// SoC points gained per kW charged in one evaluation.
    pub charge_pct_per_kw: f64,
}

impl Battery {
    /// Battery behind the 24-hour clock model: 3.5 kW, 30% reserve.
    pub const CLOCK: Battery = Battery {
        max_power_kw: 3.5,
        reserve_pct: 30.0,
        drain_pct_per_kw: 0.0,
        charge_pct_per_kw: 0.0,
    };

    /// Battery behind the scenario presets: 5 kW, no reserve, 2x/1.5x SoC heuristics.
    pub const SCENARIO: Battery = Battery {
        max_power_kw: 5.0,
        reserve_pct: 0.0,
        drain_pct_per_kw: 2.0,
        charge_pct_per_kw: 1.5,
    };

    /// Returns `true` if the battery has headroom to absorb a surplus.
    pub fn can_charge(&self, soc_pct: f64) -> bool {
        soc_pct < 100.0
    }

    /// Returns `true` if the battery holds energy above its reserve.
    pub fn can_discharge(&self, soc_pct: f64) -> bool {
        soc_pct > self.reserve_pct
    }

    /// SoC after discharging `power_kw` for one evaluation, floored at 0.
    pub fn drained(&self, soc_pct: f64, power_kw: f64) -> f64 {
        (soc_pct - power_kw * self.drain_pct_per_kw).max(0.0)
    }

    /// SoC after charging `power_kw` for one evaluation, capped at 100.
    pub fn charged(&self, soc_pct: f64, power_kw: f64) -> f64 {
        (soc_pct + power_kw * self.charge_pct_per_kw).min(100.0)
    }
}

/// Authored daily state-of-charge curve for the clock model.
///
/// Overnight the battery drains from 60% to its 30% floor, holds through the
/// morning, fills to 100% by 17:00 and then drains again through the evening.
/// The curve is independent of the battery power flow computed alongside it;
/// the two are not reconciled.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SocCurve;

impl SocCurve {
    /// Returns the unrounded state of charge (%) at the given context.
    pub fn soc_pct(&self, context: &DeviceContext) -> f64 {
        let hour = context.hour;
        if hour < 7.0 {
            (60.0 - hour * 4.0).max(30.0)
        } else if hour < 10.0 {
            30.0
        } else if hour < 17.0 {
            (30.0 + (hour - 10.0) * 10.0).min(100.0)
        } else {
            (100.0 - (hour - 17.0) * 9.0).max(30.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn soc(hour: f64) -> f64 {
        SocCurve.soc_pct(&DeviceContext::new(hour))
    }

    #[test]
    fn test_soc_curve_segments() {
        assert_eq!(soc(0.0), 60.0);
        assert_eq!(soc(5.0), 40.0);
        assert_eq!(soc(8.0), 30.0);
        assert_eq!(soc(12.0), 50.0);
        assert_eq!(soc(17.0), 100.0);
        assert_eq!(soc(20.0), 73.0);
    }

    #[test]
    fn test_soc_curve_stays_in_band() {
        for minute in 0..1440 {
            let s = SocCurve.soc_pct(&DeviceContext::from_minute(minute));
            assert!((30.0..=100.0).contains(&s), "minute {minute}: {s}");
        }
    }

    #[test]
    fn test_clock_battery_reserve() {
        let b = Battery::CLOCK;
        assert!(!b.can_discharge(30.0));
        assert!(b.can_discharge(30.5));
        assert!(b.can_charge(99.9));
        assert!(!b.can_charge(100.0));
    }

    #[test]
    fn test_scenario_battery_heuristics() {
        let b = Battery::SCENARIO;
        assert_eq!(b.drained(92.0, 1.5), 89.0);
        assert_eq!(b.drained(3.0, 5.0), 0.0);
        assert_eq!(b.charged(92.0, 5.0), 99.5);
        assert_eq!(b.charged(99.0, 5.0), 100.0);
        assert!(b.can_discharge(0.5));
    }
}
