//! Parcel weight.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Thousandths per whole unit of weight.
pub const MILLI_PER_UNIT: i64 = 1000;

/// A parcel weight in fixed-point thousandths of a unit.
///
/// The unit itself (kg, lb) is whatever the zone rates are quoted in.
/// Defaults to one whole unit, the weight assumed when a caller omits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight {
    milli_units: i64,
}

impl Weight {
    /// A weight of `units` whole units.
    pub fn units(units: i64) -> Self {
        Self {
            milli_units: units.saturating_mul(MILLI_PER_UNIT),
        }
    }

    pub fn from_milli_units(milli_units: i64) -> Self {
        Self { milli_units }
    }

    /// Create from a decimal amount, rounded to the nearest thousandth.
    ///
    /// ```
    /// use shipping_core::Weight;
    /// assert_eq!(Weight::from_decimal(2.5).milli_units(), 2500);
    /// ```
    pub fn from_decimal(units: f64) -> Self {
        Self {
            milli_units: (units * MILLI_PER_UNIT as f64).round() as i64,
        }
    }

    pub fn milli_units(&self) -> i64 {
        self.milli_units
    }

    pub fn is_negative(&self) -> bool {
        self.milli_units < 0
    }

    /// True when the weight is a whole number of units.
    pub fn is_whole(&self) -> bool {
        self.milli_units % MILLI_PER_UNIT == 0
    }

    pub fn to_decimal(&self) -> f64 {
        self.milli_units as f64 / MILLI_PER_UNIT as f64
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::units(1)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole() {
            write!(f, "{}", self.milli_units / MILLI_PER_UNIT)
        } else {
            write!(f, "{:.3}", self.to_decimal())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_one_unit() {
        assert_eq!(Weight::default(), Weight::units(1));
        assert_eq!(Weight::default().milli_units(), 1000);
    }

    #[test]
    fn test_from_decimal_rounds_to_thousandths() {
        assert_eq!(Weight::from_decimal(0.0004).milli_units(), 0);
        assert_eq!(Weight::from_decimal(1.2345).milli_units(), 1235);
    }

    #[test]
    fn test_display() {
        assert_eq!(Weight::units(2).to_string(), "2");
        assert_eq!(Weight::from_milli_units(2500).to_string(), "2.500");
    }

    #[test]
    fn test_negative() {
        assert!(Weight::units(-1).is_negative());
        assert!(!Weight::units(0).is_negative());
    }
}
