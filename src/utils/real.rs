//! Real numbers with checked operations, and closed real intervals.

use crate::error::{ForecastError, Result};
use std::fmt;

/// A real number whose partial operations report failure instead of NaN.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Real(f64);

impl Real {
    pub const ZERO: Real = Real(0.0);

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn plus(self, other: Real) -> Real {
        Real(self.0 + other.0)
    }

    pub fn minus(self, other: Real) -> Real {
        Real(self.0 - other.0)
    }

    pub fn times(self, other: Real) -> Real {
        Real(self.0 * other.0)
    }

    pub fn divided_by(self, other: Real) -> Real {
        Real(self.0 / other.0)
    }

    pub fn squared(self) -> Real {
        Real(self.0 * self.0)
    }

    pub fn cubed(self) -> Real {
        Real(self.0 * self.0 * self.0)
    }

    pub fn abs(self) -> Real {
        Real(self.0.abs())
    }

    pub fn additive_inverse(self) -> Real {
        Real(-self.0)
    }

    /// Principal square root.
    ///
    /// # Errors
    /// `InvalidState` when the value is negative (or NaN).
    pub fn sqrt(self) -> Result<Real> {
        if self.0 < 0.0 || self.0.is_nan() {
            return Err(ForecastError::InvalidState(format!(
                "square root of {} is not a real number",
                self.0
            )));
        }
        Ok(Real(self.0.sqrt()))
    }
}

impl From<f64> for Real {
    fn from(value: f64) -> Self {
        Real(value)
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A closed interval `[lower, upper]` on the real line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RealInterval {
    lower: f64,
    upper: f64,
}

impl RealInterval {
    /// Create an interval; the endpoints are ordered if given reversed.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { lower: a, upper: b }
        } else {
            Self { lower: b, upper: a }
        }
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.lower && x <= self.upper
    }

    /// True when both endpoints match `other`'s within `tolerance`.
    pub fn endpoints_equal(&self, other: &RealInterval, tolerance: f64) -> bool {
        (self.lower - other.lower).abs() <= tolerance
            && (self.upper - other.upper).abs() <= tolerance
    }
}

impl fmt::Display for RealInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn arithmetic() {
        let a = Real::from(3.0);
        let b = Real::from(1.5);
        assert_eq!(a.plus(b), Real::from(4.5));
        assert_eq!(a.minus(b), Real::from(1.5));
        assert_eq!(a.times(b), Real::from(4.5));
        assert_eq!(a.divided_by(b), Real::from(2.0));
        assert_eq!(a.squared(), Real::from(9.0));
        assert_eq!(a.cubed(), Real::from(27.0));
        assert_eq!(a.additive_inverse().abs(), a);
        assert!(b < a);
    }

    #[test]
    fn sqrt_of_non_negative() {
        assert_relative_eq!(Real::from(3.0).sqrt().unwrap().value(), 3.0_f64.sqrt());
        assert_eq!(Real::ZERO.sqrt().unwrap(), Real::ZERO);
    }

    #[test]
    fn sqrt_of_negative_is_invalid_state() {
        assert!(matches!(
            Real::from(-3.0).sqrt(),
            Err(ForecastError::InvalidState(_))
        ));
        assert!(Real::from(f64::NAN).sqrt().is_err());
    }

    #[test]
    fn interval_contains_and_equality() {
        let interval = RealInterval::new(3.0, -1.0);
        assert_eq!(interval.lower(), -1.0);
        assert_eq!(interval.upper(), 3.0);
        assert!(interval.contains(0.0));
        assert!(interval.contains(3.0));
        assert!(!interval.contains(3.5));
        assert_relative_eq!(interval.midpoint(), 1.0);
        assert_relative_eq!(interval.width(), 4.0);

        let close = RealInterval::new(-1.0005, 3.0005);
        assert!(interval.endpoints_equal(&close, 1e-3));
        assert!(!interval.endpoints_equal(&close, 1e-4));
    }
}
