//! Probability distributions used for simulation and interval calibration.
//!
//! Thin wrappers over `statrs` that validate probabilities instead of
//! panicking and expose a single sampling/quantile interface.

use crate::error::{ForecastError, Result};
use rand::distributions::Distribution as _;
use rand::Rng;
use statrs::distribution::{self as sd, ContinuousCDF};

/// A continuous univariate distribution.
pub trait Distribution {
    /// Draw one value.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64;

    /// Inverse CDF at probability `p`, with `0 <= p <= 1`.
    fn quantile(&self, p: f64) -> Result<f64>;

    /// Two-tailed critical value at significance `alpha`: `quantile(1 - alpha / 2)`.
    fn critical_value(&self, alpha: f64) -> Result<f64> {
        validate_probability(alpha, "alpha")?;
        self.quantile(1.0 - alpha / 2.0)
    }
}

fn validate_probability(p: f64, name: &str) -> Result<()> {
    if !(0.0..=1.0).contains(&p) {
        return Err(ForecastError::InvalidParameter(format!(
            "{} must lie in [0, 1], got {}",
            name, p
        )));
    }
    Ok(())
}

/// Gaussian distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    inner: sd::Normal,
}

impl Normal {
    /// Gaussian with the given mean and standard deviation (`sigma > 0`).
    pub fn new(mean: f64, sigma: f64) -> Result<Self> {
        if !(sigma > 0.0) || !sigma.is_finite() || !mean.is_finite() {
            return Err(ForecastError::InvalidParameter(format!(
                "normal distribution needs a finite mean and positive sigma, got mean {} sigma {}",
                mean, sigma
            )));
        }
        Ok(Self {
            inner: sd::Normal::new(mean, sigma)?,
        })
    }

    /// Standard Gaussian, mean 0 and standard deviation 1.
    pub fn standard() -> Result<Self> {
        Self::new(0.0, 1.0)
    }

    pub fn mean(&self) -> f64 {
        statrs::statistics::Distribution::mean(&self.inner).unwrap_or(f64::NAN)
    }

    pub fn std_dev(&self) -> f64 {
        statrs::statistics::Distribution::std_dev(&self.inner).unwrap_or(f64::NAN)
    }
}

impl Distribution for Normal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.inner.sample(rng)
    }

    fn quantile(&self, p: f64) -> Result<f64> {
        validate_probability(p, "probability")?;
        Ok(self.inner.inverse_cdf(p))
    }
}

/// Student's t distribution with location 0 and scale 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentsT {
    inner: sd::StudentsT,
    freedom: f64,
}

impl StudentsT {
    /// Student's t with `freedom > 0` degrees of freedom.
    pub fn new(freedom: f64) -> Result<Self> {
        if !(freedom > 0.0) {
            return Err(ForecastError::InvalidParameter(format!(
                "degrees of freedom must be positive, got {}",
                freedom
            )));
        }
        Ok(Self {
            inner: sd::StudentsT::new(0.0, 1.0, freedom)?,
            freedom,
        })
    }

    pub fn freedom(&self) -> f64 {
        self.freedom
    }
}

impl Distribution for StudentsT {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.inner.sample(rng)
    }

    fn quantile(&self, p: f64) -> Result<f64> {
        validate_probability(p, "probability")?;
        Ok(self.inner.inverse_cdf(p))
    }
}
