//! Box-Cox power transformation.
//!
//! Stabilizes the variance of a series before modelling.

use crate::error::{ForecastError, Result};

/// Smallest accepted lambda.
pub const MIN_LAMBDA: f64 = -1.0;
/// Largest accepted lambda.
pub const MAX_LAMBDA: f64 = 2.0;

/// Check that `lambda` lies in `[-1, 2]`.
pub fn validate_lambda(lambda: f64) -> Result<()> {
    if !(MIN_LAMBDA..=MAX_LAMBDA).contains(&lambda) {
        return Err(ForecastError::InvalidParameter(format!(
            "Box-Cox lambda must lie between {} and {}, got {}",
            MIN_LAMBDA, MAX_LAMBDA, lambda
        )));
    }
    Ok(())
}

/// Apply Box-Cox transformation with a given lambda.
///
/// For lambda != 0: y = (x^lambda - 1) / lambda
/// For lambda == 0: y = ln(x)
///
/// The transform is defined for positive data; other inputs follow
/// IEEE semantics (e.g. `ln(0) = -inf`).
pub fn boxcox(series: &[f64], lambda: f64) -> Vec<f64> {
    series
        .iter()
        .map(|&x| {
            if lambda.abs() < 1e-10 {
                x.ln()
            } else {
                (x.powf(lambda) - 1.0) / lambda
            }
        })
        .collect()
}

/// Inverse Box-Cox transformation.
///
/// For lambda != 0: x = (lambda * y + 1)^(1/lambda)
/// For lambda == 0: x = exp(y)
pub fn inv_boxcox(transformed: &[f64], lambda: f64) -> Vec<f64> {
    transformed
        .iter()
        .map(|&y| {
            if lambda.abs() < 1e-10 {
                y.exp()
            } else {
                (lambda * y + 1.0).powf(1.0 / lambda)
            }
        })
        .collect()
}
