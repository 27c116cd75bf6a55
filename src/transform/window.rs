//! Moving-window smoothing.

use crate::error::{ForecastError, Result};

/// Moving average of order `m`.
///
/// Produces `n - m + 1` values; value `t` is the mean of `series[t..t + m]`.
/// For odd `m` each value is centred on observation `t + (m - 1) / 2`; for even
/// `m` it sits at `t + m / 2 - 1`, half a step left of the true centre.
pub fn moving_average(series: &[f64], m: usize) -> Result<Vec<f64>> {
    if m == 0 {
        return Err(ForecastError::InvalidParameter(
            "moving average order must be at least 1".to_string(),
        ));
    }
    if m > series.len() {
        return Err(ForecastError::InsufficientData {
            needed: m,
            got: series.len(),
        });
    }

    Ok(series
        .windows(m)
        .map(|w| w.iter().sum::<f64>() / m as f64)
        .collect())
}

/// Offsets `(c, k)` of a moving average of order `m`: `c = m mod 2`, `k = (m - c) / 2`.
///
/// The smoothed series covers observations `k + c - 1 ..= n - k - 1`.
pub fn moving_average_offsets(m: usize) -> (usize, usize) {
    let c = m % 2;
    (c, (m - c) / 2)
}
