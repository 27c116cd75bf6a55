//! Differencing of plain value sequences.

use crate::error::{ForecastError, Result};

/// Difference `series` once at the given lag: `x[t + lag] - x[t]`.
fn difference_once(series: &[f64], lag: usize) -> Vec<f64> {
    series
        .iter()
        .skip(lag)
        .zip(series.iter())
        .map(|(curr, prev)| curr - prev)
        .collect()
}

/// Difference `series` `times` times at `lag`.
///
/// Each pass shortens the sequence by `lag`. `times == 0` returns a copy.
///
/// # Errors
/// `InvalidParameter` if `lag` is zero, `InsufficientData` if the passes
/// would consume more values than the series has.
pub fn difference(series: &[f64], lag: usize, times: usize) -> Result<Vec<f64>> {
    if times == 0 {
        return Ok(series.to_vec());
    }
    validate_lag(series.len(), lag, times)?;

    let mut result = difference_once(series, lag);
    for _ in 1..times {
        result = difference_once(&result, lag);
    }
    Ok(result)
}

fn validate_lag(len: usize, lag: usize, times: usize) -> Result<()> {
    if lag == 0 {
        return Err(ForecastError::InvalidParameter(
            "differencing lag must be at least 1".to_string(),
        ));
    }
    let consumed = lag.saturating_mul(times);
    if consumed > len {
        return Err(ForecastError::InsufficientData {
            needed: consumed,
            got: len,
        });
    }
    Ok(())
}
