//! Sample autocovariance and autocorrelation.
//!
//! All estimators divide by `n` rather than `n - k`. The biased estimator keeps
//! the autocovariance sequence positive semi-definite and well behaved at high
//! lags.

use crate::utils::stats::mean;

/// Autocovariance at `lag` about a known `mean`.
///
/// `(1/n) * sum_{t=0}^{n-lag-1} (x[t] - mean) * (x[t+lag] - mean)`.
/// Lags at or beyond the series length yield 0; an empty series yields NaN.
pub fn autocovariance_about(series: &[f64], series_mean: f64, lag: usize) -> f64 {
    let n = series.len();
    let sum: f64 = series
        .iter()
        .zip(series.iter().skip(lag))
        .map(|(a, b)| (a - series_mean) * (b - series_mean))
        .sum();
    sum / n as f64
}

/// Autocovariance at `lag`.
pub fn autocovariance(series: &[f64], lag: usize) -> f64 {
    autocovariance_about(series, mean(series), lag)
}

/// Autocorrelation at `lag`: autocovariance at `lag` over autocovariance at 0.
///
/// A constant series has zero variance and yields NaN.
pub fn autocorrelation_about(series: &[f64], series_mean: f64, lag: usize) -> f64 {
    autocovariance_about(series, series_mean, lag) / autocovariance_about(series, series_mean, 0)
}

/// Autocorrelation at `lag`.
pub fn autocorrelation(series: &[f64], lag: usize) -> f64 {
    autocorrelation_about(series, mean(series), lag)
}

/// Autocovariances at lags `0..=max_lag`, truncated to the series length.
pub fn autocovariances(series: &[f64], max_lag: usize) -> Vec<f64> {
    let m = mean(series);
    (0..lag_count(series.len(), max_lag))
        .map(|k| autocovariance_about(series, m, k))
        .collect()
}

/// Autocorrelations at lags `0..=max_lag`, truncated to the series length.
pub fn autocorrelations(series: &[f64], max_lag: usize) -> Vec<f64> {
    let m = mean(series);
    (0..lag_count(series.len(), max_lag))
        .map(|k| autocorrelation_about(series, m, k))
        .collect()
}

/// Number of lags reported up to `max_lag`: `min(max_lag + 1, n)`.
pub fn lag_count(n: usize, max_lag: usize) -> usize {
    max_lag.saturating_add(1).min(n)
}

/// Approximate 95% significance bounds for sample autocorrelations of white
/// noise: `-1/n ± 2/sqrt(n)`.
pub fn white_noise_bounds(n: usize) -> (f64, f64) {
    let n = n as f64;
    let centre = -1.0 / n;
    let half_width = 2.0 / n.sqrt();
    (centre - half_width, centre + half_width)
}
