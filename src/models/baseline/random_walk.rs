//! Random walk model.
//!
//! Forecasts the last observed value for every future period.

use crate::core::{
    validate_alpha, validate_steps, Forecast, ForecastConfig, ForecastValues, TimeSeries,
};
use crate::error::{ForecastError, Result};
use crate::models::Model;
use crate::utils::stats::sum_of_squares;
use crate::utils::{Distribution, Normal, Real};
use rand::Rng;
use tracing::debug;

/// Random walk forecaster.
///
/// The fitted value at `t` is the observation at `t - 1`. The first fitted
/// value is the first observation, so the first residual is 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RandomWalk {
    series: TimeSeries,
    fitted: TimeSeries,
    residuals: TimeSeries,
}

impl RandomWalk {
    /// Fit a random walk to `series`.
    ///
    /// # Errors
    /// `EmptyData` if the series has no observations.
    pub fn new(series: &TimeSeries) -> Result<Self> {
        let values = series.values();
        let first = *values.first().ok_or(ForecastError::EmptyData)?;

        let mut fitted = Vec::with_capacity(values.len());
        fitted.push(first);
        fitted.extend_from_slice(&values[..values.len() - 1]);

        let residuals: Vec<f64> = values.iter().zip(&fitted).map(|(x, f)| x - f).collect();

        let period = series.time_period();
        let times = series.observation_times().to_vec();
        debug!(n = values.len(), "fitted random walk");
        Ok(Self {
            series: series.clone(),
            fitted: TimeSeries::with_observation_times(period, times.clone(), fitted)?,
            residuals: TimeSeries::with_observation_times(period, times, residuals)?,
        })
    }

    /// Random walk observed as `n` independent draws from `distribution`.
    ///
    /// The draws are placed on the default monthly timeline.
    pub fn simulate<D, R>(distribution: &D, n: usize, rng: &mut R) -> Result<Self>
    where
        D: Distribution,
        R: Rng + ?Sized,
    {
        if n == 0 {
            return Err(ForecastError::InvalidParameter(
                "cannot simulate an empty random walk".to_string(),
            ));
        }
        let draws: Vec<f64> = (0..n).map(|_| distribution.sample(rng)).collect();
        debug!(n, "simulated random walk");
        Self::new(&TimeSeries::from_values(draws)?)
    }

    /// Simulate with Gaussian increments of the given mean and standard deviation.
    pub fn simulate_normal<R: Rng + ?Sized>(
        mean: f64,
        sigma: f64,
        n: usize,
        rng: &mut R,
    ) -> Result<Self> {
        Self::simulate(&Normal::new(mean, sigma)?, n, rng)
    }

    /// Simulate with zero-mean Gaussian increments.
    pub fn simulate_with_sigma<R: Rng + ?Sized>(sigma: f64, n: usize, rng: &mut R) -> Result<Self> {
        Self::simulate_normal(0.0, sigma, n, rng)
    }

    /// Simulate with standard Gaussian increments.
    pub fn simulate_standard<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Self> {
        Self::simulate(&Normal::standard()?, n, rng)
    }
}

impl Model for RandomWalk {
    fn point_forecast(&self, steps: usize) -> Result<TimeSeries> {
        validate_steps(steps)?;
        let last = *self.series.values().last().ok_or(ForecastError::EmptyData)?;
        TimeSeries::with_period(
            self.series.time_period(),
            self.series.next_observation_time()?,
            vec![last; steps],
        )
    }

    fn time_series(&self) -> &TimeSeries {
        &self.series
    }

    fn fitted_series(&self) -> &TimeSeries {
        &self.fitted
    }

    fn residuals(&self) -> &TimeSeries {
        &self.residuals
    }

    fn name(&self) -> &str {
        "RandomWalk"
    }
}

/// `z(1 - alpha/2) * sigma * sqrt(h)` for `h = 1..=steps`.
///
/// `sigma` is the root mean square of the `n - 1` observed increments. The
/// leading zero residual is not an increment and is left out.
fn random_walk_errors(model: &RandomWalk, steps: usize, alpha: f64) -> Result<Vec<f64>> {
    validate_steps(steps)?;
    validate_alpha(alpha)?;
    let n = model.series.len();
    if n < 2 {
        return Err(ForecastError::InsufficientData { needed: 2, got: n });
    }
    let increments = &model.residuals().values()[1..];
    let critical_value = Normal::standard()?.critical_value(alpha)?;
    let sigma = Real::from(sum_of_squares(increments) / increments.len() as f64)
        .sqrt()?
        .value();
    debug!(
        n,
        sigma,
        steps,
        alpha,
        critical_value,
        "random walk forecast errors"
    );
    Ok((1..=steps)
        .map(|h| critical_value * sigma * (h as f64).sqrt())
        .collect())
}

/// Forecast from a [`RandomWalk`] with Gaussian prediction intervals that
/// widen with the square root of the horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomWalkForecast {
    model: RandomWalk,
    values: ForecastValues,
}

impl RandomWalkForecast {
    /// Forecast 12 periods at `alpha = 0.05`.
    pub fn new(series: &TimeSeries) -> Result<Self> {
        Self::with_config(series, ForecastConfig::default())
    }

    pub fn with_params(series: &TimeSeries, steps: usize, alpha: f64) -> Result<Self> {
        Self::with_config(series, ForecastConfig::new(steps, alpha))
    }

    pub fn with_config(series: &TimeSeries, config: ForecastConfig) -> Result<Self> {
        Self::from_model(RandomWalk::new(series)?, config)
    }

    /// Forecast from an already fitted model.
    pub fn from_model(model: RandomWalk, config: ForecastConfig) -> Result<Self> {
        config.validate()?;
        let errors = random_walk_errors(&model, config.steps, config.alpha)?;
        let values = ForecastValues::new(&model, config, errors)?;
        debug!(steps = config.steps, alpha = config.alpha, "built random walk forecast");
        Ok(Self { model, values })
    }
}

impl Forecast for RandomWalkForecast {
    fn model(&self) -> &dyn Model {
        &self.model
    }

    fn alpha(&self) -> f64 {
        self.values.alpha
    }

    fn forecast(&self) -> &TimeSeries {
        &self.values.point
    }

    fn forecast_errors(&self) -> &[f64] {
        &self.values.errors
    }

    fn upper_prediction_values(&self) -> &TimeSeries {
        &self.values.upper
    }

    fn lower_prediction_values(&self) -> &TimeSeries {
        &self.values.lower
    }

    fn compute_forecast_errors(&self, steps: usize, alpha: f64) -> Result<Vec<f64>> {
        random_walk_errors(&self.model, steps, alpha)
    }
}
