//! Mean forecasting model.
//!
//! Forecasts the sample mean of the training series for every future period.

use crate::core::{
    validate_alpha, validate_steps, Forecast, ForecastConfig, ForecastValues, TimeSeries,
};
use crate::error::{ForecastError, Result};
use crate::models::Model;
use crate::utils::{Distribution, Real, StudentsT};
use tracing::debug;

/// Constant-mean model.
///
/// Every fitted value is the sample mean; residuals are the deviations from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeanModel {
    series: TimeSeries,
    fitted: TimeSeries,
    residuals: TimeSeries,
}

impl MeanModel {
    /// Fit the mean of `series`.
    ///
    /// # Errors
    /// `EmptyData` if the series has no observations.
    pub fn new(series: &TimeSeries) -> Result<Self> {
        if series.is_empty() {
            return Err(ForecastError::EmptyData);
        }
        let mean = series.mean();
        let fitted = TimeSeries::with_observation_times(
            series.time_period(),
            series.observation_times().to_vec(),
            vec![mean; series.len()],
        )?;
        let residuals = series.demean();
        debug!(n = series.len(), mean, "fitted mean model");
        Ok(Self {
            series: series.clone(),
            fitted,
            residuals,
        })
    }

    pub fn mean(&self) -> f64 {
        self.series.mean()
    }
}

impl Model for MeanModel {
    fn point_forecast(&self, steps: usize) -> Result<TimeSeries> {
        validate_steps(steps)?;
        TimeSeries::with_period(
            self.series.time_period(),
            self.series.next_observation_time()?,
            vec![self.mean(); steps],
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
        "Mean"
    }
}

/// Prediction interval half-width of the mean model, identical at every step.
///
/// `t_{n-1}(1 - alpha/2) * sqrt(var + var/n)` with `var` the population
/// variance of the training series.
fn mean_forecast_errors(series: &TimeSeries, steps: usize, alpha: f64) -> Result<Vec<f64>> {
    validate_steps(steps)?;
    validate_alpha(alpha)?;
    let n = series.len();
    if n < 2 {
        return Err(ForecastError::InsufficientData { needed: 2, got: n });
    }
    let critical_value = StudentsT::new((n - 1) as f64)?.critical_value(alpha)?;
    let variance = series.variance();
    let standard_error = Real::from(variance + variance / n as f64).sqrt()?;
    let error = critical_value * standard_error.value();
    debug!(n, steps, alpha, critical_value, "mean forecast errors");
    Ok(vec![error; steps])
}

/// Forecast from a [`MeanModel`] with Student's t prediction intervals.
///
/// # Example
///
/// ```
/// use timeseries_forecast::core::{Forecast, TimeSeries};
/// use timeseries_forecast::models::baseline::MeanForecast;
///
/// let series = TimeSeries::from_values(vec![3.0, 7.0, 5.0]).unwrap();
/// let forecast = MeanForecast::with_params(&series, 4, 0.05).unwrap();
/// assert_eq!(forecast.forecast().values(), &[5.0; 4]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MeanForecast {
    model: MeanModel,
    values: ForecastValues,
}

impl MeanForecast {
    /// Forecast 12 periods at `alpha = 0.05`.
    pub fn new(series: &TimeSeries) -> Result<Self> {
        Self::with_config(series, ForecastConfig::default())
    }

    pub fn with_params(series: &TimeSeries, steps: usize, alpha: f64) -> Result<Self> {
        Self::with_config(series, ForecastConfig::new(steps, alpha))
    }

    pub fn with_config(series: &TimeSeries, config: ForecastConfig) -> Result<Self> {
        Self::from_model(MeanModel::new(series)?, config)
    }

    /// Forecast from an already fitted model.
    pub fn from_model(model: MeanModel, config: ForecastConfig) -> Result<Self> {
        config.validate()?;
        let errors = mean_forecast_errors(model.time_series(), config.steps, config.alpha)?;
        let values = ForecastValues::new(&model, config, errors)?;
        debug!(steps = config.steps, alpha = config.alpha, "built mean forecast");
        Ok(Self { model, values })
    }
}

impl Forecast for MeanForecast {
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
        mean_forecast_errors(self.model.time_series(), steps, alpha)
    }
}
