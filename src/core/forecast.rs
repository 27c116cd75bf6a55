//! Forecasts: point predictions with symmetric prediction intervals.

use crate::core::plot::ForecastPlotData;
use crate::core::TimeSeries;
use crate::error::{ForecastError, Result};
use crate::models::Model;
use crate::utils::RealInterval;

/// Horizon and significance level of a forecast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastConfig {
    /// Number of periods ahead to forecast.
    pub steps: usize,
    /// Significance level; the prediction interval has coverage `1 - alpha`.
    pub alpha: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            steps: 12,
            alpha: 0.05,
        }
    }
}

impl ForecastConfig {
    pub fn new(steps: usize, alpha: f64) -> Self {
        Self { steps, alpha }
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Check that `steps >= 1` and `alpha` lies in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        validate_steps(self.steps)?;
        validate_alpha(self.alpha)
    }
}

pub(crate) fn validate_steps(steps: usize) -> Result<()> {
    if steps == 0 {
        return Err(ForecastError::InvalidParameter(
            "number of forecast steps must be at least 1".to_string(),
        ));
    }
    Ok(())
}

pub(crate) fn validate_alpha(alpha: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(ForecastError::InvalidParameter(format!(
            "alpha must be between 0 and 1, got {}",
            alpha
        )));
    }
    Ok(())
}

/// Shift every point of `point` by the matching error, up or down.
fn shifted(point: &TimeSeries, errors: &[f64], sign: f64) -> Result<TimeSeries> {
    let values = point
        .values()
        .iter()
        .zip(errors)
        .map(|(p, e)| p + sign * e)
        .collect();
    TimeSeries::with_observation_times(
        point.time_period(),
        point.observation_times().to_vec(),
        values,
    )
}

/// A model's point forecast together with its prediction intervals.
///
/// Implementors compute everything when they are built; the accessors only
/// hand out stored results. The `compute_*` methods are fresh calculations
/// for any horizon and significance level and leave the stored forecast alone.
pub trait Forecast {
    /// The model behind this forecast.
    fn model(&self) -> &dyn Model;

    /// Significance level used at construction.
    fn alpha(&self) -> f64;

    /// Point forecast computed at construction.
    fn forecast(&self) -> &TimeSeries;

    /// Half-width of the prediction interval at each step.
    fn forecast_errors(&self) -> &[f64];

    fn upper_prediction_values(&self) -> &TimeSeries;

    fn lower_prediction_values(&self) -> &TimeSeries;

    /// Half-widths of the prediction intervals for `steps` periods at level `alpha`.
    fn compute_forecast_errors(&self, steps: usize, alpha: f64) -> Result<Vec<f64>>;

    /// Number of periods forecast at construction.
    fn steps(&self) -> usize {
        self.forecast().len()
    }

    /// Upper prediction bounds for `steps` periods at level `alpha`.
    fn compute_upper_prediction_bounds(&self, steps: usize, alpha: f64) -> Result<TimeSeries> {
        validate_steps(steps)?;
        validate_alpha(alpha)?;
        let point = self.model().point_forecast(steps)?;
        let errors = self.compute_forecast_errors(steps, alpha)?;
        shifted(&point, &errors, 1.0)
    }

    /// Lower prediction bounds for `steps` periods at level `alpha`.
    fn compute_lower_prediction_bounds(&self, steps: usize, alpha: f64) -> Result<TimeSeries> {
        validate_steps(steps)?;
        validate_alpha(alpha)?;
        let point = self.model().point_forecast(steps)?;
        let errors = self.compute_forecast_errors(steps, alpha)?;
        shifted(&point, &errors, -1.0)
    }

    /// Prediction interval at `step`, counted from 1.
    fn prediction_interval(&self, step: usize) -> Result<RealInterval> {
        let index = step.checked_sub(1).ok_or_else(|| {
            ForecastError::InvalidParameter("forecast steps are counted from 1".to_string())
        })?;
        let lower = self.lower_prediction_values().at(index)?;
        let upper = self.upper_prediction_values().at(index)?;
        Ok(RealInterval::new(lower, upper))
    }

    /// Observed history, point forecast and error bars for charting.
    fn plot_data(&self) -> ForecastPlotData {
        ForecastPlotData {
            observed: self.model().time_series().plot_data(),
            forecast: self.forecast().plot_data(),
            errors: self.forecast_errors().to_vec(),
        }
    }
}

/// Everything a forecast computes up front.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ForecastValues {
    pub(crate) alpha: f64,
    pub(crate) point: TimeSeries,
    pub(crate) errors: Vec<f64>,
    pub(crate) upper: TimeSeries,
    pub(crate) lower: TimeSeries,
}

impl ForecastValues {
    /// Point forecast of `model` bracketed by `errors`.
    pub(crate) fn new(model: &dyn Model, config: ForecastConfig, errors: Vec<f64>) -> Result<Self> {
        let point = model.point_forecast(config.steps)?;
        if errors.len() != point.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: point.len(),
                got: errors.len(),
            });
        }
        let upper = shifted(&point, &errors, 1.0)?;
        let lower = shifted(&point, &errors, -1.0)?;
        Ok(Self {
            alpha: config.alpha,
            point,
            errors,
            upper,
            lower,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ForecastConfig::default();
        assert_eq!(config.steps, 12);
        assert_eq!(config.alpha, 0.05);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_builders() {
        let config = ForecastConfig::default().with_steps(3).with_alpha(0.2);
        assert_eq!(config, ForecastConfig::new(3, 0.2));
    }

    #[test]
    fn config_rejects_invalid_values() {
        assert!(matches!(
            ForecastConfig::new(0, 0.05).validate(),
            Err(ForecastError::InvalidParameter(_))
        ));
        for alpha in [-0.01, 1.01, f64::NAN] {
            assert!(matches!(
                ForecastConfig::new(12, alpha).validate(),
                Err(ForecastError::InvalidParameter(_))
            ));
        }
        assert!(ForecastConfig::new(1, 0.0).validate().is_ok());
        assert!(ForecastConfig::new(1, 1.0).validate().is_ok());
    }

    #[test]
    fn shifted_keeps_timestamps() {
        let point = TimeSeries::monthly(2020, 1, vec![10.0, 20.0]).unwrap();
        let upper = shifted(&point, &[1.0, 2.0], 1.0).unwrap();
        let lower = shifted(&point, &[1.0, 2.0], -1.0).unwrap();
        assert_eq!(upper.values(), &[11.0, 22.0]);
        assert_eq!(lower.values(), &[9.0, 18.0]);
        assert_eq!(upper.observation_times(), point.observation_times());
    }
}
