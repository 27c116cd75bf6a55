//! Model trait defining the common interface for all forecasting models.

use crate::core::TimeSeries;
use crate::error::Result;

/// A fitted forecasting model.
///
/// Models are fitted when they are constructed and are immutable afterwards.
/// This trait is object-safe and can be used with `Box<dyn Model>`.
pub trait Model {
    /// Forecast `steps` periods past the end of the training series.
    ///
    /// Forecast timestamps continue the training series' period.
    ///
    /// # Errors
    /// `InvalidParameter` if `steps` is zero.
    fn point_forecast(&self, steps: usize) -> Result<TimeSeries>;

    /// The series the model was fitted to.
    fn time_series(&self) -> &TimeSeries;

    /// In-sample one-step predictions, aligned with the training series.
    fn fitted_series(&self) -> &TimeSeries;

    /// Training series minus fitted values.
    fn residuals(&self) -> &TimeSeries;

    /// Get the model name.
    fn name(&self) -> &str;
}

/// Type alias for boxed model trait objects.
///
/// # Example
///
/// ```
/// use timeseries_forecast::core::TimeSeries;
/// use timeseries_forecast::models::{BoxedModel, Model};
/// use timeseries_forecast::models::baseline::RandomWalk;
///
/// let series = TimeSeries::from_values(vec![1.0, 2.0, 3.0]).unwrap();
/// let model: BoxedModel = Box::new(RandomWalk::new(&series).unwrap());
/// assert_eq!(model.name(), "RandomWalk");
/// ```
pub type BoxedModel = Box<dyn Model + Send + Sync>;
