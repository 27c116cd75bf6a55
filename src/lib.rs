//! # timeseries-forecast
//!
//! Analysis and forecasting of regularly spaced univariate time series.
//!
//! A [`TimeSeries`](core::TimeSeries) pairs observations with timestamps one
//! [`TimePeriod`](core::TimePeriod) apart. Series support autocorrelation
//! analysis, Box-Cox transforms, moving averages, differencing, slicing and
//! aggregation to coarser periods. The mean and random walk models produce
//! point forecasts with prediction intervals.
//!
//! ```
//! use timeseries_forecast::prelude::*;
//!
//! let sales = TimeSeries::annual(2001, vec![12.0, 14.5, 13.2, 15.8, 16.1]).unwrap();
//! let forecast = RandomWalkForecast::with_params(&sales, 3, 0.05).unwrap();
//!
//! assert_eq!(forecast.forecast().values(), &[16.1, 16.1, 16.1]);
//! let interval = forecast.prediction_interval(1).unwrap();
//! assert!(interval.contains(16.1));
//! ```

pub mod core;
pub mod error;
pub mod features;
pub mod models;
pub mod transform;
pub mod utils;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::core::{Forecast, ForecastConfig, TimePeriod, TimeSeries, TimeUnit};
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::baseline::{MeanForecast, MeanModel, RandomWalk, RandomWalkForecast};
    pub use crate::models::Model;
    pub use crate::utils::{Distribution, Normal, StudentsT};
}
