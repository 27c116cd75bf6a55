//! Core data structures: periods, time series and forecasts.

mod datetime;
mod forecast;
mod plot;
mod time_period;
mod time_series;

pub use datetime::{
    is_local_date_time, is_offset_date_time, parse_date_time, parse_local_date_time,
    parse_offset_date_time, utc_offset,
};
pub use forecast::{Forecast, ForecastConfig};
pub(crate) use forecast::{validate_alpha, validate_steps, ForecastValues};
pub use plot::{AcfPlotData, ForecastPlotData, SeriesPlotData};
pub use time_period::{TimePeriod, TimeUnit};
pub use time_series::{default_start_time, TimeSeries, TimeSeriesBuilder};
