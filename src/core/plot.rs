//! Plain data handed to an external charting component.
//!
//! Nothing here renders; the structures only carry copies of already
//! computed values with timestamps converted to UTC.

use chrono::{DateTime, FixedOffset, Utc};

/// Observation times and values of a series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPlotData {
    pub times: Vec<DateTime<Utc>>,
    pub values: Vec<f64>,
}

/// Sample autocorrelations by lag with white-noise significance bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct AcfPlotData {
    pub lags: Vec<usize>,
    pub acf: Vec<f64>,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

/// A forecast with symmetric error bars, plus the observed history.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPlotData {
    pub observed: SeriesPlotData,
    pub forecast: SeriesPlotData,
    /// Half-width of the prediction interval at each forecast step.
    pub errors: Vec<f64>,
}

pub(crate) fn to_utc(times: &[DateTime<FixedOffset>]) -> Vec<DateTime<Utc>> {
    times.iter().map(|t| t.with_timezone(&Utc)).collect()
}
