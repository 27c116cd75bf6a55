//! TimeSeries data structure for regularly spaced observations.

use crate::core::datetime::{parse_date_time, utc_offset};
use crate::core::plot::{to_utc, AcfPlotData, SeriesPlotData};
use crate::core::time_period::{TimePeriod, TimeUnit};
use crate::error::{ForecastError, Result};
use crate::features::autocorrelation::{
    autocorrelation_about, autocovariance_about, lag_count, white_noise_bounds,
};
use crate::transform::{boxcox, diff, window};
use crate::utils::stats;
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::debug;

/// Summary statistics computed once when a series is built.
#[derive(Debug, Clone, Copy)]
struct Summary {
    mean: f64,
    sum: f64,
    sum_of_squares: f64,
    variance: f64,
    std_dev: f64,
    median: f64,
}

impl Summary {
    fn of(values: &[f64]) -> Self {
        let variance = stats::variance(values);
        Self {
            mean: stats::mean(values),
            sum: values.iter().sum(),
            sum_of_squares: stats::sum_of_squares(values),
            variance,
            std_dev: variance.sqrt(),
            median: stats::median(values),
        }
    }
}

/// An immutable sequence of observations taken at regular time intervals.
///
/// Every observation has a timestamp; timestamps are strictly increasing and a
/// hash index maps each of them back to its position. Summary statistics are
/// computed eagerly. Operations never modify a series, they return a new one.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    period: TimePeriod,
    values: Vec<f64>,
    observation_times: Vec<DateTime<FixedOffset>>,
    date_time_index: HashMap<DateTime<FixedOffset>, usize>,
    summary: Summary,
}

/// Builder for constructing TimeSeries.
///
/// Observation times are taken from, in order of preference: an explicit
/// list, a start time, a start time string, or the synthetic default start.
#[derive(Debug, Clone, Default)]
pub struct TimeSeriesBuilder {
    period: TimePeriod,
    values: Vec<f64>,
    start: Option<DateTime<FixedOffset>>,
    start_str: Option<String>,
    observation_times: Option<Vec<DateTime<FixedOffset>>>,
}

impl TimeSeriesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(mut self, values: Vec<f64>) -> Self {
        self.values = values;
        self
    }

    pub fn period(mut self, period: TimePeriod) -> Self {
        self.period = period;
        self
    }

    pub fn unit(mut self, unit: TimeUnit) -> Self {
        self.period = TimePeriod::of(unit);
        self
    }

    pub fn start(mut self, start: DateTime<FixedOffset>) -> Self {
        self.start = Some(start);
        self
    }

    /// Start time as an ISO-8601 string; UTC is assumed without an offset.
    pub fn start_str(mut self, start: impl Into<String>) -> Self {
        self.start_str = Some(start.into());
        self
    }

    pub fn observation_times(mut self, times: Vec<DateTime<FixedOffset>>) -> Self {
        self.observation_times = Some(times);
        self
    }

    pub fn build(self) -> Result<TimeSeries> {
        if let Some(times) = self.observation_times {
            return TimeSeries::with_observation_times(self.period, times, self.values);
        }
        let start = match (self.start, self.start_str) {
            (Some(start), _) => start,
            (None, Some(s)) => parse_date_time(&s)?,
            (None, None) => default_start_time()?,
        };
        TimeSeries::with_period(self.period, start, self.values)
    }
}

/// Start time used when observation times do not matter: 0001-01-01T00:00Z.
pub fn default_start_time() -> Result<DateTime<FixedOffset>> {
    utc_start(1, 1)
}

fn utc_start(year: i32, month: u32) -> Result<DateTime<FixedOffset>> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .and_then(|naive| utc_offset().from_local_datetime(&naive).single())
        .ok_or_else(|| {
            ForecastError::TimestampError(format!("invalid start {}-{:02}", year, month))
        })
}

impl TimeSeries {
    /// Build a series whose invariants are already known to hold.
    fn from_parts(
        period: TimePeriod,
        observation_times: Vec<DateTime<FixedOffset>>,
        values: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(observation_times.len(), values.len());
        let date_time_index = observation_times
            .iter()
            .enumerate()
            .map(|(i, &t)| (t, i))
            .collect();
        let summary = Summary::of(&values);
        Self {
            period,
            values,
            observation_times,
            date_time_index,
            summary,
        }
    }

    /// Series of `values` without meaningful dates: monthly, starting at
    /// 0001-01-01T00:00Z.
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        Self::with_unit(TimeUnit::Month, default_start_time()?, values)
    }

    /// Series observed once per `unit`, starting at `start`.
    pub fn with_unit(
        unit: TimeUnit,
        start: DateTime<FixedOffset>,
        values: Vec<f64>,
    ) -> Result<Self> {
        Self::with_period(TimePeriod::of(unit), start, values)
    }

    /// Series observed once per `period`, starting at `start`.
    pub fn with_period(
        period: TimePeriod,
        start: DateTime<FixedOffset>,
        values: Vec<f64>,
    ) -> Result<Self> {
        let times = period.observation_times(start, values.len())?;
        Ok(Self::from_parts(period, times, values))
    }

    /// Like [`TimeSeries::with_period`] with an ISO-8601 start time. Without an
    /// offset the start is taken to be UTC.
    pub fn with_period_str(period: TimePeriod, start: &str, values: Vec<f64>) -> Result<Self> {
        Self::with_period(period, parse_date_time(start)?, values)
    }

    /// Series with explicitly supplied observation times.
    ///
    /// # Errors
    /// `DimensionMismatch` if the lengths differ, `TimestampError` if the
    /// times are not strictly increasing.
    pub fn with_observation_times(
        period: TimePeriod,
        observation_times: Vec<DateTime<FixedOffset>>,
        values: Vec<f64>,
    ) -> Result<Self> {
        if observation_times.len() != values.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: values.len(),
                got: observation_times.len(),
            });
        }
        if observation_times.windows(2).any(|w| w[1] <= w[0]) {
            return Err(ForecastError::TimestampError(
                "timestamps must be strictly increasing".to_string(),
            ));
        }
        Ok(Self::from_parts(period, observation_times, values))
    }

    /// Yearly series starting January 1st of `start_year`.
    pub fn annual(start_year: i32, values: Vec<f64>) -> Result<Self> {
        Self::with_period(TimePeriod::one_year(), utc_start(start_year, 1)?, values)
    }

    /// Quarterly series starting at quarter `start_quarter` (1-4) of `start_year`.
    pub fn quarterly(start_year: i32, start_quarter: u32, values: Vec<f64>) -> Result<Self> {
        if !(1..=4).contains(&start_quarter) {
            return Err(ForecastError::InvalidParameter(format!(
                "quarter must be between 1 and 4, got {}",
                start_quarter
            )));
        }
        let month = 3 * (start_quarter - 1) + 1;
        Self::with_period(TimePeriod::one_quarter(), utc_start(start_year, month)?, values)
    }

    /// Monthly series starting at month `start_month` (1-12) of `start_year`.
    pub fn monthly(start_year: i32, start_month: u32, values: Vec<f64>) -> Result<Self> {
        if !(1..=12).contains(&start_month) {
            return Err(ForecastError::InvalidParameter(format!(
                "month must be between 1 and 12, got {}",
                start_month
            )));
        }
        Self::with_period(TimePeriod::one_month(), utc_start(start_year, start_month)?, values)
    }

    /// Get the number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.values.clone()
    }

    pub fn time_period(&self) -> TimePeriod {
        self.period
    }

    pub fn observation_times(&self) -> &[DateTime<FixedOffset>] {
        &self.observation_times
    }

    /// Mapping from observation time to position.
    pub fn date_time_index(&self) -> &HashMap<DateTime<FixedOffset>, usize> {
        &self.date_time_index
    }

    pub fn start_time(&self) -> Option<DateTime<FixedOffset>> {
        self.observation_times.first().copied()
    }

    pub fn end_time(&self) -> Option<DateTime<FixedOffset>> {
        self.observation_times.last().copied()
    }

    /// The time one period after the last observation.
    pub fn next_observation_time(&self) -> Result<DateTime<FixedOffset>> {
        let end = self.end_time().ok_or(ForecastError::EmptyData)?;
        self.period.advance(end)
    }

    pub fn mean(&self) -> f64 {
        self.summary.mean
    }

    pub fn sum(&self) -> f64 {
        self.summary.sum
    }

    pub fn sum_of_squares(&self) -> f64 {
        self.summary.sum_of_squares
    }

    /// Population variance (divisor n).
    pub fn variance(&self) -> f64 {
        self.summary.variance
    }

    pub fn std_dev(&self) -> f64 {
        self.summary.std_dev
    }

    pub fn median(&self) -> f64 {
        self.summary.median
    }

    /// Value at `index`.
    pub fn at(&self, index: usize) -> Result<f64> {
        self.values
            .get(index)
            .copied()
            .ok_or(ForecastError::IndexOutOfBounds {
                index,
                size: self.len(),
            })
    }

    /// Position of the observation made at `time`.
    pub fn index_of(&self, time: &DateTime<FixedOffset>) -> Result<usize> {
        self.date_time_index
            .get(time)
            .copied()
            .ok_or_else(|| ForecastError::TimestampNotFound(time.to_rfc3339()))
    }

    /// Value observed at `time`.
    pub fn at_time(&self, time: &DateTime<FixedOffset>) -> Result<f64> {
        Ok(self.values[self.index_of(time)?])
    }

    /// Autocovariance at lag `k`, dividing by n.
    pub fn auto_covariance_at_lag(&self, k: usize) -> f64 {
        autocovariance_about(&self.values, self.mean(), k)
    }

    /// Autocorrelation at lag `k`.
    pub fn auto_correlation_at_lag(&self, k: usize) -> f64 {
        autocorrelation_about(&self.values, self.mean(), k)
    }

    /// Autocovariances at lags `0..=k`, at most `len()` of them.
    pub fn auto_covariance_up_to_lag(&self, k: usize) -> Vec<f64> {
        (0..lag_count(self.len(), k))
            .map(|lag| self.auto_covariance_at_lag(lag))
            .collect()
    }

    /// Autocorrelations at lags `0..=k`, at most `len()` of them.
    pub fn auto_correlation_up_to_lag(&self, k: usize) -> Vec<f64> {
        (0..lag_count(self.len(), k))
            .map(|lag| self.auto_correlation_at_lag(lag))
            .collect()
    }

    fn with_values(&self, values: Vec<f64>) -> TimeSeries {
        TimeSeries::from_parts(self.period, self.observation_times.clone(), values)
    }

    /// Box-Cox transform with parameter `lambda` in `[-1, 2]`; 0 is the natural log.
    ///
    /// Observations should be positive. Zero or negative values are not
    /// rejected and may come back infinite or NaN.
    pub fn transform(&self, lambda: f64) -> Result<TimeSeries> {
        boxcox::validate_lambda(lambda)?;
        Ok(self.with_values(boxcox::boxcox(&self.values, lambda)))
    }

    /// Inverse of [`TimeSeries::transform`].
    pub fn back_transform(&self, lambda: f64) -> Result<TimeSeries> {
        boxcox::validate_lambda(lambda)?;
        Ok(self.with_values(boxcox::inv_boxcox(&self.values, lambda)))
    }

    /// Moving average of order `m`, `len() - m + 1` observations long.
    ///
    /// For odd `m` each average is stamped with the time of the middle
    /// observation of its window; for even `m` with the left of the two middle
    /// observations.
    pub fn moving_average(&self, m: usize) -> Result<TimeSeries> {
        let average = window::moving_average(&self.values, m)?;
        let (c, k) = window::moving_average_offsets(m);
        let n = self.len();
        let times = self.observation_times[k + c - 1..n - k].to_vec();
        Ok(TimeSeries::from_parts(self.period, times, average))
    }

    /// Centered moving average: order `m` if `m` is odd, `2 x m` if `m` is even.
    pub fn centered_moving_average(&self, m: usize) -> Result<TimeSeries> {
        if m % 2 == 1 {
            return self.moving_average(m);
        }
        let first = self.moving_average(m)?;
        let second = window::moving_average(first.values(), 2)?;
        let k = m / 2;
        let times = self.observation_times[k..self.len() - k].to_vec();
        Ok(TimeSeries::from_parts(self.period, times, second))
    }

    /// Subtract the mean from every observation.
    pub fn demean(&self) -> TimeSeries {
        let mean = self.mean();
        self.with_values(self.values.iter().map(|x| x - mean).collect())
    }

    /// Difference `times` times at `lag`. Each pass drops the first `lag`
    /// observations; `times == 0` returns an identical series.
    pub fn difference(&self, lag: usize, times: usize) -> Result<TimeSeries> {
        let differenced = diff::difference(&self.values, lag, times)?;
        let dropped = lag * times;
        let obs_times = self.observation_times[dropped..].to_vec();
        Ok(TimeSeries::from_parts(self.period, obs_times, differenced))
    }

    /// First difference at lag 1.
    pub fn difference_once(&self) -> Result<TimeSeries> {
        self.difference(1, 1)
    }

    fn elementwise(
        &self,
        other: &[f64],
        op: impl Fn(f64, f64) -> f64,
    ) -> Result<TimeSeries> {
        if other.len() != self.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: self.len(),
                got: other.len(),
            });
        }
        Ok(self.with_values(
            self.values
                .iter()
                .zip(other)
                .map(|(&a, &b)| op(a, b))
                .collect(),
        ))
    }

    /// Element-wise `self - other`. An empty `other` leaves the series unchanged.
    pub fn minus(&self, other: &TimeSeries) -> Result<TimeSeries> {
        self.minus_values(other.values())
    }

    /// Element-wise `self - other`. An empty `other` leaves the series unchanged.
    pub fn minus_values(&self, other: &[f64]) -> Result<TimeSeries> {
        if other.is_empty() {
            return Ok(self.clone());
        }
        self.elementwise(other, |a, b| a - b)
    }

    /// Element-wise sum with a series of equal length.
    pub fn plus(&self, other: &TimeSeries) -> Result<TimeSeries> {
        self.elementwise(other.values(), |a, b| a + b)
    }

    /// Element-wise product with a series of equal length.
    pub fn times(&self, other: &TimeSeries) -> Result<TimeSeries> {
        self.elementwise(other.values(), |a, b| a * b)
    }

    /// Population covariance with another series.
    pub fn covariance(&self, other: &TimeSeries) -> Result<f64> {
        self.check_same_len(other)?;
        Ok(stats::covariance(&self.values, &other.values))
    }

    /// Pearson correlation with another series.
    pub fn correlation(&self, other: &TimeSeries) -> Result<f64> {
        self.check_same_len(other)?;
        Ok(stats::correlation(&self.values, &other.values))
    }

    fn check_same_len(&self, other: &TimeSeries) -> Result<()> {
        if other.len() != self.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: self.len(),
                got: other.len(),
            });
        }
        Ok(())
    }

    /// Observations `start..=end` (0-based, inclusive).
    pub fn slice(&self, start: usize, end: usize) -> Result<TimeSeries> {
        if start > end {
            return Err(ForecastError::InvalidParameter(
                "start must be <= end".to_string(),
            ));
        }
        if end >= self.len() {
            return Err(ForecastError::IndexOutOfBounds {
                index: end,
                size: self.len(),
            });
        }
        Ok(TimeSeries::from_parts(
            self.period,
            self.observation_times[start..=end].to_vec(),
            self.values[start..=end].to_vec(),
        ))
    }

    /// Observations made from `start` to `end`, both inclusive.
    pub fn slice_between(
        &self,
        start: &DateTime<FixedOffset>,
        end: &DateTime<FixedOffset>,
    ) -> Result<TimeSeries> {
        self.slice(self.index_of(start)?, self.index_of(end)?)
    }

    /// Observations `start..=end` counted from 1.
    pub fn time_slice(&self, start: usize, end: usize) -> Result<TimeSeries> {
        if start == 0 {
            return Err(ForecastError::InvalidParameter(
                "time slices are 1-based".to_string(),
            ));
        }
        if end < start {
            return Err(ForecastError::InvalidParameter(
                "start must be <= end".to_string(),
            ));
        }
        self.slice(start - 1, end - 1)
    }

    /// Sum consecutive blocks of observations into the larger `period`.
    ///
    /// The block size is the whole number of source periods that fit in
    /// `period`; each aggregate takes the time of its first observation and a
    /// trailing partial block is dropped.
    ///
    /// # Errors
    /// `InvalidParameter` if `period` is shorter than the series' period.
    pub fn aggregate(&self, period: TimePeriod) -> Result<TimeSeries> {
        let ratio = (self.period.frequency_per(&period) + 1e-9).floor();
        if ratio < 1.0 {
            return Err(ForecastError::InvalidParameter(format!(
                "cannot aggregate a series of period {} to the shorter period {}",
                self.period, period
            )));
        }
        let block = ratio as usize;
        let values: Vec<f64> = self
            .values
            .chunks_exact(block)
            .map(|chunk| chunk.iter().sum())
            .collect();
        let times: Vec<_> = self
            .observation_times
            .iter()
            .step_by(block)
            .take(values.len())
            .copied()
            .collect();
        debug!(
            from = %self.period,
            to = %period,
            block,
            observations = values.len(),
            "aggregated series"
        );
        Ok(TimeSeries::from_parts(period, times, values))
    }

    /// Aggregate to one observation per `unit`.
    pub fn aggregate_to_unit(&self, unit: TimeUnit) -> Result<TimeSeries> {
        self.aggregate(TimePeriod::of(unit))
    }

    pub fn aggregate_to_years(&self) -> Result<TimeSeries> {
        self.aggregate(TimePeriod::one_year())
    }

    /// Observation times in UTC together with the values.
    pub fn plot_data(&self) -> SeriesPlotData {
        SeriesPlotData {
            times: to_utc(&self.observation_times),
            values: self.values.clone(),
        }
    }

    /// Autocorrelations up to lag `k` with white-noise bounds.
    pub fn acf_plot_data(&self, k: usize) -> AcfPlotData {
        let acf = self.auto_correlation_up_to_lag(k);
        let (lower_bound, upper_bound) = white_noise_bounds(self.len());
        AcfPlotData {
            lags: (0..acf.len()).collect(),
            acf,
            lower_bound,
            upper_bound,
        }
    }
}

/// Series are equal when period, values and observation times match. Two
/// times are the same only if both the instant and the UTC offset agree.
impl PartialEq for TimeSeries {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.period == other.period
            && self
                .values
                .iter()
                .zip(&other.values)
                .all(|(a, b)| a.to_bits() == b.to_bits())
            && self
                .observation_times
                .iter()
                .zip(&other.observation_times)
                .all(|(a, b)| a == b && offset_seconds(a) == offset_seconds(b))
    }
}

impl Eq for TimeSeries {}

impl Hash for TimeSeries {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.period.hash(state);
        self.len().hash(state);
        for v in &self.values {
            v.to_bits().hash(state);
        }
        for t in &self.observation_times {
            t.hash(state);
            offset_seconds(t).hash(state);
        }
    }
}

fn offset_seconds(t: &DateTime<FixedOffset>) -> i32 {
    t.offset().local_minus_utc()
}

impl fmt::Display for TimeSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "number of observations: {}", self.len())?;
        writeln!(f, "mean: {:.2}", self.mean())?;
        writeln!(f, "std: {:.2}", self.std_dev())?;
        write!(f, "period: {}", self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::hash_map::DefaultHasher;

    const ACF_SERIES: [f64; 6] = [10.0, 5.0, 4.5, 7.7, 3.4, 6.9];

    /// Annual electricity sales, South Australia 1989-2008 (GWh).
    const ELEC_SALES: [f64; 20] = [
        2354.34, 2379.71, 2318.52, 2468.99, 2386.09, 2569.47, 2575.72, 2762.72, 2844.50, 3000.70,
        3108.10, 3357.50, 3075.70, 3180.60, 3221.60, 3176.20, 3430.60, 3527.48, 3637.89, 3655.00,
    ];

    fn utc(y: i32, m: u32, d: u32) -> DateTime<FixedOffset> {
        utc_offset().with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn quarterly_values(n: usize) -> Vec<f64> {
        (0..n).map(|i| 250.0 + (i % 4) as f64 * 20.0 + i as f64).collect()
    }

    fn hash_of(ts: &TimeSeries) -> u64 {
        let mut hasher = DefaultHasher::new();
        ts.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn time_series_constructs_from_values() {
        let ts = TimeSeries::from_values(vec![3.0, 7.0, 5.0]).unwrap();

        assert_eq!(ts.len(), 3);
        assert!(!ts.is_empty());
        assert_eq!(ts.values(), &[3.0, 7.0, 5.0]);
        assert_eq!(ts.time_period(), TimePeriod::one_month());
        assert_eq!(ts.start_time(), Some(utc(1, 1, 1)));
        assert_eq!(ts.observation_times()[2], utc(1, 3, 1));
    }

    #[test]
    fn summary_statistics_are_computed_at_construction() {
        let ts = TimeSeries::from_values(vec![3.0, 7.0, 5.0]).unwrap();
        assert_eq!(ts.mean(), 5.0);
        assert_eq!(ts.sum(), 15.0);
        assert_eq!(ts.sum_of_squares(), 83.0);
        assert_relative_eq!(ts.variance(), 8.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(ts.std_dev(), (8.0_f64 / 3.0).sqrt(), epsilon = 1e-12);
        assert_eq!(ts.median(), 5.0);
    }

    #[test]
    fn empty_series_is_allowed() {
        let ts = TimeSeries::from_values(vec![]).unwrap();
        assert!(ts.is_empty());
        assert!(ts.start_time().is_none());
        assert!(ts.mean().is_nan());
        assert!(matches!(ts.next_observation_time(), Err(ForecastError::EmptyData)));
    }

    #[test]
    fn start_time_string_without_offset_is_utc() {
        let ts = TimeSeries::with_period_str(
            TimePeriod::one_quarter(),
            "1956-01-01T00:00:00",
            quarterly_values(8),
        )
        .unwrap();
        assert_eq!(ts.start_time(), Some(utc(1956, 1, 1)));
        assert_eq!(ts.end_time(), Some(utc(1957, 10, 1)));

        let quarterly = TimeSeries::quarterly(1956, 1, quarterly_values(8)).unwrap();
        assert_eq!(ts, quarterly);
    }

    #[test]
    fn start_time_string_with_offset_keeps_offset() {
        let ts = TimeSeriesBuilder::new()
            .unit(TimeUnit::Hour)
            .start_str("2024-01-01T09:00:00+02:00")
            .values(vec![1.0, 2.0])
            .build()
            .unwrap();
        let start = ts.start_time().unwrap();
        assert_eq!(start.offset().local_minus_utc(), 7_200);
        assert_eq!(ts.plot_data().times[0].to_rfc3339(), "2024-01-01T07:00:00+00:00");
    }

    #[test]
    fn explicit_observation_times_are_validated() {
        let times = vec![utc(2024, 1, 1), utc(2024, 2, 1)];
        let result =
            TimeSeries::with_observation_times(TimePeriod::one_month(), times.clone(), vec![1.0]);
        assert!(matches!(
            result,
            Err(ForecastError::DimensionMismatch { expected: 1, got: 2 })
        ));

        let backwards = vec![utc(2024, 2, 1), utc(2024, 1, 1)];
        let result =
            TimeSeries::with_observation_times(TimePeriod::one_month(), backwards, vec![1.0, 2.0]);
        assert!(matches!(result, Err(ForecastError::TimestampError(_))));

        let duplicate = vec![utc(2024, 1, 1), utc(2024, 1, 1)];
        let result =
            TimeSeries::with_observation_times(TimePeriod::one_month(), duplicate, vec![1.0, 2.0]);
        assert!(matches!(result, Err(ForecastError::TimestampError(_))));

        let ts = TimeSeries::with_observation_times(TimePeriod::one_month(), times, vec![1.0, 2.0])
            .unwrap();
        assert_eq!(ts.len(), 2);
    }

    #[test]
    fn invalid_factory_arguments() {
        assert!(TimeSeries::quarterly(2000, 5, vec![1.0]).is_err());
        assert!(TimeSeries::monthly(2000, 0, vec![1.0]).is_err());
        assert!(
            TimeSeries::with_period_str(TimePeriod::one_day(), "yesterday", vec![1.0]).is_err()
        );
    }

    #[test]
    fn lookup_by_index_and_time() {
        let ts = TimeSeries::monthly(2000, 1, vec![4.0, 8.0, 15.0]).unwrap();
        assert_eq!(ts.at(0).unwrap(), 4.0);
        assert_eq!(ts.at_time(&utc(2000, 1, 1)).unwrap(), ts.at(0).unwrap());
        assert_eq!(ts.at_time(&utc(2000, 3, 1)).unwrap(), 15.0);
        assert_eq!(ts.index_of(&utc(2000, 2, 1)).unwrap(), 1);
        assert_eq!(ts.date_time_index().len(), 3);

        assert!(matches!(
            ts.at(3),
            Err(ForecastError::IndexOutOfBounds { index: 3, size: 3 })
        ));
        assert!(matches!(
            ts.at_time(&utc(2000, 1, 15)),
            Err(ForecastError::TimestampNotFound(_))
        ));
    }

    #[test]
    fn autocovariance_reference_values() {
        let ts = TimeSeries::from_values(ACF_SERIES.to_vec()).unwrap();
        let expected = [4.889, -1.837, -0.407, 1.310, -1.917, 0.406];
        for (k, &e) in expected.iter().enumerate() {
            assert_relative_eq!(ts.auto_covariance_at_lag(k), e, epsilon = 1e-2);
        }

        let up_to = ts.auto_covariance_up_to_lag(9);
        assert_eq!(up_to.len(), 6);
        for (got, &e) in up_to.iter().zip(expected.iter()) {
            assert_relative_eq!(*got, e, epsilon = 1e-2);
        }
    }

    #[test]
    fn autocorrelation_reference_values() {
        let ts = TimeSeries::from_values(ACF_SERIES.to_vec()).unwrap();
        let expected = [1.000, -0.376, -0.083, 0.268, -0.392, 0.083];
        let up_to = ts.auto_correlation_up_to_lag(5);
        assert_eq!(up_to.len(), 6);
        for (k, &e) in expected.iter().enumerate() {
            assert_relative_eq!(ts.auto_correlation_at_lag(k), e, epsilon = 1e-2);
            assert_relative_eq!(up_to[k], e, epsilon = 1e-2);
        }
        assert_eq!(ts.auto_correlation_at_lag(0), 1.0);
    }

    #[test]
    fn acf_plot_data_has_one_entry_per_lag() {
        let ts = TimeSeries::from_values(ACF_SERIES.to_vec()).unwrap();
        let data = ts.acf_plot_data(3);
        assert_eq!(data.lags, vec![0, 1, 2, 3]);
        assert_eq!(data.acf.len(), 4);
        assert!(data.lower_bound < 0.0 && data.upper_bound > 0.0);
    }

    #[test]
    fn box_cox_log_transform_and_back() {
        let ts = TimeSeries::from_values(vec![3.0, 7.0, std::f64::consts::E]).unwrap();
        let transformed = ts.transform(0.0).unwrap();
        assert_relative_eq!(transformed.at(0).unwrap(), 3.0_f64.ln(), epsilon = 1e-4);
        assert_relative_eq!(transformed.at(1).unwrap(), 7.0_f64.ln(), epsilon = 1e-4);
        assert_relative_eq!(transformed.at(2).unwrap(), 1.0, epsilon = 1e-4);
        assert_eq!(transformed.observation_times(), ts.observation_times());

        let back = transformed.back_transform(0.0).unwrap();
        for (a, b) in back.values().iter().zip(ts.values()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-10);
        }
    }

    #[test]
    fn box_cox_lambda_out_of_range() {
        let ts = TimeSeries::from_values(vec![1.0, 2.0, 3.0]).unwrap();
        for lambda in [2.5, -1.5] {
            assert!(matches!(
                ts.transform(lambda),
                Err(ForecastError::InvalidParameter(_))
            ));
            assert!(matches!(
                ts.back_transform(lambda),
                Err(ForecastError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn five_period_moving_average() {
        let ts = TimeSeries::annual(1989, ELEC_SALES.to_vec()).unwrap();
        let expected = [
            2381.53, 2424.556, 2463.758, 2552.598, 2627.7, 2750.622, 2858.348, 3014.704, 3077.3,
            3144.52, 3188.7, 3202.32, 3216.94, 3307.296, 3398.754, 3485.434,
        ];
        let ma = ts.moving_average(5).unwrap();
        assert_eq!(ma.len(), expected.len());
        for (got, want) in ma.values().iter().zip(expected.iter()) {
            assert_relative_eq!(*got, *want, epsilon = 1e-2);
        }
        assert_eq!(ma.start_time(), Some(utc(1991, 1, 1)));
        assert_eq!(ma.end_time(), Some(utc(2006, 1, 1)));

        let centered = ts.centered_moving_average(5).unwrap();
        assert_eq!(centered, ma);
    }

    #[test]
    fn four_period_moving_average() {
        let ts = TimeSeries::annual(1989, ELEC_SALES.to_vec()).unwrap();
        let expected = [
            2380.39, 2388.3275, 2435.7675, 2500.0675, 2573.5, 2688.1025, 2795.91, 2929.005,
            3077.7, 3135.5, 3180.475, 3208.85, 3163.525, 3252.25, 3338.97, 3443.0425, 3562.7425,
        ];
        let ma = ts.moving_average(4).unwrap();
        assert_eq!(ma.len(), expected.len());
        for (got, want) in ma.values().iter().zip(expected.iter()) {
            assert_relative_eq!(*got, *want, epsilon = 1e-2);
        }
        assert_eq!(ma.start_time(), Some(utc(1990, 1, 1)));
        assert_eq!(ma.end_time(), Some(utc(2006, 1, 1)));
    }

    #[test]
    fn four_period_centered_moving_average() {
        let ts = TimeSeries::annual(1989, ELEC_SALES.to_vec()).unwrap();
        let expected = [
            2384.35875, 2412.0475, 2467.9175, 2536.78375, 2630.80125, 2742.00625, 2862.4575,
            3003.3525, 3106.6, 3157.9875, 3194.6625, 3186.1875, 3207.8875, 3295.61, 3391.00625,
            3502.8925,
        ];
        let cma = ts.centered_moving_average(4).unwrap();
        assert_eq!(cma.len(), expected.len());
        for (got, want) in cma.values().iter().zip(expected.iter()) {
            assert_relative_eq!(*got, *want, epsilon = 1e-2);
        }
        assert_eq!(cma.start_time(), Some(utc(1991, 1, 1)));
        assert_eq!(cma.end_time(), Some(utc(2006, 1, 1)));
    }

    #[test]
    fn moving_average_order_larger_than_series() {
        let ts = TimeSeries::from_values(vec![1.0, 2.0]).unwrap();
        assert!(ts.moving_average(3).is_err());
        assert!(ts.moving_average(0).is_err());
        assert!(ts.centered_moving_average(2).is_err());
    }

    #[test]
    fn demean_centres_on_zero() {
        let ts = TimeSeries::from_values(vec![3.0, 7.0, 5.0]).unwrap();
        let demeaned = ts.demean();
        assert_eq!(demeaned.values(), &[-2.0, 2.0, 0.0]);
        assert_eq!(demeaned.mean(), 0.0);
        assert_eq!(ts.values(), &[3.0, 7.0, 5.0]);
    }

    #[test]
    fn differencing_drops_leading_observations() {
        let ts = TimeSeries::monthly(2020, 1, vec![1.0, 3.0, 6.0, 10.0, 15.0]).unwrap();
        let once = ts.difference_once().unwrap();
        assert_eq!(once.values(), &[2.0, 3.0, 4.0, 5.0]);
        assert_eq!(once.start_time(), Some(utc(2020, 2, 1)));
        assert_eq!(once, ts.difference(1, 1).unwrap());

        let twice = once.difference_once().unwrap();
        assert_eq!(twice, ts.difference(1, 2).unwrap());
        assert_eq!(twice.start_time(), Some(utc(2020, 3, 1)));

        let lagged = ts.difference(2, 1).unwrap();
        assert_eq!(lagged.values(), &[5.0, 7.0, 9.0]);

        assert_eq!(ts.difference(1, 0).unwrap(), ts);
    }

    #[test]
    fn minus_requires_equal_lengths() {
        let a = TimeSeries::from_values(vec![5.0, 7.0, 9.0]).unwrap();
        let b = TimeSeries::from_values(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(a.minus(&b).unwrap().values(), &[4.0, 5.0, 6.0]);

        let empty = TimeSeries::from_values(vec![]).unwrap();
        assert_eq!(a.minus(&empty).unwrap(), a);

        let short = TimeSeries::from_values(vec![1.0]).unwrap();
        assert!(matches!(
            a.minus(&short),
            Err(ForecastError::DimensionMismatch { expected: 3, got: 1 })
        ));
        assert!(a.minus_values(&[1.0, 1.0]).is_err());
    }

    #[test]
    fn plus_times_covariance() {
        let a = TimeSeries::from_values(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = TimeSeries::from_values(vec![2.0, 4.0, 6.0, 8.0]).unwrap();
        assert_eq!(a.plus(&b).unwrap().values(), &[3.0, 6.0, 9.0, 12.0]);
        assert_eq!(a.times(&b).unwrap().values(), &[2.0, 8.0, 18.0, 32.0]);
        assert_relative_eq!(a.covariance(&b).unwrap(), 2.5, epsilon = 1e-12);
        assert_relative_eq!(a.correlation(&b).unwrap(), 1.0, epsilon = 1e-12);

        let short = TimeSeries::from_values(vec![1.0]).unwrap();
        assert!(a.plus(&short).is_err());
        assert!(a.correlation(&short).is_err());
    }

    #[test]
    fn slices_agree_across_index_styles() {
        let ts = TimeSeries::with_period_str(
            TimePeriod::one_quarter(),
            "1956-01-01T00:00:00",
            quarterly_values(12),
        )
        .unwrap();
        let expected = ts.time_slice(2, 5).unwrap();
        assert_eq!(expected.len(), 4);
        assert_eq!(ts.slice(1, 4).unwrap(), expected);
        assert_eq!(
            ts.slice_between(&utc(1956, 4, 1), &utc(1957, 1, 1)).unwrap(),
            expected
        );
        assert_eq!(expected.start_time(), Some(utc(1956, 4, 1)));
    }

    #[test]
    fn invalid_slices() {
        let ts = TimeSeries::from_values(vec![1.0, 2.0, 3.0]).unwrap();
        assert!(matches!(ts.slice(2, 1), Err(ForecastError::InvalidParameter(_))));
        assert!(matches!(
            ts.slice(0, 3),
            Err(ForecastError::IndexOutOfBounds { index: 3, size: 3 })
        ));
        assert!(ts.time_slice(0, 2).is_err());
        assert!(matches!(ts.time_slice(1, 0), Err(ForecastError::InvalidParameter(_))));
        assert!(matches!(ts.time_slice(3, 2), Err(ForecastError::InvalidParameter(_))));
        assert_eq!(ts.time_slice(2, 2).unwrap().values(), &[2.0]);
        assert!(matches!(
            ts.slice_between(&utc(1999, 1, 1), &utc(1999, 2, 1)),
            Err(ForecastError::TimestampNotFound(_))
        ));
    }

    #[test]
    fn aggregate_quarters_to_decades() {
        let ts = TimeSeries::quarterly(1956, 1, quarterly_values(218)).unwrap();
        let decades = ts.aggregate_to_unit(TimeUnit::Decade).unwrap();

        assert_eq!(decades.len(), 5);
        assert_eq!(decades.start_time(), Some(utc(1956, 1, 1)));
        assert_eq!(decades.end_time(), Some(utc(1996, 1, 1)));
        assert_eq!(decades.time_period(), TimePeriod::one_decade());
        let first_block: f64 = ts.values()[..40].iter().sum();
        assert_relative_eq!(decades.at(0).unwrap(), first_block, epsilon = 1e-9);
    }

    #[test]
    fn aggregate_months_to_years() {
        let values: Vec<f64> = (1..=30).map(f64::from).collect();
        let ts = TimeSeries::monthly(2000, 1, values).unwrap();
        let years = ts.aggregate_to_years().unwrap();
        assert_eq!(years, ts.aggregate(TimePeriod::one_year()).unwrap());
        assert_eq!(years.values(), &[78.0, 222.0]);
        assert_eq!(years.observation_times(), &[utc(2000, 1, 1), utc(2001, 1, 1)]);
    }

    #[test]
    fn aggregate_weeks_to_years_uses_whole_weeks() {
        let ts = TimeSeries::with_unit(TimeUnit::Week, utc(2000, 1, 2), vec![1.0; 110]).unwrap();
        let years = ts.aggregate_to_years().unwrap();
        assert_eq!(years.values(), &[52.0, 52.0]);
    }

    #[test]
    fn aggregate_to_smaller_period_fails() {
        let ts = TimeSeries::quarterly(1956, 1, quarterly_values(8)).unwrap();
        assert!(matches!(
            ts.aggregate(TimePeriod::one_month()),
            Err(ForecastError::InvalidParameter(_))
        ));
    }

    #[test]
    fn equality_and_hash() {
        let values = quarterly_values(20);
        let a = TimeSeries::quarterly(1956, 1, values.clone()).unwrap();
        let b = TimeSeries::quarterly(1956, 1, values.clone()).unwrap();
        let shifted = TimeSeries::quarterly(1957, 2, values.clone()).unwrap();
        let other = TimeSeries::annual(1989, ELEC_SALES.to_vec()).unwrap();

        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, shifted);
        assert_ne!(shifted, other);

        let mut changed = values.clone();
        changed[3] += 1e-9;
        assert_ne!(a, TimeSeries::quarterly(1956, 1, changed).unwrap());

        let monthly_times = TimeSeries::with_observation_times(
            TimePeriod::one_month(),
            a.observation_times().to_vec(),
            values,
        )
        .unwrap();
        assert_ne!(a, monthly_times);
    }

    #[test]
    fn equality_distinguishes_utc_offsets() {
        let values = quarterly_values(8);
        let in_utc = TimeSeries::quarterly(1956, 1, values.clone()).unwrap();
        let east = FixedOffset::east_opt(2 * 3600).unwrap();
        let same_instants: Vec<DateTime<FixedOffset>> = in_utc
            .observation_times()
            .iter()
            .map(|t| t.with_timezone(&east))
            .collect();
        let in_east =
            TimeSeries::with_observation_times(TimePeriod::one_quarter(), same_instants, values)
                .unwrap();

        assert_eq!(in_utc.start_time(), in_east.start_time());
        assert_ne!(in_utc, in_east);
        assert_eq!(in_east, in_east.clone());
        assert_eq!(hash_of(&in_east), hash_of(&in_east.clone()));
    }

    #[test]
    fn display_summarises_series() {
        let ts = TimeSeries::from_values(vec![3.0, 7.0, 5.0]).unwrap();
        let text = ts.to_string();
        assert!(text.contains("number of observations: 3"));
        assert!(text.contains("mean: 5.00"));
        assert!(text.contains("period: 1 month"));
    }
}
