//! Units of time and regular observation periods.

use crate::error::{ForecastError, Result};
use chrono::{DateTime, Duration, FixedOffset, Months};
use std::fmt;

const NANOS_PER_SECOND: i128 = 1_000_000_000;
/// Average Gregorian year: 365.2425 days.
const SECONDS_PER_YEAR: i128 = 31_556_952;
const SECONDS_PER_MONTH: i128 = SECONDS_PER_YEAR / 12;

/// Granularity at which observations are made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimeUnit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
    Decade,
    Century,
}

/// How a unit moves a date-time forward on the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CalendarStep {
    /// Calendar months; day-of-month is clamped to the end of shorter months.
    Months(u32),
    /// Fixed elapsed time in nanoseconds.
    Exact(i128),
}

impl TimeUnit {
    /// Nominal length of one unit in nanoseconds.
    ///
    /// Months and longer use the average Gregorian year, so the value is an
    /// estimate for those units.
    pub fn nominal_nanos(self) -> i128 {
        match self {
            TimeUnit::Nanosecond => 1,
            TimeUnit::Microsecond => 1_000,
            TimeUnit::Millisecond => 1_000_000,
            TimeUnit::Second => NANOS_PER_SECOND,
            TimeUnit::Minute => 60 * NANOS_PER_SECOND,
            TimeUnit::Hour => 3_600 * NANOS_PER_SECOND,
            TimeUnit::Day => 86_400 * NANOS_PER_SECOND,
            TimeUnit::Week => 7 * 86_400 * NANOS_PER_SECOND,
            TimeUnit::Month => SECONDS_PER_MONTH * NANOS_PER_SECOND,
            TimeUnit::Quarter => 3 * SECONDS_PER_MONTH * NANOS_PER_SECOND,
            TimeUnit::Year => SECONDS_PER_YEAR * NANOS_PER_SECOND,
            TimeUnit::Decade => 10 * SECONDS_PER_YEAR * NANOS_PER_SECOND,
            TimeUnit::Century => 100 * SECONDS_PER_YEAR * NANOS_PER_SECOND,
        }
    }

    fn calendar_step(self) -> CalendarStep {
        match self {
            TimeUnit::Month => CalendarStep::Months(1),
            TimeUnit::Quarter => CalendarStep::Months(3),
            TimeUnit::Year => CalendarStep::Months(12),
            TimeUnit::Decade => CalendarStep::Months(120),
            TimeUnit::Century => CalendarStep::Months(1_200),
            other => CalendarStep::Exact(other.nominal_nanos()),
        }
    }

    /// Lower-case singular name.
    pub fn name(self) -> &'static str {
        match self {
            TimeUnit::Nanosecond => "nanosecond",
            TimeUnit::Microsecond => "microsecond",
            TimeUnit::Millisecond => "millisecond",
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Quarter => "quarter",
            TimeUnit::Year => "year",
            TimeUnit::Decade => "decade",
            TimeUnit::Century => "century",
        }
    }

    fn plural_name(self) -> &'static str {
        match self {
            TimeUnit::Century => "centuries",
            TimeUnit::Nanosecond => "nanoseconds",
            TimeUnit::Microsecond => "microseconds",
            TimeUnit::Millisecond => "milliseconds",
            TimeUnit::Second => "seconds",
            TimeUnit::Minute => "minutes",
            TimeUnit::Hour => "hours",
            TimeUnit::Day => "days",
            TimeUnit::Week => "weeks",
            TimeUnit::Month => "months",
            TimeUnit::Quarter => "quarters",
            TimeUnit::Year => "years",
            TimeUnit::Decade => "decades",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A unit of time repeated a whole number of times, e.g. "3 months".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimePeriod {
    unit: TimeUnit,
    length: u32,
}

impl TimePeriod {
    /// Create a period of `length` units. `length` must be at least 1.
    pub fn new(unit: TimeUnit, length: u32) -> Result<Self> {
        if length == 0 {
            return Err(ForecastError::InvalidParameter(
                "period length must be at least 1".to_string(),
            ));
        }
        Ok(Self { unit, length })
    }

    /// A period of exactly one unit.
    pub const fn of(unit: TimeUnit) -> Self {
        Self { unit, length: 1 }
    }

    pub const fn one_century() -> Self {
        Self::of(TimeUnit::Century)
    }

    pub const fn one_decade() -> Self {
        Self::of(TimeUnit::Decade)
    }

    pub const fn one_year() -> Self {
        Self::of(TimeUnit::Year)
    }

    pub const fn one_quarter() -> Self {
        Self::of(TimeUnit::Quarter)
    }

    pub const fn one_month() -> Self {
        Self::of(TimeUnit::Month)
    }

    pub const fn one_week() -> Self {
        Self::of(TimeUnit::Week)
    }

    pub const fn one_day() -> Self {
        Self::of(TimeUnit::Day)
    }

    pub const fn one_hour() -> Self {
        Self::of(TimeUnit::Hour)
    }

    pub const fn one_minute() -> Self {
        Self::of(TimeUnit::Minute)
    }

    pub const fn one_second() -> Self {
        Self::of(TimeUnit::Second)
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Number of units in the period.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Nominal length of the whole period in nanoseconds.
    pub fn total_nanos(&self) -> i128 {
        self.unit.nominal_nanos() * i128::from(self.length)
    }

    /// How many of `self` fit into `other`, by nominal length.
    ///
    /// A monthly period has a frequency of 3 per quarter and 12 per year;
    /// a quarterly period has a frequency of 1/3 per month.
    pub fn frequency_per(&self, other: &TimePeriod) -> f64 {
        other.total_nanos() as f64 / self.total_nanos() as f64
    }

    /// Move `start` forward by one period.
    pub fn advance(&self, start: DateTime<FixedOffset>) -> Result<DateTime<FixedOffset>> {
        let overflow = || {
            ForecastError::TimestampError(format!("advancing {} by {} overflows", start, self))
        };
        match self.unit.calendar_step() {
            CalendarStep::Months(months) => {
                let total = months.checked_mul(self.length).ok_or_else(overflow)?;
                start.checked_add_months(Months::new(total)).ok_or_else(overflow)
            }
            CalendarStep::Exact(nanos) => {
                let total = nanos * i128::from(self.length);
                let total = i64::try_from(total).map_err(|_| overflow())?;
                start
                    .checked_add_signed(Duration::nanoseconds(total))
                    .ok_or_else(overflow)
            }
        }
    }

    /// Generate `count` observation times beginning at `start`, one period apart.
    pub fn observation_times(
        &self,
        start: DateTime<FixedOffset>,
        count: usize,
    ) -> Result<Vec<DateTime<FixedOffset>>> {
        let mut times = Vec::with_capacity(count);
        if count == 0 {
            return Ok(times);
        }
        let mut current = start;
        times.push(current);
        for _ in 1..count {
            current = self.advance(current)?;
            times.push(current);
        }
        Ok(times)
    }
}

impl Default for TimePeriod {
    fn default() -> Self {
        Self::one_month()
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.length == 1 {
            write!(f, "1 {}", self.unit.name())
        } else {
            write!(f, "{} {}", self.length, self.unit.plural_name())
        }
    }
}
