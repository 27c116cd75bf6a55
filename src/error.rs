//! Error types for the timeseries-forecast library.

use thiserror::Error;

/// Result type alias for time series and forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while building, transforming or forecasting a series.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Length mismatch between two series or between values and timestamps.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Timestamp could not be parsed or the sequence is malformed.
    #[error("timestamp error: {0}")]
    TimestampError(String),

    /// Lookup by a date-time that is not an observation time of the series.
    #[error("no observation at {0}")]
    TimestampNotFound(String),

    /// Index out of bounds.
    #[error("index out of bounds: {index} (size: {size})")]
    IndexOutOfBounds { index: usize, size: usize },

    /// Operation undefined for the current value (e.g. square root of a negative number).
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Computation error reported by the numeric backend.
    #[error("computation error: {0}")]
    ComputationError(String),
}

impl From<statrs::StatsError> for ForecastError {
    fn from(err: statrs::StatsError) -> Self {
        ForecastError::ComputationError(err.to_string())
    }
}
