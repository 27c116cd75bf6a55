//! Numeric utilities shared by the series and the models.

pub mod distributions;
pub mod real;
pub mod stats;

pub use distributions::{Distribution, Normal, StudentsT};
pub use real::{Real, RealInterval};
