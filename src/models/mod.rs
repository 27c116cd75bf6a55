//! Forecasting models.

mod traits;

pub mod baseline;

pub use traits::{BoxedModel, Model};
