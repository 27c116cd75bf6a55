//! Baseline forecasting models.
//!
//! Simple methods that serve as benchmarks for more complex models.

mod mean;
mod random_walk;

pub use mean::{MeanForecast, MeanModel};
pub use random_walk::{RandomWalk, RandomWalkForecast};
