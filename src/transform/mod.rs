//! Transformations of plain value sequences.
//!
//! Provides Box-Cox transforms, differencing and moving averages.
//!
//! # Example
//!
//! ```
//! use timeseries_forecast::transform::{boxcox, difference, inv_boxcox, moving_average};
//!
//! let series = vec![1.0, 2.0, 4.0, 7.0, 11.0];
//!
//! // Natural log transform and back
//! let logged = boxcox(&series, 0.0);
//! let restored = inv_boxcox(&logged, 0.0);
//! assert!((restored[2] - 4.0).abs() < 1e-12);
//!
//! // Second differences
//! let d2 = difference(&series, 1, 2).unwrap();
//! assert_eq!(d2, vec![1.0, 1.0, 1.0]);
//!
//! // Moving average of order 3
//! let ma = moving_average(&series, 3).unwrap();
//! assert_eq!(ma.len(), 3);
//! ```

pub mod boxcox;
pub mod diff;
pub mod window;

pub use boxcox::{boxcox, inv_boxcox, validate_lambda, MAX_LAMBDA, MIN_LAMBDA};
pub use diff::difference;
pub use window::{moving_average, moving_average_offsets};
