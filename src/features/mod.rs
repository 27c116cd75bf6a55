//! Time series features.
//!
//! # Example
//!
//! ```
//! use timeseries_forecast::features::{autocorrelations, autocovariance};
//!
//! let series = vec![10.0, 5.0, 4.5, 7.7, 3.4, 6.9];
//!
//! let gamma_1 = autocovariance(&series, 1);
//! let acf = autocorrelations(&series, 3);
//! assert_eq!(acf.len(), 4);
//! assert_eq!(acf[0], 1.0);
//! # let _ = gamma_1;
//! ```

pub mod autocorrelation;

pub use autocorrelation::{
    autocorrelation, autocorrelations, autocovariance, autocovariances, white_noise_bounds,
};
