//! Quantile estimation and quantile-band clipping
//!
//! # Examples
//!
//! ```rust
//! use roi_quantile::{clip_quantiles, quantile, SortedSample};
//!
//! let roi = vec![10.0, 12.0, 11.0, 50.0, 13.0, 9.0, 14.0, 11.5, 12.5, 100.0];
//!
//! // One-off query: sorts a private copy
//! let median = quantile(&roi, 0.5);
//! assert_eq!(median, 12.25);
//!
//! // Many queries over the same data: sort once
//! let sorted = SortedSample::new(&roi);
//! assert_eq!(sorted.quantile(0.0), 9.0);
//! assert_eq!(sorted.quantile(1.0), 100.0);
//!
//! // Drop the 1% tails before estimating a bin width
//! let clipped = clip_quantiles(&roi, 0.01, 0.99);
//! assert_eq!(clipped.len(), 8);
//! ```

pub mod clip;
pub mod linear;

pub use clip::{clip_quantiles, ClipBounds};
pub use linear::{iqr_sorted, quantile, quantile_sorted, SortedSample};

pub use roi_core::{Error, Result};
