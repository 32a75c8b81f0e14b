//! Core types for ROI histogram analysis
//!
//! Shared error type plus the small descriptive helpers (mean, min/max scan,
//! finiteness check, ROI metric) that the quantile and histogram crates
//! build on.

pub mod descriptive;
pub mod error;

pub use descriptive::{mean, min_max, roi_percent, validate_finite};
pub use error::{Error, Result};
