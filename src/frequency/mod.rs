//! Frequency estimation algorithms
//!
//! This module provides implementations of sketches for estimating item
//! frequencies in a data stream.
//!
//! # Algorithms
//!
//! - [`CountMinSketch`]: Classic count-min sketch with optional conservative update
//!
//! # Example
//!
//! ```
//! use streamsketch::frequency::{CountMinSketch, UpdateMode};
//!
//! let mut cms = CountMinSketch::with_mode(0.01, 0.001, UpdateMode::Conservative).unwrap();
//!
//! cms.add(b"item1", 5);
//! cms.add(b"item2", 3);
//!
//! let count = cms.estimate(b"item1");
//! println!("Estimated count: {}", count);
//! ```

mod count_min;

pub use count_min::{CountMinSketch, SketchInfo, UpdateMode};

use crate::math;

/// Row width for a target error: `ceil(e / epsilon)`
pub fn width_for_epsilon(epsilon: f64) -> usize {
    math::ceil(core::f64::consts::E / epsilon) as usize
}

/// Row count for a failure probability: `ceil(ln(1 / delta))`
pub fn depth_for_delta(delta: f64) -> usize {
    (math::ceil(math::ln(1.0 / delta)) as usize).max(1)
}
