//! Membership testing data structures
//!
//! This module provides probabilistic data structures for testing set membership.
//! These structures trade a small probability of false positives for significant
//! space savings compared to exact set representations.
//!
//! # Example
//!
//! ```
//! use streamsketch::membership::BloomFilter;
//!
//! let mut bloom = BloomFilter::new(1000, 0.01).unwrap();
//! bloom.insert(b"hello");
//! assert!(bloom.contains(b"hello"));
//! ```

mod bloom;

pub use bloom::{BloomFilter, BloomVariant, FilterInfo, COUNTER_MAX};

use crate::math;
use core::f64::consts::LN_2;

/// Optimal number of bits: `m = ceil(-n · ln(p) / ln(2)²)`
///
/// Saturates at `usize::MAX` when `m` is not representable.
pub fn optimal_num_bits(expected_items: usize, false_positive_rate: f64) -> usize {
    required_bits(expected_items, false_positive_rate) as usize
}

/// `m` before the usize cast
pub(crate) fn required_bits(expected_items: usize, false_positive_rate: f64) -> f64 {
    let n = expected_items as f64;
    math::ceil(-n * math::ln(false_positive_rate) / (LN_2 * LN_2))
}

/// Optimal number of probes: `k = max(1, round((m / n) · ln 2))`
pub fn optimal_num_hashes(num_bits: usize, expected_items: usize) -> usize {
    let k = math::round((num_bits as f64 / expected_items as f64) * LN_2) as usize;
    k.max(1)
}
