//! Core traits and error types for streaming sketches
//!
//! All sketches implement the base [`Sketch`] trait, with specialized traits
//! for each algorithm family (cardinality, frequency, membership).

use core::fmt::{self, Debug};

use thiserror::Error;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Error raised when a sketch is constructed with out-of-range parameters
///
/// Parameters are never clamped: construction either succeeds with exactly
/// the requested configuration or fails with one of these.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConstructionError {
    #[error("precision must be between 4 and 16, got {0}")]
    InvalidPrecision(u8),
    #[error("target error must be in (0, 1), got {0}")]
    InvalidTargetError(f64),
    #[error("expected_items must be positive")]
    InvalidExpectedItems,
    #[error("false positive rate must be in (0, 1), got {0}")]
    InvalidFalsePositiveRate(f64),
    #[error("epsilon must be in (0, 1), got {0}")]
    InvalidEpsilon(f64),
    #[error("delta must be in (0, 1), got {0}")]
    InvalidDelta(f64),
    #[error("{0} must be positive")]
    ZeroDimension(&'static str),
    /// The derived or requested size cannot be allocated
    #[error("{0} is too large to allocate")]
    CapacityOverflow(&'static str),
}

/// Allocate `len` default cells, reporting failure instead of aborting
pub(crate) fn try_alloc_cells<T: Clone + Default>(
    len: usize,
    what: &'static str,
) -> Result<Vec<T>, ConstructionError> {
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(len)
        .map_err(|_| ConstructionError::CapacityOverflow(what))?;
    cells.resize(len, T::default());
    Ok(cells)
}

/// Error during sketch merge operation
///
/// A failed merge leaves both operands untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MergeError {
    /// Sketches have different structural parameters
    #[error("shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch { expected: Shape, found: Shape },
}

/// An operation the sketch's configured variant does not support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{operation} is not supported by this sketch variant")]
pub struct UnsupportedOperation {
    pub operation: &'static str,
}

/// Fixed structural parameters two sketches must share to be merged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// HyperLogLog register array
    Registers { precision: u8 },
    /// Bloom filter bit (or counter) array
    Bits {
        num_bits: usize,
        num_hashes: usize,
        counting: bool,
    },
    /// Count-Min counter matrix
    Matrix {
        depth: usize,
        width: usize,
        conservative: bool,
    },
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Registers { precision } => write!(f, "precision={}", precision),
            Shape::Bits {
                num_bits,
                num_hashes,
                counting,
            } => {
                write!(f, "bits={}, hashes={}", num_bits, num_hashes)?;
                if *counting {
                    write!(f, ", counting")?;
                }
                Ok(())
            }
            Shape::Matrix {
                depth,
                width,
                conservative,
            } => {
                write!(f, "{}x{}", depth, width)?;
                if *conservative {
                    write!(f, ", conservative")?;
                }
                Ok(())
            }
        }
    }
}

impl MergeError {
    pub(crate) fn shape(expected: Shape, found: Shape) -> Self {
        tracing::debug!(%expected, %found, "rejecting merge of incompatible sketches");
        MergeError::ShapeMismatch { expected, found }
    }
}

/// Error bounds for a sketch estimate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorBounds {
    /// Lower bound of the estimate
    pub lower: f64,
    /// Point estimate
    pub estimate: f64,
    /// Upper bound of the estimate
    pub upper: f64,
    /// Confidence level (e.g., 0.95 for 95%)
    pub confidence: f64,
}

impl ErrorBounds {
    /// Create bounds around a point estimate
    pub fn new(lower: f64, estimate: f64, upper: f64, confidence: f64) -> Self {
        Self {
            lower,
            estimate,
            upper,
            confidence,
        }
    }

    /// Check if a value falls within bounds
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Relative width (width / estimate)
    pub fn relative_width(&self) -> f64 {
        if self.estimate == 0.0 {
            0.0
        } else {
            self.width() / self.estimate
        }
    }
}

/// Core trait for all streaming sketches
///
/// Sketches are single-owner aggregates: `update`, `merge` and `clear` take
/// `&mut self`, so concurrent ingestion means one sketch per worker merged
/// afterwards.
pub trait Sketch: Clone + Debug {
    /// The type of item this sketch processes
    type Item: ?Sized;

    /// Add an item to the sketch
    fn update(&mut self, item: &Self::Item);

    /// Merge another sketch into this one
    ///
    /// Returns an error if the sketches have different shapes.
    fn merge(&mut self, other: &Self) -> Result<(), MergeError>;

    /// Reset sketch to empty state
    fn clear(&mut self);

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of items processed
    fn count(&self) -> u64;

    /// Structural parameters that must match for a merge
    fn shape(&self) -> Shape;

    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Cardinality (distinct count) estimation sketches
pub trait CardinalitySketch: Sketch {
    /// Estimate number of distinct items seen
    fn estimate(&self) -> f64;

    /// Get error bounds at given confidence level (0.0 to 1.0)
    fn error_bounds(&self, confidence: f64) -> ErrorBounds;

    /// Relative standard error (RSE) of the estimate
    ///
    /// RSE = standard_error / true_value ≈ 1.04 / sqrt(m) for HLL
    fn relative_error(&self) -> f64;

    /// Estimate with default 95% confidence bounds
    fn estimate_with_bounds(&self) -> ErrorBounds {
        self.error_bounds(0.95)
    }
}

/// Frequency estimation sketches
pub trait FrequencySketch: Sketch {
    /// Estimate frequency of an item
    fn estimate_frequency(&self, item: &Self::Item) -> u64;

    /// Check if frequency exceeds threshold
    fn exceeds_threshold(&self, item: &Self::Item, threshold: u64) -> bool {
        self.estimate_frequency(item) >= threshold
    }
}

/// Membership testing sketches (Bloom filters, etc.)
pub trait MembershipSketch: Sketch {
    /// Test if item might be in set
    ///
    /// - `true` means item might be present (possible false positive)
    /// - `false` means item is definitely not present
    fn contains(&self, item: &Self::Item) -> bool;

    /// False positive rate given current state
    fn false_positive_rate(&self) -> f64;

    /// Number of items currently held (insertions minus removals)
    fn len(&self) -> usize;

    fn is_filter_empty(&self) -> bool {
        self.len() == 0
    }
}
