//! Count-Min Sketch frequency estimator
//!
//! The Count-Min Sketch is a probabilistic data structure for estimating
//! the frequency of elements in a data stream.

use crate::hash::{row_hash, ItemHasher, Xxh3Hasher};
use crate::math;
use crate::traits::{
    try_alloc_cells, ConstructionError, FrequencySketch, MergeError, Shape, Sketch,
};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// How [`CountMinSketch::add`] updates the counter matrix
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UpdateMode {
    /// Add the weight to the item's counter in every row
    #[default]
    Standard,
    /// Raise the item's counters only as far as `min + weight`
    ///
    /// Counters already above the new minimum stay untouched, which reduces
    /// overestimation while keeping `estimate >= true count`.
    Conservative,
}

/// Summary of a sketch's configuration and error guarantee
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SketchInfo {
    pub width: usize,
    pub depth: usize,
    pub total_counters: usize,
    pub size_bytes: usize,
    pub epsilon: f64,
    pub delta: f64,
    pub mode: UpdateMode,
    pub total_count: u64,
    /// `epsilon * total_count`
    pub max_error: f64,
    /// `1 - delta`
    pub confidence: f64,
}

/// Count-Min Sketch for frequency estimation
///
/// The Count-Min Sketch provides frequency estimates with the following guarantees:
/// - Point query: `actual_count <= estimate <= actual_count + ε * N`
/// - Where ε = e/width and N is the total count
/// - Probability of exceeding the error bound: δ = e^-depth
///
/// # Example
///
/// ```
/// use streamsketch::frequency::CountMinSketch;
///
/// // Create with 1% error rate and 0.1% failure probability
/// let mut cms = CountMinSketch::new(0.01, 0.001).unwrap();
///
/// cms.add(b"apple", 5);
/// cms.add(b"banana", 3);
/// cms.add(b"apple", 2);
///
/// assert!(cms.estimate(b"apple") >= 7);
/// assert!(cms.estimate(b"banana") >= 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CountMinSketch<H = Xxh3Hasher> {
    /// Width of each row
    width: usize,
    /// Number of rows (hash functions)
    depth: usize,
    /// Counter table
    table: Vec<Vec<u64>>,
    /// Total weight of all items
    total_count: u64,
    /// Number of updates
    num_updates: u64,
    mode: UpdateMode,
    epsilon: f64,
    delta: f64,
    hasher: H,
}

impl CountMinSketch {
    /// Create a new Count-Min Sketch with the given error parameters
    ///
    /// # Arguments
    ///
    /// * `epsilon` - Maximum overcount as a fraction of total (e.g., 0.01 for 1%)
    /// * `delta` - Probability of exceeding the error bound (e.g., 0.001 for 0.1%)
    pub fn new(epsilon: f64, delta: f64) -> Result<Self, ConstructionError> {
        Self::with_mode(epsilon, delta, UpdateMode::Standard)
    }

    /// Create a sketch using conservative update
    pub fn conservative(epsilon: f64, delta: f64) -> Result<Self, ConstructionError> {
        Self::with_mode(epsilon, delta, UpdateMode::Conservative)
    }

    /// Create a sketch from error parameters with the given update mode
    pub fn with_mode(
        epsilon: f64,
        delta: f64,
        mode: UpdateMode,
    ) -> Result<Self, ConstructionError> {
        Self::with_hasher(epsilon, delta, mode, Xxh3Hasher::new())
    }

    /// Create a Count-Min Sketch with specific dimensions
    ///
    /// # Arguments
    ///
    /// * `width` - Width of each row (larger = lower error)
    /// * `depth` - Number of rows (larger = lower failure probability)
    pub fn with_dimensions(width: usize, depth: usize) -> Result<Self, ConstructionError> {
        Self::from_dimensions(width, depth, UpdateMode::Standard, Xxh3Hasher::new())
    }
}

impl<H: ItemHasher> CountMinSketch<H> {
    /// Create a sketch from error parameters with an explicit hasher
    ///
    /// `width = ceil(e / epsilon)`, `depth = ceil(ln(1 / delta))`.
    pub fn with_hasher(
        epsilon: f64,
        delta: f64,
        mode: UpdateMode,
        hasher: H,
    ) -> Result<Self, ConstructionError> {
        if !(epsilon > 0.0 && epsilon < 1.0) {
            return Err(ConstructionError::InvalidEpsilon(epsilon));
        }
        if !(delta > 0.0 && delta < 1.0) {
            return Err(ConstructionError::InvalidDelta(delta));
        }

        // Tiny epsilons push the width past what a usize cast can represent
        if math::ceil(core::f64::consts::E / epsilon) >= usize::MAX as f64 {
            return Err(ConstructionError::CapacityOverflow("width"));
        }
        let width = super::width_for_epsilon(epsilon);
        let depth = super::depth_for_delta(delta);

        let mut sketch = Self::from_dimensions(width, depth, mode, hasher)?;
        sketch.epsilon = epsilon;
        sketch.delta = delta;
        Ok(sketch)
    }

    /// Create a sketch with explicit dimensions and an explicit hasher
    pub fn from_dimensions(
        width: usize,
        depth: usize,
        mode: UpdateMode,
        hasher: H,
    ) -> Result<Self, ConstructionError> {
        if width == 0 {
            return Err(ConstructionError::ZeroDimension("width"));
        }
        if depth == 0 {
            return Err(ConstructionError::ZeroDimension("depth"));
        }
        width
            .checked_mul(depth)
            .and_then(|cells| cells.checked_mul(core::mem::size_of::<u64>()))
            .filter(|&bytes| bytes <= isize::MAX as usize)
            .ok_or(ConstructionError::CapacityOverflow("counter table"))?;

        let mut table = Vec::new();
        table
            .try_reserve_exact(depth)
            .map_err(|_| ConstructionError::CapacityOverflow("counter table"))?;
        for _ in 0..depth {
            table.push(try_alloc_cells(width, "counter table")?);
        }
        tracing::debug!(width, depth, ?mode, "created count-min sketch");

        Ok(Self {
            width,
            depth,
            table,
            total_count: 0,
            num_updates: 0,
            mode,
            epsilon: core::f64::consts::E / width as f64,
            delta: math::exp(-(depth as f64)),
            hasher,
        })
    }

    /// Get the width of the sketch
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the depth of the sketch
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Get the total weight of all items
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Get the update mode chosen at construction
    pub fn mode(&self) -> UpdateMode {
        self.mode
    }

    /// Relative error tolerance; `e / width` when built from dimensions
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Failure probability; `e^-depth` when built from dimensions
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Probability that an estimate stays within [`error_bound`](Self::error_bound)
    pub fn confidence(&self) -> f64 {
        1.0 - self.delta
    }

    /// Get the hasher rows derive their columns from
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    #[inline]
    fn column(&self, hash: u64, row: usize) -> usize {
        (row_hash(hash, row) % self.width as u64) as usize
    }

    /// Add `count` occurrences of an item
    pub fn add(&mut self, item: &[u8], count: u64) {
        let hash = self.hasher.hash(item);
        self.add_hash(hash, count);
    }

    /// Add `count` occurrences of an item by its pre-computed base hash
    pub fn add_hash(&mut self, hash: u64, count: u64) {
        self.num_updates += 1;
        self.total_count = self.total_count.saturating_add(count);

        match self.mode {
            UpdateMode::Standard => {
                for row in 0..self.depth {
                    let col = self.column(hash, row);
                    self.table[row][col] = self.table[row][col].saturating_add(count);
                }
            }
            UpdateMode::Conservative => self.add_conservative(hash, count),
        }
    }

    /// Conservative update: raise every counter of the item to at least
    /// `min + count`. For `count == 1` this increments exactly the counters
    /// that equal the current minimum.
    fn add_conservative(&mut self, hash: u64, count: u64) {
        // First pass: find current estimate (minimum)
        let min_val = self.estimate_hash(hash);
        let new_val = min_val.saturating_add(count);

        // Second pass: lift counters below the new minimum
        for row in 0..self.depth {
            let col = self.column(hash, row);
            if self.table[row][col] < new_val {
                self.table[row][col] = new_val;
            }
        }
    }

    /// Estimate the frequency of an item
    pub fn estimate(&self, item: &[u8]) -> u64 {
        self.estimate_hash(self.hasher.hash(item))
    }

    /// Estimate the frequency of an item by its pre-computed base hash
    pub fn estimate_hash(&self, hash: u64) -> u64 {
        (0..self.depth)
            .map(|row| self.table[row][self.column(hash, row)])
            .min()
            .unwrap_or(0)
    }

    /// Candidates whose estimated frequency is at least `threshold`
    ///
    /// The sketch does not remember items, so the caller supplies the
    /// candidate set (e.g. the distinct keys of the current window).
    pub fn heavy_hitters<'a, I>(&self, candidates: I, threshold: u64) -> Vec<(&'a [u8], u64)>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut hitters: Vec<(&'a [u8], u64)> = candidates
            .into_iter()
            .map(|item| (item, self.estimate(item)))
            .filter(|&(_, estimate)| estimate >= threshold)
            .collect();
        hitters.sort_by(|a, b| b.1.cmp(&a.1));
        hitters
    }

    /// Inner product of two sketches
    ///
    /// Estimates the dot product of two frequency distributions; never
    /// underestimates it.
    pub fn inner_product(&self, other: &Self) -> Result<u64, MergeError> {
        if self.shape() != other.shape() {
            return Err(MergeError::shape(self.shape(), other.shape()));
        }

        let mut min_product = u64::MAX;

        for row in 0..self.depth {
            let product: u64 = self.table[row]
                .iter()
                .zip(other.table[row].iter())
                .fold(0u64, |acc, (&a, &b)| acc.saturating_add(a.saturating_mul(b)));
            min_product = min_product.min(product);
        }

        Ok(min_product)
    }

    /// Additive error bound `epsilon * total_count`, rounded up
    ///
    /// Holds with probability at least [`confidence`](Self::confidence).
    pub fn error_bound(&self) -> u64 {
        math::ceil(self.max_error()) as u64
    }

    fn max_error(&self) -> f64 {
        self.epsilon * self.total_count as f64
    }

    /// Snapshot of dimensions, parameters and the current error bound
    pub fn info(&self) -> SketchInfo {
        SketchInfo {
            width: self.width,
            depth: self.depth,
            total_counters: self.width * self.depth,
            size_bytes: self.size_bytes(),
            epsilon: self.epsilon,
            delta: self.delta,
            mode: self.mode,
            total_count: self.total_count,
            max_error: self.max_error(),
            confidence: self.confidence(),
        }
    }
}

impl<H: ItemHasher> Sketch for CountMinSketch<H> {
    type Item = [u8];

    fn update(&mut self, item: &[u8]) {
        self.add(item, 1);
    }

    fn merge(&mut self, other: &Self) -> Result<(), MergeError> {
        if self.shape() != other.shape() {
            return Err(MergeError::shape(self.shape(), other.shape()));
        }
        self.hasher.debug_assert_same_output(&other.hasher);

        for (ours, theirs) in self.table.iter_mut().zip(other.table.iter()) {
            for (a, &b) in ours.iter_mut().zip(theirs.iter()) {
                *a = a.saturating_add(b);
            }
        }

        self.total_count = self.total_count.saturating_add(other.total_count);
        self.num_updates = self.num_updates.saturating_add(other.num_updates);

        Ok(())
    }

    fn clear(&mut self) {
        for row in &mut self.table {
            row.fill(0);
        }
        self.total_count = 0;
        self.num_updates = 0;
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
            + self.depth * core::mem::size_of::<Vec<u64>>()
            + self.depth * self.width * core::mem::size_of::<u64>()
    }

    fn count(&self) -> u64 {
        self.num_updates
    }

    fn shape(&self) -> Shape {
        Shape::Matrix {
            depth: self.depth,
            width: self.width,
            conservative: self.mode == UpdateMode::Conservative,
        }
    }
}

impl<H: ItemHasher> FrequencySketch for CountMinSketch<H> {
    fn estimate_frequency(&self, item: &[u8]) -> u64 {
        self.estimate(item)
    }
}
