//! Bloom filter for probabilistic set membership
//!
//! A Bloom filter is a space-efficient probabilistic data structure that tests
//! whether an element is a member of a set. False positives are possible, but
//! false negatives are not.
//!
//! The `k` probe positions of an item come from one base hash by double
//! hashing: `position_i = (h1 + i * h2) mod m`.

use crate::hash::{double_hash, ItemHasher, Xxh3Hasher};
use crate::math;
use crate::traits::{
    try_alloc_cells, ConstructionError, MembershipSketch, MergeError, Shape, Sketch,
    UnsupportedOperation,
};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Largest value of a counting-filter cell (4-bit counters)
pub const COUNTER_MAX: u8 = 15;

/// Storage variant of a [`BloomFilter`], fixed at construction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BloomVariant {
    /// One bit per cell; no deletion
    #[default]
    Standard,
    /// 4-bit saturating counter per cell; supports [`BloomFilter::remove`]
    Counting,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Cells {
    Bits(Vec<u64>),
    Counters(Vec<u8>),
}

/// Summary of a filter's configuration and fill state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterInfo {
    pub num_bits: usize,
    pub num_hashes: usize,
    pub variant: BloomVariant,
    pub items_added: u64,
    /// Successful removals; always 0 for the standard variant
    pub items_removed: u64,
    /// `None` when built from explicit `(m, k)`
    pub expected_items: Option<usize>,
    pub target_false_positive_rate: Option<f64>,
    pub actual_false_positive_rate: f64,
    pub expected_false_positive_rate: f64,
    pub utilization: f64,
    pub size_bytes: usize,
}

/// Bloom filter for set membership testing
///
/// # Example
///
/// ```
/// use streamsketch::membership::BloomFilter;
///
/// // Create filter for ~1000 items with 1% false positive rate
/// let mut bloom = BloomFilter::new(1000, 0.01).unwrap();
///
/// bloom.insert(b"apple");
/// bloom.insert(b"banana");
///
/// assert!(bloom.contains(b"apple"));   // true - definitely inserted
/// assert!(bloom.contains(b"banana"));  // true - definitely inserted
/// ```
///
/// # False Positive Rate
///
/// The actual false positive rate depends on the number of items inserted.
/// If you insert more items than the expected capacity, the false positive
/// rate will increase.
#[derive(Clone, Debug, PartialEq)]
pub struct BloomFilter<H = Xxh3Hasher> {
    cells: Cells,
    /// Number of cells (m)
    num_bits: usize,
    /// Number of probe positions per item (k)
    num_hashes: usize,
    /// Number of insertions
    count: u64,
    /// Number of successful removals (counting variant)
    removed: u64,
    expected_items: Option<usize>,
    target_fpr: Option<f64>,
    hasher: H,
}

impl BloomFilter {
    /// Create a new Bloom filter with expected capacity and false positive rate
    ///
    /// # Arguments
    ///
    /// * `expected_items` - Expected number of items to insert
    /// * `false_positive_rate` - Desired false positive rate (e.g., 0.01 for 1%)
    pub fn new(expected_items: usize, false_positive_rate: f64) -> Result<Self, ConstructionError> {
        Self::with_variant(expected_items, false_positive_rate, BloomVariant::Standard)
    }

    /// Create a counting Bloom filter that supports removal
    pub fn counting(
        expected_items: usize,
        false_positive_rate: f64,
    ) -> Result<Self, ConstructionError> {
        Self::with_variant(expected_items, false_positive_rate, BloomVariant::Counting)
    }

    /// Create a filter sized for `expected_items` using the given storage variant
    pub fn with_variant(
        expected_items: usize,
        false_positive_rate: f64,
        variant: BloomVariant,
    ) -> Result<Self, ConstructionError> {
        Self::with_hasher(expected_items, false_positive_rate, variant, Xxh3Hasher::new())
    }

    /// Create a standard Bloom filter with explicit `m` and `k`
    pub fn with_params(num_bits: usize, num_hashes: usize) -> Result<Self, ConstructionError> {
        Self::from_params(num_bits, num_hashes, BloomVariant::Standard, Xxh3Hasher::new())
    }
}

impl<H: ItemHasher> BloomFilter<H> {
    /// Create a filter sized for `expected_items` at `false_positive_rate`
    ///
    /// `m = ceil(-n ln p / ln² 2)` and `k = max(1, round(m/n · ln 2))`.
    pub fn with_hasher(
        expected_items: usize,
        false_positive_rate: f64,
        variant: BloomVariant,
        hasher: H,
    ) -> Result<Self, ConstructionError> {
        if expected_items == 0 {
            return Err(ConstructionError::InvalidExpectedItems);
        }
        if !(false_positive_rate > 0.0 && false_positive_rate < 1.0) {
            return Err(ConstructionError::InvalidFalsePositiveRate(
                false_positive_rate,
            ));
        }

        // Huge item counts at tiny rates overflow the usize cast of m
        if super::required_bits(expected_items, false_positive_rate) >= usize::MAX as f64 {
            return Err(ConstructionError::CapacityOverflow("num_bits"));
        }
        let num_bits = super::optimal_num_bits(expected_items, false_positive_rate);
        let num_hashes = super::optimal_num_hashes(num_bits, expected_items);

        let mut filter = Self::from_params(num_bits, num_hashes, variant, hasher)?;
        filter.expected_items = Some(expected_items);
        filter.target_fpr = Some(false_positive_rate);
        Ok(filter)
    }

    /// Create a filter with explicit `m` cells and `k` probes
    pub fn from_params(
        num_bits: usize,
        num_hashes: usize,
        variant: BloomVariant,
        hasher: H,
    ) -> Result<Self, ConstructionError> {
        if num_bits == 0 {
            return Err(ConstructionError::ZeroDimension("num_bits"));
        }
        if num_hashes == 0 {
            return Err(ConstructionError::ZeroDimension("num_hashes"));
        }

        let cells = match variant {
            BloomVariant::Standard => {
                Cells::Bits(try_alloc_cells(num_bits.div_ceil(64), "num_bits")?)
            }
            BloomVariant::Counting => Cells::Counters(try_alloc_cells(num_bits, "num_bits")?),
        };
        tracing::debug!(num_bits, num_hashes, ?variant, "created bloom filter");

        Ok(Self {
            cells,
            num_bits,
            num_hashes,
            count: 0,
            removed: 0,
            expected_items: None,
            target_fpr: None,
            hasher,
        })
    }

    /// Probe positions for a base hash
    fn positions(&self, hash: u64) -> impl Iterator<Item = usize> {
        let m = self.num_bits as u64;
        let (h1, h2) = double_hash(hash);
        let step = h2 % m;
        (0..self.num_hashes).scan(h1 % m, move |pos, _| {
            let current = *pos;
            *pos = (*pos + step) % m;
            Some(current as usize)
        })
    }

    fn is_set(&self, idx: usize) -> bool {
        match &self.cells {
            Cells::Bits(words) => words[idx / 64] & (1u64 << (idx % 64)) != 0,
            Cells::Counters(counters) => counters[idx] > 0,
        }
    }

    /// Insert an item into the filter
    pub fn insert(&mut self, item: &[u8]) {
        let hash = self.hasher.hash(item);
        self.insert_hash(hash);
    }

    /// Insert an item by its pre-computed base hash
    pub fn insert_hash(&mut self, hash: u64) {
        self.count += 1;

        let positions = self.positions(hash);
        match &mut self.cells {
            Cells::Bits(words) => {
                for idx in positions {
                    words[idx / 64] |= 1u64 << (idx % 64);
                }
            }
            Cells::Counters(counters) => {
                for idx in positions {
                    if counters[idx] < COUNTER_MAX {
                        counters[idx] += 1;
                    } else {
                        tracing::trace!(idx, "counting bloom cell saturated");
                    }
                }
            }
        }
    }

    /// Check if an item might be in the filter
    ///
    /// Returns `true` if the item might be in the set (possibly a false positive),
    /// or `false` if the item is definitely not in the set.
    pub fn contains(&self, item: &[u8]) -> bool {
        self.contains_hash(self.hasher.hash(item))
    }

    /// Check membership by a pre-computed base hash
    pub fn contains_hash(&self, hash: u64) -> bool {
        self.positions(hash).all(|idx| self.is_set(idx))
    }

    /// Remove an item from a counting filter
    ///
    /// Returns `Ok(false)` without touching the filter when the item is not
    /// currently contained. Saturated counters are never decremented.
    /// Removing an item that was never inserted but tests positive (a false
    /// positive) can introduce false negatives for other items.
    ///
    /// [`Sketch::count`] keeps counting insertions; [`MembershipSketch::len`]
    /// reports insertions minus successful removals.
    pub fn remove(&mut self, item: &[u8]) -> Result<bool, UnsupportedOperation> {
        let hash = self.hasher.hash(item);
        self.remove_hash(hash)
    }

    /// Remove an item by its pre-computed base hash
    pub fn remove_hash(&mut self, hash: u64) -> Result<bool, UnsupportedOperation> {
        if matches!(self.cells, Cells::Bits(_)) {
            return Err(UnsupportedOperation {
                operation: "remove",
            });
        }
        if !self.contains_hash(hash) {
            return Ok(false);
        }

        let positions = self.positions(hash);
        if let Cells::Counters(counters) = &mut self.cells {
            for idx in positions {
                if counters[idx] < COUNTER_MAX {
                    counters[idx] = counters[idx].saturating_sub(1);
                }
            }
        }
        self.removed += 1;
        Ok(true)
    }

    /// Get the number of cells in the filter (m)
    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// Get the number of probe positions per item (k)
    pub fn num_hashes(&self) -> usize {
        self.num_hashes
    }

    /// Get the storage variant chosen at construction
    pub fn variant(&self) -> BloomVariant {
        match self.cells {
            Cells::Bits(_) => BloomVariant::Standard,
            Cells::Counters(_) => BloomVariant::Counting,
        }
    }

    /// Get the hasher used to derive probe positions
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Get the number of cells set (non-zero for counting filters)
    pub fn bits_set(&self) -> usize {
        match &self.cells {
            Cells::Bits(words) => words.iter().map(|w| w.count_ones() as usize).sum(),
            Cells::Counters(counters) => counters.iter().filter(|&&c| c > 0).count(),
        }
    }

    /// Fraction of cells set, in `[0, 1]`
    pub fn utilization(&self) -> f64 {
        self.bits_set() as f64 / self.num_bits as f64
    }

    /// Empirical false positive rate: `(fraction of bits set)^k`
    ///
    /// Diagnostic only; based on the actual fill ratio of the filter.
    pub fn actual_false_positive_rate(&self) -> f64 {
        math::powi(self.utilization(), self.num_hashes as i32)
    }

    /// Number of items currently held: insertions minus successful removals
    pub fn net_count(&self) -> u64 {
        self.count.saturating_sub(self.removed)
    }

    /// Theoretical false positive rate for the items currently held:
    /// `(1 - e^(-k·n/m))^k`
    pub fn expected_false_positive_rate(&self) -> f64 {
        let held = self.net_count();
        if held == 0 {
            return 0.0;
        }
        let k = self.num_hashes as f64;
        let n = held as f64;
        let m = self.num_bits as f64;
        math::powi(1.0 - math::exp(-k * n / m), self.num_hashes as i32)
    }

    /// Estimate the number of distinct items in the filter from its fill ratio
    pub fn estimated_count(&self) -> f64 {
        let bits_set = self.bits_set() as f64;
        let m = self.num_bits as f64;
        let k = self.num_hashes as f64;

        if bits_set >= m {
            return f64::INFINITY;
        }

        // n ≈ -m/k * ln(1 - X/m) where X is bits set
        -(m / k) * math::ln(1.0 - bits_set / m)
    }

    /// Snapshot of configuration, fill state and error rates
    pub fn info(&self) -> FilterInfo {
        FilterInfo {
            num_bits: self.num_bits,
            num_hashes: self.num_hashes,
            variant: self.variant(),
            items_added: self.count,
            items_removed: self.removed,
            expected_items: self.expected_items,
            target_false_positive_rate: self.target_fpr,
            actual_false_positive_rate: self.actual_false_positive_rate(),
            expected_false_positive_rate: self.expected_false_positive_rate(),
            utilization: self.utilization(),
            size_bytes: self.size_bytes(),
        }
    }
}

impl<H: ItemHasher> Sketch for BloomFilter<H> {
    type Item = [u8];

    fn update(&mut self, item: &Self::Item) {
        self.insert(item);
    }

    fn merge(&mut self, other: &Self) -> Result<(), MergeError> {
        if self.shape() != other.shape() {
            return Err(MergeError::shape(self.shape(), other.shape()));
        }
        self.hasher.debug_assert_same_output(&other.hasher);

        match (&mut self.cells, &other.cells) {
            (Cells::Bits(a), Cells::Bits(b)) => {
                for (a, b) in a.iter_mut().zip(b.iter()) {
                    *a |= *b;
                }
            }
            (Cells::Counters(a), Cells::Counters(b)) => {
                for (a, &b) in a.iter_mut().zip(b.iter()) {
                    *a = a.saturating_add(b).min(COUNTER_MAX);
                }
            }
            // Variants are part of the shape checked above
            _ => unreachable!("bloom filter variants diverged after shape check"),
        }
        self.count = self.count.saturating_add(other.count);
        self.removed = self.removed.saturating_add(other.removed);

        Ok(())
    }

    fn clear(&mut self) {
        match &mut self.cells {
            Cells::Bits(words) => words.fill(0),
            Cells::Counters(counters) => counters.fill(0),
        }
        self.count = 0;
        self.removed = 0;
    }

    fn size_bytes(&self) -> usize {
        let cells = match &self.cells {
            Cells::Bits(words) => words.len() * 8,
            Cells::Counters(counters) => counters.len(),
        };
        cells + core::mem::size_of::<Self>()
    }

    fn count(&self) -> u64 {
        self.count
    }

    fn shape(&self) -> Shape {
        Shape::Bits {
            num_bits: self.num_bits,
            num_hashes: self.num_hashes,
            counting: self.variant() == BloomVariant::Counting,
        }
    }
}

impl<H: ItemHasher> MembershipSketch for BloomFilter<H> {
    fn contains(&self, item: &Self::Item) -> bool {
        BloomFilter::contains(self, item)
    }

    fn false_positive_rate(&self) -> f64 {
        self.actual_false_positive_rate()
    }

    fn len(&self) -> usize {
        usize::try_from(self.net_count()).unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let mut bloom = BloomFilter::new(1000, 0.01).unwrap();

        bloom.insert(b"apple");
        bloom.insert(b"banana");
        bloom.insert(b"cherry");

        assert!(bloom.contains(b"apple"));
        assert!(bloom.contains(b"banana"));
        assert!(bloom.contains(b"cherry"));
        assert_eq!(bloom.count(), 3);
    }

    #[test]
    fn test_derived_parameters() {
        let bloom = BloomFilter::new(10_000, 0.01).unwrap();
        assert_eq!(bloom.num_bits(), 95_851);
        assert_eq!(bloom.num_hashes(), 7);

        let bloom = BloomFilter::new(1_000_000, 0.01).unwrap();
        assert_eq!(bloom.num_hashes(), 7);
        assert!(bloom.num_bits() > 9_500_000 && bloom.num_bits() < 9_600_000);
    }

    #[test]
    fn test_invalid_parameters() {
        assert_eq!(
            BloomFilter::new(0, 0.01).unwrap_err(),
            ConstructionError::InvalidExpectedItems
        );
        assert_eq!(
            BloomFilter::new(100, 0.0).unwrap_err(),
            ConstructionError::InvalidFalsePositiveRate(0.0)
        );
        assert_eq!(
            BloomFilter::new(100, 1.0).unwrap_err(),
            ConstructionError::InvalidFalsePositiveRate(1.0)
        );
        assert!(BloomFilter::new(100, f64::NAN).is_err());
        assert_eq!(
            BloomFilter::with_params(0, 3).unwrap_err(),
            ConstructionError::ZeroDimension("num_bits")
        );
        assert_eq!(
            BloomFilter::with_params(64, 0).unwrap_err(),
            ConstructionError::ZeroDimension("num_hashes")
        );
    }

    #[test]
    fn test_positions_follow_double_hashing() {
        let mut bloom = BloomFilter::with_params(101, 5).unwrap();
        let hash = 0x1234_5678_9abc_def0u64;
        let (h1, h2) = double_hash(hash);

        let expected: Vec<usize> = (0..5u64)
            .map(|i| ((h1 as u128 + i as u128 * h2 as u128) % 101) as usize)
            .collect();
        let actual: Vec<usize> = bloom.positions(hash).collect();
        assert_eq!(actual, expected);

        bloom.insert_hash(hash);
        for idx in expected {
            assert!(bloom.is_set(idx));
        }
        assert!(bloom.contains_hash(hash));
    }

    #[test]
    fn test_no_false_negatives() {
        let mut bloom = BloomFilter::new(1000, 0.01).unwrap();

        for i in 0..1000 {
            let item = format!("item_{}", i);
            bloom.insert(item.as_bytes());
        }

        for i in 0..1000 {
            let item = format!("item_{}", i);
            assert!(bloom.contains(item.as_bytes()), "Missing item_{}", i);
        }
    }

    #[test]
    fn test_false_positive_rate() {
        let mut bloom = BloomFilter::new(1000, 0.01).unwrap();

        for i in 0..1000 {
            let item = format!("item_{}", i);
            bloom.insert(item.as_bytes());
        }

        let mut false_positives = 0;
        for i in 0..10000 {
            let item = format!("other_{}", i);
            if bloom.contains(item.as_bytes()) {
                false_positives += 1;
            }
        }

        let fp_rate = false_positives as f64 / 10000.0;
        assert!(fp_rate < 0.03, "FP rate too high: {}", fp_rate);
    }

    #[test]
    fn test_rate_diagnostics() {
        let mut bloom = BloomFilter::new(1000, 0.01).unwrap();
        assert_eq!(bloom.actual_false_positive_rate(), 0.0);
        assert_eq!(bloom.expected_false_positive_rate(), 0.0);
        assert_eq!(bloom.utilization(), 0.0);

        for i in 0..1000u32 {
            bloom.insert(&i.to_le_bytes());
        }

        // Optimal sizing leaves about half the bits set
        let utilization = bloom.utilization();
        assert!(utilization > 0.4 && utilization < 0.6, "{}", utilization);

        let actual = bloom.actual_false_positive_rate();
        let expected = bloom.expected_false_positive_rate();
        assert!(actual > 0.003 && actual < 0.03, "actual {}", actual);
        assert!(expected > 0.005 && expected < 0.02, "expected {}", expected);
    }

    #[test]
    fn test_merge() {
        let mut bloom1 = BloomFilter::new(1000, 0.01).unwrap();
        let mut bloom2 = BloomFilter::new(1000, 0.01).unwrap();

        bloom1.insert(b"apple");
        bloom2.insert(b"banana");

        bloom1.merge(&bloom2).unwrap();

        assert!(bloom1.contains(b"apple"));
        assert!(bloom1.contains(b"banana"));
        assert_eq!(bloom1.count(), 2);
    }

    #[test]
    fn test_merge_incompatible() {
        let mut bloom1 = BloomFilter::new(1000, 0.01).unwrap();
        let bloom2 = BloomFilter::new(2000, 0.01).unwrap();
        bloom1.insert(b"apple");
        let before = bloom1.clone();

        assert!(matches!(
            bloom1.merge(&bloom2),
            Err(MergeError::ShapeMismatch { .. })
        ));
        assert_eq!(bloom1, before);
    }

    #[test]
    fn test_merge_rejects_other_variant() {
        let mut standard = BloomFilter::new(1000, 0.01).unwrap();
        let counting = BloomFilter::counting(1000, 0.01).unwrap();
        assert!(standard.merge(&counting).is_err());
    }

    #[test]
    fn test_clear() {
        let mut bloom = BloomFilter::new(100, 0.01).unwrap();

        bloom.insert(b"apple");
        assert!(bloom.contains(b"apple"));

        bloom.clear();
        assert!(!bloom.contains(b"apple"));
        assert_eq!(bloom.count(), 0);
    }

    #[test]
    fn test_estimated_count() {
        let mut bloom = BloomFilter::new(1000, 0.01).unwrap();

        for i in 0..500 {
            let item = format!("item_{}", i);
            bloom.insert(item.as_bytes());
        }

        let estimated = bloom.estimated_count();
        assert!(
            estimated > 400.0 && estimated < 600.0,
            "Estimate: {}",
            estimated
        );
    }

    #[test]
    fn test_remove_unsupported_on_standard() {
        let mut bloom = BloomFilter::new(100, 0.01).unwrap();
        bloom.insert(b"apple");
        assert_eq!(
            bloom.remove(b"apple"),
            Err(UnsupportedOperation {
                operation: "remove"
            })
        );
        assert!(bloom.contains(b"apple"));
    }

    #[test]
    fn test_counting_remove() {
        let mut bloom = BloomFilter::counting(1000, 0.01).unwrap();
        assert_eq!(bloom.variant(), BloomVariant::Counting);

        bloom.insert(b"apple");
        bloom.insert(b"banana");
        assert_eq!(bloom.remove(b"apple"), Ok(true));
        assert!(!bloom.contains(b"apple"));
        assert!(bloom.contains(b"banana"));

        // Insertions stay counted; only the held count drops
        assert_eq!(bloom.count(), 2);
        assert_eq!(bloom.net_count(), 1);
        assert_eq!(MembershipSketch::len(&bloom), 1);

        // Not contained: no-op
        assert_eq!(bloom.remove(b"apple"), Ok(false));
        assert_eq!(bloom.count(), 2);
        assert_eq!(bloom.net_count(), 1);
    }

    #[test]
    fn test_insert_count_is_monotonic() {
        let mut bloom = BloomFilter::counting(1000, 0.01).unwrap();
        let mut seen = 0;
        for round in 0..3u32 {
            bloom.insert(&round.to_le_bytes());
            assert!(bloom.count() > seen);
            seen = bloom.count();
            assert_eq!(bloom.remove(&round.to_le_bytes()), Ok(true));
            assert_eq!(bloom.count(), seen);
        }
        assert_eq!(bloom.count(), 3);
        assert_eq!(bloom.info().items_removed, 3);
        assert!(MembershipSketch::is_filter_empty(&bloom));
        assert_eq!(bloom.expected_false_positive_rate(), 0.0);
    }

    #[test]
    fn test_oversized_parameters_fail_construction() {
        assert_eq!(
            BloomFilter::new(usize::MAX, 1e-9),
            Err(ConstructionError::CapacityOverflow("num_bits"))
        );
        assert_eq!(
            BloomFilter::counting(usize::MAX / 2, 1e-9),
            Err(ConstructionError::CapacityOverflow("num_bits"))
        );
        // One byte per counter: usize::MAX cells exceed isize::MAX bytes
        assert_eq!(
            BloomFilter::from_params(usize::MAX, 3, BloomVariant::Counting, Xxh3Hasher::new()),
            Err(ConstructionError::CapacityOverflow("num_bits"))
        );
    }

    #[test]
    fn test_counting_duplicates_need_matching_removals() {
        let mut bloom = BloomFilter::counting(1000, 0.01).unwrap();
        bloom.insert(b"apple");
        bloom.insert(b"apple");

        assert_eq!(bloom.remove(b"apple"), Ok(true));
        assert!(bloom.contains(b"apple"));
        assert_eq!(bloom.remove(b"apple"), Ok(true));
        assert!(!bloom.contains(b"apple"));
    }

    #[test]
    fn test_counting_saturation_is_sticky() {
        let mut bloom = BloomFilter::from_params(64, 1, BloomVariant::Counting, Xxh3Hasher::new())
            .unwrap();
        for _ in 0..20 {
            bloom.insert(b"apple");
        }
        for _ in 0..20 {
            assert_eq!(bloom.remove(b"apple"), Ok(true));
        }
        // Saturated counters never decrement, so no false negative appears
        assert!(bloom.contains(b"apple"));
    }

    #[test]
    fn test_counting_merge_adds_counters() {
        let mut a = BloomFilter::counting(1000, 0.01).unwrap();
        let mut b = BloomFilter::counting(1000, 0.01).unwrap();
        a.insert(b"apple");
        b.insert(b"apple");

        a.merge(&b).unwrap();
        assert_eq!(a.remove(b"apple"), Ok(true));
        assert!(a.contains(b"apple"));
    }

    #[test]
    fn test_info() {
        let mut bloom = BloomFilter::new(1000, 0.01).unwrap();
        bloom.insert(b"apple");

        let info = bloom.info();
        assert_eq!(info.num_bits, bloom.num_bits());
        assert_eq!(info.num_hashes, bloom.num_hashes());
        assert_eq!(info.items_added, 1);
        assert_eq!(info.items_removed, 0);
        assert_eq!(info.expected_items, Some(1000));
        assert_eq!(info.target_false_positive_rate, Some(0.01));
        assert_eq!(info.variant, BloomVariant::Standard);
        assert!(info.size_bytes >= bloom.num_bits() / 8);

        let raw = BloomFilter::with_params(128, 3).unwrap();
        assert_eq!(raw.info().expected_items, None);
    }
}
