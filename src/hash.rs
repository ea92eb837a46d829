//! Hash capability shared by all sketches
//!
//! Every sketch consumes a single 64-bit base hash per item. Structures that
//! need several hash functions (double hashing in [`BloomFilter`], one hash
//! per row in [`CountMinSketch`]) derive them from the base hash with
//! [`mix64`] and a fixed salt, so one strong hash is enough.
//!
//! The hasher must be deterministic for the lifetime of a sketch, and two
//! sketches can only be merged when their hashers agree on every input.
//! Neither property is checked at runtime: an unstable hash silently breaks
//! the guarantees of the sketch.
//!
//! [`BloomFilter`]: crate::membership::BloomFilter
//! [`CountMinSketch`]: crate::frequency::CountMinSketch

use core::fmt::Debug;
use core::hash::{BuildHasher, Hasher};

use xxhash_rust::xxh3::{xxh3_64, xxh3_64_with_seed};

/// Probe input used to compare hashers before a merge in debug builds.
const PROBE: &[u8] = b"streamsketch-hasher-probe";

/// A function mapping an arbitrary byte sequence to a uniformly distributed
/// 64-bit integer.
pub trait ItemHasher: Clone + Debug + PartialEq {
    /// Hash a byte sequence
    fn hash(&self, bytes: &[u8]) -> u64;

    /// Check, in debug builds only, that two hashers produce the same output
    #[inline]
    fn debug_assert_same_output(&self, other: &Self) {
        debug_assert_eq!(
            self.hash(PROBE),
            other.hash(PROBE),
            "sketches built with different hashers cannot be merged"
        );
    }
}

/// xxh3-64 hasher, the default for every sketch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Xxh3Hasher {
    seed: u64,
}

impl Xxh3Hasher {
    /// Unseeded xxh3
    pub const fn new() -> Self {
        Self { seed: 0 }
    }

    /// xxh3 with an explicit seed
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed passed to xxh3; 0 means unseeded
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl ItemHasher for Xxh3Hasher {
    #[inline]
    fn hash(&self, bytes: &[u8]) -> u64 {
        if self.seed == 0 {
            xxh3_64(bytes)
        } else {
            xxh3_64_with_seed(bytes, self.seed)
        }
    }
}

/// Adapter turning any reproducible [`BuildHasher`] into an [`ItemHasher`]
///
/// Only use builders whose `Default`/`Clone` produce identical hashers, e.g.
/// `BuildHasherDefault<_>`. `RandomState` is seeded per instance and breaks
/// merging.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StdBuildHasher<B> {
    builder: B,
}

impl<B> StdBuildHasher<B> {
    /// Wrap a hasher builder
    pub fn new(builder: B) -> Self {
        Self { builder }
    }
}

impl<B> ItemHasher for StdBuildHasher<B>
where
    B: BuildHasher + Clone + Debug + PartialEq,
{
    #[inline]
    fn hash(&self, bytes: &[u8]) -> u64 {
        let mut hasher = self.builder.build_hasher();
        hasher.write(bytes);
        hasher.finish()
    }
}

/// SplitMix64 finalizer: a bijective mix of all 64 input bits
#[inline]
pub const fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Salt used to derive the second base hash for double hashing.
const DOUBLE_HASH_SALT: u64 = 0x6a09_e667_f3bc_c909;

/// Split a base hash into the `(h1, h2)` pair used for double hashing.
///
/// `h2` is forced odd so the probe sequence never degenerates to a single
/// position when the table size is a power of two.
#[inline]
pub const fn double_hash(base: u64) -> (u64, u64) {
    (base, mix64(base ^ DOUBLE_HASH_SALT) | 1)
}

/// Deterministic per-row salt for row `row` of a multi-row sketch.
#[inline]
pub const fn row_seed(row: usize) -> u64 {
    (row as u64 + 1).wrapping_mul(0x9e37_79b9_7f4a_7c15)
}

/// Hash for row `row` derived from a base hash
#[inline]
pub const fn row_hash(base: u64, row: usize) -> u64 {
    mix64(base ^ row_seed(row))
}
