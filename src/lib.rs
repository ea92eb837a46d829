//! # Streamsketch
//!
//! Mergeable probabilistic sketches for summarizing unbounded streams in
//! sub-linear space.
//!
//! ## Features
//!
//! - **Cardinality Estimation**: Count distinct elements with HyperLogLog
//! - **Membership Testing**: Bloom filters, with an optional counting variant
//!   that supports removal
//! - **Frequency Estimation**: Count-Min Sketch with optional conservative update
//! - **Full Mergeability**: Same-shaped sketches combine with `merge`
//! - **Pluggable Hashing**: Every sketch takes an [`ItemHasher`](hash::ItemHasher);
//!   xxh3 is the default
//!
//! ## Quick Start
//!
//! ```rust
//! use streamsketch::prelude::*;
//!
//! // Count distinct users
//! let mut hll = HyperLogLog::new(14)?;
//! for user_id in ["alice", "bob", "charlie", "alice"] {
//!     hll.insert(user_id);
//! }
//! println!("Distinct users: ~{}", hll.estimate());
//! # Ok::<(), streamsketch::traits::ConstructionError>(())
//! ```
//!
//! ## Distributed Computing
//!
//! All sketches implement the [`Sketch`](traits::Sketch) trait which includes
//! a `merge` operation. A sketch is not meant to be shared between threads
//! while it is being updated; give each worker its own and merge them:
//!
//! ```rust
//! use streamsketch::membership::BloomFilter;
//! use streamsketch::traits::Sketch;
//!
//! let mut worker1 = BloomFilter::new(10_000, 0.01).unwrap();
//! let mut worker2 = BloomFilter::new(10_000, 0.01).unwrap();
//!
//! // Each worker processes its partition
//! worker1.insert(b"user_a");
//! worker2.insert(b"user_b");
//!
//! // Merge results
//! worker1.merge(&worker2).unwrap();
//! assert!(worker1.contains(b"user_b"));
//! ```
//!
//! ## Feature Flags
//!
//! Algorithm families (pick what you need):
//! - `cardinality` (default): HyperLogLog for distinct counting
//! - `frequency` (default): Count-Min Sketch
//! - `membership` (default): Bloom filters
//! - `full`: Enable all algorithm families
//!
//! Platform features:
//! - `std` (default): Standard library support; without it the crate is
//!   `no_std` and needs `alloc`

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod hash;
mod math;
pub mod traits;

#[cfg(feature = "cardinality")]
#[cfg_attr(docsrs, doc(cfg(feature = "cardinality")))]
pub mod cardinality;

#[cfg(feature = "frequency")]
#[cfg_attr(docsrs, doc(cfg(feature = "frequency")))]
pub mod frequency;

#[cfg(feature = "membership")]
#[cfg_attr(docsrs, doc(cfg(feature = "membership")))]
pub mod membership;

pub mod prelude {
    pub use crate::hash::{ItemHasher, Xxh3Hasher};
    pub use crate::traits::*;

    #[cfg(feature = "cardinality")]
    pub use crate::cardinality::HyperLogLog;

    #[cfg(feature = "frequency")]
    pub use crate::frequency::{CountMinSketch, UpdateMode};

    #[cfg(feature = "membership")]
    pub use crate::membership::{BloomFilter, BloomVariant};
}

#[cfg(feature = "cardinality")]
pub use cardinality::HyperLogLog;

#[cfg(feature = "frequency")]
pub use frequency::CountMinSketch;

#[cfg(feature = "membership")]
pub use membership::BloomFilter;
