//! Benchmarks for streamsketch
//!
//! Run with: cargo bench --features full

#[cfg(not(all(feature = "cardinality", feature = "frequency", feature = "membership")))]
compile_error!("Benchmarks require all features. Run: cargo bench --features full");

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use streamsketch::cardinality::HyperLogLog;
use streamsketch::frequency::{CountMinSketch, UpdateMode};
use streamsketch::membership::BloomFilter;
use streamsketch::traits::{CardinalitySketch, Sketch};

// ============================================================================
// HyperLogLog Benchmarks
// ============================================================================

fn bench_hll(c: &mut Criterion) {
    let mut group = c.benchmark_group("hyperloglog");
    group.throughput(Throughput::Elements(1));

    for precision in [10, 12, 14, 16] {
        group.bench_function(format!("insert_p{}", precision), |b| {
            let mut hll = HyperLogLog::new(precision).unwrap();
            let mut i = 0u64;
            b.iter(|| {
                hll.insert_bytes(&i.to_le_bytes());
                i = i.wrapping_add(1);
            });
        });
    }

    group.bench_function("estimate", |b| {
        let mut hll = HyperLogLog::new(14).unwrap();
        for i in 0..100_000u64 {
            hll.insert_bytes(&i.to_le_bytes());
        }
        b.iter(|| black_box(hll.estimate()));
    });

    group.bench_function("merge", |b| {
        let mut hll1 = HyperLogLog::new(14).unwrap();
        let mut hll2 = HyperLogLog::new(14).unwrap();
        for i in 0..10_000u64 {
            hll1.insert_bytes(&i.to_le_bytes());
            hll2.insert_bytes(&(i + 10_000).to_le_bytes());
        }
        b.iter(|| {
            let mut h = hll1.clone();
            h.merge(black_box(&hll2)).unwrap();
        });
    });

    group.finish();
}

// ============================================================================
// Count-Min Sketch Benchmarks
// ============================================================================

fn bench_cms(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_min_sketch");
    group.throughput(Throughput::Elements(1));

    for mode in [UpdateMode::Standard, UpdateMode::Conservative] {
        group.bench_function(format!("add_{:?}", mode).to_lowercase(), |b| {
            let mut cms = CountMinSketch::with_mode(0.001, 0.01, mode).unwrap();
            let mut i = 0u64;
            b.iter(|| {
                cms.add(&i.to_le_bytes(), 1);
                i = i.wrapping_add(1);
            });
        });
    }

    group.bench_function("estimate", |b| {
        let mut cms = CountMinSketch::new(0.001, 0.01).unwrap();
        for i in 0..100_000u64 {
            cms.add(&i.to_le_bytes(), 1);
        }
        b.iter(|| black_box(cms.estimate(&12345u64.to_le_bytes())));
    });

    group.bench_function("merge", |b| {
        let mut cms1 = CountMinSketch::new(0.001, 0.01).unwrap();
        let mut cms2 = CountMinSketch::new(0.001, 0.01).unwrap();
        for i in 0..10_000u64 {
            cms1.add(&i.to_le_bytes(), 1);
            cms2.add(&(i + 10_000).to_le_bytes(), 1);
        }
        b.iter(|| {
            let mut c = cms1.clone();
            c.merge(black_box(&cms2)).unwrap();
        });
    });

    group.finish();
}

// ============================================================================
// Bloom Filter Benchmarks
// ============================================================================

fn bench_bloom(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom_filter");
    group.throughput(Throughput::Elements(1));

    group.bench_function("insert", |b| {
        let mut bloom = BloomFilter::new(1_000_000, 0.01).unwrap();
        let mut i = 0u64;
        b.iter(|| {
            bloom.insert(&i.to_le_bytes());
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("insert_counting", |b| {
        let mut bloom = BloomFilter::counting(1_000_000, 0.01).unwrap();
        let mut i = 0u64;
        b.iter(|| {
            bloom.insert(&i.to_le_bytes());
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("contains_hit", |b| {
        let mut bloom = BloomFilter::new(100_000, 0.01).unwrap();
        for i in 0..100_000u64 {
            bloom.insert(&i.to_le_bytes());
        }
        let mut i = 0u64;
        b.iter(|| {
            let result = bloom.contains(&(i % 100_000).to_le_bytes());
            i = i.wrapping_add(1);
            black_box(result)
        });
    });

    group.bench_function("contains_miss", |b| {
        let mut bloom = BloomFilter::new(100_000, 0.01).unwrap();
        for i in 0..100_000u64 {
            bloom.insert(&i.to_le_bytes());
        }
        let mut i = 1_000_000u64;
        b.iter(|| {
            let result = bloom.contains(&i.to_le_bytes());
            i = i.wrapping_add(1);
            black_box(result)
        });
    });

    group.finish();
}

// ============================================================================
// Main
// ============================================================================

criterion_group!(benches, bench_hll, bench_cms, bench_bloom);

criterion_main!(benches);
