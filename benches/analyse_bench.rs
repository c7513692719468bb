// In primescan-core/benches/analyse_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use primescan::{Analyzer, PopcountPolicy, PrimescanConfig, Segment, TupletClass, TupletCounts};

/// Generates sieve bytes with roughly the bit density of a real segment.
fn generate_sieve_bytes(size: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..size)
        .map(|_| rng.random::<u8>() & rng.random::<u8>())
        .collect()
}

// --- Benchmark Suite ---

const BENCH_DATA_SIZE: usize = 65536; // 64 KB

fn bench_count_kernels(c: &mut Criterion) {
    let sieve = generate_sieve_bytes(BENCH_DATA_SIZE);

    let table_primes = Analyzer::new(
        &PrimescanConfig::counting(&[TupletClass::Prime]).with_popcount(PopcountPolicy::Disabled),
    )
    .unwrap();
    let popcnt_primes = Analyzer::new(&PrimescanConfig::counting(&[TupletClass::Prime])).unwrap();
    let all_tuplets = Analyzer::new(&PrimescanConfig::counting(&TupletClass::ALL)).unwrap();

    let mut group = c.benchmark_group("Sieve Counting");
    group.throughput(criterion::Throughput::Bytes(BENCH_DATA_SIZE as u64));

    group.bench_function("Count primes [1] Lookup table", |b| {
        b.iter(|| {
            let mut counts = TupletCounts::new();
            table_primes.count(black_box(&sieve), &mut counts);
            black_box(counts)
        })
    });
    group.bench_function("Count primes [2] Hardware popcount", |b| {
        b.iter(|| {
            let mut counts = TupletCounts::new();
            popcnt_primes.count(black_box(&sieve), &mut counts);
            black_box(counts)
        })
    });
    group.bench_function("Count all tuplet classes", |b| {
        b.iter(|| {
            let mut counts = TupletCounts::new();
            all_tuplets.count(black_box(&sieve), &mut counts);
            black_box(counts)
        })
    });

    group.finish();
}

fn bench_generate_kernels(c: &mut Criterion) {
    let sieve = generate_sieve_bytes(BENCH_DATA_SIZE);

    let mut group = c.benchmark_group("Sieve Generation");
    group.throughput(criterion::Throughput::Bytes(BENCH_DATA_SIZE as u64));

    let mut callback = Analyzer::with_callback(&PrimescanConfig::default(), |prime| {
        black_box(prime);
    })
    .unwrap();
    group.bench_function("Generate primes [1] Function callback", |b| {
        b.iter(|| callback.generate(Segment::new(black_box(&sieve), 0)).unwrap())
    });

    let mut printer = Analyzer::with_output(
        &PrimescanConfig::printing(TupletClass::Triplet),
        Box::new(std::io::sink()),
    )
    .unwrap();
    group.bench_function("Generate triplets [2] Text to sink", |b| {
        b.iter(|| printer.generate(Segment::new(black_box(&sieve), 0)).unwrap())
    });

    group.finish();
}

// These two lines generate the main function and register the benchmark groups.
criterion_group!(benches, bench_count_kernels, bench_generate_kernels);
criterion_main!(benches);
