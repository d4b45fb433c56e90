//! Benchmarks for automaton construction and bounded-mismatch search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kmismatch::automaton::SuffixAutomaton;
use kmismatch::{MismatchSearch, SearchConfig};

/// Deterministic pseudo-random DNA of the given length
fn generate_dna(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            b"ACGT"[(state >> 62) as usize]
        })
        .collect()
}

/// Copy of `text` with every `period`-th symbol substituted
fn mutate(text: &[u8], period: usize) -> Vec<u8> {
    text.iter()
        .enumerate()
        .map(|(i, &b)| if i % period == period - 1 { b'N' } else { b })
        .collect()
}

/// Benchmark: automaton construction over the concatenated pair
fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("automaton_construction");

    for size in [100, 1_000, 10_000].iter() {
        let first = generate_dna(*size, 1);
        let second = generate_dna(*size, 2);

        group.throughput(Throughput::Bytes((2 * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let sa = SuffixAutomaton::from_pair(black_box(&first), black_box(&second));
                black_box(sa);
            });
        });
    }
    group.finish();
}

/// Benchmark: search with growing mismatch budget
fn bench_search_varying_k(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_varying_k");

    let first = generate_dna(60, 3);
    let second = mutate(&first, 12);
    let search = MismatchSearch::new(&first, &second);

    for k in [0, 1, 2, 4].iter() {
        let config = SearchConfig::new(*k, 8).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(k), k, |b, _| {
            b.iter(|| black_box(search.run(black_box(&config))));
        });
    }
    group.finish();
}

/// Benchmark: end-to-end call including construction
fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end");

    for size in [20, 40, 80].iter() {
        let first = generate_dna(*size, 4);
        let second = mutate(&first, 10);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                kmismatch::find_bounded_mismatch_common_substring(
                    black_box(&first),
                    black_box(&second),
                    1,
                    5,
                )
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_search_varying_k,
    bench_end_to_end
);
criterion_main!(benches);
