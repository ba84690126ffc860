//! Construction benchmarks for every indexing structure
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strix::Alphabet;
use strix::index::suffix_automaton::DenseTransitions;
use strix::index::z_function::{find_occurrences, z_function};
use strix::index::{
    AhoCorasickBuilder, GeneralizedSuffixTree, MaskMatcher, SuffixArrayBuilder, SuffixArrayConfig,
    SuffixAutomaton, WildcardMask,
};

/// Deterministic pseudo-random text over `symbols`
fn sample_text(len: usize, symbols: &[u8]) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(len as u64);
    (0..len)
        .map(|_| symbols[rng.random_range(0..symbols.len())])
        .collect()
}

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn bench_z_function(c: &mut Criterion) {
    let mut group = c.benchmark_group("z_function");
    for size in SIZES {
        let text = sample_text(size, b"ab");
        group.bench_with_input(BenchmarkId::new("z_array", size), &text, |b, text| {
            b.iter(|| z_function(black_box(text)))
        });
        group.bench_with_input(BenchmarkId::new("search", size), &text, |b, text| {
            b.iter(|| find_occurrences(black_box(text), b"abba", b'#'))
        });
    }
    group.finish();
}

fn bench_suffix_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("suffix_array");
    for size in SIZES {
        let text = sample_text(size, b"acgt");
        group.bench_with_input(BenchmarkId::new("sequential", size), &text, |b, text| {
            let builder = SuffixArrayBuilder::new(SuffixArrayConfig {
                parallel_threshold: usize::MAX,
            });
            b.iter(|| builder.build(black_box(text)).into_inner())
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &text, |b, text| {
            let builder = SuffixArrayBuilder::new(SuffixArrayConfig {
                parallel_threshold: 0,
            });
            b.iter(|| builder.build(black_box(text)).into_inner())
        });
        group.bench_with_input(BenchmarkId::new("lcp", size), &text, |b, text| {
            let sa = SuffixArrayBuilder::with_defaults().build(text);
            b.iter(|| black_box(&sa).lcp())
        });
    }
    group.finish();
}

fn bench_suffix_automaton(c: &mut Criterion) {
    let mut group = c.benchmark_group("suffix_automaton");
    for size in SIZES {
        let text = sample_text(size, b"acgt");
        group.bench_with_input(BenchmarkId::new("sparse", size), &text, |b, text| {
            b.iter(|| SuffixAutomaton::from_text(black_box(text)).len())
        });
        group.bench_with_input(BenchmarkId::new("dense", size), &text, |b, text| {
            let alphabet = Alphabet::lowercase();
            b.iter(|| {
                SuffixAutomaton::<DenseTransitions<26>>::from_text_in(black_box(text), &alphabet)
                    .map(|automaton| automaton.len())
            })
        });
    }
    group.finish();
}

fn bench_suffix_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("suffix_tree");
    for size in SIZES {
        let mut first = sample_text(size / 2, b"ab");
        first.push(b'$');
        let mut second = sample_text(size / 2, b"ba");
        second.push(b'#');
        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| GeneralizedSuffixTree::new(black_box(&first), black_box(&second)).node_count())
        });
    }
    group.finish();
}

fn bench_aho_corasick(c: &mut Criterion) {
    let text = sample_text(100_000, b"abcd");
    let patterns: Vec<Vec<u8>> = (0..200)
        .map(|i| sample_text(3 + i % 6, b"abcd"))
        .collect();

    let mut group = c.benchmark_group("aho_corasick");
    group.bench_function("build_200_patterns", |b| {
        b.iter(|| {
            let mut builder = AhoCorasickBuilder::new(Alphabet::lowercase());
            for pattern in &patterns {
                let _ = builder.add_pattern(black_box(pattern));
            }
            builder.build()
        })
    });

    let mut builder = AhoCorasickBuilder::new(Alphabet::lowercase());
    for pattern in &patterns {
        let _ = builder.add_pattern(pattern);
    }
    let mut automaton = builder.build();
    group.bench_function("find_all_100kb", |b| {
        b.iter(|| automaton.find_all(black_box(&text)).len())
    });

    let mask = WildcardMask::parse(b"ab??c?da", b'?');
    if let Ok(mut matcher) = MaskMatcher::new(&mask, Alphabet::lowercase()) {
        group.bench_function("mask_100kb", |b| b.iter(|| matcher.find(black_box(&text))));
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_z_function,
    bench_suffix_array,
    bench_suffix_automaton,
    bench_suffix_tree,
    bench_aho_corasick,
);
criterion_main!(benches);
