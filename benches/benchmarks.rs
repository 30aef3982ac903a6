//! Benchmarks for rankstats
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use rankstats::ScoreSet;

/// Deterministic score stream with heavy value collisions.
fn scores(n: usize, distinct: u64) -> Vec<f64> {
    let mut state: u64 = 0x9E3779B9;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state % distinct) as f64
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_set");
    group.throughput(Throughput::Elements(1));

    group.bench_function("add", |b| {
        let values = scores(1 << 16, 16001);
        let mut set: ScoreSet = ScoreSet::new();
        let mut i = 0;
        b.iter(|| {
            set.add(values[i & (values.len() - 1)]);
            i += 1;
        });
    });

    group.finish();
}

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");

    for size in [1_000, 100_000] {
        group.bench_function(format!("settle_n{}", size), |b| {
            let mut set: ScoreSet = scores(size, 16001).into_iter().collect();
            b.iter(|| {
                // Invalidate so every iteration pays the full pass
                set.add(50.0);
                black_box(set.stddev());
            });
        });

        group.bench_function(format!("memoized_read_n{}", size), |b| {
            let set: ScoreSet = scores(size, 16001).into_iter().collect();
            set.settle();
            b.iter(|| black_box(set.deviation_score(8000.0)));
        });
    }

    group.finish();
}

fn bench_rankings(c: &mut Criterion) {
    let mut group = c.benchmark_group("rankings");

    let set: ScoreSet = scores(1_000_000, 16001).into_iter().collect();
    let ranking = set.ranking();

    group.bench_function("rank", |b| {
        let mut v = 0u64;
        b.iter(|| {
            v = (v + 7919) % 16001;
            black_box(ranking.rank(v as f64));
        });
    });

    group.bench_function("value_at", |b| {
        let mut rank = 1;
        b.iter(|| {
            rank = rank % set.len() + 1;
            black_box(ranking.value_at(rank));
        });
    });

    group.bench_function("iter_full", |b| {
        b.iter(|| {
            let mut blocks = 0;
            for entry in ranking.iter() {
                blocks += black_box(entry.count);
            }
            black_box(blocks)
        });
    });

    group.finish();
}

fn bench_set_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_algebra");

    let a: ScoreSet = scores(10_000, 500).into_iter().collect();
    let b_set: ScoreSet = scores(10_000, 700).into_iter().collect();

    group.bench_function("union_10k", |b| {
        b.iter(|| black_box(a.union(&b_set).len()));
    });

    group.bench_function("intersection_10k", |b| {
        b.iter(|| black_box(a.intersection(&b_set).len()));
    });

    group.bench_function("symmetric_difference_10k", |b| {
        b.iter(|| black_box(a.symmetric_difference(&b_set).len()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insert,
    bench_statistics,
    bench_rankings,
    bench_set_algebra
);
criterion_main!(benches);
