//! Criterion benchmarks for spin setup work.
//!
//! Benchmarks:
//!   - delay_schedule with the default 150-tick tuning
//!   - build_deck over a full-size station pool
//!   - build_station_pool normalization of a raw dataset
//!
//! Budget: everything here runs on the frame that handles Start, so the
//! whole batch must stay well under a millisecond.
//!
//! Run with: cargo bench -p roulette --bench spin_perf

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use roulette::rng::SpinRng;
use roulette::spin::{build_deck, SpinTuning};
use roulette::stations::build_station_pool;

fn full_pool() -> Vec<String> {
    (0..240).map(|i| format!("車站{i:03}")).collect()
}

// ---------------------------------------------------------------------------
// Benchmark: delay schedule
// ---------------------------------------------------------------------------

fn bench_delay_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("spin_delay_schedule");
    group.sample_size(1000);

    let tuning = SpinTuning::default();
    group.bench_function("default_150_ticks", |b| {
        b.iter(|| black_box(black_box(&tuning).delay_schedule()));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: deck construction
// ---------------------------------------------------------------------------

fn bench_build_deck(c: &mut Criterion) {
    let mut group = c.benchmark_group("spin_build_deck");

    let pool = full_pool();
    let tuning = SpinTuning::default();
    let mut rng = SpinRng::from_seed_u64(1).0;

    group.bench_function("pool_240_ticks_150", |b| {
        b.iter(|| {
            black_box(build_deck(
                black_box(&pool),
                black_box(tuning.ticks),
                black_box("車站000"),
                &mut rng,
            ))
        });
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: pool normalization
// ---------------------------------------------------------------------------

fn bench_build_station_pool(c: &mut Criterion) {
    let mut group = c.benchmark_group("spin_station_pool");

    // Raw list with the artifacts normalization exists for: legacy 台,
    // stray whitespace, and parenthetical annotations.
    let raw: Vec<String> = (0..240)
        .map(|i| match i % 4 {
            0 => format!("台站{i:03}"),
            1 => format!("車站 {i:03}"),
            2 => format!("車站{i:03}(舊)"),
            _ => format!("車站{i:03}"),
        })
        .collect();

    group.bench_function("raw_240_names", |b| {
        b.iter(|| black_box(build_station_pool(black_box(&raw))));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Register groups
// ---------------------------------------------------------------------------

criterion_group!(
    benches,
    bench_delay_schedule,
    bench_build_deck,
    bench_build_station_pool
);
criterion_main!(benches);
