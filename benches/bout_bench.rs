//! Bout throughput benchmarks: single bouts and sequential vs parallel sweeps.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use bout_engine::analysis::{run_matchup, run_matchup_parallel};
use bout_engine::bout::Bout;
use bout_engine::core::config::{BoutConfig, RoundCount};
use bout_engine::core::types::FighterId;
use bout_engine::fighter::{Attributes, FighterSnapshot, FightingStyle};

fn bout(rounds: RoundCount) -> Bout {
    let red = FighterSnapshot::new(
        FighterId::from_u128(1),
        "Red",
        Attributes {
            striking: 70,
            grappling: 60,
            wrestling: 80,
            cardio: 75,
            chin: 65,
            speed: 60,
        },
        FightingStyle::Wrestler,
    );
    let blue = FighterSnapshot::new(
        FighterId::from_u128(2),
        "Blue",
        Attributes {
            striking: 82,
            grappling: 50,
            wrestling: 55,
            cardio: 70,
            chin: 70,
            speed: 75,
        },
        FightingStyle::Striker,
    );
    // Fixed ids, always valid
    Bout::new(red, blue, BoutConfig::with_rounds(rounds)).unwrap()
}

fn bench_single_bout(c: &mut Criterion) {
    let mut group = c.benchmark_group("bout");
    group.throughput(Throughput::Elements(1));

    let standard = bout(RoundCount::Standard);
    group.bench_function("three_rounds", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(standard.run(seed))
        });
    });

    let championship = bout(RoundCount::Championship);
    group.bench_function("five_rounds", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            black_box(championship.run(seed))
        });
    });

    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let pairing = bout(RoundCount::Standard);
    let iterations = 1_000;

    let mut group = c.benchmark_group("matchup_sweep");
    group.sample_size(20);
    group.throughput(Throughput::Elements(iterations as u64));

    group.bench_function("sequential", |b| {
        b.iter(|| black_box(run_matchup(&pairing, 42, iterations)));
    });
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(run_matchup_parallel(&pairing, 42, iterations)));
    });

    group.finish();
}

criterion_group!(benches, bench_single_bout, bench_sweep);
criterion_main!(benches);
