use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hexmove::core::EngineConfig;
use hexmove::hex::Axial;
use hexmove::pathfinding::{find_path, reachable, SearchOptions};
use hexmove::rules::CapabilitySet;

/// Deterministic varied terrain: cheap roads, plains, and rough patches.
fn terrain_cost(_from: Axial, to: Axial, _caps: &CapabilitySet) -> f32 {
    match (to.q.rem_euclid(7), to.r.rem_euclid(5)) {
        (0, _) => 0.5,
        (_, 0) => 2.5,
        _ => 1.0,
    }
}

fn bench_find_path(c: &mut Criterion) {
    let config = EngineConfig::default();
    let options = SearchOptions::default();

    c.bench_function("find_path_40_hexes", |b| {
        b.iter(|| {
            find_path(
                black_box(Axial::new(0, 0)),
                black_box(Axial::new(40, -20)),
                &terrain_cost,
                &options,
                &config,
            )
        })
    });
}

fn bench_reachable(c: &mut Criterion) {
    let options = SearchOptions::default();

    c.bench_function("reachable_budget_12", |b| {
        b.iter(|| {
            reachable(
                black_box(Axial::new(0, 0)),
                black_box(12.0),
                &terrain_cost,
                &options,
            )
        })
    });
}

criterion_group!(benches, bench_find_path, bench_reachable);
criterion_main!(benches);
