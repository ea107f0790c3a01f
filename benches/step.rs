use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use orrery::body::TrajectoryRetention;
use orrery::constants::DAY_S;
use orrery::scenario::ClusterConfig;

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_simulation");

    for count in [10usize, 100, 500] {
        let scenario = ClusterConfig::new()
            .with_count(count)
            .generate()
            .expect("valid cluster config");

        group.bench_with_input(BenchmarkId::from_parameter(count + 1), &scenario, |b, scenario| {
            let mut sim = scenario.build_simulator().expect("valid scenario");
            sim.set_trajectory_retention(TrajectoryRetention::Capped(1024));
            b.iter(|| sim.step_simulation(black_box(DAY_S)).expect("step succeeds"));
        });
    }

    group.finish();
}

fn bench_acceleration(c: &mut Criterion) {
    let sim = ClusterConfig::new()
        .with_count(500)
        .generate()
        .and_then(|scenario| scenario.build_simulator())
        .expect("valid scenario");

    c.bench_function("accelerations_501", |b| {
        b.iter(|| black_box(sim.accelerations().expect("nonzero masses")))
    });
}

criterion_group!(benches, bench_step, bench_acceleration);
criterion_main!(benches);
