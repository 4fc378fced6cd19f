//! Benchmarks for the CPU simulation step.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pendlab::prelude::*;

fn bench_integrator_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrator");

    group.bench_function("gravity_on", |b| {
        let mut integrator = Integrator::new(true);
        let mut state = PendulumState::with_angle(0.9);
        let mut clock = 0.0;
        b.iter(|| {
            clock += 16.0;
            black_box(integrator.step(&mut state, clock))
        })
    });

    group.bench_function("gravity_off", |b| {
        let mut integrator = Integrator::new(false);
        let mut state = PendulumState::with_angle(0.9);
        state.gravity_on = false;
        let mut clock = 0.0;
        b.iter(|| {
            clock += 16.0;
            black_box(integrator.step(&mut state, clock))
        })
    });

    group.finish();
}

fn bench_pick_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("picking");

    group.bench_function("ndc_ray_to_angle", |b| {
        let camera = Camera::new();
        let ndc = Vec2::new(0.3, -0.4);
        b.iter(|| {
            let ray = camera.ndc_ray(black_box(ndc), 16.0 / 9.0);
            black_box(ray.intersect_pendulum_plane())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_integrator_step, bench_pick_path);
criterion_main!(benches);
