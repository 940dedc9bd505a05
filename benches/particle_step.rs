//! Benchmarks for the CPU-side simulation steps and rasterization.
//!
//! Run with: `cargo bench`

use std::time::Duration;

use backdrop::config::{ParticleFieldConfig, SwarmConfig};
use backdrop::{ParticleField, PixelCanvas, PointerTracker, SpawnContext, Stage, TriangleSwarm, Vec2};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn pointer_at(p: Vec2) -> PointerTracker {
    let mut pointer = PointerTracker::default();
    pointer.on_move(p, Duration::ZERO);
    pointer
}

fn bench_field_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_step");

    for (w, h) in [(800.0, 600.0), (1200.0, 800.0), (1920.0, 1080.0)] {
        let viewport = Vec2::new(w, h);
        let pointer = pointer_at(viewport * 0.5);
        let mut field = ParticleField::new(viewport, ParticleFieldConfig::default(), &mut SpawnContext::seeded(1));

        group.bench_with_input(BenchmarkId::new("particles", field.len()), &viewport, |b, _| {
            b.iter(|| field.step(black_box(&pointer)))
        });
    }

    group.finish();
}

fn bench_field_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_render");
    group.sample_size(20);

    let viewport = Vec2::new(1200.0, 800.0);
    let field = ParticleField::new(viewport, ParticleFieldConfig::default(), &mut SpawnContext::seeded(2));
    let mut canvas = PixelCanvas::new(1200, 800);

    group.bench_function("connections", |b| b.iter(|| black_box(field.connection_count())));
    group.bench_function("render", |b| b.iter(|| field.render(&mut canvas)));

    group.finish();
}

fn bench_swarm_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("swarm_frame");

    let center = Vec2::new(600.0, 400.0);
    let mut swarm = TriangleSwarm::new(SwarmConfig::default(), SpawnContext::seeded(3));
    swarm.start(Duration::ZERO);
    swarm.on_pointer_enter();

    // Fill towards the cap from a ring of pointer positions
    for i in 0..40 {
        let angle = i as f32 * 0.4;
        let pointer = pointer_at(center + Vec2::new(angle.cos(), angle.sin()) * 60.0);
        swarm.on_pointer_move(&pointer, Duration::ZERO);
    }
    let pointer = pointer_at(center);

    group.bench_function("recompute", |b| {
        b.iter_batched(
            || swarm.clone(),
            |mut s| black_box(s.on_frame(&pointer)),
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_stage_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("stage_frame");
    group.sample_size(20);

    let mut stage = Stage::new().with_seed(4);
    let mut canvas = PixelCanvas::new(1200, 800);
    stage.mount(Vec2::new(1200.0, 800.0), Duration::ZERO);

    let mut t = Duration::ZERO;
    group.bench_function("move_and_render", |b| {
        b.iter(|| {
            t += Duration::from_millis(16);
            let angle = t.as_secs_f32();
            stage.pointer_moved(Vec2::new(600.0 + angle.cos() * 200.0, 400.0 + angle.sin() * 150.0), t);
            black_box(stage.frame(t, Some(&mut canvas)))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_field_step,
    bench_field_render,
    bench_swarm_frame,
    bench_stage_frame,
);
criterion_main!(benches);
