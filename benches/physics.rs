//! Benchmarks for drifty's world step and render layer.

use criterion::{criterion_group, criterion_main, Criterion};
use drifty::*;

fn hero_world() -> World<f32> {
    let layout = WordLayout::hero(Vec2::new(0.0, 0.0));
    let mut world = World::from_word(["N", "E", "W", "T", "O", "N"], &layout, WorldConfig::new())
        .expect("hero word builds");
    world.add_obstacle(Obstacle::new(
        "footer",
        Aabb::new(Vec2::new(-500.0, 250.0), Vec2::new(500.0, 320.0)),
    ));
    world
}

fn bench_world_step(c: &mut Criterion) {
    c.bench_function("hero_word_fling_600_ticks", |b| {
        b.iter(|| {
            let mut world = hero_world();
            world.nudge(2, Vec2::new(-30.0, 20.0)).expect("glyph exists");
            for _ in 0..600 {
                world.step(&mut NoOpStepObserver);
            }
            world.registry().as_slice().to_vec()
        });
    });
}

fn bench_crowded_world(c: &mut Criterion) {
    c.bench_function("grid_64_glyphs_120_ticks", |b| {
        b.iter(|| {
            let config = WorldConfig::new().with_collision_radius(90.0);
            let mut world: World<f32> = World::new(config).expect("valid config");
            for i in 0..64 {
                let rest = Vec2::new((i % 8) as f32 * 80.0, (i / 8) as f32 * 80.0);
                world.add_glyph("x", rest, Vec2::new(60.0, 80.0)).expect("non-empty label");
            }
            for _ in 0..120 {
                world.step(&mut NoOpStepObserver);
            }
            world.tick()
        });
    });
}

fn bench_render_layer(c: &mut Criterion) {
    c.bench_function("render_sync_advance_600_frames", |b| {
        b.iter(|| {
            let mut world = hero_world();
            let mut render = RenderLayer::new();
            world.nudge(0, Vec2::new(25.0, -10.0)).expect("glyph exists");
            for _ in 0..600 {
                world.advance(1.0 / 60.0, &mut NoOpStepObserver);
                render.sync(&world);
                render.advance(1.0 / 60.0);
            }
            render.transform(0)
        });
    });
}

criterion_group!(benches, bench_world_step, bench_crowded_world, bench_render_layer);
criterion_main!(benches);
