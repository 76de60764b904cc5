use criterion::{black_box, criterion_group, criterion_main, Criterion};
use light_clock::{
    bounce_position,
    math::vec3::Vec3,
    relativity::InertialFrame,
    clock::{IndicatorAnchor, LightClock},
    world::Scene,
};

// --- Helper for building a row of clocks at increasing speeds ---
fn build_scene(num_clocks: usize) -> Scene {
    let mut scene = Scene::new();
    for i in 0..num_clocks {
        let x = i as f64 * 1.5;
        let clock = LightClock::new(Vec3::xy(x, 0.0), Vec3::xy(x, 2.0), 1.0).unwrap();
        let beta = 0.9 * i as f64 / num_clocks as f64;
        let frame = InertialFrame::new(Vec3::xy(beta, 0.0), 1.0).unwrap();
        scene.add_clock(clock, frame, IndicatorAnchor::default()).unwrap();
    }
    scene
}

// Single evaluation of the bounce function over a spread of times
fn bench_bounce_position(c: &mut Criterion) {
    let start = Vec3::xy(0.0, 0.0);
    let end = Vec3::xy(0.0, 4.0);
    c.bench_function("bounce_position", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..1000 {
                let t = i as f64 * 0.013;
                acc += bounce_position(black_box(start), black_box(end), black_box(t), 0.5).unwrap().y;
            }
            acc
        });
    });
}

// Stepping a scene the way a host would at 60 FPS
fn bench_scene_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_step");

    for num_clocks in [1, 10, 100].iter() {
        group.bench_with_input(criterion::BenchmarkId::from_parameter(num_clocks), num_clocks, |b, &n| {
            b.iter(|| {
                let mut scene = build_scene(black_box(n));
                let dt = 1.0 / 60.0;
                for _ in 0..120 {
                    scene.step(black_box(dt), false).unwrap();
                }
                scene
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_bounce_position, bench_scene_step);
criterion_main!(benches);
