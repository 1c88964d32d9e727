//! Frame-loop benchmarks for the rotation controller and stage.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec2;
use toque::controller::RotationController;
use toque::input::{InputEvent, MouseButton};
use toque::options::Options;
use toque::stage::{ShowpieceTransform, Stage};

fn controller_tick_benchmark(c: &mut Criterion) {
    let mut controller = RotationController::default();
    controller.pointer_down(Vec2::ZERO, 0.0);
    let _ = controller.pointer_move(Vec2::new(50.0, 10.0), 16.0);
    let _ = controller.pointer_up();

    c.bench_function("controller_tick", |b| {
        b.iter(|| controller.tick(black_box(1.0 / 60.0)));
    });
}

fn drag_sample_benchmark(c: &mut Criterion) {
    let mut controller = RotationController::default();
    controller.pointer_down(Vec2::ZERO, 0.0);
    let mut t = 0.0;

    c.bench_function("drag_sample", |b| {
        b.iter(|| {
            t += 16.0;
            let x = (t as f32 * 0.1).sin() * 200.0;
            black_box(controller.pointer_move(Vec2::new(x, 0.0), t))
        });
    });
}

fn stage_frame_benchmark(c: &mut Criterion) {
    let mut stage =
        Stage::new(&Options::default()).with_model(ShowpieceTransform::default());
    stage.resize(1280.0, 800.0);
    let _ = stage.handle_event(InputEvent::PointerDown {
        x: 0.0,
        y: 0.0,
        button: MouseButton::Left,
        time_ms: 0.0,
    });
    let _ = stage.handle_event(InputEvent::PointerMove {
        x: 80.0,
        y: 10.0,
        time_ms: 16.0,
    });
    let _ = stage.handle_event(InputEvent::PointerUp);

    c.bench_function("stage_frame", |b| {
        b.iter(|| black_box(stage.tick(black_box(1.0 / 60.0))));
    });
}

criterion_group!(
    benches,
    controller_tick_benchmark,
    drag_sample_benchmark,
    stage_frame_benchmark
);
criterion_main!(benches);
