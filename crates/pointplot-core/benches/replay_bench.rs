use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pointplot_core::{Chart, PointerEvent, RasterSurface, RecordingSurface};

fn wave(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let x = i as f64;
            (x, (x * 0.01).sin() * 10.0 + x * 0.0001)
        })
        .collect()
}

fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay_all");
    for &n in &[10_000usize, 50_000usize] {
        group.bench_function(format!("recording_{n}"), |b| {
            let mut ch = Chart::create(Some(RecordingSurface::new(800.0, 500.0)), false, None).expect("chart");
            ch.draw_line(wave(n), None, true);
            ch.draw_scatter(wave(n / 100), None, false);
            b.iter(|| {
                ch.replay_all();
                black_box(ch.surface_mut().take_commands());
            });
        });
        group.bench_function(format!("raster_{n}"), |b| {
            let mut ch = Chart::create(RasterSurface::new(800, 500), false, None).expect("chart");
            ch.draw_line(wave(n), None, true);
            b.iter(|| ch.replay_all());
        });
    }
    group.finish();
}

fn bench_wheel(c: &mut Criterion) {
    c.bench_function("wheel_zoom_raster_10k", |b| {
        let mut ch = Chart::create(RasterSurface::new(800, 500), true, None).expect("chart");
        ch.draw_line(wave(10_000), None, true);
        let (x, y) = ch.layout().plot.center();
        let mut delta = 1.0;
        b.iter(|| {
            // Alternate so the range stays bounded
            delta = -delta;
            black_box(ch.handle_event(PointerEvent::Wheel { x, y, delta_y: delta }));
        });
    });
}

criterion_group!(benches, bench_replay, bench_wheel);
criterion_main!(benches);
