// File: crates/pointplot-core/tests/replay.rs
// Purpose: Replaying the registry twice produces identical output on both surfaces.

use pointplot_core::surface::PathOp;
use pointplot_core::{Chart, DrawCommand, DrawOverride, RasterSurface, RecordingSurface};

fn populate<S: pointplot_core::Surface>(c: &mut Chart<S>) {
    let wave: Vec<(f64, f64)> = (0..40).map(|i| (i as f64 * 0.25, (i as f64 * 0.3).sin() * 4.0)).collect();
    c.draw_line(wave, Some(&DrawOverride { fill: Some(true), area_opacity: Some(0.3), ..Default::default() }), true);
    c.draw_scatter(vec![(1.0, 1.0), (4.0, -2.0), (7.5, 3.0)], None, false);
}

#[test]
fn recorded_replays_are_identical() {
    let mut c = Chart::create(Some(RecordingSurface::new(640.0, 400.0)), false, None).unwrap();
    populate(&mut c);
    c.surface_mut().take_commands();

    c.replay_all();
    let first = c.surface_mut().take_commands();
    c.replay_all();
    let second = c.surface_mut().take_commands();

    assert!(!first.is_empty());
    assert!(matches!(first[0], DrawCommand::Clear(_)));
    assert_eq!(first, second);
}

#[test]
fn replay_repaints_every_series() {
    let mut c = Chart::create(Some(RecordingSurface::new(640.0, 400.0)), false, None).unwrap();
    populate(&mut c);
    c.surface_mut().take_commands();
    c.replay_all();
    let cmds = c.surface().commands();
    // One area fill for the line plus nothing for unfilled scatter markers
    assert_eq!(cmds.iter().filter(|c| matches!(c, DrawCommand::Fill { .. })).count(), 1);
    let markers = cmds
        .iter()
        .filter(|c| matches!(c, DrawCommand::Stroke { path, .. } if matches!(path.ops(), [PathOp::Circle { .. }])))
        .count();
    assert_eq!(markers, 3);
}

#[test]
fn raster_replays_are_pixel_identical() {
    let surface = RasterSurface::new(320, 200);
    let mut c = Chart::create(surface, false, None).expect("raster chart");
    populate(&mut c);

    c.replay_all();
    let (first, w, h, stride) = c.surface_mut().to_rgba8().expect("readback");
    assert_eq!((w, h), (320, 200));
    assert_eq!(first.len(), stride * h as usize);

    c.replay_all();
    let (second, ..) = c.surface_mut().to_rgba8().expect("readback");
    assert_eq!(first, second);
}
