// File: crates/pointplot-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use pointplot_core::{Chart, PointerEvent, RasterSurface};

#[test]
fn render_smoke_png() {
    let mut chart = Chart::create(RasterSurface::new(400, 300), true, None).expect("chart");
    chart.draw_line(vec![(0.0, 0.0), (1.0, 2.0), (2.0, 1.0), (3.0, 3.5), (4.0, 2.5)], None, true);
    chart.draw_scatter(vec![(0.5, 1.0), (2.5, 3.0)], None, false);
    chart.handle_event(PointerEvent::Wheel { x: 250.0, y: 120.0, delta_y: -1.0 });

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    chart.surface_mut().write_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.surface_mut().encode_png().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let decoded = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(decoded.dimensions(), (400, 300));
}

#[test]
fn rgba_readback_matches_surface() {
    let mut chart = Chart::create(RasterSurface::new(400, 300), false, None).expect("chart");
    chart.draw_scatter(vec![(0.0, 0.0), (1.0, 1.0)], None, true);
    let (buf, w, h, stride) = chart.surface_mut().to_rgba8().expect("rgba");
    assert_eq!((w, h), (400, 300));
    assert_eq!(stride, 400 * 4);
    assert_eq!(buf.len(), stride * h as usize);
    // Top-right corner of the plot lies beyond the last gridline: plain background
    let i = 3 * stride + (w as usize - 3) * 4;
    assert_eq!(&buf[i..i + 4], &[255, 255, 255, 255]);
}

#[test]
fn missing_or_empty_surface_creates_nothing() {
    assert!(Chart::<RasterSurface>::create(None, true, None).is_none());
    assert!(RasterSurface::new(0, 10).is_none());
    assert!(Chart::create(Some(pointplot_core::RecordingSurface::new(0.0, 100.0)), false, None).is_none());
}
