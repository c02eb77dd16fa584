// File: crates/pointplot-core/tests/layout.rs
// Purpose: Plot rectangle, axis bands and padded extent from surface size and options.

use pointplot_core::surface::FontMetrics;
use pointplot_core::{Chart, ChartScale, GlobalOverride, Layout, PlotRect, RecordingSurface};

const METRICS: FontMetrics = FontMetrics { ascent: 9.0, descent: 2.0 };

#[test]
fn no_margin_scale_uses_whole_surface() {
    let ov = GlobalOverride { chart_scale: Some(ChartScale::Full), ..Default::default() };
    let chart = Chart::create(Some(RecordingSurface::new(640.0, 480.0)), false, Some(&ov)).expect("chart");
    assert_eq!(chart.layout().plot, PlotRect::new(0.0, 0.0, 640.0, 480.0));
}

#[test]
fn margins_reserve_label_bands() {
    let layout = Layout::compute(800.0, 600.0, ChartScale::P95, 50.0, METRICS);
    assert_eq!(layout.label_spacing, 42.0);
    assert_eq!(layout.plot, PlotRect::new(84.0, 0.0, 716.0, 558.0));
    assert_eq!(layout.plot.right(), 800.0);

    let u = layout.usable;
    assert_eq!((u.x_min, u.x_max), (134.0, 750.0));
    assert_eq!((u.y_min, u.y_max), (50.0, 508.0));
    assert_eq!(u.y_anchor, u.y_max);
}

#[test]
fn oversized_padding_collapses_to_centre() {
    let layout = Layout::compute(200.0, 100.0, ChartScale::Full, 80.0, METRICS);
    let u = layout.usable;
    // 80 fits horizontally (<= 100) but not vertically (> 50)
    assert_eq!((u.x_min, u.x_max), (80.0, 120.0));
    assert_eq!((u.y_min, u.y_max), (50.0, 50.0));
    assert_eq!(u.y_anchor, 50.0);

    let layout = Layout::compute(100.0, 100.0, ChartScale::Full, 60.0, METRICS);
    assert_eq!((layout.usable.x_min, layout.usable.x_max), (50.0, 50.0));
}

#[test]
fn changing_scale_recomputes_layout() {
    let mut chart = Chart::create(Some(RecordingSurface::new(800.0, 600.0)), false, None).expect("chart");
    assert_eq!(chart.layout().plot.x, 84.0);
    chart.set_global_options(&GlobalOverride { chart_scale: Some(ChartScale::Full), ..Default::default() });
    assert_eq!(chart.layout().plot, PlotRect::new(0.0, 0.0, 800.0, 600.0));
}
