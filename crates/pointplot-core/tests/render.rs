// File: crates/pointplot-core/tests/render.rs
// Purpose: Draw command output for frames, labels and series geometry.

use pointplot_core::format::axis_label;
use pointplot_core::surface::PathOp;
use pointplot_core::{Chart, ChartScale, DrawCommand, DrawOverride, GlobalOverride, RecordingSurface};

fn chart() -> Chart<RecordingSurface> {
    Chart::create(Some(RecordingSurface::new(800.0, 600.0)), false, None).expect("chart")
}

fn circles(cmds: &[DrawCommand]) -> Vec<(f64, f64)> {
    cmds.iter()
        .filter_map(|c| match c {
            DrawCommand::Stroke { path, .. } => match path.ops() {
                [PathOp::Circle { center, .. }] => Some(*center),
                _ => None,
            },
            _ => None,
        })
        .collect()
}

#[test]
fn reset_draw_starts_with_clear_and_labels_once() {
    let mut c = chart();
    c.draw_line(vec![(0.0, 0.0), (10.0, 10.0)], None, true);
    let cmds = c.surface().commands();
    assert!(matches!(cmds[0], DrawCommand::Clear(_)));

    // 10 y labels, 10 x labels, two titles
    assert_eq!(c.surface().texts().count(), 22);
    let first_x = c.surface().texts().nth(1).unwrap();
    assert_eq!(first_x.text, "-0.81");
    let first_y = c.surface().texts().next().unwrap();
    assert_eq!(first_y.text, "-1.09");
    assert_eq!(first_y.x, 79.0);

    // A second incremental series adds no labels
    c.draw_scatter(vec![(5.0, 5.0)], None, false);
    assert_eq!(c.surface().texts().count(), 22);
}

#[test]
fn full_scale_draws_no_labels() {
    let ov = GlobalOverride { chart_scale: Some(ChartScale::Full), ..Default::default() };
    let mut c = Chart::create(Some(RecordingSurface::new(400.0, 300.0)), false, Some(&ov)).unwrap();
    c.draw_line(vec![(0.0, 0.0), (1.0, 1.0)], None, true);
    assert_eq!(c.surface().texts().count(), 0);
}

#[test]
fn grid_can_be_disabled() {
    let ov = GlobalOverride { draw_grid: Some(false), ..Default::default() };
    let mut c = Chart::create(Some(RecordingSurface::new(800.0, 600.0)), false, Some(&ov)).unwrap();
    c.draw_scatter(vec![(0.0, 0.0), (1.0, 1.0)], None, true);
    let thin = c.surface().commands().iter().filter(|cmd| matches!(cmd, DrawCommand::Stroke { width, .. } if *width == 0.5)).count();
    assert_eq!(thin, 0);
}

#[test]
fn filled_line_fills_before_stroking() {
    let mut c = chart();
    c.draw_line(vec![(0.0, 0.0), (10.0, 10.0)], None, true);
    c.surface_mut().take_commands();

    let ov = DrawOverride { fill: Some(true), area_opacity: Some(0.5), ..Default::default() };
    c.draw_line(vec![(0.0, 5.0), (10.0, 5.0)], Some(&ov), false);
    let cmds = c.surface_mut().take_commands();
    assert_eq!(cmds.len(), 2);
    let DrawCommand::Fill { path: area, alpha, .. } = &cmds[0] else { panic!("expected fill, got {:?}", cmds[0]) };
    assert_eq!(*alpha, 0.5);
    // Closed along the row just above the plot bottom
    assert_eq!(area.ops().last(), Some(&PathOp::LineTo((134.0, 557.0))));
    let DrawCommand::Stroke { path: outline, width, .. } = &cmds[1] else { panic!("expected stroke") };
    assert_eq!(*width, 1.4);
    assert_eq!(outline.ops()[0], PathOp::MoveTo((134.0, 557.0)));
}

#[test]
fn scatter_markers_left_of_plot_are_suppressed() {
    let mut c = chart();
    // Visible range becomes x [5, 15]
    c.draw_line(vec![(5.0, 0.0), (15.0, 10.0)], None, true);
    c.surface_mut().take_commands();

    c.draw_scatter(vec![(0.0, 5.0), (10.0, 5.0)], None, false);
    let cmds = c.surface_mut().take_commands();
    assert_eq!(circles(&cmds), vec![(442.0, 279.0)]);
    // Unfilled markers are stroked only
    assert!(!cmds.iter().any(|c| matches!(c, DrawCommand::Fill { .. })));
}

#[test]
fn filled_scatter_uses_area_colour_for_markers() {
    let mut c = chart();
    let ov = DrawOverride { fill: Some(true), ..Default::default() };
    c.draw_scatter(vec![(1.0, 1.0), (2.0, 2.0)], Some(&ov), true);
    let fills: Vec<_> = c
        .surface()
        .commands()
        .iter()
        .filter_map(|cmd| match cmd {
            DrawCommand::Fill { color, .. } => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(fills.len(), 2);
    assert!(fills.iter().all(|col| *col == c.default_draw_options().area_color));
}

#[test]
fn label_format_truncates() {
    assert_eq!(axis_label(-0.811688, 2), "-0.81");
    assert_eq!(axis_label(0.129, 1), "0.1");
    assert_eq!(axis_label(3.0, 2), "3");
    assert_eq!(axis_label(2.75, 0), "2");
    assert_eq!(axis_label(4e-9, 2), "0");
    assert_eq!(axis_label(f64::NAN, 2), "NaN");
}
