// File: crates/pointplot-core/tests/interaction.rs
// Purpose: Wheel zoom and drag pan routed through Chart::handle_event.

use pointplot_core::{Bounds, Chart, EventResponse, MouseButton, PointerEvent, RecordingSurface};

fn interactive() -> Chart<RecordingSurface> {
    let mut c = Chart::create(Some(RecordingSurface::new(800.0, 600.0)), true, None).expect("chart");
    c.draw_line(vec![(0.0, 0.0), (10.0, 10.0)], None, true);
    c
}

fn assert_bounds(got: Bounds, want: Bounds) {
    let pairs = [(got.xmin, want.xmin), (got.xmax, want.xmax), (got.ymin, want.ymin), (got.ymax, want.ymax)];
    for (g, w) in pairs {
        assert!((g - w).abs() < 1e-9, "got {got:?}, want {want:?}");
    }
}

#[test]
fn wheel_down_at_centre_zooms_out_about_centre() {
    let mut c = interactive();
    // Plot centre maps to (5, 5)
    let centre = c.mapper().unwrap().to_data((442.0, 279.0));
    assert_eq!(centre, (5.0, 5.0));

    let r = c.handle_event(PointerEvent::Wheel { x: 442.0, y: 279.0, delta_y: 1.0 });
    assert_eq!(r, EventResponse::Consumed);
    assert_bounds(c.visible_range(), Bounds::new(-0.75, 10.75, -0.75, 10.75));
    // Auto extremes are untouched by gestures
    assert_eq!(c.auto_extremes(), Bounds::new(0.0, 10.0, 0.0, 10.0));
}

#[test]
fn wheel_up_zooms_in() {
    let mut c = interactive();
    c.handle_event(PointerEvent::Wheel { x: 442.0, y: 279.0, delta_y: -3.0 });
    assert_bounds(c.visible_range(), Bounds::new(0.75, 9.25, 0.75, 9.25));
}

#[test]
fn wheel_outside_plot_or_without_delta_is_ignored() {
    let mut c = interactive();
    let before = c.visible_range();
    // Over the y-axis band
    assert_eq!(c.handle_event(PointerEvent::Wheel { x: 40.0, y: 200.0, delta_y: 1.0 }), EventResponse::Ignored);
    // On the left border itself
    assert_eq!(c.handle_event(PointerEvent::Wheel { x: 84.0, y: 200.0, delta_y: 1.0 }), EventResponse::Ignored);
    assert_eq!(c.handle_event(PointerEvent::Wheel { x: 442.0, y: 279.0, delta_y: 0.0 }), EventResponse::Ignored);
    assert_eq!(c.visible_range(), before);
}

#[test]
fn sequential_drag_moves_accumulate() {
    let mut c = interactive();
    let step = 100.0 * 10.0 / 616.0;

    assert_eq!(c.handle_event(PointerEvent::Down { x: 300.0, y: 300.0, button: MouseButton::Primary }), EventResponse::Consumed);
    assert!(c.interaction().is_dragging());

    c.handle_event(PointerEvent::Move { x: 400.0, y: 300.0, primary_held: true });
    assert_bounds(c.visible_range(), Bounds::new(-step, 10.0 - step, 0.0, 10.0));
    assert_eq!(c.interaction().last_drag_pixel(), (400.0, 300.0));

    c.handle_event(PointerEvent::Move { x: 500.0, y: 300.0, primary_held: true });
    assert_bounds(c.visible_range(), Bounds::new(-2.0 * step, 10.0 - 2.0 * step, 0.0, 10.0));

    assert_eq!(c.handle_event(PointerEvent::Up { x: 500.0, y: 300.0, button: MouseButton::Primary }), EventResponse::Consumed);
    assert!(!c.interaction().is_dragging());

    // Moves after release do nothing
    let settled = c.visible_range();
    assert_eq!(c.handle_event(PointerEvent::Move { x: 600.0, y: 300.0, primary_held: false }), EventResponse::Ignored);
    assert_eq!(c.visible_range(), settled);
}

#[test]
fn vertical_drag_down_moves_window_up() {
    let mut c = interactive();
    c.handle_event(PointerEvent::Down { x: 300.0, y: 200.0, button: MouseButton::Primary });
    c.handle_event(PointerEvent::Move { x: 300.0, y: 300.0, primary_held: true });
    // Dragging toward the bottom reveals larger y
    let v = c.visible_range();
    assert!(v.ymin > 0.0 && v.ymax > 10.0);
    assert!((v.height() - 10.0).abs() < 1e-9);
}

#[test]
fn drag_outside_plot_keeps_last_pixel() {
    let mut c = interactive();
    c.handle_event(PointerEvent::Down { x: 300.0, y: 300.0, button: MouseButton::Primary });
    let r = c.handle_event(PointerEvent::Move { x: 20.0, y: 300.0, primary_held: true });
    assert_eq!(r, EventResponse::Consumed);
    assert_eq!(c.visible_range(), Bounds::new(0.0, 10.0, 0.0, 10.0));
    assert_eq!(c.interaction().last_drag_pixel(), (300.0, 300.0));
}

#[test]
fn leave_ends_drag_and_secondary_button_is_ignored() {
    let mut c = interactive();
    assert_eq!(c.handle_event(PointerEvent::Down { x: 300.0, y: 300.0, button: MouseButton::Secondary }), EventResponse::Ignored);
    assert!(!c.interaction().is_dragging());

    c.handle_event(PointerEvent::Down { x: 300.0, y: 300.0, button: MouseButton::Primary });
    c.handle_event(PointerEvent::Leave);
    assert!(!c.interaction().is_dragging());
}

#[test]
fn detached_or_static_charts_ignore_events() {
    let mut c = interactive();
    c.detach_listeners();
    let before = c.visible_range();
    assert_eq!(c.handle_event(PointerEvent::Wheel { x: 442.0, y: 279.0, delta_y: 1.0 }), EventResponse::Ignored);
    assert_eq!(c.visible_range(), before);

    c.attach_listeners();
    assert_eq!(c.handle_event(PointerEvent::Wheel { x: 442.0, y: 279.0, delta_y: 1.0 }), EventResponse::Consumed);

    let mut s = Chart::create(Some(RecordingSurface::new(800.0, 600.0)), false, None).unwrap();
    s.draw_line(vec![(0.0, 0.0), (1.0, 1.0)], None, true);
    assert!(!s.interaction().is_attached());
    assert_eq!(s.handle_event(PointerEvent::Down { x: 300.0, y: 300.0, button: MouseButton::Primary }), EventResponse::Ignored);
}

#[test]
fn gesture_replays_the_chart() {
    let mut c = interactive();
    c.surface_mut().take_commands();
    c.handle_event(PointerEvent::Wheel { x: 442.0, y: 279.0, delta_y: 1.0 });
    assert!(!c.surface().commands().is_empty());
}
