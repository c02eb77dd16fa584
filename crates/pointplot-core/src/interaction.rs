// File: crates/pointplot-core/src/interaction.rs
// Summary: Wheel-zoom and drag-pan state machine. Turns pointer events into view gestures.

use crate::geometry::{Point, PlotRect};
use crate::view::ZoomDirection;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Secondary,
    Middle,
}

/// Pointer input in surface pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Wheel { x: f64, y: f64, delta_y: f64 },
    Down { x: f64, y: f64, button: MouseButton },
    /// `primary_held` mirrors the host's pressed-buttons state at move time.
    Move { x: f64, y: f64, primary_held: bool },
    Up { x: f64, y: f64, button: MouseButton },
    Leave,
}

/// Whether the host should suppress its default handling of the event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventResponse {
    Consumed,
    Ignored,
}

/// View change requested by an event, in pixels; the chart resolves it to
/// data space against its current visible range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    Zoom { at: Point, direction: ZoomDirection },
    Pan { from: Point, to: Point },
}

#[derive(Clone, Debug, Default)]
pub struct InteractionController {
    attached: bool,
    drag_active: bool,
    last_drag_pixel: Point,
}

impl InteractionController {
    pub fn new(attached: bool) -> Self {
        Self { attached, ..Self::default() }
    }

    pub fn is_attached(&self) -> bool { self.attached }
    pub fn is_dragging(&self) -> bool { self.drag_active }
    pub fn last_drag_pixel(&self) -> Point { self.last_drag_pixel }

    pub fn attach(&mut self) { self.attached = true; }

    /// Stop reacting to events and forget any drag in progress.
    pub fn detach(&mut self) {
        self.attached = false;
        self.drag_active = false;
    }

    /// Advance the state machine. `plot` is the current plot rectangle; only
    /// its interior starts zooms and accepts pan updates.
    pub fn handle(&mut self, event: PointerEvent, plot: &PlotRect) -> (EventResponse, Option<Gesture>) {
        if !self.attached {
            return (EventResponse::Ignored, None);
        }
        match event {
            PointerEvent::Wheel { x, y, delta_y } => {
                if delta_y == 0.0 || !plot.contains_interior(x, y) {
                    return (EventResponse::Ignored, None);
                }
                let direction = if delta_y > 0.0 { ZoomDirection::Out } else { ZoomDirection::In };
                (EventResponse::Consumed, Some(Gesture::Zoom { at: (x, y), direction }))
            }
            PointerEvent::Down { x, y, button: MouseButton::Primary } => {
                if !self.drag_active {
                    self.drag_active = true;
                    self.last_drag_pixel = (x, y);
                }
                (EventResponse::Consumed, None)
            }
            PointerEvent::Move { x, y, primary_held } => {
                if !self.drag_active {
                    return (EventResponse::Ignored, None);
                }
                if !primary_held {
                    // Release happened outside our view of events
                    self.drag_active = false;
                    return (EventResponse::Ignored, None);
                }
                if !plot.contains_interior(x, y) {
                    return (EventResponse::Consumed, None);
                }
                let from = self.last_drag_pixel;
                self.last_drag_pixel = (x, y);
                (EventResponse::Consumed, Some(Gesture::Pan { from, to: (x, y) }))
            }
            PointerEvent::Up { button: MouseButton::Primary, .. } | PointerEvent::Leave => {
                let was = self.drag_active;
                self.drag_active = false;
                let response = if was { EventResponse::Consumed } else { EventResponse::Ignored };
                (response, None)
            }
            PointerEvent::Down { .. } | PointerEvent::Up { .. } => (EventResponse::Ignored, None),
        }
    }
}
