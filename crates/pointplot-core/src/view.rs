// File: crates/pointplot-core/src/view.rs
// View state: auto extremes derived from data plus the visible range that pan/zoom move.

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::geometry::{lerp, Point};

/// Spans narrower than this are treated as a single value.
pub const MIN_SPAN: f64 = 1e-12;

/// Data-space rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Bounds {
    pub const ZERO: Bounds = Bounds { xmin: 0.0, xmax: 0.0, ymin: 0.0, ymax: 0.0 };

    pub const fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Self {
        Self { xmin, xmax, ymin, ymax }
    }

    /// Per-axis min/max over `points`. Non-finite components are skipped and
    /// each axis is computed on its own; an axis with no finite value sits at
    /// zero. `None` only when no component at all is finite.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Option<Self> {
        let mut xs = AxisExtent::default();
        let mut ys = AxisExtent::default();
        for &(x, y) in points {
            xs.include(x);
            ys.include(y);
        }
        if xs.is_empty() && ys.is_empty() {
            return None;
        }
        let (xmin, xmax) = xs.or_zero();
        let (ymin, ymax) = ys.or_zero();
        Some(Self { xmin, xmax, ymin, ymax })
    }

    /// Copy with every axis narrower than `MIN_SPAN` widened to a unit span
    /// centred on its value.
    pub fn widened(&self) -> Bounds {
        let (xmin, xmax) = widen_axis(self.xmin, self.xmax);
        let (ymin, ymax) = widen_axis(self.ymin, self.ymax);
        Bounds { xmin, xmax, ymin, ymax }
    }

    /// All four bounds finite and both spans representable.
    pub fn is_finite(&self) -> bool {
        [self.xmin, self.xmax, self.ymin, self.ymax, self.width(), self.height()]
            .iter()
            .all(|v| v.is_finite())
    }

    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            xmin: self.xmin.min(other.xmin),
            xmax: self.xmax.max(other.xmax),
            ymin: self.ymin.min(other.ymin),
            ymax: self.ymax.max(other.ymax),
        }
    }

    pub fn width(&self) -> f64 { self.xmax - self.xmin }
    pub fn height(&self) -> f64 { self.ymax - self.ymin }
    pub fn center(&self) -> Point { ((self.xmin + self.xmax) * 0.5, (self.ymin + self.ymax) * 0.5) }
}

#[derive(Clone, Copy)]
struct AxisExtent {
    min: f64,
    max: f64,
}

impl Default for AxisExtent {
    fn default() -> Self {
        Self { min: f64::INFINITY, max: f64::NEG_INFINITY }
    }
}

impl AxisExtent {
    fn include(&mut self, v: f64) {
        if v.is_finite() {
            self.min = self.min.min(v);
            self.max = self.max.max(v);
        }
    }

    fn is_empty(&self) -> bool { self.min > self.max }

    fn or_zero(&self) -> (f64, f64) {
        if self.is_empty() { (0.0, 0.0) } else { (self.min, self.max) }
    }
}

fn widen_axis(min: f64, max: f64) -> (f64, f64) {
    if max - min < MIN_SPAN {
        let c = (min + max) * 0.5;
        (c - 0.5, c + 0.5)
    } else {
        (min, max)
    }
}

/// Wheel direction resolved to a zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    pub fn sign(self) -> f64 {
        match self {
            ZoomDirection::In => -1.0,
            ZoomDirection::Out => 1.0,
        }
    }
}

/// Range tracker. `auto` follows the data; `visible` follows the user.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    auto: Bounds,
    visible: Bounds,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { auto: Bounds::ZERO, visible: Bounds::ZERO }
    }
}

impl ViewState {
    pub fn auto_extremes(&self) -> Bounds { self.auto }
    pub fn visible(&self) -> Bounds { self.visible }

    /// Recompute auto extremes from `points` and make them the visible range.
    /// Data with no finite coordinates leaves both at zero.
    pub fn compute_auto_extremes(&mut self, points: &[Point]) -> Bounds {
        let auto = Bounds::from_points(points).unwrap_or(Bounds::ZERO);
        self.reset_to(auto);
        auto
    }

    pub fn reset_to(&mut self, bounds: Bounds) {
        self.auto = bounds;
        self.visible = bounds;
    }

    /// Scale the visible range about `anchor`; the anchor's data coordinates stay put.
    /// A zero-width axis is first widened the same way the mapper shows it. Returns
    /// `false`, leaving the range unchanged, when the result would not be finite.
    pub fn apply_zoom(&mut self, anchor: Point, direction: ZoomDirection, intensity: f64) -> bool {
        let scale = 1.0 + direction.sign() * intensity;
        let (ax, ay) = anchor;
        let v = self.visible.widened();
        let next = Bounds {
            xmin: lerp(ax, v.xmin, scale),
            xmax: lerp(ax, v.xmax, scale),
            ymin: lerp(ay, v.ymin, scale),
            ymax: lerp(ay, v.ymax, scale),
        };
        self.commit(next, "zoom")
    }

    /// Translate the visible range by a data-space delta. Same rejection rule
    /// as `apply_zoom`.
    pub fn apply_pan(&mut self, dx: f64, dy: f64) -> bool {
        let v = self.visible.widened();
        let next = Bounds {
            xmin: v.xmin + dx,
            xmax: v.xmax + dx,
            ymin: v.ymin + dy,
            ymax: v.ymax + dy,
        };
        self.commit(next, "pan")
    }

    fn commit(&mut self, next: Bounds, op: &'static str) -> bool {
        if !next.is_finite() {
            warn!(op, current = ?self.visible, rejected = ?next, "visible range would overflow; kept");
            return false;
        }
        self.visible = next;
        trace!(op, visible = ?self.visible, "view updated");
        true
    }
}
