// File: crates/pointplot-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

/// A position as an `(x, y)` pair. Used for both data and pixel space.
pub type Point = (f64, f64);

/// Pixel-space rectangle, origin top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl PlotRect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
    pub fn right(&self) -> f64 { self.x + self.w }
    pub fn bottom(&self) -> f64 { self.y + self.h }
    pub fn center(&self) -> Point { (self.x + self.w * 0.5, self.y + self.h * 0.5) }

    /// Strict interior test used by gestures: the left and bottom borders
    /// themselves do not count as inside.
    pub fn contains_interior(&self, px: f64, py: f64) -> bool {
        px > self.x && px < self.right() && py > self.y && py < self.bottom()
    }
}

/// Linear interpolation; `t` outside `[0, 1]` extrapolates.
#[inline]
pub fn lerp(min: f64, max: f64, t: f64) -> f64 {
    min + (max - min) * t
}
