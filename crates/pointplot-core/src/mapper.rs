// File: crates/pointplot-core/src/mapper.rs
// Summary: Data-space <-> pixel-space transforms for one layout and one visible range.

use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::geometry::{lerp, Point};
use crate::layout::Layout;
use crate::view::{Bounds, MIN_SPAN};


/// Axis values sitting exactly on the plot rectangle's edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisBounds {
    pub x_left: f64,
    pub x_right: f64,
    pub y_bottom: f64,
    pub y_top: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct CoordinateMapper {
    layout: Layout,
    range: Bounds,
}

impl CoordinateMapper {
    /// Fails on non-finite or inverted ranges, or a span that overflows. A zero-width axis is widened to
    /// a unit span centred on its value.
    pub fn new(layout: &Layout, range: Bounds) -> ChartResult<Self> {
        let (xmin, xmax) = guard_axis('x', range.xmin, range.xmax)?;
        let (ymin, ymax) = guard_axis('y', range.ymin, range.ymax)?;
        Ok(Self { layout: *layout, range: Bounds { xmin, xmax, ymin, ymax } })
    }

    /// The range actually used for mapping, after degenerate-axis widening.
    pub fn range(&self) -> Bounds { self.range }

    pub fn to_pixel(&self, (x, y): Point) -> Point {
        let u = &self.layout.usable;
        let r = &self.range;
        let tx = (x - r.xmin) / r.width();
        let ty = (y - r.ymin) / r.height();
        (lerp(u.x_min, u.x_max, tx), u.y_anchor - (u.y_max - u.y_min) * ty)
    }

    /// Map a sequence of points, preserving order.
    pub fn to_pixels(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|&p| self.to_pixel(p)).collect()
    }

    /// Exact inverse of `to_pixel`. A collapsed usable extent maps every pixel
    /// to the middle of the range.
    pub fn to_data(&self, (px, py): Point) -> Point {
        let u = &self.layout.usable;
        let r = &self.range;
        let ux = u.x_max - u.x_min;
        let uy = u.y_max - u.y_min;
        let tx = if ux > 0.0 { (px - u.x_min) / ux } else { 0.5 };
        let ty = if uy > 0.0 { (u.y_anchor - py) / uy } else { 0.5 };
        (lerp(r.xmin, r.xmax, tx), lerp(r.ymin, r.ymax, ty))
    }

    /// Data values on the plot rectangle's edges, so gridlines sampled between
    /// them land on the plot border.
    pub fn axis_bounds(&self) -> AxisBounds {
        let plot = &self.layout.plot;
        let (x_left, y_bottom) = self.to_data((plot.x, plot.bottom()));
        let (x_right, y_top) = self.to_data((plot.right(), plot.y));
        AxisBounds { x_left, x_right, y_bottom, y_top }
    }
}

fn guard_axis(axis: char, min: f64, max: f64) -> ChartResult<(f64, f64)> {
    if !min.is_finite() || !max.is_finite() || max < min || !(max - min).is_finite() {
        return Err(ChartError::DegenerateRange { axis, min, max });
    }
    if max - min < MIN_SPAN {
        debug!(%axis, value = min, "zero-width range widened to a unit span");
        let widened = Bounds::new(min, max, 0.0, 1.0).widened();
        return Ok((widened.xmin, widened.xmax));
    }
    Ok((min, max))
}
