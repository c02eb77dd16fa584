// File: crates/pointplot-core/src/layout.rs
// Summary: Splits the surface into axis-label bands and the plot rectangle, and
// derives the padded extent that data is mapped onto.

use crate::geometry::PlotRect;
use crate::options::ChartScale;
use crate::surface::FontMetrics;

/// Multiplier applied to the font's line height to size the axis bands.
pub const LABEL_SPACING_FACTOR: f64 = 6.0;

/// Pixel extent inside the plot rectangle that the visible range maps onto.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UsableExtent {
    pub x_min: f64,
    pub x_max: f64,
    /// Top edge (smaller pixel y).
    pub y_min: f64,
    /// Bottom edge (larger pixel y).
    pub y_max: f64,
    /// Pixel row that the visible range's `ymin` lands on.
    pub y_anchor: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub surface_w: f64,
    pub surface_h: f64,
    pub plot: PlotRect,
    pub label_spacing: f64,
    pub edge_padding: f64,
    pub usable: UsableExtent,
    pub scale: ChartScale,
}

impl Layout {
    pub fn compute(
        surface_w: f64,
        surface_h: f64,
        scale: ChartScale,
        edge_padding: f64,
        metrics: FontMetrics,
    ) -> Self {
        let label_spacing = (metrics.ascent - metrics.descent) * LABEL_SPACING_FACTOR;
        let plot = if scale.has_margins() {
            let w = (surface_w - label_spacing * 2.0).max(0.0);
            let h = (surface_h - label_spacing).max(0.0);
            PlotRect::new(surface_w - w, 0.0, w, h)
        } else {
            PlotRect::new(0.0, 0.0, surface_w, surface_h)
        };
        let usable = padded_extent(&plot, edge_padding);
        Self { surface_w, surface_h, plot, label_spacing, edge_padding, usable, scale }
    }
}

fn padded_extent(plot: &PlotRect, pad: f64) -> UsableExtent {
    let (x_min, x_max) = if pad > plot.w / 2.0 {
        let c = plot.x + plot.w / 2.0;
        (c, c)
    } else {
        (plot.x + pad, plot.right() - pad)
    };
    let (y_min, y_max) = if pad > plot.h / 2.0 {
        let c = plot.y + plot.h / 2.0;
        (c, c)
    } else {
        (plot.y + pad, plot.bottom() - pad)
    };
    // Floor keeps the anchor on-surface when the padding swallows the plot.
    let y_anchor = (y_max - pad).max(0.0) + y_min - plot.y;
    UsableExtent { x_min, x_max, y_min, y_max, y_anchor }
}
