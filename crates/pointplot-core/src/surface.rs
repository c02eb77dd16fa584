// File: crates/pointplot-core/src/surface.rs
// Summary: The 2D drawing capability the engine renders through.
// Notes:
// - Every call carries its own styling; implementations keep no pen/brush state
//   between calls, so nested or interleaved draws cannot leak styles.

use skia_safe::Color;

use crate::geometry::{Point, PlotRect};

/// One segment of a path in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathOp {
    MoveTo(Point),
    LineTo(Point),
    /// Full circle; starts a new sub-path.
    Circle { center: Point, radius: f64 },
}

/// An ordered list of path operations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    ops: Vec<PathOp>,
}

impl Path {
    pub fn new() -> Self { Self::default() }

    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.ops.push(PathOp::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.ops.push(PathOp::LineTo(p));
        self
    }

    pub fn circle(&mut self, center: Point, radius: f64) -> &mut Self {
        self.ops.push(PathOp::Circle { center, radius });
        self
    }

    pub fn ops(&self) -> &[PathOp] { &self.ops }
    pub fn is_empty(&self) -> bool { self.ops.is_empty() }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Alphabetic,
    Bottom,
}

/// How glyphs are painted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TextPaint {
    Fill,
    /// Outline only, with the given stroke width.
    Stroke(f64),
}

/// A single piece of text, fully styled.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: Color,
    pub align: TextAlign,
    pub baseline: TextBaseline,
    pub paint: TextPaint,
    /// Clockwise rotation in degrees about `(x, y)`.
    pub rotation: f64,
    /// Glyphs are squeezed horizontally to fit when wider than this.
    pub max_width: Option<f64>,
}

impl TextRun {
    pub fn new(text: impl Into<String>, x: f64, y: f64, size: f64, color: Color) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            size,
            color,
            align: TextAlign::Left,
            baseline: TextBaseline::Alphabetic,
            paint: TextPaint::Fill,
            rotation: 0.0,
            max_width: None,
        }
    }

    pub fn aligned(mut self, align: TextAlign, baseline: TextBaseline) -> Self {
        self.align = align;
        self.baseline = baseline;
        self
    }

    pub fn outlined(mut self, width: f64) -> Self {
        self.paint = TextPaint::Stroke(width);
        self
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn max_width(mut self, width: f64) -> Self {
        self.max_width = Some(width);
        self
    }
}

/// Vertical metrics of the surface's default font, both as positive distances
/// from the baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontMetrics {
    pub ascent: f64,
    pub descent: f64,
}

/// Raster drawing capability consumed by the chart.
pub trait Surface {
    /// Pixel width and height.
    fn size(&self) -> (f64, f64);

    /// Reset a rectangle to fully transparent.
    fn clear_rect(&mut self, rect: PlotRect);

    fn fill_rect(&mut self, rect: PlotRect, color: Color);

    fn stroke_path(&mut self, path: &Path, width: f64, color: Color);

    /// Fill the closed outline of `path`; `alpha` multiplies the colour's own alpha.
    fn fill_path(&mut self, path: &Path, color: Color, alpha: f64);

    fn draw_text(&mut self, run: &TextRun);

    fn measure_text(&self, text: &str, size: f64) -> f64;

    fn font_metrics(&self) -> FontMetrics;
}
