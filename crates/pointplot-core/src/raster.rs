// File: crates/pointplot-core/src/raster.rs
// Summary: Skia CPU raster implementation of `Surface`, with RGBA readback and PNG export.

use skia_safe as skia;

use crate::error::{ChartError, ChartResult};
use crate::geometry::PlotRect;
use crate::surface::{FontMetrics, Path, PathOp, Surface, TextRun};
use crate::text::{TextShaper, DEFAULT_FONT_SIZE};

pub struct RasterSurface {
    surface: skia::Surface,
    shaper: TextShaper,
    width: i32,
    height: i32,
}

impl RasterSurface {
    /// Allocate an N32 premultiplied raster. Returns `None` for an empty size
    /// or when Skia cannot allocate the pixels.
    pub fn new(width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            return None;
        }
        let surface = skia::surfaces::raster_n32_premul((width, height))?;
        Some(Self { surface, shaper: TextShaper::new(), width, height })
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }

    /// Copy the pixels out as unpremultiplied RGBA8: `(pixels, width, height, row_bytes)`.
    pub fn to_rgba8(&mut self) -> ChartResult<(Vec<u8>, u32, u32, usize)> {
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = self.width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(ChartError::Encode("pixel readback failed".into()));
        }
        Ok((pixels, self.width as u32, self.height as u32, row_bytes))
    }

    pub fn encode_png(&mut self) -> ChartResult<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::Encode("PNG encoder returned nothing".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> ChartResult<()> {
        let bytes = self.encode_png()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

fn to_skia_path(path: &Path) -> skia::Path {
    let mut out = skia::Path::new();
    for op in path.ops() {
        match *op {
            PathOp::MoveTo((x, y)) => { out.move_to((x as f32, y as f32)); }
            PathOp::LineTo((x, y)) => { out.line_to((x as f32, y as f32)); }
            PathOp::Circle { center: (x, y), radius } => {
                out.add_circle((x as f32, y as f32), radius as f32, None);
            }
        }
    }
    out
}

fn to_skia_rect(rect: PlotRect) -> skia::Rect {
    skia::Rect::from_xywh(rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32)
}

impl Surface for RasterSurface {
    fn size(&self) -> (f64, f64) {
        (self.width as f64, self.height as f64)
    }

    fn clear_rect(&mut self, rect: PlotRect) {
        let mut paint = skia::Paint::default();
        paint.set_blend_mode(skia::BlendMode::Clear);
        self.surface.canvas().draw_rect(to_skia_rect(rect), &paint);
    }

    fn fill_rect(&mut self, rect: PlotRect, color: skia::Color) {
        if rect.w <= 0.0 || rect.h <= 0.0 {
            return;
        }
        let mut paint = skia::Paint::default();
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(color);
        self.surface.canvas().draw_rect(to_skia_rect(rect), &paint);
    }

    fn stroke_path(&mut self, path: &Path, width: f64, color: skia::Color) {
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(width as f32);
        stroke.set_color(color);
        self.surface.canvas().draw_path(&to_skia_path(path), &stroke);
    }

    fn fill_path(&mut self, path: &Path, color: skia::Color, alpha: f64) {
        let a = (color.a() as f64 * alpha.clamp(0.0, 1.0)).round() as u8;
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(color.with_a(a));
        self.surface.canvas().draw_path(&to_skia_path(path), &fill);
    }

    fn draw_text(&mut self, run: &TextRun) {
        self.shaper.draw(self.surface.canvas(), run);
    }

    fn measure_text(&self, text: &str, size: f64) -> f64 {
        self.shaper.measure_width(text, size as f32) as f64
    }

    fn font_metrics(&self) -> FontMetrics {
        self.shaper.metrics(DEFAULT_FONT_SIZE as f32)
    }
}
