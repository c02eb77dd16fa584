// File: crates/pointplot-core/src/text.rs
// Summary: Paragraph-based text shaping for the Skia surface: measuring, metrics, aligned drawing.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::surface::{FontMetrics, TextAlign, TextBaseline, TextPaint, TextRun};

/// Size of the default UI font, in pixels.
pub const DEFAULT_FONT_SIZE: f64 = 10.0;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, paint: &skia::Paint) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_foreground_paint(paint);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, paint: &skia::Paint) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, paint);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let p = self.layout(text, size, &skia::Paint::default());
        // width of the longest line
        p.longest_line()
    }

    /// Ascent/descent of the default font, measured on a probe string.
    pub fn metrics(&self, size: f32) -> FontMetrics {
        let p = self.layout("Hg", size, &skia::Paint::default());
        let ascent = p.alphabetic_baseline() as f64;
        let descent = (p.height() - p.alphabetic_baseline()).max(0.0) as f64;
        FontMetrics { ascent, descent }
    }

    pub fn draw(&self, canvas: &skia::Canvas, run: &TextRun) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(run.color);
        match run.paint {
            TextPaint::Fill => { paint.set_style(skia::paint::Style::Fill); }
            TextPaint::Stroke(w) => {
                paint.set_style(skia::paint::Style::Stroke);
                paint.set_stroke_width(w as f32);
            }
        }

        let p = self.layout(&run.text, run.size as f32, &paint);
        let natural = p.longest_line();
        let squeeze = match run.max_width {
            Some(max) if max > 0.0 && natural as f64 > max => max as f32 / natural,
            _ => 1.0,
        };
        let width = natural * squeeze;
        let dx = match run.align {
            TextAlign::Left => 0.0,
            TextAlign::Center => -width * 0.5,
            TextAlign::Right => -width,
        };
        // Paragraph paints from its top-left corner
        let dy = match run.baseline {
            TextBaseline::Top => 0.0,
            TextBaseline::Middle => -p.height() * 0.5,
            TextBaseline::Alphabetic => -p.alphabetic_baseline(),
            TextBaseline::Bottom => -p.height(),
        };

        canvas.save();
        canvas.translate((run.x as f32, run.y as f32));
        if run.rotation != 0.0 {
            canvas.rotate(run.rotation as f32, None);
        }
        canvas.translate((dx, dy));
        if squeeze != 1.0 {
            canvas.scale((squeeze, 1.0));
        }
        p.paint(canvas, (0.0, 0.0));
        canvas.restore();
    }
}
