// File: crates/pointplot-core/src/recording.rs
// Summary: Headless `Surface` that records every draw call as a command list.

use skia_safe::Color;

use crate::geometry::PlotRect;
use crate::surface::{FontMetrics, Path, Surface, TextRun};

/// A captured draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(PlotRect),
    FillRect { rect: PlotRect, color: Color },
    Stroke { path: Path, width: f64, color: Color },
    Fill { path: Path, color: Color, alpha: f64 },
    Text(TextRun),
}

/// Records commands instead of rasterising. Text is measured with a fixed
/// advance per character so layouts are reproducible on every platform.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    metrics: FontMetrics,
    advance: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            metrics: FontMetrics { ascent: 9.0, descent: 2.0 },
            advance: 0.6,
            commands: Vec::new(),
        }
    }

    pub fn with_metrics(mut self, metrics: FontMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    /// Drain the recorded commands, leaving the surface empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextRun> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(run) => Some(run),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) { (self.width, self.height) }

    fn clear_rect(&mut self, rect: PlotRect) {
        self.commands.push(DrawCommand::Clear(rect));
    }

    fn fill_rect(&mut self, rect: PlotRect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_path(&mut self, path: &Path, width: f64, color: Color) {
        self.commands.push(DrawCommand::Stroke { path: path.clone(), width, color });
    }

    fn fill_path(&mut self, path: &Path, color: Color, alpha: f64) {
        self.commands.push(DrawCommand::Fill { path: path.clone(), color, alpha });
    }

    fn draw_text(&mut self, run: &TextRun) {
        self.commands.push(DrawCommand::Text(run.clone()));
    }

    fn measure_text(&self, text: &str, size: f64) -> f64 {
        text.chars().count() as f64 * size * self.advance
    }

    fn font_metrics(&self) -> FontMetrics { self.metrics }
}
