// File: crates/pointplot-core/src/error.rs
// Summary: Error taxonomy for the chart engine.

use thiserror::Error;

/// Faults raised inside the engine. Public draw and interaction entry points
/// never surface these; they log and degrade instead.
#[derive(Error, Debug)]
pub enum ChartError {
    /// A range with non-finite bounds (or an inverted axis) cannot be mapped.
    #[error("degenerate {axis} range [{min}, {max}]")]
    DegenerateRange { axis: char, min: f64, max: f64 },

    /// The drawing surface is missing or has no drawable area.
    #[error("invalid drawing surface: {0}")]
    InvalidSurface(String),

    /// An option override carried a value of the wrong type.
    #[error("option `{field}` ignored: {reason}")]
    InvalidOption { field: String, reason: String },

    /// Encoding the raster snapshot failed.
    #[error("encode failed: {0}")]
    Encode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for chart operations.
pub type ChartResult<T> = Result<T, ChartError>;
