// File: crates/pointplot-core/src/lib.rs
// Summary: Core library entry point; exports the public API for chart construction, drawing and interaction.

pub mod chart;
pub mod error;
pub mod format;
pub mod geometry;
pub mod interaction;
pub mod layout;
pub mod mapper;
pub mod options;
pub mod raster;
pub mod recording;
pub mod render;
pub mod series;
pub mod surface;
pub mod text;
pub mod view;

pub use chart::Chart;
pub use error::{ChartError, ChartResult};
pub use geometry::{Point, PlotRect};
pub use interaction::{EventResponse, MouseButton, PointerEvent};
pub use layout::Layout;
pub use mapper::CoordinateMapper;
pub use options::{ChartScale, DrawOptions, DrawOverride, GlobalOptions, GlobalOverride};
pub use raster::RasterSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use series::{RegisteredSeries, SeriesKind, SeriesRegistry};
pub use surface::Surface;
pub use view::{Bounds, ViewState, ZoomDirection};
