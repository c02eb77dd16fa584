// File: crates/pointplot-core/src/chart.rs
// Summary: Chart instance: owns the surface, options, layout, view state, series registry
// and interaction controller; drives drawing and replay.

use tracing::{debug, trace, warn};

use crate::error::ChartError;
use crate::geometry::Point;
use crate::interaction::{EventResponse, Gesture, InteractionController, PointerEvent};
use crate::layout::Layout;
use crate::mapper::CoordinateMapper;
use crate::options::{DrawOptions, DrawOverride, GlobalOptions, GlobalOverride};
use crate::render;
use crate::series::{RegisteredSeries, SeriesKind, SeriesRegistry};
use crate::surface::Surface;
use crate::view::{Bounds, ViewState};

pub struct Chart<S: Surface> {
    surface: S,
    global: GlobalOptions,
    defaults: DrawOptions,
    layout: Layout,
    view: ViewState,
    registry: SeriesRegistry,
    controller: InteractionController,
    frame_drawn: bool,
    labels_drawn: bool,
}

impl<S: Surface> Chart<S> {
    /// Bind a chart to `surface`. A missing surface, or one without drawable
    /// area, yields `None` and nothing is drawn.
    pub fn create(surface: Option<S>, interactive: bool, global: Option<&GlobalOverride>) -> Option<Self> {
        let Some(surface) = surface else {
            debug!("no drawing surface; chart not created");
            return None;
        };
        let (w, h) = surface.size();
        if !(w >= 1.0 && h >= 1.0) {
            let err = ChartError::InvalidSurface(format!("{w}x{h}"));
            debug!(%err, "chart not created");
            return None;
        }

        let global = match global {
            Some(ov) => GlobalOptions::default().merged(ov),
            None => GlobalOptions::default(),
        };
        let layout = Layout::compute(w, h, global.chart_scale, global.edge_padding, surface.font_metrics());
        debug!(width = w, height = h, interactive, plot = ?layout.plot, "chart created");

        Some(Self {
            surface,
            global,
            defaults: DrawOptions::default(),
            layout,
            view: ViewState::default(),
            registry: SeriesRegistry::new(),
            controller: InteractionController::new(interactive),
            frame_drawn: false,
            labels_drawn: false,
        })
    }

    pub fn surface(&self) -> &S { &self.surface }
    pub fn surface_mut(&mut self) -> &mut S { &mut self.surface }
    pub fn layout(&self) -> &Layout { &self.layout }
    pub fn global_options(&self) -> &GlobalOptions { &self.global }
    pub fn default_draw_options(&self) -> &DrawOptions { &self.defaults }
    pub fn registry(&self) -> &SeriesRegistry { &self.registry }
    pub fn visible_range(&self) -> Bounds { self.view.visible() }
    pub fn auto_extremes(&self) -> Bounds { self.view.auto_extremes() }
    pub fn interaction(&self) -> &InteractionController { &self.controller }

    /// Mapper for the current layout and visible range.
    pub fn mapper(&self) -> Result<CoordinateMapper, ChartError> {
        CoordinateMapper::new(&self.layout, self.view.visible())
    }

    /// Plot a line series. `reset` clears every previously drawn series first.
    pub fn draw_line(&mut self, points: Vec<Point>, ov: Option<&DrawOverride>, reset: bool) {
        self.plot(SeriesKind::Line, points, ov, reset);
    }

    /// Plot a scatter series. `reset` clears every previously drawn series first.
    pub fn draw_scatter(&mut self, points: Vec<Point>, ov: Option<&DrawOverride>, reset: bool) {
        self.plot(SeriesKind::Scatter, points, ov, reset);
    }

    fn plot(&mut self, kind: SeriesKind, mut data: Vec<Point>, ov: Option<&DrawOverride>, reset: bool) {
        let opts = match ov {
            Some(ov) => self.defaults.merged(ov),
            None => self.defaults.clone(),
        };

        if reset || !self.frame_drawn {
            render::draw_chart_frame(&mut self.surface, &self.layout, &self.global);
            self.frame_drawn = true;
            self.labels_drawn = false;
            self.registry.clear();
            let auto = self.view.compute_auto_extremes(&data);
            debug!(?kind, points = data.len(), ?auto, "chart reset");
        }

        if kind == SeriesKind::Line {
            // Left-to-right segments
            data.sort_by(|a, b| a.0.total_cmp(&b.0));
        }

        let mapper = self.mapper();
        match &mapper {
            Ok(m) => render::draw_series(&mut self.surface, &self.layout, &self.global, m, kind, &data, &opts),
            Err(err) => {
                warn!(%err, ?kind, "series not drawn");
                render::draw_missing_data(&mut self.surface, &self.layout, &self.global, render::NO_DATA);
            }
        }

        if !data.is_empty() {
            let key = self.registry.register(RegisteredSeries { data, options: opts, kind });
            trace!(key, ?kind, "series registered");
        }

        if !self.labels_drawn {
            if let Ok(m) = &mapper {
                render::draw_axis_grid(&mut self.surface, &self.layout, &self.global, m);
            }
            self.labels_drawn = true;
        }
    }

    /// Redraw the frame and every registered series against the visible range,
    /// then the gridlines and labels once.
    pub fn replay_all(&mut self) {
        render::draw_chart_frame(&mut self.surface, &self.layout, &self.global);
        self.frame_drawn = true;

        let mapper = match self.mapper() {
            Ok(m) => m,
            Err(err) => {
                warn!(%err, "replay skipped");
                render::draw_missing_data(&mut self.surface, &self.layout, &self.global, render::NO_DATA);
                self.labels_drawn = false;
                return;
            }
        };

        for (key, entry) in self.registry.iter() {
            trace!(key, kind = ?entry.kind, "replay");
            render::draw_series(
                &mut self.surface,
                &self.layout,
                &self.global,
                &mapper,
                entry.kind,
                &entry.data,
                &entry.options,
            );
        }
        render::draw_axis_grid(&mut self.surface, &self.layout, &self.global, &mapper);
        self.labels_drawn = true;
        debug!(series = self.registry.len(), visible = ?self.view.visible(), "replayed");
    }

    /// Recompute auto extremes over every registered series, show all of them
    /// and replay. No-op when nothing is registered.
    pub fn fit_to_data(&mut self) {
        let fitted = self
            .registry
            .iter()
            .filter_map(|(_, s)| Bounds::from_points(&s.data))
            .reduce(|a, b| a.union(&b));
        let Some(bounds) = fitted else {
            debug!("fit_to_data: nothing registered");
            return;
        };
        self.view.reset_to(bounds);
        self.replay_all();
    }

    /// Apply a global override, recompute the layout and redraw what is shown.
    pub fn set_global_options(&mut self, ov: &GlobalOverride) {
        self.global = self.global.merged(ov);
        let (w, h) = self.surface.size();
        self.layout = Layout::compute(w, h, self.global.chart_scale, self.global.edge_padding, self.surface.font_metrics());
        debug!(plot = ?self.layout.plot, "global options updated");
        if self.frame_drawn {
            self.replay_all();
        }
    }

    /// Change the base that per-series overrides are merged onto.
    pub fn set_default_draw_options(&mut self, ov: &DrawOverride) {
        self.defaults = self.defaults.merged(ov);
    }

    /// Route one pointer event. Returns `Consumed` when the host should
    /// suppress its default behaviour (e.g. page scroll).
    pub fn handle_event(&mut self, event: PointerEvent) -> EventResponse {
        let (response, gesture) = self.controller.handle(event, &self.layout.plot);
        if let Some(gesture) = gesture {
            self.apply_gesture(gesture);
        }
        response
    }

    fn apply_gesture(&mut self, gesture: Gesture) {
        // Resolved against the range as it is now; consecutive moves chain.
        let mapper = match self.mapper() {
            Ok(m) => m,
            Err(err) => {
                warn!(%err, ?gesture, "gesture ignored");
                return;
            }
        };
        let changed = match gesture {
            Gesture::Zoom { at, direction } => {
                let anchor = mapper.to_data(at);
                self.view.apply_zoom(anchor, direction, self.global.zoom_intensity)
            }
            Gesture::Pan { from, to } => {
                let (x0, y0) = mapper.to_data(from);
                let (x1, y1) = mapper.to_data(to);
                // Dragging right moves the window left
                self.view.apply_pan(-(x1 - x0), -(y1 - y0))
            }
        };
        if !changed {
            return;
        }
        self.replay_all();
    }

    pub fn attach_listeners(&mut self) {
        if !self.controller.is_attached() {
            self.controller.attach();
            debug!("listeners attached");
        }
    }

    /// Stop handling pointer events; later events are ignored.
    pub fn detach_listeners(&mut self) {
        if self.controller.is_attached() {
            self.controller.detach();
            debug!("listeners detached");
        }
    }
}

impl<S: Surface> Drop for Chart<S> {
    fn drop(&mut self) {
        self.detach_listeners();
    }
}
