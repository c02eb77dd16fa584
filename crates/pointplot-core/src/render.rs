// File: crates/pointplot-core/src/render.rs
// Summary: Draw routines: chart frame, gridlines with axis labels, line and scatter geometry.

use crate::format::axis_label;
use crate::geometry::{lerp, Point, PlotRect};
use crate::layout::Layout;
use crate::mapper::CoordinateMapper;
use crate::options::{DrawOptions, GlobalOptions};
use crate::series::SeriesKind;
use crate::surface::{Path, Surface, TextAlign, TextBaseline, TextRun};
use crate::text::DEFAULT_FONT_SIZE;

/// Radius of a scatter marker, in pixels.
pub const MARKER_RADIUS: f64 = 3.0;
pub const TITLE_FONT_SIZE: f64 = 18.0;
pub const NO_DATA: &str = "No data";

/// Clear the surface, paint the axis bands and plot background, stroke the border.
pub fn draw_chart_frame<S: Surface>(surface: &mut S, layout: &Layout, g: &GlobalOptions) {
    surface.clear_rect(PlotRect::new(0.0, 0.0, layout.surface_w, layout.surface_h));
    draw_axis_bands(surface, layout, g);
    surface.fill_rect(layout.plot, g.bg_color);

    let plot = &layout.plot;
    let mut border = Path::new();
    border
        .move_to((plot.x, plot.y))
        .line_to((plot.x, plot.bottom()))
        .line_to((layout.surface_w, plot.bottom()));
    surface.stroke_path(&border, g.chart_border_width, g.chart_border_color);
}

fn draw_axis_bands<S: Surface>(surface: &mut S, layout: &Layout, g: &GlobalOptions) {
    if !layout.scale.has_margins() {
        return;
    }
    let half_border = g.chart_border_width / 2.0;
    let plot = &layout.plot;
    surface.fill_rect(PlotRect::new(0.0, 0.0, plot.x - half_border, layout.surface_h), g.bg_axis_area);
    let top = plot.bottom() + half_border;
    surface.fill_rect(PlotRect::new(0.0, top, layout.surface_w, layout.surface_h - top), g.bg_axis_area);
}

/// Repaint the axis bands (masking geometry that spilled over them), then draw
/// gridlines, numeric labels and axis titles for the mapper's range.
pub fn draw_axis_grid<S: Surface>(
    surface: &mut S,
    layout: &Layout,
    g: &GlobalOptions,
    mapper: &CoordinateMapper,
) {
    draw_axis_bands(surface, layout, g);

    let plot = &layout.plot;
    let labels = layout.scale.has_margins();
    let edges = mapper.axis_bounds();
    let splits = g.n_gridlines;
    let mut grid = Path::new();

    for i in 0..splits {
        let t = i as f64 / splits as f64;
        let x = lerp(edges.x_left, edges.x_right, t);
        let y = lerp(edges.y_bottom, edges.y_top, t);
        let (px, py) = mapper.to_pixel((x, y));

        if labels {
            let y_label = TextRun::new(axis_label(y, g.n_decimals), plot.x - 5.0, py, DEFAULT_FONT_SIZE, g.label_color)
                .aligned(TextAlign::Right, TextBaseline::Middle)
                .outlined(0.7)
                .max_width(layout.label_spacing);
            surface.draw_text(&y_label);

            let x_label = TextRun::new(axis_label(x, g.n_decimals), px, plot.bottom() + 15.0, DEFAULT_FONT_SIZE, g.label_color)
                .aligned(TextAlign::Center, TextBaseline::Bottom)
                .outlined(0.7)
                .max_width(layout.label_spacing * (plot.w / 500.0));
            surface.draw_text(&x_label);
        }

        if g.draw_grid {
            grid.move_to((plot.x, py)).line_to((plot.right(), py));
            grid.move_to((px, plot.bottom())).line_to((px, plot.y));
        }
    }
    if !grid.is_empty() {
        surface.stroke_path(&grid, 0.5, g.grid_color);
    }

    if labels {
        draw_axis_titles(surface, layout, g);
    }
}

fn draw_axis_titles<S: Surface>(surface: &mut S, layout: &Layout, g: &GlobalOptions) {
    let (x_title, y_title) = &g.axis_titles;
    let x_run = TextRun::new(x_title.as_str(), layout.surface_w / 2.0, layout.surface_h - 5.0, TITLE_FONT_SIZE, g.label_color)
        .outlined(1.0);
    surface.draw_text(&x_run);

    // Reads bottom-to-top, centred a quarter of the band in from the left edge
    let y_run = TextRun::new(
        y_title.as_str(),
        15.0,
        layout.surface_h / 2.0 + layout.plot.x / 4.0,
        TITLE_FONT_SIZE,
        g.label_color,
    )
    .outlined(1.0)
    .rotated(-90.0);
    surface.draw_text(&y_run);
}

/// Centred placeholder drawn instead of geometry.
pub fn draw_missing_data<S: Surface>(surface: &mut S, layout: &Layout, g: &GlobalOptions, msg: &str) {
    let plot = &layout.plot;
    let width = surface.measure_text(msg, DEFAULT_FONT_SIZE);
    let x = plot.x + plot.w / 2.0 - width / 2.0;
    let run = TextRun::new(msg, x, plot.bottom() / 2.0, DEFAULT_FONT_SIZE, g.label_color);
    surface.draw_text(&run);
}

/// Draw one series' geometry against `mapper`. Empty series draw the placeholder.
pub fn draw_series<S: Surface>(
    surface: &mut S,
    layout: &Layout,
    g: &GlobalOptions,
    mapper: &CoordinateMapper,
    kind: SeriesKind,
    data: &[Point],
    opts: &DrawOptions,
) {
    let mapped: Vec<Point> = mapper
        .to_pixels(data)
        .into_iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();
    if mapped.is_empty() {
        draw_missing_data(surface, layout, g, NO_DATA);
        return;
    }
    match kind {
        SeriesKind::Line => draw_line_geometry(surface, &layout.plot, &mapped, opts),
        SeriesKind::Scatter => draw_scatter_geometry(surface, &layout.plot, &mapped, opts),
    }
}

fn draw_line_geometry<S: Surface>(surface: &mut S, plot: &PlotRect, pts: &[Point], opts: &DrawOptions) {
    let base = plot.bottom() - 1.0;
    let (x0, y0) = pts[0];
    let (xn, _) = pts[pts.len() - 1];

    let mut outline = Path::new();
    if opts.fill && x0 >= plot.x {
        outline.move_to((x0, base));
        for &p in pts {
            outline.line_to(p);
        }
    } else {
        outline.move_to((x0, y0));
        for &p in &pts[1..] {
            outline.line_to(p);
        }
    }

    if opts.fill {
        outline.line_to((xn, base));
        let mut area = outline.clone();
        area.line_to((x0, base));
        surface.fill_path(&area, opts.area_color, opts.area_opacity);
    }
    // Stroked separately so the closing edge along the plot bottom stays unstroked
    surface.stroke_path(&outline, opts.line_width, opts.elem_color);
}

fn draw_scatter_geometry<S: Surface>(surface: &mut S, plot: &PlotRect, pts: &[Point], opts: &DrawOptions) {
    for &p in pts.iter().filter(|(x, _)| *x >= plot.x) {
        let mut marker = Path::new();
        marker.circle(p, MARKER_RADIUS);
        if opts.fill {
            surface.fill_path(&marker, opts.area_color, opts.area_opacity);
        }
        surface.stroke_path(&marker, opts.line_width, opts.elem_color);
    }
}
