// File: crates/pointplot-core/src/options.rs
// Summary: Per-series draw options, chart-wide global options, and partial overrides.
// Notes:
// - Overrides are applied field by field. A JSON override whose value has the
//   wrong type for a field is dropped with a warning; the remaining fields still apply.

use serde_json::Value;
use skia_safe::Color;
use tracing::warn;

use crate::error::ChartError;

/// Upper bound on `n_gridlines`; larger overrides are dropped.
pub const MAX_GRIDLINES: usize = 1000;

/// Fraction of the surface given to the chart. `Full` reserves no axis margins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartScale {
    Full,
    P96,
    P95,
    P90,
}

impl ChartScale {
    pub fn fraction(self) -> f64 {
        match self {
            ChartScale::Full => 1.0,
            ChartScale::P96 => 0.96,
            ChartScale::P95 => 0.95,
            ChartScale::P90 => 0.9,
        }
    }

    pub fn from_fraction(v: f64) -> Option<Self> {
        [ChartScale::Full, ChartScale::P96, ChartScale::P95, ChartScale::P90]
            .into_iter()
            .find(|s| (s.fraction() - v).abs() < 1e-9)
    }

    /// Whether axis-label margins are reserved.
    pub fn has_margins(self) -> bool { self != ChartScale::Full }
}

/// Styling for one series.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawOptions {
    pub line_width: f64,
    pub elem_color: Color,
    pub area_color: Color,
    pub area_opacity: f64,
    pub fill: bool,
}

impl Default for DrawOptions {
    fn default() -> Self {
        Self {
            line_width: 1.4,
            elem_color: Color::from_argb(255, 0, 0, 255),
            area_color: Color::from_argb(255, 128, 128, 128),
            area_opacity: 1.0,
            fill: false,
        }
    }
}

/// Partial `DrawOptions`; `None` keeps the base value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawOverride {
    pub line_width: Option<f64>,
    pub elem_color: Option<Color>,
    pub area_color: Option<Color>,
    pub area_opacity: Option<f64>,
    pub fill: Option<bool>,
}

impl DrawOptions {
    /// A copy of `self` with every field set in `ov` replaced.
    pub fn merged(&self, ov: &DrawOverride) -> Self {
        Self {
            line_width: ov.line_width.unwrap_or(self.line_width),
            elem_color: ov.elem_color.unwrap_or(self.elem_color),
            area_color: ov.area_color.unwrap_or(self.area_color),
            area_opacity: ov.area_opacity.unwrap_or(self.area_opacity),
            fill: ov.fill.unwrap_or(self.fill),
        }
    }
}

impl DrawOverride {
    /// Read an override from a JSON object. Unknown keys and mistyped values
    /// are skipped.
    pub fn from_json(value: &Value) -> Self {
        let mut ov = Self::default();
        let Some(map) = value.as_object() else {
            report(&ChartError::InvalidOption { field: "<draw>".into(), reason: "expected an object".into() });
            return ov;
        };
        for (key, v) in map {
            match key.as_str() {
                "line_width" => ov.line_width = number(key, v),
                "elem_color" => ov.elem_color = color(key, v),
                "area_color" => ov.area_color = color(key, v),
                "area_opacity" => ov.area_opacity = number(key, v),
                "fill" => ov.fill = boolean(key, v),
                _ => report(&ChartError::InvalidOption { field: key.clone(), reason: "unknown draw option".into() }),
            }
        }
        ov
    }
}

/// Chart-wide styling shared by every series on one surface.
#[derive(Clone, Debug, PartialEq)]
pub struct GlobalOptions {
    pub chart_scale: ChartScale,
    pub edge_padding: f64,
    pub bg_axis_area: Color,
    pub bg_color: Color,
    pub draw_grid: bool,
    pub axis_titles: (String, String),
    pub n_decimals: usize,
    pub n_gridlines: usize,
    pub chart_border_width: f64,
    pub chart_border_color: Color,
    pub label_color: Color,
    pub grid_color: Color,
    pub zoom_intensity: f64,
}

impl Default for GlobalOptions {
    fn default() -> Self {
        Self {
            chart_scale: ChartScale::P95,
            edge_padding: 50.0,
            bg_axis_area: Color::from_argb(255, 0xee, 0xee, 0xee),
            bg_color: Color::WHITE,
            draw_grid: true,
            axis_titles: ("X".to_string(), "Y".to_string()),
            n_decimals: 2,
            n_gridlines: 10,
            chart_border_width: 1.4,
            chart_border_color: Color::BLACK,
            label_color: Color::BLACK,
            grid_color: Color::BLACK,
            zoom_intensity: 0.15,
        }
    }
}

/// Partial `GlobalOptions`; `None` keeps the base value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlobalOverride {
    pub chart_scale: Option<ChartScale>,
    pub edge_padding: Option<f64>,
    pub bg_axis_area: Option<Color>,
    pub bg_color: Option<Color>,
    pub draw_grid: Option<bool>,
    pub axis_titles: Option<(String, String)>,
    pub n_decimals: Option<usize>,
    pub n_gridlines: Option<usize>,
    pub chart_border_width: Option<f64>,
    pub chart_border_color: Option<Color>,
    pub label_color: Option<Color>,
    pub grid_color: Option<Color>,
    pub zoom_intensity: Option<f64>,
}

impl GlobalOptions {
    pub fn merged(&self, ov: &GlobalOverride) -> Self {
        let zoom_intensity = match ov.zoom_intensity {
            Some(z) if z > 0.0 && z < 1.0 => z,
            Some(z) => {
                report(&ChartError::InvalidOption {
                    field: "zoom_intensity".into(),
                    reason: format!("{z} outside (0, 1)"),
                });
                self.zoom_intensity
            }
            None => self.zoom_intensity,
        };
        let n_gridlines = match ov.n_gridlines {
            Some(n) if n <= MAX_GRIDLINES => n,
            Some(n) => {
                report(&ChartError::InvalidOption {
                    field: "n_gridlines".into(),
                    reason: format!("{n} exceeds {MAX_GRIDLINES}"),
                });
                self.n_gridlines
            }
            None => self.n_gridlines,
        };
        Self {
            chart_scale: ov.chart_scale.unwrap_or(self.chart_scale),
            edge_padding: ov.edge_padding.map(|p| p.max(0.0)).unwrap_or(self.edge_padding),
            bg_axis_area: ov.bg_axis_area.unwrap_or(self.bg_axis_area),
            bg_color: ov.bg_color.unwrap_or(self.bg_color),
            draw_grid: ov.draw_grid.unwrap_or(self.draw_grid),
            axis_titles: ov.axis_titles.clone().unwrap_or_else(|| self.axis_titles.clone()),
            n_decimals: ov.n_decimals.unwrap_or(self.n_decimals),
            n_gridlines,
            chart_border_width: ov.chart_border_width.unwrap_or(self.chart_border_width),
            chart_border_color: ov.chart_border_color.unwrap_or(self.chart_border_color),
            label_color: ov.label_color.unwrap_or(self.label_color),
            grid_color: ov.grid_color.unwrap_or(self.grid_color),
            zoom_intensity,
        }
    }
}

impl GlobalOverride {
    pub fn from_json(value: &Value) -> Self {
        let mut ov = Self::default();
        let Some(map) = value.as_object() else {
            report(&ChartError::InvalidOption { field: "<global>".into(), reason: "expected an object".into() });
            return ov;
        };
        for (key, v) in map {
            match key.as_str() {
                "chart_scale" => {
                    ov.chart_scale = number(key, v).and_then(|f| {
                        let s = ChartScale::from_fraction(f);
                        if s.is_none() {
                            report(&ChartError::InvalidOption {
                                field: key.clone(),
                                reason: format!("{f} is not one of 1, 0.96, 0.95, 0.9"),
                            });
                        }
                        s
                    })
                }
                "edge_padding" => ov.edge_padding = number(key, v),
                "bg_axis_area" => ov.bg_axis_area = color(key, v),
                "bg_color" => ov.bg_color = color(key, v),
                "draw_grid" => ov.draw_grid = boolean(key, v),
                "axis_titles" => ov.axis_titles = titles(key, v),
                "n_decimals" => ov.n_decimals = count(key, v),
                "n_gridlines" => {
                    ov.n_gridlines = count(key, v).filter(|&n| {
                        let ok = n <= MAX_GRIDLINES;
                        if !ok {
                            report(&ChartError::InvalidOption {
                                field: key.clone(),
                                reason: format!("{n} exceeds {MAX_GRIDLINES}"),
                            });
                        }
                        ok
                    })
                }
                "chart_border_width" => ov.chart_border_width = number(key, v),
                "chart_border_color" => ov.chart_border_color = color(key, v),
                "label_color" => ov.label_color = color(key, v),
                "grid_color" => ov.grid_color = color(key, v),
                "zoom_intensity" => ov.zoom_intensity = number(key, v),
                _ => report(&ChartError::InvalidOption { field: key.clone(), reason: "unknown global option".into() }),
            }
        }
        ov
    }
}

fn report(err: &ChartError) {
    warn!(%err, "dropping option override");
}

fn mistyped(field: &str, want: &str, got: &Value) {
    report(&ChartError::InvalidOption { field: field.to_string(), reason: format!("expected {want}, got {got}") });
}

fn number(field: &str, v: &Value) -> Option<f64> {
    match v.as_f64() {
        Some(f) if f.is_finite() => Some(f),
        _ => { mistyped(field, "a number", v); None }
    }
}

fn count(field: &str, v: &Value) -> Option<usize> {
    match v.as_u64() {
        Some(n) => Some(n as usize),
        None => { mistyped(field, "a non-negative integer", v); None }
    }
}

fn boolean(field: &str, v: &Value) -> Option<bool> {
    let b = v.as_bool();
    if b.is_none() { mistyped(field, "a boolean", v); }
    b
}

fn color(field: &str, v: &Value) -> Option<Color> {
    match v.as_str() {
        Some(s) => {
            let c = parse_color(s);
            if c.is_none() { mistyped(field, "a colour", v); }
            c
        }
        None => { mistyped(field, "a colour string", v); None }
    }
}

fn titles(field: &str, v: &Value) -> Option<(String, String)> {
    match v.as_array().map(|a| a.as_slice()) {
        Some([Value::String(x), Value::String(y)]) => Some((x.clone(), y.clone())),
        _ => { mistyped(field, "a pair of strings", v); None }
    }
}

/// Parse `#rgb`, `#rrggbb`, `#rrggbbaa` or one of a few CSS colour names.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        let digits = hex.chars().map(|c| c.to_digit(16).map(|d| d as u8)).collect::<Option<Vec<u8>>>()?;
        return match digits.as_slice() {
            [r, g, b] => Some(Color::from_argb(255, r * 17, g * 17, b * 17)),
            [r1, r0, g1, g0, b1, b0] => Some(Color::from_argb(255, r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0)),
            [r1, r0, g1, g0, b1, b0, a1, a0] => {
                Some(Color::from_argb(a1 * 16 + a0, r1 * 16 + r0, g1 * 16 + g0, b1 * 16 + b0))
            }
            _ => None,
        };
    }
    let c = match s.to_ascii_lowercase().as_str() {
        "black" => Color::BLACK,
        "white" => Color::WHITE,
        "gray" | "grey" => Color::from_argb(255, 128, 128, 128),
        "lightgray" | "lightgrey" => Color::from_argb(255, 211, 211, 211),
        "red" => Color::from_argb(255, 255, 0, 0),
        "green" => Color::from_argb(255, 0, 128, 0),
        "blue" => Color::from_argb(255, 0, 0, 255),
        "orange" => Color::from_argb(255, 255, 165, 0),
        "purple" => Color::from_argb(255, 128, 0, 128),
        "teal" => Color::from_argb(255, 0, 128, 128),
        "transparent" => Color::TRANSPARENT,
        _ => return None,
    };
    Some(c)
}
