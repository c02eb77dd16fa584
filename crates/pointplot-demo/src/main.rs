// File: crates/pointplot-demo/src/main.rs
// Summary: Demo loads an XY CSV (or synthesises a curve), draws it as a line plus a scatter
// overlay, replays wheel and drag gestures against it and writes a PNG after each step.

use anyhow::{Context, Result};
use pointplot_core::{Chart, DrawOverride, GlobalOverride, MouseButton, PointerEvent, RasterSurface};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const WIDTH: i32 = 1024;
const HEIGHT: i32 = 640;

struct Args {
    input: Option<PathBuf>,
    options: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args()?;
    let overrides = match &args.options {
        Some(p) => load_options(p).with_context(|| format!("failed to load options '{}'", p.display()))?,
        None => Value::Null,
    };

    let (data, stem) = match &args.input {
        Some(raw) => {
            let (path, used_alt) = resolve_path(raw)?;
            info!(path = %path.display(), used_alt, "using input file");
            let pts = load_xy_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_string();
            (pts, stem)
        }
        None => (synth_curve(400), "synthetic".to_string()),
    };
    info!(points = data.len(), "loaded series");
    if data.is_empty() {
        warn!("no rows parsed; the chart will show its placeholder");
    }

    let global = overrides.get("global").map(GlobalOverride::from_json);
    let line = overrides.get("line").map(DrawOverride::from_json);
    let scatter = overrides
        .get("scatter")
        .map(DrawOverride::from_json)
        .unwrap_or_else(|| DrawOverride::from_json(&json!({ "elem_color": "orange", "line_width": 1.0 })));

    let surface = RasterSurface::new(WIDTH, HEIGHT).context("allocating raster surface")?;
    let mut chart = Chart::create(Some(surface), true, global.as_ref()).context("chart has no drawable area")?;

    // Every tenth point doubles as a marker
    let markers: Vec<(f64, f64)> = data.iter().copied().step_by(10).collect();
    chart.draw_line(data, line.as_ref(), true);
    chart.draw_scatter(markers, Some(&scatter), false);
    write_step(&mut chart, &stem, "initial")?;

    let (cx, cy) = chart.layout().plot.center();
    for _ in 0..3 {
        chart.handle_event(PointerEvent::Wheel { x: cx, y: cy, delta_y: -1.0 });
    }
    write_step(&mut chart, &stem, "zoomed")?;

    chart.handle_event(PointerEvent::Down { x: cx, y: cy, button: MouseButton::Primary });
    for step in 1..=4 {
        let x = cx + 40.0 * step as f64;
        chart.handle_event(PointerEvent::Move { x, y: cy - 10.0 * step as f64, primary_held: true });
    }
    chart.handle_event(PointerEvent::Up { x: cx + 160.0, y: cy - 40.0, button: MouseButton::Primary });
    write_step(&mut chart, &stem, "panned")?;

    chart.fit_to_data();
    write_step(&mut chart, &stem, "fitted")?;

    let summary = json!({
        "visible": chart.visible_range(),
        "auto": chart.auto_extremes(),
        "series": chart.registry().kinds(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn parse_args() -> Result<Args> {
    let mut input = None;
    let mut options = None;
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--options" => {
                let p = it.next().context("--options needs a file path")?;
                options = Some(PathBuf::from(p));
            }
            _ if input.is_none() => input = Some(PathBuf::from(arg)),
            other => anyhow::bail!("unexpected argument: {other}"),
        }
    }
    Ok(Args { input, options })
}

fn load_options(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let value: Value = serde_json::from_str(&text).context("parsing options JSON")?;
    Ok(value)
}

fn write_step(chart: &mut Chart<RasterSurface>, stem: &str, step: &str) -> Result<()> {
    let out = out_name_with(stem, step);
    chart.surface_mut().write_png(&out).with_context(|| format!("writing {}", out.display()))?;
    info!(path = %out.display(), visible = ?chart.visible_range(), "wrote");
    Ok(())
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(p: &Path) -> Result<(PathBuf, bool)> {
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

/// Output file name like target/out/plot_<stem>_<step>.png
fn out_name_with(stem: &str, step: &str) -> PathBuf {
    let short = stem.split('_').take(3).collect::<Vec<_>>().join("_");
    let mut out = PathBuf::from("target/out");
    if short.is_empty() {
        out.push(format!("plot_{step}.png"));
    } else {
        out.push(format!("plot_{short}_{step}.png"));
    }
    out
}

/// Load an XY CSV. Columns named x/y (or a few synonyms) are preferred; otherwise
/// the first two columns are used. Rows that fail to parse are skipped.
fn load_xy_csv(path: &Path) -> Result<Vec<(f64, f64)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    info!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_x = idx(&["x", "time", "timestamp", "t", "index"]).unwrap_or(0);
    let i_y = idx(&["y", "value", "close", "v"]).unwrap_or(1);

    let mut out = Vec::new();
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| rec.get(i).and_then(|s| s.trim().parse::<f64>().ok());
        match (parse(i_x), parse(i_y)) {
            (Some(x), Some(y)) => out.push((x, y)),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(skipped, "rows without two numeric columns");
    }
    Ok(out)
}

fn synth_curve(n: usize) -> Vec<(f64, f64)> {
    (0..n)
        .map(|i| {
            let x = i as f64 * 0.05;
            (x, (x * 1.3).sin() * 3.0 + (x * 0.2).cos() + x * 0.1)
        })
        .collect()
}
