// File: crates/pointplot-window/src/main.rs
// Summary: Windowed demo: renders the chart to RGBA on the CPU and blits it with softbuffer;
// winit mouse input is translated into chart pointer events (wheel zoom, drag pan).

use anyhow::{anyhow, Context, Result};
use pointplot_core::{Chart, DrawOverride, EventResponse, MouseButton, PointerEvent, RasterSurface};
use std::num::NonZeroU32;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, MouseScrollDelta, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Pixels per wheel "line" when the platform reports line deltas.
const LINE_HEIGHT: f64 = 40.0;

struct Series {
    line: Vec<(f64, f64)>,
    markers: Vec<(f64, f64)>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let series = build_series();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Pointplot - Window Demo")
        .with_inner_size(winit::dpi::LogicalSize::new(1024.0, 640.0))
        .build(&event_loop)
        .context("building window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut chart = build_chart(window.inner_size(), &series);
    let mut cursor = (0.0, 0.0);
    let mut primary_held = false;
    info!("scroll to zoom, drag to pan, F to fit, Esc to quit");

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => {
                let pointer = match event {
                    WindowEvent::CloseRequested => {
                        *cf = ControlFlow::Exit;
                        None
                    }
                    WindowEvent::Resized(size) => {
                        // The surface has a fixed size; start over with a fresh one.
                        chart = build_chart(size, &series);
                        window.request_redraw();
                        None
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        cursor = (position.x, position.y);
                        Some(PointerEvent::Move { x: cursor.0, y: cursor.1, primary_held })
                    }
                    WindowEvent::CursorLeft { .. } => Some(PointerEvent::Leave),
                    WindowEvent::MouseInput { state, button, .. } => {
                        let button = match button {
                            winit::event::MouseButton::Left => MouseButton::Primary,
                            winit::event::MouseButton::Right => MouseButton::Secondary,
                            _ => MouseButton::Middle,
                        };
                        let (x, y) = cursor;
                        match state {
                            ElementState::Pressed => {
                                primary_held |= button == MouseButton::Primary;
                                Some(PointerEvent::Down { x, y, button })
                            }
                            ElementState::Released => {
                                if button == MouseButton::Primary {
                                    primary_held = false;
                                }
                                Some(PointerEvent::Up { x, y, button })
                            }
                        }
                    }
                    WindowEvent::MouseWheel { delta, .. } => {
                        // winit reports "away from the user" as positive; charts expect the DOM sign
                        let delta_y = match delta {
                            MouseScrollDelta::LineDelta(_, y) => -(y as f64) * LINE_HEIGHT,
                            MouseScrollDelta::PixelDelta(p) => -p.y,
                        };
                        Some(PointerEvent::Wheel { x: cursor.0, y: cursor.1, delta_y })
                    }
                    WindowEvent::KeyboardInput { input, .. } if input.state == ElementState::Pressed => {
                        match input.virtual_keycode {
                            Some(VirtualKeyCode::Escape) => *cf = ControlFlow::Exit,
                            Some(VirtualKeyCode::F) => {
                                if let Some(c) = chart.as_mut() {
                                    c.fit_to_data();
                                    window.request_redraw();
                                }
                            }
                            _ => {}
                        }
                        None
                    }
                    _ => None,
                };

                if let (Some(ev), Some(c)) = (pointer, chart.as_mut()) {
                    if c.handle_event(ev) == EventResponse::Consumed {
                        debug!(?ev, visible = ?c.visible_range(), "consumed");
                        window.request_redraw();
                    }
                }
            }
            Event::RedrawRequested(_) => {
                if let Some(c) = chart.as_mut() {
                    if let Err(err) = present(&mut surface, c) {
                        warn!(%err, "frame not presented");
                    }
                }
            }
            _ => {}
        }
    });
}

fn build_series() -> Series {
    let line: Vec<(f64, f64)> = (0..600)
        .map(|i| {
            let x = i as f64 * 0.02;
            (x, (x * 2.0).sin() * (1.0 + x * 0.1))
        })
        .collect();
    let markers = line.iter().copied().step_by(25).map(|(x, y)| (x, y * 0.5)).collect();
    Series { line, markers }
}

fn build_chart(size: PhysicalSize<u32>, series: &Series) -> Option<Chart<RasterSurface>> {
    let surface = RasterSurface::new(size.width as i32, size.height as i32);
    let mut chart = Chart::create(surface, true, None)?;
    let fill = DrawOverride { fill: Some(true), area_opacity: Some(0.25), ..Default::default() };
    chart.draw_line(series.line.clone(), Some(&fill), true);
    chart.draw_scatter(series.markers.clone(), None, false);
    debug!(width = size.width, height = size.height, "chart rebuilt");
    Some(chart)
}

/// Read the chart back as RGBA and blit it as softbuffer's 0RGB words.
fn present(surface: &mut softbuffer::Surface, chart: &mut Chart<RasterSurface>) -> Result<()> {
    let (rgba, w, h, _) = chart.surface_mut().to_rgba8()?;
    let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else {
        return Ok(());
    };
    surface.resize(nw, nh).map_err(|e| anyhow!("resize: {e}"))?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow!("buffer: {e}"))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
    }
    frame.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}
