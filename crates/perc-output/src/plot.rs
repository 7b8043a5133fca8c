//! SVG rendering of a grid overlay and of the percolation curve.
//!
//! Drawing is text-free (no captions or tick labels), so no font backend is
//! needed.  Overlay colours: blocked = blue, vacant = green, full = red.

use std::path::Path;

use perc_core::{Overlay, SiteState};
use perc_sim::PercolationCurve;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use crate::{OutputError, OutputResult};

/// Default pixel size of one overlay cell.
pub const CELL_PX: u32 = 12;

/// Default curve image size.
pub const CURVE_SIZE: (u32, u32) = (640, 480);

fn render_err<E: std::fmt::Display>(e: E) -> OutputError {
    OutputError::Render(e.to_string())
}

fn state_color(state: SiteState) -> RGBColor {
    match state {
        SiteState::Blocked => BLUE,
        SiteState::Vacant  => GREEN,
        SiteState::Full    => RED,
    }
}

// ── Overlay ───────────────────────────────────────────────────────────────────

/// Pixel size of a `side × side` overlay with `cell_px` cells.  Must also fit
/// plotters' `i32` coordinates.
fn overlay_extent(side: usize, cell_px: u32) -> OutputResult<u32> {
    let size = u32::try_from(side)
        .ok()
        .and_then(|s| s.checked_mul(cell_px))
        .ok_or_else(|| {
            OutputError::Render(format!("overlay of side {side} at {cell_px}px overflows"))
        })?;
    i32::try_from(size).map_err(render_err)?;
    Ok(size)
}

/// Render `overlay` as an SVG document with `cell_px × cell_px` cells.
///
/// Fails with [`OutputError::Render`] if the image would not fit plotters'
/// `i32` coordinate space.
pub fn overlay_svg(overlay: &Overlay, cell_px: u32) -> OutputResult<String> {
    let cell_px = cell_px.max(1);
    let size = overlay_extent(overlay.side(), cell_px)?;
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (size, size)).into_drawing_area();
        draw_overlay(&root, overlay, cell_px)?;
        root.present().map_err(render_err)?;
    }
    Ok(svg)
}

/// Draw `overlay` onto any plotters drawing area.
pub fn draw_overlay<DB: DrawingBackend>(
    root:    &DrawingArea<DB, Shift>,
    overlay: &Overlay,
    cell_px: u32,
) -> OutputResult<()> {
    // The whole extent fits i32, so every cell corner below does too.
    overlay_extent(overlay.side(), cell_px)?;
    let px = i32::try_from(cell_px).map_err(render_err)?;
    root.fill(&WHITE).map_err(render_err)?;
    for row in 0..overlay.side() {
        let y0 = i32::try_from(row).map_err(render_err)? * px;
        for col in 0..overlay.side() {
            let x0 = i32::try_from(col).map_err(render_err)? * px;
            let style = state_color(overlay.get(row, col)).filled();
            root.draw(&Rectangle::new([(x0, y0), (x0 + px, y0 + px)], style))
                .map_err(render_err)?;
        }
    }
    Ok(())
}

/// Render `overlay` and write it to `path`.
pub fn write_overlay_svg(path: &Path, overlay: &Overlay) -> OutputResult<()> {
    std::fs::write(path, overlay_svg(overlay, CELL_PX)?)?;
    debug!(path = %path.display(), side = overlay.side(), "wrote overlay image");
    Ok(())
}

// ── Curve ─────────────────────────────────────────────────────────────────────

/// Render `curve` as a line plot on `[0, 1] × [0, 1]` (x = vacancy
/// probability, y = percolation probability).
pub fn curve_svg(curve: &PercolationCurve, size: (u32, u32)) -> OutputResult<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        draw_curve(&root, curve)?;
        root.present().map_err(render_err)?;
    }
    Ok(svg)
}

/// Draw `curve` onto any plotters drawing area.
pub fn draw_curve<DB: DrawingBackend>(
    root:  &DrawingArea<DB, Shift>,
    curve: &PercolationCurve,
) -> OutputResult<()> {
    root.fill(&WHITE).map_err(render_err)?;
    let mut chart = ChartBuilder::on(root)
        .margin(20)
        .build_cartesian_2d(0f64..1f64, 0f64..1f64)
        .map_err(render_err)?;

    chart
        .plotting_area()
        .draw(&Rectangle::new([(0.0, 0.0), (1.0, 1.0)], BLACK.stroke_width(1)))
        .map_err(render_err)?;
    chart
        .draw_series(LineSeries::new(curve.pairs(), BLUE.stroke_width(2)))
        .map_err(render_err)?;
    chart
        .draw_series(curve.pairs().map(|(x, y)| Circle::new((x, y), 3, BLUE.filled())))
        .map_err(render_err)?;
    Ok(())
}

/// Render `curve` and write it to `path`.
pub fn write_curve_svg(path: &Path, curve: &PercolationCurve) -> OutputResult<()> {
    std::fs::write(path, curve_svg(curve, CURVE_SIZE)?)?;
    debug!(path = %path.display(), points = curve.len(), "wrote curve image");
    Ok(())
}
