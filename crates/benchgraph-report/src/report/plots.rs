//! Chart drawing for benchmark timings.
use std::ops::Range;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use plotters::prelude::*;

use crate::error::ReportError;
use crate::table::BenchmarkTable;

/// Raster dimensions shared by both charts.
const CHART_SIZE: (u32, u32) = (1000, 600);
const MARKER_SIZE: i32 = 3;

/// Render the absolute-timings chart to `path`.
///
/// Two line series (single- and multi-threaded milliseconds) against the
/// clause count, circle markers at every data point, y-axis on a base-2 log
/// scale, legend and mesh drawn. Overwrites any existing file.
pub fn render_timing_chart(table: &BenchmarkTable, path: &Path) -> Result<()> {
    if table.is_empty() {
        return Err(ReportError::EmptyTable.into());
    }
    ensure_output_dir(path)?;

    let single: Vec<(f64, f64)> = table
        .rows
        .iter()
        .map(|row| (row.n as f64, row.single_threaded_ms))
        .collect();
    let multi: Vec<(f64, f64)> = table
        .rows
        .iter()
        .map(|row| (row.n as f64, row.multi_threaded_ms))
        .collect();

    let x_range = padded_range(table.rows.iter().map(|row| row.n as f64), 1.0);
    let y_range = log_range(
        table
            .rows
            .iter()
            .flat_map(|row| [row.single_threaded_ms, row.multi_threaded_ms]),
    );

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .with_context(|| format!("Failed to write chart to {}", path.display()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Single Threaded vs Multi Threaded Performance",
            ("sans-serif", 28),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range.log_scale().base(2.0))?;

    chart
        .configure_mesh()
        .x_desc("Number of Clauses")
        .y_desc("Time (ms)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(single.iter().copied(), BLUE.stroke_width(2)))?
        .label("Single Threaded (ms)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(2)));
    chart.draw_series(
        single
            .iter()
            .map(|point| Circle::new(*point, MARKER_SIZE, BLUE.filled())),
    )?;

    chart
        .draw_series(LineSeries::new(multi.iter().copied(), RED.stroke_width(2)))?
        .label("Multi Threaded (ms)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.stroke_width(2)));
    chart.draw_series(
        multi
            .iter()
            .map(|point| Circle::new(*point, MARKER_SIZE, RED.filled())),
    )?;

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()
        .with_context(|| format!("Failed to write chart to {}", path.display()))?;
    Ok(())
}

/// Render the improvement-ratio chart to `path`.
///
/// One line series of `ratios` against the clause count on a linear y-axis
/// anchored at zero. `ratios` must be in table row order, one per row.
pub fn render_improvement_chart(
    table: &BenchmarkTable,
    ratios: &[f64],
    path: &Path,
) -> Result<()> {
    if table.is_empty() {
        return Err(ReportError::EmptyTable.into());
    }
    ensure_output_dir(path)?;

    let points: Vec<(f64, f64)> = table
        .rows
        .iter()
        .zip(ratios)
        .map(|(row, &ratio)| (row.n as f64, ratio))
        .collect();

    let x_range = padded_range(table.rows.iter().map(|row| row.n as f64), 1.0);
    let (_, y_max) = bounds(ratios.iter().copied());
    // keep the break-even level (ratio 1) inside the frame even when every
    // ratio is below it
    let y_range = 0.0..(y_max * 1.1).max(1.1);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .with_context(|| format!("Failed to write chart to {}", path.display()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Multi-Threading Improvement", ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Number of Clauses")
        .y_desc("Improvement (single / multi)")
        .draw()?;

    chart.draw_series(LineSeries::new(
        points.iter().copied(),
        GREEN.stroke_width(2),
    ))?;
    chart.draw_series(
        points
            .iter()
            .map(|point| Circle::new(*point, MARKER_SIZE, GREEN.filled())),
    )?;

    root.present()
        .with_context(|| format!("Failed to write chart to {}", path.display()))?;
    Ok(())
}

/// The bitmap backend buffers in memory and only writes on `present`, and
/// its `Drop` panics when that write fails. A missing output directory must
/// be rejected before the backend is constructed.
fn ensure_output_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => Err(anyhow!(
            "Failed to write chart to {}: output directory {} does not exist",
            path.display(),
            parent.display()
        )),
        _ => Ok(()),
    }
}

fn bounds<I: Iterator<Item = f64>>(values: I) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Axis range over `values`, widened to `min_span` when degenerate (a
/// single-row table would otherwise produce a zero-width axis).
fn padded_range<I: Iterator<Item = f64>>(values: I, min_span: f64) -> Range<f64> {
    let (lo, hi) = bounds(values);
    if hi - lo < min_span {
        lo - min_span / 2.0..hi + min_span / 2.0
    } else {
        lo..hi
    }
}

/// Log-axis range with multiplicative headroom on both ends.
fn log_range<I: Iterator<Item = f64>>(values: I) -> Range<f64> {
    let (lo, hi) = bounds(values);
    let lo = if lo > 0.0 { lo / 2.0 } else { f64::MIN_POSITIVE };
    lo..hi * 2.0
}
