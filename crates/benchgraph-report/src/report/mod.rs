//! Report pipeline: load the results CSV and render the charts.
pub mod plots;

use std::path::Path;

use anyhow::Result;

use crate::stats::improvement;
use crate::table::read_results_csv;

/// Input path written by the benchmark tool.
pub const DEFAULT_RESULTS_CSV: &str = "docs/results.csv";
/// Directory the chart images are written into by default.
pub const DEFAULT_OUTPUT_DIR: &str = "docs";
/// File name of the absolute-timings chart.
pub const TIMING_CHART_FILE: &str = "performance_graph.png";
/// File name of the improvement-ratio chart.
pub const IMPROVEMENT_CHART_FILE: &str = "performance_improvement.png";

/// Run the full pipeline: load `input` and render both charts into
/// `output_dir`.
///
/// The pipeline is a straight line with no retries. The output directory is
/// not created implicitly; a chart already written before a later step fails
/// stays on disk.
pub fn render_report(input: &Path, output_dir: &Path) -> Result<()> {
    let table = read_results_csv(input)?;
    log::info!(
        "Loaded {} benchmark rows from {}",
        table.len(),
        input.display()
    );

    let timing_path = output_dir.join(TIMING_CHART_FILE);
    plots::render_timing_chart(&table, &timing_path)?;
    log::info!("Wrote timing chart to {}", timing_path.display());

    let ratios = improvement(&table)?;
    let improvement_path = output_dir.join(IMPROVEMENT_CHART_FILE);
    plots::render_improvement_chart(&table, &ratios, &improvement_path)?;
    log::info!("Wrote improvement chart to {}", improvement_path.display());

    Ok(())
}
