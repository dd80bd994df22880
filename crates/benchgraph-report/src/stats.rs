//! Derived benchmark metrics.
use crate::error::ReportError;
use crate::table::BenchmarkTable;

/// Compute the per-row multi-threading improvement ratio.
///
/// For each row this is `single_threaded_ms / multi_threaded_ms`, in file
/// order; values above 1 mean the multi-threaded run was faster. All
/// denominators are validated before any division, so a zero multi-threaded
/// time fails with [`ReportError::ZeroDenominator`] naming the offending row
/// instead of silently yielding `inf` or `NaN`.
pub fn improvement(table: &BenchmarkTable) -> Result<Vec<f64>, ReportError> {
    for (idx, row) in table.rows.iter().enumerate() {
        if row.multi_threaded_ms == 0.0 {
            return Err(ReportError::ZeroDenominator {
                row: idx + 1,
                n: row.n,
            });
        }
    }

    Ok(table
        .rows
        .iter()
        .map(|row| row.single_threaded_ms / row.multi_threaded_ms)
        .collect())
}
