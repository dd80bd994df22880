//! Benchmark results CSV reader.
use std::fmt;
use std::path::Path;

use anyhow::Result;
use csv::StringRecord;

use crate::error::ReportError;

/// Column names as written by the benchmark tool. They are the external
/// contract with whatever produced the CSV and must match the header exactly,
/// spacing and capitalization included.
pub const CLAUSES_COLUMN: &str = "n";
pub const SINGLE_THREADED_COLUMN: &str = "Single Threaded(ms)";
pub const MULTI_THREADED_COLUMN: &str = "Multi Threaded (ms)";

/// One measured benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRow {
    /// Number of clauses in the benchmarked problem.
    pub n: u64,
    pub single_threaded_ms: f64,
    pub multi_threaded_ms: f64,
}

/// Benchmark timings, kept in file order.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkTable {
    pub rows: Vec<BenchmarkRow>,
}

impl BenchmarkTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read a benchmark results CSV into a [`BenchmarkTable`].
///
/// The header row is required. Required columns are resolved by position from
/// the header; extra columns are ignored. Every failure mode (unreadable
/// file, missing column, unparseable cell) surfaces as
/// [`ReportError::DataLoad`] naming the path, column, or data row.
pub fn read_results_csv<P: AsRef<Path>>(path: P) -> Result<BenchmarkTable> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| ReportError::DataLoad(format!("Failed to open {}: {}", path.display(), e)))?;

    let headers = reader
        .headers()
        .map_err(|e| ReportError::DataLoad(format!("Failed to read header row: {}", e)))?
        .clone();

    let n_idx = find_column(&headers, CLAUSES_COLUMN)?;
    let single_idx = find_column(&headers, SINGLE_THREADED_COLUMN)?;
    let multi_idx = find_column(&headers, MULTI_THREADED_COLUMN)?;

    let mut rows = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            ReportError::DataLoad(format!("Failed to read data row {}: {}", row_idx + 1, e))
        })?;

        rows.push(BenchmarkRow {
            n: parse_field(&record, n_idx, CLAUSES_COLUMN, row_idx)?,
            single_threaded_ms: parse_field(&record, single_idx, SINGLE_THREADED_COLUMN, row_idx)?,
            multi_threaded_ms: parse_field(&record, multi_idx, MULTI_THREADED_COLUMN, row_idx)?,
        });
    }

    Ok(BenchmarkTable { rows })
}

fn find_column(headers: &StringRecord, name: &str) -> Result<usize, ReportError> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| ReportError::DataLoad(format!("Missing required column '{}'", name)))
}

fn parse_field<T>(record: &StringRecord, idx: usize, column: &str, row_idx: usize) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    let raw = record.get(idx).ok_or_else(|| {
        ReportError::DataLoad(format!(
            "Missing '{}' value at data row {}",
            column,
            row_idx + 1
        ))
    })?;
    raw.trim().parse::<T>().map_err(|e| {
        ReportError::DataLoad(format!(
            "Invalid '{}' value '{}' at data row {}: {}",
            column,
            raw,
            row_idx + 1,
            e
        ))
        .into()
    })
}
