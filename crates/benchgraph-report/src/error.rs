use std::error::Error;
use std::fmt;

/// Custom error type for report pipeline failures
#[derive(Debug)]
pub enum ReportError {
    /// Input file missing, malformed, or lacking a required column.
    DataLoad(String),
    /// A multi-threaded time of zero leaves the improvement ratio undefined.
    ZeroDenominator { row: usize, n: u64 },
    /// A chart was requested for a table with no data rows.
    EmptyTable,
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReportError::DataLoad(msg) => write!(f, "Failed to load benchmark data: {}", msg),
            ReportError::ZeroDenominator { row, n } => write!(
                f,
                "Multi-threaded time is zero at data row {} (n = {}), improvement ratio is undefined",
                row, n
            ),
            ReportError::EmptyTable => write!(f, "Benchmark table has no data rows to plot"),
        }
    }
}

impl Error for ReportError {}
