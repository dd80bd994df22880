//! Integration tests for the derived improvement ratio.

use benchgraph_report::error::ReportError;
use benchgraph_report::stats::improvement;
use benchgraph_report::table::{BenchmarkRow, BenchmarkTable};

fn table(rows: &[(u64, f64, f64)]) -> BenchmarkTable {
    BenchmarkTable {
        rows: rows
            .iter()
            .map(|&(n, single, multi)| BenchmarkRow {
                n,
                single_threaded_ms: single,
                multi_threaded_ms: multi,
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Ratio computation
// ---------------------------------------------------------------------------

#[test]
fn single_row_ratio() {
    let ratios = improvement(&table(&[(10, 100.0, 50.0)])).unwrap();
    assert_eq!(ratios.len(), 1);
    assert!((ratios[0] - 2.0).abs() < 1e-12);
}

#[test]
fn ratio_per_row_in_order() {
    let t = table(&[(10, 3.0, 6.0), (20, 30.0, 15.0), (40, 150.0, 30.0)]);
    let ratios = improvement(&t).unwrap();
    let expected = [0.5, 2.0, 5.0];
    assert_eq!(ratios.len(), expected.len());
    for (got, want) in ratios.iter().zip(expected) {
        assert!((got - want).abs() < 1e-12);
    }
}

#[test]
fn empty_table_yields_empty_ratios() {
    let ratios = improvement(&BenchmarkTable::default()).unwrap();
    assert!(ratios.is_empty());
}

// ---------------------------------------------------------------------------
// Zero denominators
// ---------------------------------------------------------------------------

#[test]
fn zero_denominator_is_an_error() {
    let t = table(&[(10, 100.0, 50.0), (20, 400.0, 0.0)]);
    match improvement(&t) {
        Err(ReportError::ZeroDenominator { row, n }) => {
            assert_eq!(row, 2);
            assert_eq!(n, 20);
        }
        other => panic!("expected ZeroDenominator, got {:?}", other),
    }
}

#[test]
fn zero_denominator_message_names_the_row() {
    let t = table(&[(10, 100.0, 0.0)]);
    let err = improvement(&t).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("row 1"));
    assert!(msg.contains("n = 10"));
}

#[test]
fn no_partial_result_on_zero_denominator() {
    // the zero is in the first row; later rows must not be computed into
    // a partial vector
    let t = table(&[(10, 100.0, 0.0), (20, 400.0, 100.0)]);
    assert!(improvement(&t).is_err());
}
