//! benchgraph-report: performance charts for prover benchmark timings.
//!
//! This crate loads a CSV of clause-count/timing measurements produced by the
//! benchmark tool, derives the multi-threading improvement ratio, and renders
//! static PNG charts. Loading (`table`), derived metrics (`stats`), and chart
//! drawing (`report`) sit behind separate function boundaries so each is
//! independently testable.
pub mod error;
pub mod report;
pub mod stats;
pub mod table;
