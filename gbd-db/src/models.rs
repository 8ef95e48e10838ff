//! Query result structs that have no counterpart in `gbd-core`.
//!
//! Catalog and reading queries return the core record types directly.

use serde::Serialize;

/// Per-year discharge summary for one station, aggregated in SQL.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct YearSummary {
    pub year: i32,
    /// Number of daily readings in the year
    pub days: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}
