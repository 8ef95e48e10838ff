/// Error types for the basin dashboard core
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dashboard data operations.
///
/// None of these are fatal to the dashboard: callers degrade to a warning,
/// an explicit "no data" indicator, or an empty chart.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// An external resource (the basin boundary file) does not exist
    #[error("{} not found! Please ensure the file is in the correct directory.", path.display())]
    MissingResource { path: PathBuf },

    /// An external resource exists but could not be parsed
    #[error("Failed to parse {}: {reason}", path.display())]
    MalformedResource { path: PathBuf, reason: String },

    /// A discharge subset had no rows to summarize
    #[error("No discharge data for the requested station and year")]
    EmptyResultSet,

    /// A user selection could not be applied
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// Station code not present in the catalog
    #[error("Station not found: {0}")]
    UnknownStation(String),

    /// Cross-section site not present in the catalog
    #[error("Cross-section site not found: {0}")]
    UnknownSite(String),

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// Invalid data format
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

/// Type alias for Results using DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;
