//! Error types for the data grid
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the grid core and its configuration layer
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Row index outside `[0, len)`
    #[snafu(display("Row {index} out of range (row count {len})"))]
    OutOfRange { index: usize, len: usize },

    /// Edit start referencing a row or column that is not addressable
    #[snafu(display("Cannot edit row {row}, column '{column}': no such cell"))]
    InvalidTarget { row: usize, column: String },

    /// Commit against a target that no longer exists
    #[snafu(display("Edit target row {row}, column '{column}' is stale; edit discarded"))]
    StaleTarget { row: usize, column: String },

    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (file operations)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON deserialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
