//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading or querying the catalog.
///
/// Callers in the recommendation core treat query errors as a
/// data-availability condition, not a failure: they log and degrade to an
/// empty result set rather than propagating.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading a catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A catalog file couldn't be parsed
    #[error("Parse error in {file}: {source}")]
    ParseError {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// An underlying store query failed (connection lost, bad SQL, ...)
    #[error("Catalog query failed: {0}")]
    QueryFailed(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
