//! Shared error types for the application

use thiserror::Error;

/// Main error type for jobmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// A column the pipeline cannot run without is absent from the input
    #[error("Required column `{name}` is missing from the input (found: {found:?})")]
    MissingColumn { name: String, found: Vec<String> },

    /// Malformed input table (e.g. a row with the wrong cell count)
    #[error("Malformed table: {0}")]
    Table(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// CSV read/write errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a missing-column error that names the columns that were found
    pub fn missing_column(name: impl Into<String>, found: &[String]) -> Self {
        Self::MissingColumn {
            name: name.into(),
            found: found.to_vec(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
