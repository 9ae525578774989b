//! Error types for listing data ingestion.

use std::path::PathBuf;

use rental_model::City;
use thiserror::Error;

/// Errors that can occur while loading or normalizing city datasets.
#[derive(Debug, Error)]
pub enum IngestError {
    /// A city's dataset is missing or cannot be parsed as CSV.
    ///
    /// Fatal for the dashboard: nothing is rendered without all four cities.
    #[error("data unavailable for {city} ({path}): {reason}")]
    DataUnavailable {
        city: City,
        path: PathBuf,
        reason: String,
    },

    /// Column not found in DataFrame.
    #[error("column '{column}' not found in {city} dataset")]
    ColumnNotFound { city: City, column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
