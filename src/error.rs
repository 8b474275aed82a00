use crate::model::error::ModelError;
use crate::stream::error::StreamError;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BikecastError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Stream(#[from] StreamError),

    #[error("Required column '{0}' not found in snapshot")]
    ColumnNotFound(String, #[source] PolarsError),

    #[error("No weather row tagged '{tag}' in snapshot")]
    ForecastTagNotFound { tag: String },

    #[error("Found {count} weather rows tagged '{tag}', expected one")]
    AmbiguousForecastTag { tag: String, count: usize },

    #[error("Snapshot column '{column}' holds no value")]
    MissingValue { column: String },

    #[error("Failed to read snapshot CSV '{0}'")]
    SnapshotRead(PathBuf, #[source] PolarsError),

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
