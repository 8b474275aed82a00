use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to read model file '{0}'")]
    ModelRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to write model file '{0}'")]
    ModelWrite(PathBuf, #[source] std::io::Error),

    #[error("Failed to create model directory '{0}'")]
    ModelDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to decode model data from '{0}'")]
    ModelDecode(PathBuf, #[source] Box<bincode::error::DecodeError>),

    #[error("Failed to encode model data")]
    ModelEncode(#[source] Box<bincode::error::EncodeError>),

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("Model {model} declares {columns} feature columns but {coefficients} coefficients")]
    CoefficientMismatch {
        model: String,
        columns: usize,
        coefficients: usize,
    },

    #[error("Feature column '{column}' required by model {model} not found")]
    FeatureColumnNotFound {
        model: String,
        column: String,
        #[source]
        source: PolarsError,
    },

    #[error("Feature column '{column}' of model {model} is not numeric")]
    FeatureCast {
        model: String,
        column: String,
        #[source]
        source: PolarsError,
    },

    #[error("Feature column '{column}' holds no value for model {model}")]
    MissingFeatureValue { model: String, column: String },
}
