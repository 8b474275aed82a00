use thiserror::Error;

#[derive(Debug, Error)]
pub enum StreamError {
    #[error("Record buffer written without a timestamp")]
    MissingTimestamp,

    #[error("Failed to serialize record")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write record to sink")]
    Io(#[from] std::io::Error),
}
