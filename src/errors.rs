use thiserror::Error;

/// Error type that captures pivot configuration and input failures.
#[derive(Debug, Error)]
pub enum PivotError {
    #[error("Unknown measure operator: {0}")]
    UnknownMeasure(String),
    #[error("Invalid pivot spec: {0}")]
    InvalidSpec(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
