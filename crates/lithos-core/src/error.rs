use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("unknown stone type: {0}")]
    UnknownStoneType(String),
}
