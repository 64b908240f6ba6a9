use thiserror::Error;

use lithos_core::error::CoreError;

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("unknown stone protocol: {0}")]
    UnknownProtocol(String),

    #[error(transparent)]
    Record(#[from] CoreError),
}
