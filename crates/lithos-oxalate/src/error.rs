use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OxalateError {
    #[error("failed to read oxalate data from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid oxalate data: {0}")]
    Parse(#[from] serde_json::Error),
}
