use std::io::Error as IoError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("local cache i/o failed: {0}")]
    Io(#[from] IoError),

    #[error("serializing the cached notes failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
