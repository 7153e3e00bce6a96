use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request to the notes api failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("notes api answered with {0}")]
    Status(StatusCode),

    #[error("note not found")]
    NotFound,

    #[error("invalid api base url \"{0}\"")]
    InvalidBaseUrl(String),
}

impl RemoteError {
    /// Everything except a definite "no such note" means the api is unusable.
    pub fn is_unreachable(&self) -> bool {
        !matches!(self, RemoteError::NotFound)
    }
}
