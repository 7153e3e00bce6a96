use thiserror::Error;
use crate::cache::CacheError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    #[error(transparent)]
    Cache(#[from] CacheError),
}
