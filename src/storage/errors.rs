use thiserror::Error;
use tokio::io::Error as IoError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("data directory is not initialized properly")]
    DataDirNotInitialized,

    #[error(transparent)]
    Io(#[from] IoError),

    #[error("file too large")]
    TooBig,

    #[error("invalid note id \"{0}\"")]
    InvalidId(String),

    #[error("invalid note file contents: {0}")]
    Parsing(serde_json::Error),

    #[error("serializing the note failed: {0}")]
    Serialization(serde_json::Error),

    #[error("note not found")]
    NoteNotFound,
}
