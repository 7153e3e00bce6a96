mod errors;
mod internal;

use async_trait::async_trait;
use crate::data::{filter_matching, Note};

pub use errors::*;
pub use internal::FileNoteRepository;

/// Server-side persistence of the note collection.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Note>, StorageError>;

    async fn get_by_id(&self, id: &str) -> Result<Note, StorageError>;

    async fn upsert(&self, note: &Note) -> Result<Note, StorageError>;

    /// Fails with [StorageError::NoteNotFound] if there is nothing to delete.
    async fn delete(&self, id: &str) -> Result<(), StorageError>;

    async fn search(&self, term: &str) -> Result<Vec<Note>, StorageError> {
        Ok(filter_matching(self.list_all().await?, term))
    }
}
