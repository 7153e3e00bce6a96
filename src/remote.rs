mod errors;
mod internal;

use async_trait::async_trait;
use crate::data::Note;

pub use errors::*;
pub use internal::HttpRemoteNoteStore;

/// The notes API as seen from the client. One attempt per call, no retries.
#[async_trait]
pub trait RemoteNoteStore: Send + Sync {
    async fn list_notes(&self) -> Result<Vec<Note>, RemoteError>;

    /// Fails with [RemoteError::NotFound] when the server has no such note.
    async fn get_note(&self, id: &str) -> Result<Note, RemoteError>;

    async fn search_notes(&self, term: &str) -> Result<Vec<Note>, RemoteError>;

    /// Returns the server's canonical version of the note.
    async fn create_note(&self, note: &Note) -> Result<Note, RemoteError>;

    async fn update_note(&self, note: &Note) -> Result<Note, RemoteError>;

    async fn delete_note(&self, id: &str) -> Result<(), RemoteError>;

    async fn save_note(&self, note: &Note) -> Result<Note, RemoteError> {
        if note.is_new() {
            self.create_note(note).await
        } else {
            self.update_note(note).await
        }
    }
}
