mod errors;
mod internal;

use async_trait::async_trait;
use crate::data::Note;

pub use errors::*;
pub use internal::FileLocalCache;
#[cfg(test)] pub use internal::MemoryLocalCache;

/// On-device copy of the whole note collection.
#[async_trait]
pub trait LocalCache: Send + Sync {
    /// Empty when nothing was stored yet.
    async fn read_all(&self) -> Result<Vec<Note>, CacheError>;

    /// Replaces the stored collection.
    async fn write_all(&self, notes: &[Note]) -> Result<(), CacheError>;

    async fn get(&self, id: &str) -> Result<Option<Note>, CacheError>;

    /// Replaces the entry with the same id or appends a new one.
    async fn upsert(&self, note: Note) -> Result<(), CacheError>;

    /// Returns whether an entry was removed.
    async fn remove(&self, id: &str) -> Result<bool, CacheError>;
}
