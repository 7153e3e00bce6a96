use std::path::Path;
use async_trait::async_trait;
use log::{debug, error, trace};
use tokio::sync::Mutex;

use crate::cache::{CacheError, LocalCache};
use crate::data::Note;
use crate::lib_constants::CACHE_NOTES_KEY;
use io_trait::{KeyValueIo, ProductionKeyValueIo};
#[cfg(test)] use io_trait::MemoryKeyValueIo;

mod io_trait;

pub type FileLocalCache = LocalCacheImpl<ProductionKeyValueIo>;
#[cfg(test)] pub type MemoryLocalCache = LocalCacheImpl<MemoryKeyValueIo>;

/// The whole collection lives under one key. Every read-modify-write goes
/// through `lock`, so helpers are atomic relative to each other.
#[allow(private_bounds)]
pub struct LocalCacheImpl<Io: KeyValueIo> {
    io: Io,
    lock: Mutex<()>,
}

impl FileLocalCache {
    pub async fn new(
        cache_directory: impl AsRef<Path>,
    ) -> Result<FileLocalCache, CacheError> {
        debug!(
            "opening local cache at {}",
            cache_directory.as_ref().display(),
        );
        Ok(
            Self::new_internal(
                ProductionKeyValueIo::new(cache_directory.as_ref().to_owned())
                    .await?
            )
        )
    }
}

#[cfg(test)]
impl MemoryLocalCache {
    pub fn in_memory() -> Self {
        Self::new_internal(MemoryKeyValueIo::default())
    }
}

#[allow(private_bounds)]
impl<Io: KeyValueIo> LocalCacheImpl<Io> {
    fn new_internal(io: Io) -> Self {
        LocalCacheImpl { io, lock: Mutex::new(()) }
    }

    async fn load(&self) -> Result<Vec<Note>, CacheError> {
        let Some(data) = self.io.get(CACHE_NOTES_KEY).await? else {
            trace!("local cache is empty");
            return Ok(Vec::new());
        };
        match serde_json::from_slice(&data) {
            Ok(notes) => Ok(notes),
            Err(e) => {
                error!("cached notes are unreadable, treating the cache as empty: {e}");
                Ok(Vec::new())
            },
        }
    }

    async fn store(&self, notes: &[Note]) -> Result<(), CacheError> {
        trace!("storing {} notes in the local cache", notes.len());
        let data = serde_json::to_vec(notes)?;
        self.io.set(CACHE_NOTES_KEY, data).await?;
        Ok(())
    }
}

#[async_trait]
impl<Io: KeyValueIo> LocalCache for LocalCacheImpl<Io> {
    async fn read_all(&self) -> Result<Vec<Note>, CacheError> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    async fn write_all(&self, notes: &[Note]) -> Result<(), CacheError> {
        let _guard = self.lock.lock().await;
        self.store(notes).await
    }

    async fn get(&self, id: &str) -> Result<Option<Note>, CacheError> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.into_iter().find(|note| note.id == id))
    }

    async fn upsert(&self, note: Note) -> Result<(), CacheError> {
        let _guard = self.lock.lock().await;
        let mut notes = self.load().await?;
        match notes.iter_mut().find(|cached| cached.id == note.id) {
            Some(cached) => *cached = note,
            None => notes.push(note),
        }
        self.store(&notes).await
    }

    async fn remove(&self, id: &str) -> Result<bool, CacheError> {
        let _guard = self.lock.lock().await;
        let mut notes = self.load().await?;
        let Some(position) = notes.iter().position(|note| note.id == id) else {
            return Ok(false);
        };
        notes.remove(position);
        self.store(&notes).await?;
        Ok(true)
    }
}
