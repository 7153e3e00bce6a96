use log::{debug, error, warn};

use crate::cache::LocalCache;
use crate::data::{filter_matching, Note, NoteEvent};
use crate::remote::{RemoteError, RemoteNoteStore};
use crate::service::observers::{NoteObservers, SubscriptionId};
use crate::service::{DeleteOutcome, ServiceError};
use crate::util::StrExt;
use io_trait::{DocumentServiceIo, ProductionDocumentServiceIo};

mod io_trait;

pub type DocumentService<R, C> = DocumentServiceImpl<R, C, ProductionDocumentServiceIo>;

/// Remote first, local cache as write-through copy and fallback.
///
/// Holds no state between calls other than the observer registry.
#[allow(private_bounds)]
pub struct DocumentServiceImpl<R, C, Io>
where
    R: RemoteNoteStore,
    C: LocalCache,
    Io: DocumentServiceIo,
{
    remote: R,
    cache: C,
    io: Io,
    observers: NoteObservers,
}

impl<R: RemoteNoteStore, C: LocalCache> DocumentService<R, C> {
    pub fn new(remote: R, cache: C) -> Self {
        Self::new_internal(remote, cache, ProductionDocumentServiceIo)
    }
}

#[allow(private_bounds)]
impl<R, C, Io> DocumentServiceImpl<R, C, Io>
where
    R: RemoteNoteStore,
    C: LocalCache,
    Io: DocumentServiceIo,
{
    fn new_internal(remote: R, cache: C, io: Io) -> Self {
        DocumentServiceImpl {
            remote,
            cache,
            io,
            observers: NoteObservers::default(),
        }
    }

    /// Observers run synchronously on the task that changed the note, after
    /// both stores were touched.
    pub fn subscribe(
        &self,
        observer: impl Fn(&NoteEvent) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub async fn list_notes(&self) -> Result<Vec<Note>, ServiceError> {
        debug!("listing notes");
        match self.remote.list_notes().await {
            Ok(notes) => {
                if let Err(e) = self.cache.write_all(&notes).await {
                    error!("failed to refresh the local cache: {e}");
                }
                Ok(notes)
            },
            Err(e) => {
                warn!("listing remotely failed, using the local cache: {e}");
                Ok(self.cache.read_all().await?)
            },
        }
    }

    pub async fn get_note(&self, id: &str) -> Result<Option<Note>, ServiceError> {
        if id.is_blank() {
            return Err(ServiceError::InvalidInput("note id is blank"));
        }
        debug!("getting note {id}");
        match self.remote.get_note(id).await {
            Ok(note) => {
                if let Err(e) = self.cache.upsert(note.clone()).await {
                    error!("failed to cache note {id}: {e}");
                }
                Ok(Some(note))
            },
            Err(e) => {
                log_fallback(&e, "getting", id);
                Ok(self.cache.get(id).await?)
            },
        }
    }

    /// A blank term lists everything.
    pub async fn search_notes(&self, term: &str) -> Result<Vec<Note>, ServiceError> {
        if term.is_blank() {
            return self.list_notes().await;
        }
        debug!("searching notes for \"{term}\"");
        match self.remote.search_notes(term).await {
            Ok(notes) => Ok(notes),
            Err(e) => {
                warn!("searching remotely failed, searching the local cache: {e}");
                Ok(filter_matching(self.cache.read_all().await?, term))
            },
        }
    }

    /// Assigns an id to a new note, stamps it and stores it remotely, or
    /// locally when the api is unusable. Notifies exactly once on success.
    pub async fn save_note(&self, mut note: Note) -> Result<Note, ServiceError> {
        let now = self.io.now();
        let is_new = note.is_new();
        if is_new {
            note.id = self.io.generate_id();
            note.created_at = now;
        }
        note.normalize_title();
        note.touch(now);
        debug!("saving note {} (new: {is_new})", note.id);

        let saved = match self.save_remotely(&note, is_new).await {
            Ok(saved) => {
                if let Err(e) = self.cache.upsert(saved.clone()).await {
                    error!("failed to cache saved note {}: {e}", saved.id);
                }
                saved
            },
            Err(RemoteError::NotFound) => {
                warn!("note {} is unknown remotely, keeping it locally", note.id);
                self.cache.upsert(note.clone()).await?;
                note
            },
            Err(e) => {
                warn!("saving note {} remotely failed, keeping it locally: {e}", note.id);
                self.cache.upsert(note.clone()).await?;
                note
            },
        };
        self.observers.notify(&NoteEvent::Updated(saved.clone()));
        Ok(saved)
    }

    /// One attempt only. The id is assigned before this, so the choice
    /// between create and update can't come from `note.is_new()`.
    async fn save_remotely(&self, note: &Note, is_new: bool) -> Result<Note, RemoteError> {
        if is_new {
            self.remote.create_note(note).await
        } else {
            self.remote.update_note(note).await
        }
    }

    pub async fn delete_note(&self, id: &str) -> Result<DeleteOutcome, ServiceError> {
        if id.is_blank() {
            return Err(ServiceError::InvalidInput("note id is blank"));
        }
        debug!("deleting note {id}");
        let deleted = match self.remote.delete_note(id).await {
            Ok(()) => {
                if let Err(e) = self.cache.remove(id).await {
                    error!("failed to remove note {id} from the local cache: {e}");
                }
                true
            },
            Err(RemoteError::NotFound) => self.cache
                .remove(id)
                .await
                .unwrap_or_else(|e| {
                    error!("failed to remove note {id} from the local cache: {e}");
                    false
                }),
            Err(e) => {
                warn!("deleting note {id} remotely failed, deleting it locally: {e}");
                self.cache.remove(id).await?
            },
        };
        if !deleted {
            debug!("note {id} was already absent");
            return Ok(DeleteOutcome::Absent);
        }
        self.observers.notify(&NoteEvent::Deleted(id.to_owned()));
        Ok(DeleteOutcome::Deleted)
    }
}

fn log_fallback(e: &RemoteError, action: &str, id: &str) {
    if e.is_unreachable() {
        warn!("{action} note {id} remotely failed, using the local cache: {e}");
    } else {
        debug!("note {id} is unknown remotely, checking the local cache");
    }
}
