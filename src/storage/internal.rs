use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::PathBuf;
use async_trait::async_trait;
use futures::future::join_all;
use log::{debug, error, trace, warn};

use crate::config::app_config::AppConfig;
use crate::data::Note;
use crate::lib_constants::{MAX_NOTE_ID_LEN, NOTES_DIRECTORY_PATH, NOTE_FILE_EXTENSION, RESERVED_NOTE_IDS, TMP_FILENAME_INFIX};
use crate::storage::errors::StorageError;
use crate::storage::NoteRepository;
use crate::util::send_fut_lifetime_workaround;
use io_trait::{NoteRepositoryIo, ProductionNoteRepositoryIo};

mod io_trait;

pub type FileNoteRepository = NoteRepositoryImpl<ProductionNoteRepositoryIo>;

/// One JSON document per note, `<notes dir>/<id>.json`.
#[allow(private_bounds)]
pub struct NoteRepositoryImpl<Io: NoteRepositoryIo> {
    io: Io,
    notes_dir: PathBuf,
    max_note_size: u64,
}

impl FileNoteRepository {
    pub async fn new(
        app_config: &AppConfig,
    ) -> Result<FileNoteRepository, StorageError> {
        Self::new_internal(
            app_config.data_directory.clone(),
            app_config.max_note_size,
            ProductionNoteRepositoryIo::new(),
        ).await
    }

    pub fn get_notes_dir(app_config: &AppConfig) -> PathBuf {
        app_config.data_directory.join(NOTES_DIRECTORY_PATH)
    }
}

#[allow(private_bounds)]
impl<Io: NoteRepositoryIo> NoteRepositoryImpl<Io> {
    async fn new_internal(
        data_dir: PathBuf,
        max_note_size: u64,
        io: Io,
    ) -> Result<NoteRepositoryImpl<Io>, StorageError> {
        debug!("creating note repository at {}", data_dir.display());
        match io.metadata(&data_dir).await {
            Ok(meta) if meta.is_dir => {},
            Ok(_) => return Err(StorageError::DataDirNotInitialized),
            Err(e) if e.kind() == ErrorKind::NotFound =>
                return Err(StorageError::DataDirNotInitialized),
            Err(e) => return Err(e.into()),
        }
        let notes_dir = data_dir.join(NOTES_DIRECTORY_PATH);
        io.create_dir(&notes_dir).await?;
        Ok(NoteRepositoryImpl { io, notes_dir, max_note_size })
    }

    async fn read_note(&self, id: &str) -> Result<Note, StorageError> {
        validate_id(id)?;
        let path = self.get_note_path(id);
        trace!("reading note {id} at \"{}\"", path.display());
        let file = self.io
            .read_file(&path, self.max_note_size)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => StorageError::NoteNotFound,
                _ => StorageError::Io(e),
            })?;
        if file.size > self.max_note_size
            || file.data.len() as u64 > self.max_note_size {
            return Err(StorageError::TooBig);
        }
        let note: Note = serde_json::from_slice(&file.data)
            .map_err(StorageError::Parsing)?;
        if note.id != id {
            warn!("note file for {id} holds a note with id \"{}\"", note.id);
            return Err(StorageError::InvalidId(note.id));
        }
        Ok(note)
    }

    async fn write_note(&self, note: &Note) -> Result<(), StorageError> {
        let filename = self.get_note_path(&note.id);
        let data = serde_json::to_vec(note)
            .map_err(StorageError::Serialization)?;
        if data.len() as u64 > self.max_note_size {
            return Err(StorageError::TooBig);
        }
        let tmp_filename = self.get_note_tmp_path(&note.id);
        trace!(
            "tmp filename for note {}: \"{}\"",
            note.id,
            tmp_filename.display(),
        );
        self.io.write_file(&tmp_filename, data).await?;
        if let Err(e) = self.io.rename_file(&tmp_filename, &filename).await {
            error!(
                "failed to rename tmp file \"{}\" for note {}: {e}",
                tmp_filename.display(),
                note.id,
            );
            if let Err(e) = self.io.remove_file(&tmp_filename).await {
                error!(
                    "failed to remove tmp file \"{}\": {e}",
                    tmp_filename.display(),
                );
            }
            return Err(e.into())
        }
        Ok(())
    }

    fn get_note_path(&self, id: &str) -> PathBuf {
        self.notes_dir.join(format!("{id}{NOTE_FILE_EXTENSION}"))
    }

    fn get_note_tmp_path(&self, id: &str) -> PathBuf {
        self.notes_dir.join(
            format!(
                "{id}{NOTE_FILE_EXTENSION}{TMP_FILENAME_INFIX}{}",
                self.io.generate_uuid().hyphenated(),
            )
        )
    }

    fn try_extract_id(filename: &str) -> Option<&str> {
        filename
            .strip_suffix(NOTE_FILE_EXTENSION)
            .filter(|id| validate_id(id).is_ok())
    }
}

#[async_trait]
impl<Io: NoteRepositoryIo> NoteRepository for NoteRepositoryImpl<Io> {
    async fn list_all(&self) -> Result<Vec<Note>, StorageError> {
        debug!("listing notes");
        let filenames = self.io.list_dir(&self.notes_dir).await?;
        let ids: Vec<&str> = filenames.iter()
            .filter_map(|name| {
                let id = Self::try_extract_id(name);
                if id.is_none() {
                    trace!("skipping dir entry \"{name}\"");
                }
                id
            })
            .collect();
        let reads: Vec<_> = ids.iter().map(|id| self.read_note(id)).collect();
        let mut notes: Vec<Note> = send_fut_lifetime_workaround(join_all(reads))
            .await
            .into_iter()
            .zip(ids.iter())
            .filter_map(|(result, id)| result
                .inspect_err(|e| error!("failed to read note {id}: {e}"))
                .ok()
            )
            .collect();
        notes.sort_by(|a, b| a.last_modified
            .cmp(&b.last_modified)
            .then_with(|| a.id.cmp(&b.id))
        );
        Ok(notes)
    }

    async fn get_by_id(&self, id: &str) -> Result<Note, StorageError> {
        debug!("getting note {id}");
        self.read_note(id).await
    }

    async fn upsert(&self, note: &Note) -> Result<Note, StorageError> {
        debug!("writing note {}", note.id);
        validate_id(&note.id)?;
        let mut note = note.clone();
        dedup_tags(&mut note.tags);
        self.write_note(&note).await?;
        Ok(note)
    }

    async fn delete(&self, id: &str) -> Result<(), StorageError> {
        debug!("deleting note {id}");
        validate_id(id)?;
        self.io
            .remove_file(&self.get_note_path(id))
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => StorageError::NoteNotFound,
                _ => StorageError::Io(e),
            })
    }
}

/// Ids become file names and url segments, so only a conservative alphabet
/// is accepted and route names are refused.
fn validate_id(id: &str) -> Result<(), StorageError> {
    let valid = !id.is_empty()
        && id.len() <= MAX_NOTE_ID_LEN
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        && !RESERVED_NOTE_IDS.contains(&id);
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidId(id.to_owned()))
    }
}

fn dedup_tags(tags: &mut Vec<String>) {
    let mut seen = HashSet::new();
    tags.retain(|tag| seen.insert(tag.clone()));
}
