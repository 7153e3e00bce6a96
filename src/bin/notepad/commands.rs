use log::info;
use notepad::cache::LocalCache;
use notepad::data::{Note, NoteEvent};
use notepad::remote::RemoteNoteStore;
use notepad::service::{DeleteOutcome, DocumentService, ServiceError};
use serde::Serialize;
use thiserror::Error;
use crate::cli::Command;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("failed to print the result: {0}")]
    Output(#[from] serde_json::Error),

    #[error("note {0} not found")]
    NotFound(String),
}

pub async fn run<R: RemoteNoteStore, C: LocalCache>(
    service: &DocumentService<R, C>,
    command: Command,
) -> Result<(), CommandError> {
    match command {
        Command::List => print(&service.list_notes().await?),
        Command::Get { id } => match service.get_note(&id).await? {
            Some(note) => print(&note),
            None => Err(CommandError::NotFound(id)),
        },
        Command::Search { term } => print(&service.search_notes(&term).await?),
        Command::Save { id, title, content, tags } => {
            let base = match id {
                Some(id) => service.get_note(&id).await?.unwrap_or_else(|| {
                    let mut note = Note::new("", "", Vec::<String>::new());
                    note.id = id;
                    note
                }),
                None => Note::new("", "", Vec::<String>::new()),
            };
            let note = apply_edits(base, title, content, tags);
            print(&service.save_note(note).await?)
        },
        Command::Delete { id } => {
            match service.delete_note(&id).await? {
                DeleteOutcome::Deleted => println!("deleted {id}"),
                DeleteOutcome::Absent => println!("{id} was already absent"),
            }
            Ok(())
        },
    }
}

fn apply_edits(
    mut note: Note,
    title: Option<String>,
    content: Option<String>,
    tags: Vec<String>,
) -> Note {
    if let Some(title) = title {
        note.title = title;
    }
    if let Some(content) = content {
        note.content = content;
    }
    if !tags.is_empty() {
        note.tags = tags;
    }
    note
}

pub fn log_event(event: &NoteEvent) {
    match event {
        NoteEvent::Updated(note) => info!("note {} updated", note.id),
        NoteEvent::Deleted(id) => info!("note {id} deleted"),
    }
}

fn print(value: &impl Serialize) -> Result<(), CommandError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
