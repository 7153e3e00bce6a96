use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::lib_constants::DEFAULT_NOTE_TITLE;
use crate::util::StrExt;

/// The note as it travels over the wire and sits in either store.
///
/// An empty `id` marks a note that was never persisted anywhere.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(default, alias = "Id")]
    pub id: String,

    #[serde(default, alias = "Title")]
    pub title: String,

    #[serde(default, alias = "Content")]
    pub content: String,

    #[serde(default, alias = "Tags")]
    pub tags: Vec<String>,

    #[serde(
        with = "time::serde::rfc3339",
        default = "OffsetDateTime::now_utc",
        alias = "CreatedAt",
        alias = "createdDate",
        alias = "CreatedDate",
    )]
    pub created_at: OffsetDateTime,

    #[serde(
        with = "time::serde::rfc3339",
        default = "OffsetDateTime::now_utc",
        alias = "LastModified",
    )]
    pub last_modified: OffsetDateTime,
}

impl Note {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Note {
        let now = OffsetDateTime::now_utc();
        Note {
            id: String::new(),
            title: title.into(),
            content: content.into(),
            tags: tags.into_iter().map(Into::into).collect(),
            created_at: now,
            last_modified: now,
        }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_blank()
    }

    pub fn normalize_title(&mut self) {
        if self.title.is_blank() {
            self.title = DEFAULT_NOTE_TITLE.to_owned();
        }
    }

    /// Stamps the modification time, never letting it precede `created_at`.
    pub fn touch(&mut self, now: OffsetDateTime) {
        self.last_modified = now.max(self.created_at);
    }

    /// Case-insensitive substring match against the title, the content and
    /// every tag. A blank term matches everything, any other term is used
    /// untrimmed.
    pub fn matches(&self, term: &str) -> bool {
        if term.is_blank() {
            return true;
        }
        let term = term.to_lowercase();
        self.title.contains_ignore_case(&term)
            || self.content.contains_ignore_case(&term)
            || self.tags.iter().any(|tag| tag.contains_ignore_case(&term))
    }
}

pub fn filter_matching(
    notes: impl IntoIterator<Item = Note>,
    term: &str,
) -> Vec<Note> {
    notes.into_iter()
        .filter(|note| note.matches(term))
        .collect()
}

/// Change notification fanned out to service subscribers.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NoteEvent {
    Updated(Note),
    Deleted(String),
}
