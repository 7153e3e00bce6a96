use notepad::data::Note;
use time::macros::datetime;

pub fn draft(title: &str, content: &str, tags: &[&str]) -> Note {
    Note::new(title, content, tags.iter().copied())
}

pub fn stored(id: &str, title: &str, tags: &[&str]) -> Note {
    Note {
        id: id.into(),
        title: title.into(),
        content: format!("{title} content"),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        created_at: datetime!(2024-04-01 10:00 UTC),
        last_modified: datetime!(2024-04-01 10:00 UTC),
    }
}
