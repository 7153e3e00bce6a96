pub const DEFAULT_MAX_NOTE_SIZE: u64 = 128 * 1024;

// relative to the data directory
pub const NOTES_DIRECTORY_PATH: &str = "notes";

pub const DEFAULT_NOTE_TITLE: &str = "Untitled";

// the well-known local cache key holding the whole note collection
pub const CACHE_NOTES_KEY: &str = "notes";

pub const NOTE_FILE_EXTENSION: &str = ".json";
pub const TMP_FILENAME_INFIX: &str = ".tmp.";
pub const MAX_NOTE_ID_LEN: usize = 64;

// shadowed by `/api/notes/search`
pub const RESERVED_NOTE_IDS: &[&str] = &["search"];
