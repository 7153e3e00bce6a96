use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::bin_constants::DEFAULT_DATA_DIR;
use crate::lib_constants::DEFAULT_MAX_NOTE_SIZE;

/// Server settings living next to rocket's own keys in the same figment.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AppConfig {
    pub data_directory: PathBuf,
    pub max_note_size: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_directory: PathBuf::from(DEFAULT_DATA_DIR),
            max_note_size: DEFAULT_MAX_NOTE_SIZE,
        }
    }
}
