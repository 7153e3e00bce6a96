use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::bin_constants::{DEFAULT_API_BASE_URL, DEFAULT_CACHE_DIR};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub cache_directory: PathBuf,

    // unset means no deadline, a hung server blocks the call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_ms: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            cache_directory: PathBuf::from(DEFAULT_CACHE_DIR),
            request_timeout_ms: None,
        }
    }
}
