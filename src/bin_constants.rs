pub const DEFAULT_DATA_DIR: &str = "/var/notepad";
pub const DEFAULT_CONFIG_FILE: &str = "/etc/notepad/notepadd.toml";
pub const APP_CONFIG_ENV_PREFIX: &str = "NOTEPADD_";

pub const DEFAULT_CLIENT_CONFIG_FILE: &str = "notepad.toml";
pub const CLIENT_CONFIG_ENV_PREFIX: &str = "NOTEPAD_";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/";
pub const DEFAULT_CACHE_DIR: &str = ".notepad";
