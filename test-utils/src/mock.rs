use assert_fs::prelude::*;
use assert_fs::TempDir;

pub const SERVER_CONFIG_FILE: &str = "etc/notepad/notepadd.toml";

/// A root with a server config file pointing at an existing data directory.
pub fn setup_server_config() -> TempDir {
    let root = TempDir::new().unwrap();
    let data_dir = root.child("var/notepad");
    data_dir.create_dir_all().unwrap();
    root.child(SERVER_CONFIG_FILE)
        .write_str(
            &format!(
                "data_directory = \"{}\"\nmax_note_size = {}\n",
                data_dir.to_str().unwrap(),
                64 * 1024,
            )
        )
        .unwrap();
    root
}
