use std::io::ErrorKind;
use std::path::PathBuf;
use async_trait::async_trait;
use log::error;
use tokio::{fs, io};
use crate::lib_constants::TMP_FILENAME_INFIX;
use crate::rng::make_uuid;

/// Byte values stored under string keys.
#[async_trait]
pub(super) trait KeyValueIo: Send + Sync {
    async fn get(&self, key: &str) -> io::Result<Option<Vec<u8>>>;

    async fn set(&self, key: &str, data: Vec<u8>) -> io::Result<()>;
}

/// Keeps every key in its own file inside the cache directory.
pub struct ProductionKeyValueIo {
    dir: PathBuf,
}

impl ProductionKeyValueIo {
    pub async fn new(dir: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&dir).await?;
        Ok(ProductionKeyValueIo { dir })
    }

    fn get_key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl KeyValueIo for ProductionKeyValueIo {
    async fn get(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        match fs::read(self.get_key_path(key)).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn set(&self, key: &str, data: Vec<u8>) -> io::Result<()> {
        let path = self.get_key_path(key);
        let tmp_path = self.dir.join(
            format!(
                "{key}.json{TMP_FILENAME_INFIX}{}",
                make_uuid(&mut rand::rng()).hyphenated(),
            )
        );
        fs::write(&tmp_path, data).await?;
        if let Err(e) = fs::rename(&tmp_path, &path).await {
            if let Err(e) = fs::remove_file(&tmp_path).await {
                error!(
                    "failed to remove tmp cache file \"{}\": {e}",
                    tmp_path.display(),
                );
            }
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
pub use memory::MemoryKeyValueIo;
