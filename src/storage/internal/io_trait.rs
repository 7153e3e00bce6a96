use std::path::Path;
use async_trait::async_trait;
use tokio::{fs, io};
use tokio::io::AsyncReadExt;
use uuid::Uuid;
use crate::rng::make_uuid;

#[async_trait]
pub(super) trait NoteRepositoryIo: Send + Sync {
    async fn metadata(&self, path: &Path) -> io::Result<Metadata>;

    async fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Reads at most `limit + 1` bytes so that oversized files are detectable
    /// without loading them whole.
    async fn read_file(&self, path: &Path, limit: u64) -> io::Result<FileContents>;

    async fn write_file(&self, path: &Path, data: Vec<u8>) -> io::Result<()>;

    async fn rename_file(&self, from: &Path, to: &Path) -> io::Result<()>;

    async fn remove_file(&self, path: &Path) -> io::Result<()>;

    async fn list_dir(&self, path: &Path) -> io::Result<Vec<String>>;

    fn generate_uuid(&self) -> Uuid;
}

pub(super) struct Metadata {
    pub is_dir: bool,
}

pub(super) struct FileContents {
    pub size: u64,
    pub data: Vec<u8>,
}

pub struct ProductionNoteRepositoryIo;

impl ProductionNoteRepositoryIo {
    pub fn new() -> Self {
        ProductionNoteRepositoryIo
    }
}

#[async_trait]
impl NoteRepositoryIo for ProductionNoteRepositoryIo {
    async fn metadata(&self, path: &Path) -> io::Result<Metadata> {
        let meta = fs::metadata(path).await?;
        Ok(Metadata { is_dir: meta.is_dir() })
    }

    async fn create_dir(&self, path: &Path) -> io::Result<()> {
        match fs::create_dir(path).await {
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
            result => result,
        }
    }

    async fn read_file(&self, path: &Path, limit: u64) -> io::Result<FileContents> {
        let file = fs::File::open(path).await?;
        let size = file.metadata().await?.len();
        let mut data = Vec::with_capacity(size.min(limit) as usize);
        io::BufReader::new(file)
            .take(limit.saturating_add(1))
            .read_to_end(&mut data)
            .await?;
        Ok(FileContents { size, data })
    }

    async fn write_file(&self, path: &Path, data: Vec<u8>) -> io::Result<()> {
        fs::write(path, data).await
    }

    async fn rename_file(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to).await
    }

    async fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path).await
    }

    async fn list_dir(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut read = fs::read_dir(path).await?;
        let mut names = Vec::new();
        while let Some(entry) = read.next_entry().await? {
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        Ok(names)
    }

    fn generate_uuid(&self) -> Uuid {
        make_uuid(&mut rand::rng())
    }
}
