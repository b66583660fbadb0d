use std::path::Path;
use async_trait::async_trait;
use tokio::{fs, io};
use uuid::Uuid;

#[async_trait]
pub(crate) trait NotesFileIo: Send + Sync {
    async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;

    async fn write_file(&self, path: &Path, data: Vec<u8>) -> io::Result<()>;

    async fn rename_file(&self, from: &Path, to: &Path) -> io::Result<()>;

    async fn remove_file(&self, path: &Path) -> io::Result<()>;

    fn generate_uuid(&self) -> Uuid;
}

#[derive(Debug)]
pub struct ProductionNotesFileIo;

impl ProductionNotesFileIo {
    pub fn new() -> Self {
        ProductionNotesFileIo
    }
}

#[async_trait]
impl NotesFileIo for ProductionNotesFileIo {
    async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path).await
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

    fn generate_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}
