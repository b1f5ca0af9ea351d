//! File-system access used by the synchronization pass.

use async_trait::async_trait;
use std::io;
use std::path::Path;
use tokio::fs;

/// Whole-file text storage.
///
/// No partial reads or writes and no locking: callers replace files in one write.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn exists(&self, path: &Path) -> io::Result<bool>;

    async fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write `content`, replacing the file if it exists
    async fn write(&self, path: &Path, content: &str) -> io::Result<()>;

    async fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// [`Storage`] backed by `tokio::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioStorage;

#[async_trait]
impl Storage for TokioStorage {
    async fn exists(&self, path: &Path) -> io::Result<bool> {
        fs::try_exists(path).await
    }

    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path).await
    }

    async fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content).await
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path).await
    }
}
