//! # Image Store
//!
//! Writes carrier images into the display directory. Files are created with
//! create-new semantics: a name that already exists is an error, never an
//! overwrite.

use log::{info, warn};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;

use super::naming::{image_file_name, IdGenerator, UuidGenerator};

#[derive(Error, Debug)]
pub enum StorageError {
    /// The generated name is already taken
    #[error("Output file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// An image written by [`ImageStore::save_png`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    /// File name inside the display directory (e.g. `image-<uuid>.png`)
    pub file_name: String,
    /// Full path of the written file
    pub path: PathBuf,
}

/// Directory-backed store for produced carrier images.
#[derive(Clone)]
pub struct ImageStore {
    display_dir: PathBuf,
    ids: Arc<dyn IdGenerator>,
}

impl ImageStore {
    /// Create a store that names files with random UUIDs.
    pub fn new(display_dir: impl Into<PathBuf>) -> Self {
        Self::with_generator(display_dir, UuidGenerator)
    }

    /// Create a store with a custom identifier source.
    pub fn with_generator(display_dir: impl Into<PathBuf>, ids: impl IdGenerator + 'static) -> Self {
        Self {
            display_dir: display_dir.into(),
            ids: Arc::new(ids),
        }
    }

    pub fn display_dir(&self) -> &Path {
        &self.display_dir
    }

    /// Create the display directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.display_dir).await?;
        Ok(())
    }

    /// Write PNG bytes under a freshly generated name.
    ///
    /// # Errors
    /// - [`StorageError::AlreadyExists`] if the generator produced a name in use
    /// - [`StorageError::Io`] for any other filesystem failure; a partly written
    ///   file is removed first
    pub async fn save_png(&self, png_bytes: &[u8]) -> Result<StoredImage, StorageError> {
        let file_name = image_file_name(&self.ids.next_id());
        let path = self.display_dir.join(&file_name);

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => StorageError::AlreadyExists(path.clone()),
                _ => StorageError::Io(e),
            })?;

        if let Err(e) = write_all_flushed(&mut file, png_bytes).await {
            drop(file);
            return Err(discard_partial(&path, e).await);
        }

        info!("💾 Stored {} ({} bytes)", path.display(), png_bytes.len());

        Ok(StoredImage { file_name, path })
    }
}

async fn write_all_flushed(file: &mut File, bytes: &[u8]) -> std::io::Result<()> {
    file.write_all(bytes).await?;
    file.flush().await
}

/// Remove a file whose write failed half way, so a truncated image is never served.
async fn discard_partial(path: &Path, cause: std::io::Error) -> StorageError {
    if let Err(e) = fs::remove_file(path).await {
        warn!("Failed to remove partial file {}: {}", path.display(), e);
    }
    StorageError::Io(cause)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct FixedId;

    impl IdGenerator for FixedId {
        fn next_id(&self) -> String {
            "fixed".to_string()
        }
    }

    #[tokio::test]
    async fn test_save_png_writes_file() {
        let dir = TempDir::new().unwrap();
        let store = ImageStore::new(dir.path());

        let stored = store.save_png(b"png bytes").await.unwrap();

        assert!(stored.file_name.starts_with("image-"));
        assert!(stored.file_name.ends_with(".png"));
        assert_eq!(stored.path, dir.path().join(&stored.file_name));
        assert_eq!(std::fs::read(&stored.path).unwrap(), b"png bytes");
    }

    #[tokio::test]
    async fn test_saves_get_distinct_names() {
        let dir = TempDir::new().unwrap();
        let store = ImageStore::new(dir.path());

        let first = store.save_png(b"one").await.unwrap();
        let second = store.save_png(b"two").await.unwrap();

        assert_ne!(first.path, second.path);
        assert_eq!(std::fs::read(&first.path).unwrap(), b"one");
    }

    #[tokio::test]
    async fn test_never_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = ImageStore::with_generator(dir.path(), FixedId);

        let first = store.save_png(b"original").await.unwrap();
        let second = store.save_png(b"intruder").await;

        assert!(matches!(second, Err(StorageError::AlreadyExists(_))));
        assert_eq!(std::fs::read(&first.path).unwrap(), b"original");
    }

    #[tokio::test]
    async fn test_discard_partial_removes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("image-partial.png");
        std::fs::write(&path, b"trunc").unwrap();

        let cause = std::io::Error::new(ErrorKind::WriteZero, "disk full");
        let err = discard_partial(&path, cause).await;

        assert!(matches!(err, StorageError::Io(ref e) if e.kind() == ErrorKind::WriteZero));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_discard_partial_tolerates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("never-written.png");

        let cause = std::io::Error::new(ErrorKind::Other, "gone");
        let err = discard_partial(&path, cause).await;

        assert!(matches!(err, StorageError::Io(_)));
    }

    #[tokio::test]
    async fn test_ensure_dir_creates_nested_directory() {
        let dir = TempDir::new().unwrap();
        let store = ImageStore::new(dir.path().join("public").join("display"));

        store.ensure_dir().await.unwrap();
        store.ensure_dir().await.unwrap();

        assert!(store.display_dir().is_dir());
    }
}
