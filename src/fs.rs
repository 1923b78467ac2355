//! Filesystem collaborator for the tree builder.
//!
//! The engine never touches the disk directly; everything goes through the
//! [`FileSystem`] trait so tests can substitute an in-memory implementation
//! and traversal stays testable without fixtures on disk.

use std::future::Future;
use std::io;
use std::path::Path;
use std::time::SystemTime;

/// Kind of a directory entry as reported by the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A single entry returned by [`FileSystem::list_directory`].
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self { name: name.into(), kind }
    }
}

/// Metadata returned by [`FileSystem::stat`].
#[derive(Debug, Clone, Copy)]
pub struct FileInfo {
    pub size: u64,
    pub modified: Option<SystemTime>,
}

/// Asynchronous, fallible filesystem primitives.
///
/// Futures are `Send` so sibling directories can be walked concurrently from
/// spawned tasks.
pub trait FileSystem: Send + Sync + 'static {
    /// List the entries of a directory (name + kind only).
    fn list_directory(&self, path: &Path) -> impl Future<Output = io::Result<Vec<DirEntry>>> + Send;

    /// Fetch size and modification time for a single path.
    fn stat(&self, path: &Path) -> impl Future<Output = io::Result<FileInfo>> + Send;

    /// Read a file's contents.
    fn read_file(&self, path: &Path) -> impl Future<Output = io::Result<Vec<u8>>> + Send;
}

/// [`FileSystem`] backed by `tokio::fs`.
#[derive(Debug, Default, Clone)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    async fn list_directory(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut reader = tokio::fs::read_dir(path).await?;
        let mut entries = Vec::new();

        while let Some(entry) = reader.next_entry().await? {
            let file_type = entry.file_type().await?;
            // Symlinks are listed as files; the walker never follows them.
            let kind = if file_type.is_dir() { EntryKind::Directory } else { EntryKind::File };
            let name = entry.file_name().to_string_lossy().into_owned();
            entries.push(DirEntry::new(name, kind));
        }

        Ok(entries)
    }

    async fn stat(&self, path: &Path) -> io::Result<FileInfo> {
        let metadata = tokio::fs::metadata(path).await?;
        Ok(FileInfo {
            size: metadata.len(),
            modified: metadata.modified().ok(),
        })
    }

    async fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_list_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();
        fs::write(temp_dir.path().join("a.txt"), "hello").unwrap();

        let fs = LocalFileSystem;
        let entries = fs.list_directory(temp_dir.path()).await.unwrap();

        assert_eq!(entries.len(), 2);
        assert!(entries.iter().any(|e| e.name == "sub" && e.kind == EntryKind::Directory));
        assert!(entries.iter().any(|e| e.name == "a.txt" && e.kind == EntryKind::File));
    }

    #[tokio::test]
    async fn test_stat_reports_size() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("data.bin");
        fs::write(&file, [0u8; 128]).unwrap();

        let fs = LocalFileSystem;
        let info = fs.stat(&file).await.unwrap();

        assert_eq!(info.size, 128);
        assert!(info.modified.is_some());
    }

    #[tokio::test]
    async fn test_missing_directory_errors() {
        let fs = LocalFileSystem;
        let result = fs.list_directory(Path::new("/definitely/not/here")).await;
        assert!(result.is_err());
    }
}
