//! Document reading and writing
//!
//! The session talks to the file system through the `FileStore` trait so the
//! confirmation logic can be exercised against failing stores in tests.

use std::fs;
use std::io;
use std::path::Path;

/// Read/write access to UTF-8 text documents by path.
pub trait FileStore {
    /// Read the whole file as UTF-8 text.
    ///
    /// Invalid UTF-8 is reported as `io::ErrorKind::InvalidData`.
    fn read(&self, path: &Path) -> io::Result<String>;

    /// Replace the file's contents with `content`, creating it if needed.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// `FileStore` backed by the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskStore;

impl FileStore for DiskStore {
    fn read(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }
}

/// Apply `default_ext` when `path` has no extension.
///
/// Native save dialogs don't all append the selected filter's extension,
/// so "notes" becomes "notes.txt" while "notes.md" is left alone.
pub fn with_default_extension(path: &Path, default_ext: &str) -> std::path::PathBuf {
    match path.extension() {
        Some(_) => path.to_path_buf(),
        None => path.with_extension(default_ext),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_disk_store_write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.txt");

        DiskStore.write(&path, "línea uno\nline two").unwrap();
        assert_eq!(DiskStore.read(&path).unwrap(), "línea uno\nline two");
    }

    #[test]
    fn test_disk_store_write_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.txt");

        DiskStore.write(&path, "a much longer first version").unwrap();
        DiskStore.write(&path, "short").unwrap();
        assert_eq!(DiskStore.read(&path).unwrap(), "short");
    }

    #[test]
    fn test_disk_store_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = DiskStore.read(&dir.path().join("absent.txt")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_disk_store_read_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.bin");
        fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let err = DiskStore.read(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_disk_store_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no").join("such").join("dir.txt");
        assert!(DiskStore.write(&path, "x").is_err());
    }

    #[test]
    fn test_with_default_extension() {
        assert_eq!(
            with_default_extension(Path::new("/tmp/notes"), "txt"),
            PathBuf::from("/tmp/notes.txt")
        );
        assert_eq!(
            with_default_extension(Path::new("/tmp/notes.md"), "txt"),
            PathBuf::from("/tmp/notes.md")
        );
        assert_eq!(
            with_default_extension(Path::new("/tmp/archive.tar.gz"), "txt"),
            PathBuf::from("/tmp/archive.tar.gz")
        );
    }
}
