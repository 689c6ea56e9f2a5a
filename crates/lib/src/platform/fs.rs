use std::fs;
use std::io;
use std::path::Path;

/// Blocking filesystem operations used by the lock store.
pub trait Filesystem {
  fn exists(&self, path: &Path) -> bool;

  fn is_dir(&self, path: &Path) -> bool;

  fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

  /// Write `contents`, replacing any existing file.
  fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

  /// Create `path` and all missing parents.
  fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// [`Filesystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
  fn exists(&self, path: &Path) -> bool {
    path.exists()
  }

  fn is_dir(&self, path: &Path) -> bool {
    path.is_dir()
  }

  fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
    fs::read(path)
  }

  fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
    fs::write(path, contents)
  }

  fn create_dir_all(&self, path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
  }
}
