//! Test utilities for vlock-lib.
//!
//! Provides an in-memory [`Filesystem`] that records what the code under
//! test touched, plus a small known-good lock state.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::lock::{LockState, Profile, Resource};
use crate::platform::{Filesystem, PathResolver};

#[derive(Debug, Clone)]
enum Entry {
  Dir,
  File(Vec<u8>),
  Unreadable,
}

/// In-memory filesystem that counts probes and writes.
#[derive(Debug, Default)]
pub struct MemoryFs {
  entries: RefCell<BTreeMap<PathBuf, Entry>>,
  probes: Cell<usize>,
  writes: Cell<usize>,
  fail_writes: Cell<bool>,
}

impl MemoryFs {
  pub fn new() -> Self {
    Self::default()
  }

  /// Filesystem where each resource path already exists as a directory.
  pub fn with_repos<'a, P, I>(paths: &P, repos: I) -> Self
  where
    P: PathResolver,
    I: IntoIterator<Item = &'a str>,
  {
    let fs = Self::new();
    for path in repos {
      fs.add_dir(paths.resolve_resource_path(path));
    }
    fs
  }

  /// Add a directory and all of its ancestors.
  pub fn add_dir(&self, path: impl AsRef<Path>) {
    let mut entries = self.entries.borrow_mut();
    for ancestor in path.as_ref().ancestors() {
      if ancestor.as_os_str().is_empty() {
        continue;
      }
      entries.insert(ancestor.to_path_buf(), Entry::Dir);
    }
  }

  pub fn add_file(&self, path: impl AsRef<Path>, contents: &[u8]) {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
      self.add_dir(parent);
    }
    self.entries.borrow_mut().insert(path.to_path_buf(), Entry::File(contents.to_vec()));
  }

  /// Add a file that exists but fails to read.
  pub fn add_unreadable(&self, path: impl AsRef<Path>) {
    self.entries.borrow_mut().insert(path.as_ref().to_path_buf(), Entry::Unreadable);
  }

  /// Make every subsequent write fail.
  pub fn fail_writes(&self) {
    self.fail_writes.set(true);
  }

  /// Number of `exists`/`is_dir` calls so far.
  pub fn probes(&self) -> usize {
    self.probes.get()
  }

  /// Number of `write`/`create_dir_all` calls so far.
  pub fn writes(&self) -> usize {
    self.writes.get()
  }

  pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
    match self.entries.borrow().get(path.as_ref()) {
      Some(Entry::File(bytes)) => Some(bytes.clone()),
      _ => None,
    }
  }
}

impl Filesystem for MemoryFs {
  fn exists(&self, path: &Path) -> bool {
    self.probes.set(self.probes.get() + 1);
    self.entries.borrow().contains_key(path)
  }

  fn is_dir(&self, path: &Path) -> bool {
    self.probes.set(self.probes.get() + 1);
    matches!(self.entries.borrow().get(path), Some(Entry::Dir))
  }

  fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
    match self.entries.borrow().get(path) {
      Some(Entry::File(bytes)) => Ok(bytes.clone()),
      Some(Entry::Dir) => Err(io::Error::other("is a directory")),
      Some(Entry::Unreadable) => Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied")),
      None => Err(io::Error::from(io::ErrorKind::NotFound)),
    }
  }

  fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
    if self.fail_writes.get() {
      return Err(io::Error::other("write failed"));
    }
    self.writes.set(self.writes.get() + 1);
    self.entries.borrow_mut().insert(path.to_path_buf(), Entry::File(contents.to_vec()));
    Ok(())
  }

  fn create_dir_all(&self, path: &Path) -> io::Result<()> {
    self.writes.set(self.writes.get() + 1);
    self.add_dir(path);
    Ok(())
  }
}

/// One versioned resource in the `default` profile, all at `trx_id` 1.
pub fn valid_lock() -> LockState {
  LockState {
    repos: Some(vec![Resource::versioned("github.com/tyru/caw.vim", "v1", 1)]),
    profiles: Some(vec![Profile::new("default").with_repos_path(["github.com/tyru/caw.vim"])]),
    ..LockState::initial()
  }
}
