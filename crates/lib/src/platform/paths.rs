use std::path::{Path, PathBuf};

use crate::consts::{APP_NAME, LOCK_FILENAME, REPOS_DIR, VOLTPATH_ENV};

/// Maps logical lock file names to filesystem locations.
pub trait PathResolver {
  /// Location of `lock.json`.
  fn lockfile_location(&self) -> PathBuf;

  /// Absolute location of a resource given its slash-separated `path`.
  fn resolve_resource_path(&self, path: &str) -> PathBuf;
}

/// Returns the user's home directory
#[cfg(windows)]
pub fn home_dir() -> PathBuf {
  let userprofile = std::env::var("USERPROFILE").expect("USERPROFILE not set");
  PathBuf::from(userprofile)
}

/// Returns the user's home directory
#[cfg(not(windows))]
pub fn home_dir() -> PathBuf {
  let home = std::env::var("HOME").expect("HOME not set");
  PathBuf::from(home)
}

/// Returns the data root: `$VOLTPATH`, or `~/volt` when unset or empty.
pub fn volt_dir() -> PathBuf {
  match std::env::var(VOLTPATH_ENV) {
    Ok(path) if !path.is_empty() => PathBuf::from(path),
    _ => home_dir().join(APP_NAME),
  }
}

/// Path layout rooted at a data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoltPaths {
  root: PathBuf,
}

impl VoltPaths {
  /// Layout rooted at [`volt_dir`].
  pub fn current() -> Self {
    Self::at(volt_dir())
  }

  /// Layout rooted at an explicit directory.
  pub fn at(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Directory holding installed resources.
  pub fn repos_dir(&self) -> PathBuf {
    self.root.join(REPOS_DIR)
  }
}

impl PathResolver for VoltPaths {
  fn lockfile_location(&self) -> PathBuf {
    self.root.join(LOCK_FILENAME)
  }

  fn resolve_resource_path(&self, path: &str) -> PathBuf {
    path
      .split('/')
      .filter(|segment| !segment.is_empty())
      .fold(self.repos_dir(), |acc, segment| acc.join(segment))
  }
}
