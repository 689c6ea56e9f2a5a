//! Reading and writing `lock.json`.
//!
//! Every state that crosses this boundary is validated: a loaded file must
//! pass before it is handed out, and a state that fails is never written.

use tracing::{debug, warn};

use super::error::LockError;
use super::types::LockState;
use super::validate::validate;
use crate::platform::{Filesystem, OsFilesystem, PathResolver, VoltPaths};

/// Loads and saves the lock file through a path resolver and a filesystem.
#[derive(Debug, Clone)]
pub struct LockStore<P = VoltPaths, F = OsFilesystem> {
  paths: P,
  fs: F,
}

impl LockStore {
  /// Store at the default location, on the real filesystem.
  pub fn current() -> Self {
    Self::new(VoltPaths::current(), OsFilesystem)
  }
}

impl<P: PathResolver, F: Filesystem> LockStore<P, F> {
  pub fn new(paths: P, fs: F) -> Self {
    Self { paths, fs }
  }

  pub fn paths(&self) -> &P {
    &self.paths
  }

  pub fn fs(&self) -> &F {
    &self.fs
  }

  /// Validate `lock` against this store's paths and filesystem.
  pub fn validate(&self, lock: &LockState) -> Result<(), LockError> {
    validate(lock, &self.paths, &self.fs).map_err(LockError::Invalid)
  }

  /// Load the lock file.
  ///
  /// Returns [`LockState::initial`] without validation if the file doesn't
  /// exist. Otherwise the parsed state must pass validation.
  pub fn load(&self) -> Result<LockState, LockError> {
    let path = self.paths.lockfile_location();

    if !self.fs.exists(&path) {
      debug!(path = ?path, "lock file not found, using initial state");
      return Ok(LockState::initial());
    }

    debug!(path = ?path, "loading lock file");
    let bytes = self.fs.read(&path).map_err(LockError::Read)?;
    let lock: LockState = serde_json::from_slice(&bytes).map_err(LockError::Parse)?;

    if let Err(e) = self.validate(&lock) {
      warn!(path = ?path, error = %e, "lock file failed validation");
      return Err(e);
    }

    Ok(lock)
  }

  /// Save the lock file.
  ///
  /// Validates first and writes nothing if that fails. The file is written
  /// with pretty-printed JSON, replacing any previous contents.
  pub fn save(&self, lock: &LockState) -> Result<(), LockError> {
    if let Err(e) = self.validate(lock) {
      warn!(error = %e, "refusing to save invalid lock state");
      return Err(e);
    }

    let path = self.paths.lockfile_location();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty())
      && !self.fs.exists(parent)
    {
      debug!(dir = ?parent, "creating lock file directory");
      self.fs.create_dir_all(parent).map_err(LockError::CreateDir)?;
    }

    let content = serde_json::to_vec_pretty(lock).map_err(LockError::Serialize)?;
    self.fs.write(&path, &content).map_err(LockError::Write)?;
    debug!(path = ?path, trx_id = lock.trx_id, "saved lock file");

    Ok(())
  }
}
