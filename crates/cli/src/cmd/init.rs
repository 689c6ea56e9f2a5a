//! Implementation of the `vlock init` command.
//!
//! Persists the initial lock state so later commands have a file to work on.

use anyhow::{Context, Result};

use vlock_lib::lock::{LockState, LockStore};
use vlock_lib::platform::{Filesystem, PathResolver};

use crate::output::{print_info, print_success};

pub fn cmd_init(store: &LockStore) -> Result<()> {
  let lock_path = store.paths().lockfile_location();

  if store.fs().exists(&lock_path) {
    print_info(&format!("Lock file already exists: {}", lock_path.display()));
    return Ok(());
  }

  store
    .save(&LockState::initial())
    .with_context(|| format!("Failed to write lock file: {}", lock_path.display()))?;

  print_success(&format!("Created {}", lock_path.display()));
  Ok(())
}
