//! Implementation of the `vlock check` command.
//!
//! Loads lock.json through the store, which validates it, and reports the
//! first violation found.

use anyhow::Result;

use vlock_lib::lock::LockStore;
use vlock_lib::platform::{Filesystem, PathResolver};

use crate::output::{print_error, print_info, print_success};

pub fn cmd_check(store: &LockStore) -> Result<()> {
  let lock_path = store.paths().lockfile_location();

  if !store.fs().exists(&lock_path) {
    print_info(&format!("No lock file at {}, nothing to check", lock_path.display()));
    return Ok(());
  }

  match store.load() {
    Ok(lock) => {
      print_success(&format!(
        "{} is consistent ({} repos, {} profiles)",
        lock_path.display(),
        lock.repos().len(),
        lock.profiles().len()
      ));
      Ok(())
    }
    Err(e) => {
      print_error(&format!("{}: {}", lock_path.display(), e));
      std::process::exit(1);
    }
  }
}
