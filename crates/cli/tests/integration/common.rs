//! Shared test helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Isolated test environment.
///
/// Each test gets its own temporary data root, passed to the binary through
/// `VOLTPATH`.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  pub fn empty() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  /// Data root (may not exist yet).
  pub fn root_path(&self) -> PathBuf {
    self.temp.path().join("volt")
  }

  pub fn lock_path(&self) -> PathBuf {
    self.root_path().join("lock.json")
  }

  /// Write lock.json relative to the data root.
  pub fn write_lock(&self, content: &str) {
    std::fs::create_dir_all(self.root_path()).unwrap();
    std::fs::write(self.lock_path(), content).unwrap();
  }

  /// Create the directory for a resource path.
  pub fn add_repos(&self, path: &str) {
    let full = path.split('/').fold(self.root_path().join("repos"), |acc, s| acc.join(s));
    std::fs::create_dir_all(full).unwrap();
  }

  /// Get a pre-configured Command for the vlock binary.
  ///
  /// Sets `VOLTPATH` to the isolated data root and clears `RUST_LOG`.
  pub fn vlock_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("vlock");
    cmd.env("VOLTPATH", self.root_path());
    cmd.env_remove("RUST_LOG");
    cmd
  }
}

/// A consistent lock file with one git and one static resource.
pub const VALID_LOCK: &str = r#"{
  "version": 1,
  "trx_id": 2,
  "active_profile": "default",
  "load_vimrc": true,
  "load_gvimrc": true,
  "repos": [
    {
      "type": "git",
      "trx_id": 2,
      "path": "github.com/tyru/caw.vim",
      "version": "0c2ca8cc"
    },
    {
      "type": "static",
      "trx_id": 1,
      "path": "localhost/local/mine",
      "version": ""
    }
  ],
  "profiles": [
    {
      "name": "default",
      "repos_path": ["github.com/tyru/caw.vim"],
      "load_vimrc": true,
      "load_gvimrc": true
    },
    {
      "name": "minimal",
      "repos_path": ["localhost/local/mine"],
      "load_vimrc": false,
      "load_gvimrc": false
    }
  ]
}"#;

impl TestEnv {
  /// Environment holding [`VALID_LOCK`] and its resource directories.
  pub fn with_valid_lock() -> Self {
    let env = Self::empty();
    env.add_repos("github.com/tyru/caw.vim");
    env.add_repos("localhost/local/mine");
    env.write_lock(VALID_LOCK);
    env
  }
}
