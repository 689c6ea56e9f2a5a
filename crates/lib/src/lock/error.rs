use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading or saving the lock file.
#[derive(Debug, Error)]
pub enum LockError {
  /// Failed to read the lock file.
  #[error("failed to read lock file: {0}")]
  Read(#[source] io::Error),

  /// Failed to write the lock file.
  #[error("failed to write lock file: {0}")]
  Write(#[source] io::Error),

  /// Failed to create the lock file's parent directory.
  #[error("failed to create lock file directory: {0}")]
  CreateDir(#[source] io::Error),

  /// Failed to parse the lock file JSON.
  #[error("failed to parse lock file: {0}")]
  Parse(#[source] serde_json::Error),

  /// Failed to serialize the lock file.
  #[error("failed to serialize lock file: {0}")]
  Serialize(#[source] serde_json::Error),

  /// The lock state violates an invariant.
  #[error(transparent)]
  Invalid(#[from] ValidationError),
}

/// A violated lock file invariant.
///
/// Only the first violation found is ever reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  /// A required field is absent, zero or empty. Holds the field path,
  /// e.g. `repos[2].version`.
  #[error("missing: {0}")]
  Missing(String),

  #[error("repos[{index}].type is invalid type: {value}")]
  InvalidType { index: usize, value: String },

  #[error("duplicate repos '{0}'")]
  DuplicateRepos(String),

  #[error("duplicate profile '{0}'")]
  DuplicateProfile(String),

  #[error("duplicate '{path}' (repos_path) in profile '{profile}'")]
  DuplicateReposPath { path: String, profile: String },

  #[error("'{0}' (active_profile) doesn't exist in profiles")]
  ActiveProfileNotFound(String),

  #[error("'{path}' (profiles[{profile_index}].repos_path[{path_index}]) doesn't exist in repos")]
  DanglingReposPath {
    path: String,
    profile_index: usize,
    path_index: usize,
  },

  #[error("'{}' (repos[{index}].path) doesn't exist on filesystem", .full_path.display())]
  PathNotFound { full_path: PathBuf, index: usize },

  #[error("'{}' (repos[{index}].path) is not a directory", .full_path.display())]
  NotADirectory { full_path: PathBuf, index: usize },

  #[error("'{max}' (repos[{index}].trx_id) is greater than '{trx_id}' (trx_id)")]
  TrxIdOrder { max: u64, index: usize, trx_id: u64 },
}

/// Coarse category of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
  MissingField,
  InvalidEnumValue,
  Duplicate,
  DanglingReference,
  FilesystemMismatch,
  OrderingViolation,
}

impl ValidationError {
  pub fn kind(&self) -> ValidationErrorKind {
    match self {
      ValidationError::Missing(_) => ValidationErrorKind::MissingField,
      ValidationError::InvalidType { .. } => ValidationErrorKind::InvalidEnumValue,
      ValidationError::DuplicateRepos(_)
      | ValidationError::DuplicateProfile(_)
      | ValidationError::DuplicateReposPath { .. } => ValidationErrorKind::Duplicate,
      ValidationError::ActiveProfileNotFound(_) | ValidationError::DanglingReposPath { .. } => {
        ValidationErrorKind::DanglingReference
      }
      ValidationError::PathNotFound { .. } | ValidationError::NotADirectory { .. } => {
        ValidationErrorKind::FilesystemMismatch
      }
      ValidationError::TrxIdOrder { .. } => ValidationErrorKind::OrderingViolation,
    }
  }
}

/// A lookup against the lock state found nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
  #[error("profile '{0}' does not exist")]
  ProfileNotFound(String),

  #[error("repos '{0}' does not exist")]
  ReposNotFound(String),

  #[error("no matching profiles[]/repos_path[]: {0}")]
  NoMatchingReposPath(String),

  #[error("no matching repos[]/path: {0}")]
  NoMatchingRepos(String),
}
