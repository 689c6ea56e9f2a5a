//! Lock file validation.
//!
//! Validation runs in two phases and stops at the first violation:
//!
//! 1. [`validate_missing`] checks that required fields are present, in
//!    document order (root fields, then `repos[]`, then `profiles[]`).
//! 2. Cross-record checks run in a fixed order: duplicates, references,
//!    filesystem presence, then transaction ordering.
//!
//! The filesystem is only consulted once every pure check has passed, so a
//! malformed document never triggers I/O.

use std::collections::HashSet;

use tracing::trace;

use super::error::ValidationError;
use super::types::{LockState, ResourceKind};
use crate::platform::{Filesystem, PathResolver};

/// Validate the whole lock state.
pub fn validate<P, F>(lock: &LockState, paths: &P, fs: &F) -> Result<(), ValidationError>
where
  P: PathResolver + ?Sized,
  F: Filesystem + ?Sized,
{
  validate_missing(lock)?;
  validate_unique(lock)?;
  validate_references(lock)?;
  validate_on_filesystem(lock, paths, fs)?;
  validate_trx_id(lock)?;
  trace!(repos = lock.repos().len(), profiles = lock.profiles().len(), "lock state is valid");
  Ok(())
}

/// Check that every required field is present.
pub fn validate_missing(lock: &LockState) -> Result<(), ValidationError> {
  if lock.version == 0 {
    return Err(missing("version"));
  }
  if lock.trx_id == 0 {
    return Err(missing("trx_id"));
  }

  let Some(repos_list) = &lock.repos else {
    return Err(missing("repos"));
  };
  for (i, repos) in repos_list.iter().enumerate() {
    match &repos.kind {
      kind if kind.is_missing() => return Err(missing(format!("repos[{i}].type"))),
      ResourceKind::Versioned | ResourceKind::Static => {
        if repos.kind == ResourceKind::Versioned && repos.version.is_empty() {
          return Err(missing(format!("repos[{i}].version")));
        }
        // Shared by both kinds.
        if repos.trx_id == 0 {
          return Err(missing(format!("repos[{i}].trx_id")));
        }
        if repos.path.is_empty() {
          return Err(missing(format!("repos[{i}].path")));
        }
      }
      ResourceKind::Unknown(value) => {
        return Err(ValidationError::InvalidType {
          index: i,
          value: value.clone(),
        });
      }
    }
  }

  let Some(profiles) = &lock.profiles else {
    return Err(missing("profiles"));
  };
  for (i, profile) in profiles.iter().enumerate() {
    if profile.name.is_empty() {
      return Err(missing(format!("profile[{i}].name")));
    }
    let Some(repos_path) = &profile.repos_path else {
      return Err(missing(format!("profile[{i}].repos_path")));
    };
    if let Some(j) = repos_path.iter().position(String::is_empty) {
      return Err(missing(format!("profile[{i}].repos_path[{j}]")));
    }
  }

  Ok(())
}

fn missing(field: impl Into<String>) -> ValidationError {
  ValidationError::Missing(field.into())
}

/// Duplicate `repos[]/path`, `profiles[]/name`, then `repos_path[]` per profile.
fn validate_unique(lock: &LockState) -> Result<(), ValidationError> {
  let mut seen = HashSet::with_capacity(lock.repos().len());
  for repos in lock.repos() {
    if !seen.insert(repos.path.as_str()) {
      return Err(ValidationError::DuplicateRepos(repos.path.clone()));
    }
  }

  let mut seen = HashSet::with_capacity(lock.profiles().len());
  for profile in lock.profiles() {
    if !seen.insert(profile.name.as_str()) {
      return Err(ValidationError::DuplicateProfile(profile.name.clone()));
    }
  }

  for profile in lock.profiles() {
    let mut seen = HashSet::with_capacity(profile.members().len());
    for path in profile.members() {
      if !seen.insert(path.as_str()) {
        return Err(ValidationError::DuplicateReposPath {
          path: path.clone(),
          profile: profile.name.clone(),
        });
      }
    }
  }

  Ok(())
}

/// `active_profile` and every `repos_path[]` entry must point at something.
fn validate_references(lock: &LockState) -> Result<(), ValidationError> {
  if !lock.profiles().iter().any(|p| p.name == lock.active_profile) {
    return Err(ValidationError::ActiveProfileNotFound(lock.active_profile.clone()));
  }

  for (i, profile) in lock.profiles().iter().enumerate() {
    for (j, path) in profile.members().iter().enumerate() {
      if !lock.repos().iter().any(|r| &r.path == path) {
        return Err(ValidationError::DanglingReposPath {
          path: path.clone(),
          profile_index: i,
          path_index: j,
        });
      }
    }
  }

  Ok(())
}

/// Every resource must be an existing directory.
fn validate_on_filesystem<P, F>(lock: &LockState, paths: &P, fs: &F) -> Result<(), ValidationError>
where
  P: PathResolver + ?Sized,
  F: Filesystem + ?Sized,
{
  for (i, repos) in lock.repos().iter().enumerate() {
    let full_path = paths.resolve_resource_path(&repos.path);
    if !fs.exists(&full_path) {
      return Err(ValidationError::PathNotFound { full_path, index: i });
    }
    if !fs.is_dir(&full_path) {
      return Err(ValidationError::NotADirectory { full_path, index: i });
    }
  }
  Ok(())
}

/// The root `trx_id` bounds every resource's `trx_id`.
///
/// The first resource holding the maximum is the one reported.
fn validate_trx_id(lock: &LockState) -> Result<(), ValidationError> {
  let mut max = 0;
  let mut index = None;
  for (i, repos) in lock.repos().iter().enumerate() {
    if max < repos.trx_id {
      max = repos.trx_id;
      index = Some(i);
    }
  }

  match index {
    Some(index) if max > lock.trx_id => Err(ValidationError::TrxIdOrder {
      max,
      index,
      trx_id: lock.trx_id,
    }),
    _ => Ok(()),
  }
}
