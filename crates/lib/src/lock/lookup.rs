//! Lookups and edits over an already loaded lock state.
//!
//! Absence is always an error. None of these helpers validate; callers
//! persist through [`LockStore::save`](super::LockStore::save), which does.

use super::error::LookupError;
use super::types::{LockState, Profile, Resource};

/// Lookups over `profiles[]`.
pub trait ProfileList {
  fn find_by_name(&self, name: &str) -> Result<&Profile, LookupError>;

  fn find_by_name_mut(&mut self, name: &str) -> Result<&mut Profile, LookupError>;

  fn find_index_by_name(&self, name: &str) -> Option<usize>;

  /// Remove the first `repos_path[]` entry equal to `path`, scanning
  /// profiles in order. Later occurrences are left alone.
  fn remove_first_repos_path(&mut self, path: &str) -> Result<(), LookupError>;
}

impl ProfileList for [Profile] {
  fn find_by_name(&self, name: &str) -> Result<&Profile, LookupError> {
    self
      .iter()
      .find(|p| p.name == name)
      .ok_or_else(|| LookupError::ProfileNotFound(name.to_string()))
  }

  fn find_by_name_mut(&mut self, name: &str) -> Result<&mut Profile, LookupError> {
    self
      .iter_mut()
      .find(|p| p.name == name)
      .ok_or_else(|| LookupError::ProfileNotFound(name.to_string()))
  }

  fn find_index_by_name(&self, name: &str) -> Option<usize> {
    self.iter().position(|p| p.name == name)
  }

  fn remove_first_repos_path(&mut self, path: &str) -> Result<(), LookupError> {
    for profile in self.iter_mut() {
      let Some(repos_path) = profile.repos_path.as_mut() else {
        continue;
      };
      if let Some(j) = repos_path.iter().position(|p| p == path) {
        repos_path.remove(j);
        return Ok(());
      }
    }
    Err(LookupError::NoMatchingReposPath(path.to_string()))
  }
}

/// Lookups over `repos[]`.
pub trait ReposList {
  fn find_by_path(&self, path: &str) -> Result<&Resource, LookupError>;

  fn find_by_path_mut(&mut self, path: &str) -> Result<&mut Resource, LookupError>;
}

impl ReposList for [Resource] {
  fn find_by_path(&self, path: &str) -> Result<&Resource, LookupError> {
    self
      .iter()
      .find(|r| r.path == path)
      .ok_or_else(|| LookupError::ReposNotFound(path.to_string()))
  }

  fn find_by_path_mut(&mut self, path: &str) -> Result<&mut Resource, LookupError> {
    self
      .iter_mut()
      .find(|r| r.path == path)
      .ok_or_else(|| LookupError::ReposNotFound(path.to_string()))
  }
}

/// Removal from an owned `repos[]`.
pub trait ReposListMut {
  /// Remove the first resource whose `path` matches.
  fn remove_by_path(&mut self, path: &str) -> Result<(), LookupError>;
}

impl ReposListMut for Vec<Resource> {
  fn remove_by_path(&mut self, path: &str) -> Result<(), LookupError> {
    let index = self
      .iter()
      .position(|r| r.path == path)
      .ok_or_else(|| LookupError::NoMatchingRepos(path.to_string()))?;
    self.remove(index);
    Ok(())
  }
}

impl Profile {
  pub fn contains_path(&self, path: &str) -> bool {
    self.index_of_path(path).is_some()
  }

  pub fn index_of_path(&self, path: &str) -> Option<usize> {
    self.members().iter().position(|p| p == path)
  }
}

impl LockState {
  /// The profile named by `active_profile`.
  pub fn active_profile(&self) -> Result<&Profile, LookupError> {
    self.profiles().find_by_name(&self.active_profile)
  }

  /// Resolve each member of `profile` to its resource, in member order.
  ///
  /// Fails on the first member with no matching resource.
  pub fn resources_for_profile(&self, profile: &Profile) -> Result<Vec<Resource>, LookupError> {
    profile
      .members()
      .iter()
      .map(|path| self.repos().find_by_path(path).cloned())
      .collect()
  }
}
