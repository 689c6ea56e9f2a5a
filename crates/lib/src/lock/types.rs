//! Lock file data model.
//!
//! Field order matches the on-disk key order, so serializing a parsed
//! document reproduces the same layout.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Format version written by [`LockState::initial`].
pub const LOCK_VERSION: u64 = 1;

/// Name of the profile created for a fresh lock file.
pub const DEFAULT_PROFILE: &str = "default";

/// Root of `lock.json`.
///
/// Sequences are `Option`s because a missing (or `null`) `repos`/`profiles`
/// is a validation error, while an empty one is fine. `Default` is what an
/// empty document parses to; use [`LockState::initial`] for a fresh state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LockState {
  /// Lock file format version. Zero means missing.
  #[serde(deserialize_with = "null_as_default")]
  pub version: u64,
  /// Transaction high-water mark. No resource may carry a larger one.
  #[serde(deserialize_with = "null_as_default")]
  pub trx_id: u64,
  /// Name of the profile currently in use.
  #[serde(deserialize_with = "null_as_default")]
  pub active_profile: String,
  #[serde(deserialize_with = "null_as_default")]
  pub load_vimrc: bool,
  #[serde(deserialize_with = "null_as_default")]
  pub load_gvimrc: bool,
  /// Installed resources, keyed by `path`.
  pub repos: Option<Vec<Resource>>,
  /// Named selections of resources.
  pub profiles: Option<Vec<Profile>>,
}

/// An installed resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resource {
  #[serde(rename = "type", deserialize_with = "null_as_default")]
  pub kind: ResourceKind,
  /// Transaction that last touched this resource.
  #[serde(deserialize_with = "null_as_default")]
  pub trx_id: u64,
  /// Slash-separated path relative to the repos directory.
  #[serde(deserialize_with = "null_as_default")]
  pub path: String,
  /// Pinned version. Required for [`ResourceKind::Versioned`].
  #[serde(deserialize_with = "null_as_default")]
  pub version: String,
}

/// Kind of a resource, serialized as `"git"` or `"static"`.
///
/// Unrecognized strings are kept in [`ResourceKind::Unknown`] so validation
/// can name the bad value instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResourceKind {
  /// Version-pinned resource (`"git"`).
  Versioned,
  /// Unversioned resource (`"static"`).
  Static,
  /// Anything else, including the empty string.
  Unknown(String),
}

/// A named selection of resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
  #[serde(deserialize_with = "null_as_default")]
  pub name: String,
  /// Member resource paths, in activation order.
  pub repos_path: Option<Vec<String>>,
  #[serde(deserialize_with = "null_as_default")]
  pub load_vimrc: bool,
  #[serde(deserialize_with = "null_as_default")]
  pub load_gvimrc: bool,
}

/// Read `null` as the field's zero value, same as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl LockState {
  /// The state used when no lock file exists yet.
  ///
  /// Always valid, so loading it skips validation.
  pub fn initial() -> Self {
    Self {
      version: LOCK_VERSION,
      trx_id: 1,
      active_profile: DEFAULT_PROFILE.to_string(),
      load_vimrc: true,
      load_gvimrc: true,
      repos: Some(Vec::new()),
      profiles: Some(vec![Profile::new(DEFAULT_PROFILE)]),
    }
  }

  /// Resources, treating a missing sequence as empty.
  pub fn repos(&self) -> &[Resource] {
    self.repos.as_deref().unwrap_or_default()
  }

  /// Profiles, treating a missing sequence as empty.
  pub fn profiles(&self) -> &[Profile] {
    self.profiles.as_deref().unwrap_or_default()
  }

  /// Mutable resources. A missing sequence becomes an empty one.
  pub fn repos_mut(&mut self) -> &mut Vec<Resource> {
    self.repos.get_or_insert_with(Vec::new)
  }

  /// Mutable profiles. A missing sequence becomes an empty one.
  pub fn profiles_mut(&mut self) -> &mut Vec<Profile> {
    self.profiles.get_or_insert_with(Vec::new)
  }
}

impl Resource {
  /// Create a version-pinned resource.
  pub fn versioned(path: &str, version: &str, trx_id: u64) -> Self {
    Self {
      kind: ResourceKind::Versioned,
      trx_id,
      path: path.to_string(),
      version: version.to_string(),
    }
  }

  /// Create a static resource.
  pub fn static_dir(path: &str, trx_id: u64) -> Self {
    Self {
      kind: ResourceKind::Static,
      trx_id,
      path: path.to_string(),
      version: String::new(),
    }
  }
}

impl Profile {
  /// Create an empty profile with both config flags enabled.
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      repos_path: Some(Vec::new()),
      load_vimrc: true,
      load_gvimrc: true,
    }
  }

  /// Builder-style helper to set the member paths.
  pub fn with_repos_path<I, S>(mut self, paths: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.repos_path = Some(paths.into_iter().map(Into::into).collect());
    self
  }

  /// Member paths, treating a missing sequence as empty.
  pub fn members(&self) -> &[String] {
    self.repos_path.as_deref().unwrap_or_default()
  }
}

impl Default for ResourceKind {
  fn default() -> Self {
    ResourceKind::Unknown(String::new())
  }
}

impl ResourceKind {
  pub fn as_str(&self) -> &str {
    match self {
      ResourceKind::Versioned => "git",
      ResourceKind::Static => "static",
      ResourceKind::Unknown(s) => s,
    }
  }

  /// True when the `type` key was absent or empty.
  pub fn is_missing(&self) -> bool {
    matches!(self, ResourceKind::Unknown(s) if s.is_empty())
  }
}

impl From<String> for ResourceKind {
  fn from(s: String) -> Self {
    match s.as_str() {
      "git" => ResourceKind::Versioned,
      "static" => ResourceKind::Static,
      _ => ResourceKind::Unknown(s),
    }
  }
}

impl From<ResourceKind> for String {
  fn from(kind: ResourceKind) -> Self {
    match kind {
      ResourceKind::Unknown(s) => s,
      known => known.as_str().to_string(),
    }
  }
}

impl fmt::Display for ResourceKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}
