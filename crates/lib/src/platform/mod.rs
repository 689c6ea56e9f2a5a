//! Host collaborators for the lock store.
//!
//! - [`paths`] - where the lock file and resources live
//! - [`fs`] - blocking filesystem access

pub mod fs;
pub mod paths;

pub use fs::{Filesystem, OsFilesystem};
pub use paths::{PathResolver, VoltPaths};
