//! Lock file management.
//!
//! The lock file (`lock.json`) records installed resources and the profiles
//! that select them. It lives in the data root (see
//! [`VoltPaths`](crate::platform::VoltPaths)).
//!
//! # Lock File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "trx_id": 2,
//!   "active_profile": "default",
//!   "load_vimrc": true,
//!   "load_gvimrc": true,
//!   "repos": [
//!     {
//!       "type": "git",
//!       "trx_id": 2,
//!       "path": "github.com/tyru/caw.vim",
//!       "version": "0c2ca8cc3b1d8ee1ab2e4dbcc1d4c7ac56ca3dd2"
//!     }
//!   ],
//!   "profiles": [
//!     {
//!       "name": "default",
//!       "repos_path": ["github.com/tyru/caw.vim"],
//!       "load_vimrc": true,
//!       "load_gvimrc": true
//!     }
//!   ]
//! }
//! ```
//!
//! # Modules
//!
//! - [`types`] - the data model and its initial state
//! - [`validate`] - invariant checks run on every load and save
//! - [`lookup`] - finders and removals over a loaded state
//! - [`storage`] - reading and writing through the platform collaborators

mod error;
pub mod lookup;
pub mod storage;
mod types;
pub mod validate;

pub use error::{LockError, LookupError, ValidationError, ValidationErrorKind};
pub use lookup::{ProfileList, ReposList, ReposListMut};
pub use storage::LockStore;
pub use types::*;
pub use validate::{validate, validate_missing};
