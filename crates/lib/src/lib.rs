//! vlock-lib: consistency-checked lock file for installed resources.
//!
//! This crate provides:
//! - `LockState`: resources plus the profiles that select them
//! - `validate`: the invariants every loaded or saved state must satisfy
//! - `LockStore`: load and save, refusing to hand out or persist invalid state

pub mod consts;
pub mod lock;
pub mod platform;
