//! `dirkit_io_fs` v1:
//! Recursive directory tree helpers.
//!
//! Architecture:
//! - `backend` : filesystem collaborator trait and `std::fs` backend
//! - `copy`    : recursive directory tree copy
//! - `empty`   : recursive directory tree emptying
//! - `spec`    : options and error types
//! - `util`    : shared helper functions

pub mod backend;
pub mod copy;
pub mod empty;
pub mod spec;
mod util;

#[cfg(test)]
pub(crate) mod test_support;

pub use backend::{FsBackend, SpecEntryStat, StdBackend};
pub use copy::copy_dir;
pub use empty::empty_dir;
pub use spec::{SpecTreeOptions, TreeWalkError};
