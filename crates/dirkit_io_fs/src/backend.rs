//! Filesystem collaborator trait and the `std::fs` production backend.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::util::{absolutize_path, copy_file_with_metadata};

/// Stat result for one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecEntryStat {
    /// Path resolves to a directory.
    pub if_is_dir: bool,
}

impl SpecEntryStat {
    /// Path is a directory.
    pub fn is_dir(&self) -> bool {
        self.if_is_dir
    }

    /// Path is a file.
    pub fn is_file(&self) -> bool {
        !self.if_is_dir
    }
}

/// Synchronous filesystem capability consumed by the tree walks.
///
/// Implementations are expected to behave like `std::fs`: `mkdir` creates
/// exactly one directory level, `list_entries` order is unspecified, and
/// `copy_file` overwrites an existing destination file.
pub trait FsBackend {
    /// `true` when `path` exists, whatever its entry type.
    fn exists(&self, path: &Path) -> bool;

    /// Stat `path`; fails when it does not exist.
    fn stat(&self, path: &Path) -> io::Result<SpecEntryStat>;

    /// Create one directory level; fails when the immediate parent is
    /// missing.
    fn mkdir(&self, path: &Path) -> io::Result<()>;

    /// List entry names directly under `path`; fails when `path` is not a
    /// directory.
    fn list_entries(&self, path: &Path) -> io::Result<Vec<OsString>>;

    /// Absolute path of the entry `name_entry` under `dir_base`.
    fn resolve(&self, dir_base: &Path, name_entry: &OsStr) -> PathBuf;

    /// Copy file contents, and metadata as supported by the copy primitive,
    /// overwriting `path_file_dst` when present.
    fn copy_file(&self, path_file_src: &Path, path_file_dst: &Path) -> io::Result<()>;

    /// Delete one file; fails on a missing path or a directory.
    fn delete_file(&self, path: &Path) -> io::Result<()>;

    /// Diagnostic side-channel, invoked only when logging was requested.
    fn log_line(&self, text: &str);
}

/// [`FsBackend`] over the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdBackend;

impl FsBackend for StdBackend {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn stat(&self, path: &Path) -> io::Result<SpecEntryStat> {
        let stat_entry = fs::metadata(path)?;
        Ok(SpecEntryStat {
            if_is_dir: stat_entry.is_dir(),
        })
    }

    fn mkdir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn list_entries(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let mut l_names = Vec::new();
        for _entry_res in fs::read_dir(path)? {
            l_names.push(_entry_res?.file_name());
        }
        Ok(l_names)
    }

    fn resolve(&self, dir_base: &Path, name_entry: &OsStr) -> PathBuf {
        absolutize_path(&dir_base.join(name_entry))
    }

    fn copy_file(&self, path_file_src: &Path, path_file_dst: &Path) -> io::Result<()> {
        copy_file_with_metadata(path_file_src, path_file_dst)
    }

    fn delete_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn log_line(&self, text: &str) {
        println!("{text}");
    }
}
