//! Shared test fixtures: scratch directories and a log-capturing backend.

use std::cell::RefCell;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::backend::{FsBackend, SpecEntryStat, StdBackend};

pub(crate) struct TestDir {
    path: PathBuf,
}

impl TestDir {
    pub(crate) fn new() -> Self {
        let n = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = std::env::temp_dir().join(format!("dirkit_fs_test_{n}"));
        std::fs::create_dir_all(&path).expect("create test dir");
        Self { path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

pub(crate) fn write_text(path: &Path, txt: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent");
    }
    std::fs::write(path, txt).expect("write text");
}

pub(crate) fn read_text(path: &Path) -> String {
    std::fs::read_to_string(path).expect("read text")
}

/// [`StdBackend`] wrapper that records `log_line` output for assertions.
#[derive(Default)]
pub(crate) struct RecordingBackend {
    inner: StdBackend,
    lines: RefCell<Vec<String>>,
}

impl RecordingBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

impl FsBackend for RecordingBackend {
    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn stat(&self, path: &Path) -> io::Result<SpecEntryStat> {
        self.inner.stat(path)
    }

    fn mkdir(&self, path: &Path) -> io::Result<()> {
        self.inner.mkdir(path)
    }

    fn list_entries(&self, path: &Path) -> io::Result<Vec<OsString>> {
        self.inner.list_entries(path)
    }

    fn resolve(&self, dir_base: &Path, name_entry: &OsStr) -> PathBuf {
        self.inner.resolve(dir_base, name_entry)
    }

    fn copy_file(&self, path_file_src: &Path, path_file_dst: &Path) -> io::Result<()> {
        self.inner.copy_file(path_file_src, path_file_dst)
    }

    fn delete_file(&self, path: &Path) -> io::Result<()> {
        self.inner.delete_file(path)
    }

    fn log_line(&self, text: &str) {
        self.lines.borrow_mut().push(text.to_string());
    }
}
