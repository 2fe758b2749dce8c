//! Recursive directory tree emptying.

use std::path::Path;

use crate::backend::FsBackend;
use crate::spec::{SpecTreeOptions, TreeWalkError};

/// Delete every file below `dir_target` while keeping its directory skeleton.
///
/// A missing target is created as an empty directory (one level only; its
/// immediate parent must already exist) and the call returns having nothing
/// to empty. Files are deleted at every depth; subdirectories are emptied
/// recursively but never deleted themselves.
///
/// Behavior is controlled by [`SpecTreeOptions`]:
/// - `if_with_log`: emit one line per deleted file plus a summary line once
///   the target has been emptied,
/// - `if_throw_when_error`: surface [`TreeWalkError::TargetNotDirectory`]
///   instead of returning silently when the target pre-exists as a
///   non-directory.
///
/// As with [`crate::copy_dir`], recursive self-invocations run with default
/// options. A failure partway through leaves the tree partially emptied.
pub fn empty_dir<B, P>(
    fs_backend: &B,
    dir_target: P,
    spec_options: SpecTreeOptions,
) -> Result<(), TreeWalkError>
where
    B: FsBackend + ?Sized,
    P: AsRef<Path>,
{
    let path_dir_target = dir_target.as_ref();

    if !fs_backend.exists(path_dir_target) {
        fs_backend
            .mkdir(path_dir_target)
            .map_err(|e| TreeWalkError::backend_failed(path_dir_target, e))?;
    }

    // Runs right after the auto-create too; the failure branch is only
    // reachable when the target pre-existed as a non-directory.
    let stat_target = fs_backend
        .stat(path_dir_target)
        .map_err(|e| TreeWalkError::backend_failed(path_dir_target, e))?;
    if !stat_target.is_dir() {
        if spec_options.if_throw_when_error {
            return Err(TreeWalkError::TargetNotDirectory(
                path_dir_target.to_path_buf(),
            ));
        }
        return Ok(());
    }

    let l_names = fs_backend
        .list_entries(path_dir_target)
        .map_err(|e| TreeWalkError::backend_failed(path_dir_target, e))?;
    for name_entry in l_names {
        let path_entry = fs_backend.resolve(path_dir_target, &name_entry);
        let stat_entry = fs_backend
            .stat(&path_entry)
            .map_err(|e| TreeWalkError::backend_failed(&path_entry, e))?;

        if stat_entry.is_dir() {
            empty_dir(fs_backend, &path_entry, SpecTreeOptions::default())?;
        } else {
            if spec_options.if_with_log {
                fs_backend.log_line(&format!("Deleting file: {}", path_entry.display()));
            }
            fs_backend
                .delete_file(&path_entry)
                .map_err(|e| TreeWalkError::backend_failed(&path_entry, e))?;
        }
    }

    if spec_options.if_with_log {
        fs_backend.log_line(&format!("Emptied directory: {}", path_dir_target.display()));
    }

    Ok(())
}
