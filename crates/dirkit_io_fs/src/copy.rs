//! Recursive directory tree copy.

use std::path::Path;

use crate::backend::FsBackend;
use crate::spec::{SpecTreeOptions, TreeWalkError};

/// Copy the contents of `dir_source` into `dir_destination`.
///
/// A missing destination is created as a directory (one level only; its
/// immediate parent must already exist). Behavior is controlled by
/// [`SpecTreeOptions`]:
/// - `if_with_log`: emit one line per copied file,
/// - `if_throw_when_error`: surface validation failures
///   ([`TreeWalkError::SourceNotFound`], [`TreeWalkError::SourceNotDirectory`],
///   [`TreeWalkError::DestinationNotDirectory`]) instead of returning
///   silently with no effect.
///
/// Recursive self-invocations for subdirectories always run with default
/// options, so both flags apply only to the entries directly under the
/// top-level call's source directory.
///
/// Existing destination files are overwritten without warning. Entries are
/// visited in whatever order the collaborator lists them. A failure partway
/// through leaves the destination tree partially populated.
pub fn copy_dir<B, P, Q>(
    fs_backend: &B,
    dir_source: P,
    dir_destination: Q,
    spec_options: SpecTreeOptions,
) -> Result<(), TreeWalkError>
where
    B: FsBackend + ?Sized,
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let path_dir_src = dir_source.as_ref();
    let path_dir_dst = dir_destination.as_ref();

    if !fs_backend.exists(path_dir_src) {
        if spec_options.if_throw_when_error {
            return Err(TreeWalkError::SourceNotFound(path_dir_src.to_path_buf()));
        }
        return Ok(());
    }
    let stat_src = fs_backend
        .stat(path_dir_src)
        .map_err(|e| TreeWalkError::backend_failed(path_dir_src, e))?;
    if !stat_src.is_dir() {
        if spec_options.if_throw_when_error {
            return Err(TreeWalkError::SourceNotDirectory(
                path_dir_src.to_path_buf(),
            ));
        }
        return Ok(());
    }

    if !fs_backend.exists(path_dir_dst) {
        fs_backend
            .mkdir(path_dir_dst)
            .map_err(|e| TreeWalkError::backend_failed(path_dir_dst, e))?;
    } else {
        let stat_dst = fs_backend
            .stat(path_dir_dst)
            .map_err(|e| TreeWalkError::backend_failed(path_dir_dst, e))?;
        if !stat_dst.is_dir() {
            if spec_options.if_throw_when_error {
                return Err(TreeWalkError::DestinationNotDirectory(
                    path_dir_dst.to_path_buf(),
                ));
            }
            return Ok(());
        }
    }

    let l_names = fs_backend
        .list_entries(path_dir_src)
        .map_err(|e| TreeWalkError::backend_failed(path_dir_src, e))?;
    for name_entry in l_names {
        let path_entry_src = fs_backend.resolve(path_dir_src, &name_entry);
        let path_entry_dst = fs_backend.resolve(path_dir_dst, &name_entry);
        let stat_entry = fs_backend
            .stat(&path_entry_src)
            .map_err(|e| TreeWalkError::backend_failed(&path_entry_src, e))?;

        if stat_entry.is_dir() {
            copy_dir(
                fs_backend,
                &path_entry_src,
                &path_entry_dst,
                SpecTreeOptions::default(),
            )?;
        } else {
            fs_backend
                .copy_file(&path_entry_src, &path_entry_dst)
                .map_err(|e| TreeWalkError::backend_failed(&path_entry_src, e))?;
            if spec_options.if_with_log {
                fs_backend.log_line(&format!("Copied file: {}", path_entry_src.display()));
            }
        }
    }

    Ok(())
}
