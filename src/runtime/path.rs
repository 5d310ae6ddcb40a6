//! Path utility functions for normalization and prefix checks.

use std::path::{Component, Path, PathBuf};

/// Normalize a path by processing `.` and `..` components lexically.
/// This does not access the filesystem and does not follow symlinks.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Keep a leading `..` that cannot be popped
                if !result.pop() {
                    result.push(component);
                }
            }
            _ => {
                result.push(component);
            }
        }
    }
    result
}

/// Check if a path is under a given directory by comparing normalized path
/// components. Returns true if `dir` is a component-wise prefix of `path`.
///
/// Removal must never escape the installation prefix, so both sides are
/// normalized first: `/usr/local/lib/../../../etc` is NOT under
/// `/usr/local`, and `/usr/local-extra` is not either.
pub fn is_path_under(path: &Path, dir: &Path) -> bool {
    normalize_path(path).starts_with(normalize_path(dir))
}
