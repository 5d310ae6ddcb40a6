//! Enumeration of installed module directories.

use log::debug;
use std::path::{Path, PathBuf};

use crate::runtime::Runtime;

/// Environment variable holding extra module search path entries,
/// separated like `PATH`.
pub const MODULE_PATH_ENV: &str = "PAKRM_MODULE_PATH";

/// The module search path: entries from [`MODULE_PATH_ENV`] followed by
/// the conventional `lib` directory under the installation prefix.
#[tracing::instrument(skip(runtime))]
pub fn module_search_dirs<R: Runtime>(runtime: &R, prefix: &Path) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = match runtime.env_var(MODULE_PATH_ENV) {
        Ok(raw) => std::env::split_paths(&raw).collect(),
        Err(_) => Vec::new(),
    };
    dirs.push(prefix.join("lib"));
    dirs
}

/// Enumerate the on-disk locations of the installed module `name`: each
/// search path entry joined with `name`, keeping those that are
/// directories. Best-effort; nothing installed yields an empty list.
#[tracing::instrument(skip(runtime, search_dirs))]
pub fn installed_module_dirs<R: Runtime>(
    runtime: &R,
    name: &str,
    search_dirs: &[PathBuf],
) -> Vec<PathBuf> {
    let found: Vec<PathBuf> = search_dirs
        .iter()
        .map(|dir| dir.join(name))
        .filter(|candidate| runtime.is_dir(candidate))
        .collect();
    debug!("module '{}' installed at {:?}", name, found);
    found
}
