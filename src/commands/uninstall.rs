//! Uninstall command: remove the installed module and launcher script.

use anyhow::{Context, Result, anyhow};
use log::{debug, warn};
use std::path::{Path, PathBuf};

use crate::footprint::FootprintRemover;
use crate::locate::locate_binary;
use crate::runtime::{Runtime, is_path_under};

/// Remove the installed footprint of `name`: module directories under the
/// installation prefix plus the launcher script. Idempotent; a second run
/// finds nothing and does nothing.
///
/// `prefix` defaults to the parent of the bin directory, and `bin_dir` to
/// the directory of the running executable. When the launcher script is
/// not in `bin_dir`, its location is looked up on `PATH` as a fallback
/// and removed only if it lies under the prefix.
#[tracing::instrument(skip(runtime))]
pub fn uninstall<R: Runtime>(
    runtime: &R,
    name: &str,
    prefix: Option<PathBuf>,
    bin_dir: Option<PathBuf>,
) -> Result<()> {
    let bin_dir = match bin_dir {
        Some(dir) => dir,
        None => default_bin_dir(runtime)?,
    };
    let prefix = prefix.unwrap_or_else(|| default_prefix(&bin_dir));
    debug!(
        "Uninstalling '{}' with prefix {:?}, bin dir {:?}",
        name, prefix, bin_dir
    );

    let script_in_bin_dir = runtime.exists(&bin_dir.join(name));

    FootprintRemover::new(runtime, name, name).remove(&prefix, &bin_dir);

    if !script_in_bin_dir
        && let Some(found) = locate_binary(runtime, name)?
    {
        if is_path_under(&found, &prefix) && runtime.exists(&found) {
            println!("removing '{}'", found.display());
            if let Err(e) = runtime.remove_file(&found) {
                warn!("Failed to remove launcher script {:?}: {}", found, e);
            }
        } else {
            debug!("leaving {:?} alone, not under prefix {:?}", found, prefix);
        }
    }

    Ok(())
}

fn default_bin_dir<R: Runtime>(runtime: &R) -> Result<PathBuf> {
    let exe = runtime
        .current_exe()
        .context("Failed to locate the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow!("Executable path {:?} has no parent directory", exe))
}

fn default_prefix(bin_dir: &Path) -> PathBuf {
    bin_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| bin_dir.to_path_buf())
}
