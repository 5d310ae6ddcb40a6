//! Absolute-path resolution for external commands.

use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::runtime::Runtime;

#[cfg(windows)]
const SEARCH_UTILITY: &str = "where";
#[cfg(not(windows))]
const SEARCH_UTILITY: &str = "which";

/// Resolve the absolute path of `command` through the platform's
/// command-search utility. On POSIX-like platforms a missing result falls
/// back to `/usr/local/bin/<command>` if that path exists.
///
/// Returns `Ok(None)` when the command cannot be found; only an
/// interrupted lookup is surfaced as an error.
#[tracing::instrument(skip(runtime))]
pub fn locate_binary<R: Runtime>(runtime: &R, command: &str) -> Result<Option<PathBuf>> {
    match runtime.run_command(SEARCH_UTILITY, &[command.to_string()]) {
        Ok(output) => {
            if let Some(line) = output.lines().map(str::trim).find(|l| !l.is_empty()) {
                debug!("'{}' resolved to {}", command, line);
                return Ok(Some(PathBuf::from(line)));
            }
        }
        Err(e) if e.is_interrupted() => return Err(e.into()),
        Err(e) => {
            debug!("{} lookup for '{}' failed: {}", SEARCH_UTILITY, command, e);
        }
    }

    #[cfg(not(windows))]
    {
        let fallback = std::path::Path::new("/usr/local/bin").join(command);
        if runtime.exists(&fallback) {
            debug!("'{}' found at fallback {:?}", command, fallback);
            return Ok(Some(fallback));
        }
    }

    Ok(None)
}
