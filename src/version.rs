//! Version string resolution.
//!
//! When the project is a git checkout, the reported version carries the
//! short revision of `HEAD` as a suffix: `2.3.2+abc123`. Outside a
//! checkout, or when `git` is unavailable, the base version is reported
//! unchanged.

use anyhow::Result;
use log::debug;

use crate::runtime::Runtime;

/// Joins the base version and the revision suffix.
pub const REVISION_SEPARATOR: char = '+';

/// Compose the full version string for `base`. The git lookup is
/// best-effort: any failure short of an interrupt resolves to `base`
/// alone.
#[tracing::instrument(skip(runtime))]
pub fn resolve<R: Runtime>(runtime: &R, base: &str) -> Result<String> {
    let args = ["rev-parse", "--short", "HEAD"].map(String::from);
    match runtime.run_command("git", &args) {
        Ok(output) => {
            let revision = output.trim();
            if revision.is_empty() {
                Ok(base.to_string())
            } else {
                Ok(format!("{base}{REVISION_SEPARATOR}{revision}"))
            }
        }
        Err(e) if e.is_interrupted() => Err(e.into()),
        Err(e) => {
            debug!("git revision lookup failed: {}", e);
            Ok(base.to_string())
        }
    }
}
