//! Removal of an installed package's footprint.

use log::{debug, warn};
use std::path::Path;

use crate::locate;
use crate::runtime::{Runtime, is_path_under};

/// Removes whichever parts of a prior installation actually exist: the
/// module directories under the installation prefix and the launcher
/// script in the bin directory.
pub struct FootprintRemover<'a, R: Runtime> {
    runtime: &'a R,
    module_name: String,
    script_name: String,
}

impl<'a, R: Runtime> FootprintRemover<'a, R> {
    pub fn new(
        runtime: &'a R,
        module_name: impl Into<String>,
        script_name: impl Into<String>,
    ) -> Self {
        Self {
            runtime,
            module_name: module_name.into(),
            script_name: script_name.into(),
        }
    }

    /// Remove the installed footprint. Idempotent and infallible: when
    /// nothing is installed this does nothing, and a failed deletion of
    /// one path never blocks the remaining removals.
    ///
    /// Module directories outside `prefix` are left untouched; removal
    /// never reaches outside the installation root.
    #[tracing::instrument(skip(self))]
    pub fn remove(&self, prefix: &Path, bin_dir: &Path) {
        let search_dirs = locate::module_search_dirs(self.runtime, prefix);
        for dir in locate::installed_module_dirs(self.runtime, &self.module_name, &search_dirs) {
            if !is_path_under(&dir, prefix) {
                debug!("leaving {:?} alone, not under prefix {:?}", dir, prefix);
                continue;
            }
            println!("removing '{}'", dir.display());
            if let Err(e) = self.runtime.remove_dir_all(&dir) {
                warn!("Failed to remove module directory {:?}: {}", dir, e);
            }
        }

        let script_path = bin_dir.join(&self.script_name);
        if self.runtime.exists(&script_path) {
            println!("removing '{}'", script_path.display());
            if let Err(e) = self.runtime.remove_file(&script_path) {
                warn!("Failed to remove launcher script {:?}: {}", script_path, e);
            }
        }
    }
}
