//! Clean command: best-effort removal of build artifacts.

use log::{debug, warn};
use std::path::Path;

use crate::runtime::Runtime;

/// Artifact directories removed wholesale.
pub const ARTIFACT_DIRS: [&str; 2] = ["build", "dist"];

/// Artifact patterns expanded relative to the target directory. A match
/// may be a file (compiled caches, archives) or a directory (metadata).
pub const ARTIFACT_PATTERNS: [&str; 3] = ["*.pyc", "*.tgz", "*.egg-info"];

/// Remove build artifacts under `dir`. Best-effort: prints nothing on
/// success, logs failures, and never fails. Running against an already
/// clean directory is a no-op.
#[tracing::instrument(skip(runtime))]
pub fn clean<R: Runtime>(runtime: &R, dir: &Path) {
    for name in ARTIFACT_DIRS {
        let path = dir.join(name);
        if !runtime.is_dir(&path) {
            continue;
        }
        debug!("removing artifact directory {:?}", path);
        if let Err(e) = runtime.remove_dir_all(&path) {
            warn!("Failed to remove {:?}: {}", path, e);
        }
    }

    for pattern in ARTIFACT_PATTERNS {
        let full_pattern = dir.join(pattern);
        let Some(full_pattern) = full_pattern.to_str() else {
            debug!("skipping non-UTF-8 pattern under {:?}", dir);
            continue;
        };
        let matches = match runtime.glob(full_pattern) {
            Ok(matches) => matches,
            Err(e) => {
                warn!("Failed to expand pattern '{}': {}", full_pattern, e);
                continue;
            }
        };
        for path in matches {
            debug!("removing artifact {:?}", path);
            let result = if runtime.is_dir(&path) {
                runtime.remove_dir_all(&path)
            } else {
                runtime.remove_file(&path)
            };
            if let Err(e) = result {
                warn!("Failed to remove {:?}: {}", path, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use mockall::predicate::eq;
    use std::path::PathBuf;

    fn no_pattern_matches(runtime: &mut MockRuntime) {
        runtime.expect_glob().returning(|_| Ok(vec![]));
    }

    #[test]
    fn test_clean_removes_artifact_directories() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_is_dir()
            .with(eq(PathBuf::from("/work/build")))
            .returning(|_| true);
        runtime
            .expect_is_dir()
            .with(eq(PathBuf::from("/work/dist")))
            .returning(|_| true);
        runtime
            .expect_remove_dir_all()
            .with(eq(PathBuf::from("/work/build")))
            .times(1)
            .returning(|_| Ok(()));
        runtime
            .expect_remove_dir_all()
            .with(eq(PathBuf::from("/work/dist")))
            .times(1)
            .returning(|_| Ok(()));
        no_pattern_matches(&mut runtime);

        clean(&runtime, Path::new("/work"));
    }

    #[test]
    fn test_clean_already_clean_directory_is_a_no_op() {
        let mut runtime = MockRuntime::new();
        runtime.expect_is_dir().returning(|_| false);
        no_pattern_matches(&mut runtime);

        clean(&runtime, Path::new("/work"));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_clean_removes_pattern_matches() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_is_dir()
            .with(eq(PathBuf::from("/work/build")))
            .returning(|_| false);
        runtime
            .expect_is_dir()
            .with(eq(PathBuf::from("/work/dist")))
            .returning(|_| false);

        runtime
            .expect_glob()
            .with(eq("/work/*.pyc"))
            .returning(|_| Ok(vec![PathBuf::from("/work/cached.pyc")]));
        runtime
            .expect_glob()
            .with(eq("/work/*.tgz"))
            .returning(|_| Ok(vec![]));
        runtime
            .expect_glob()
            .with(eq("/work/*.egg-info"))
            .returning(|_| Ok(vec![PathBuf::from("/work/pkg.egg-info")]));

        // Files are unlinked, metadata directories removed recursively.
        runtime
            .expect_is_dir()
            .with(eq(PathBuf::from("/work/cached.pyc")))
            .returning(|_| false);
        runtime
            .expect_remove_file()
            .with(eq(PathBuf::from("/work/cached.pyc")))
            .times(1)
            .returning(|_| Ok(()));
        runtime
            .expect_is_dir()
            .with(eq(PathBuf::from("/work/pkg.egg-info")))
            .returning(|_| true);
        runtime
            .expect_remove_dir_all()
            .with(eq(PathBuf::from("/work/pkg.egg-info")))
            .times(1)
            .returning(|_| Ok(()));

        clean(&runtime, Path::new("/work"));
    }

    #[test_log::test]
    fn test_clean_failures_do_not_stop_remaining_removals() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_is_dir()
            .with(eq(PathBuf::from("/work/build")))
            .returning(|_| true);
        runtime
            .expect_is_dir()
            .with(eq(PathBuf::from("/work/dist")))
            .returning(|_| true);
        runtime
            .expect_remove_dir_all()
            .with(eq(PathBuf::from("/work/build")))
            .returning(|_| Err(anyhow::anyhow!("permission denied")));
        runtime
            .expect_remove_dir_all()
            .with(eq(PathBuf::from("/work/dist")))
            .times(1)
            .returning(|_| Ok(()));
        no_pattern_matches(&mut runtime);

        clean(&runtime, Path::new("/work"));
    }
}
