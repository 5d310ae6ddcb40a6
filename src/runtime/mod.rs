//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over system operations,
//! enabling dependency injection and testability.
//!
//! # Structure
//!
//! - `path` - Path utility functions (normalize, is_path_under)
//! - `env` - Environment variables and executable location
//! - `fs` - File system operations (existence checks, removal, globbing)
//! - `proc` - External process invocation with an interruption carve-out

mod env;
mod fs;
pub mod path;
mod proc;

use anyhow::Result;
use std::env as std_env;
use std::path::{Path, PathBuf};

pub use path::is_path_under;
pub use proc::CommandError;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;
    fn current_exe(&self) -> Result<PathBuf>;

    // File System
    fn exists(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
    fn remove_file(&self, path: &Path) -> Result<()>;
    fn remove_dir_all(&self, path: &Path) -> Result<()>;

    /// Expand a glob pattern into the matching paths. Unreadable matches
    /// are skipped rather than reported.
    fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>>;

    // Process
    /// Run an external command, capturing stdout. Returns
    /// [`CommandError::Interrupted`] when the child was terminated by an
    /// interrupt so callers can keep cancellation out of their
    /// best-effort error handling.
    fn run_command(&self, program: &str, args: &[String]) -> Result<String, CommandError>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn current_exe(&self) -> Result<PathBuf> {
        self.current_exe_impl()
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.is_dir_impl(path)
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        self.remove_file_impl(path)
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        self.remove_dir_all_impl(path)
    }

    fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        self.glob_impl(pattern)
    }

    fn run_command(&self, program: &str, args: &[String]) -> Result<String, CommandError> {
        self.run_command_impl(program, args)
    }
}
