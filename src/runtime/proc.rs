//! External process invocation.
//!
//! All lookups this tool performs against external tools (`git`, the
//! platform command-search utility) go through [`run_command`]. The error
//! type keeps interruption separate from ordinary failures: best-effort
//! callers absorb `Launch`/`ExitStatus` but must let `Interrupted`
//! propagate.

use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;

use super::RealRuntime;

#[derive(Debug, Error)]
pub enum CommandError {
    /// The child was terminated by a user interrupt. Never absorbed by
    /// best-effort lookups.
    #[error("'{program}' was interrupted")]
    Interrupted { program: String },

    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with status {code}")]
    ExitStatus { program: String, code: i32 },
}

impl CommandError {
    pub fn is_interrupted(&self) -> bool {
        matches!(self, CommandError::Interrupted { .. })
    }
}

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn run_command_impl(
        &self,
        program: &str,
        args: &[String],
    ) -> Result<String, CommandError> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| CommandError::Launch {
                program: program.to_string(),
                source,
            })?;

        if interrupted(&output.status) {
            return Err(CommandError::Interrupted {
                program: program.to_string(),
            });
        }

        if !output.status.success() {
            return Err(CommandError::ExitStatus {
                program: program.to_string(),
                code: output.status.code().unwrap_or(-1),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(unix)]
fn interrupted(status: &ExitStatus) -> bool {
    use std::os::unix::process::ExitStatusExt;
    status.signal() == Some(nix::sys::signal::Signal::SIGINT as i32)
}

#[cfg(windows)]
fn interrupted(status: &ExitStatus) -> bool {
    // STATUS_CONTROL_C_EXIT
    status.code() == Some(0xC000013Au32 as i32)
}
