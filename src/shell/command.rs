//! Shell command execution.

use crate::error::{AuditError, Result};
use std::process::{Command, Stdio};

/// Result of executing a shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Build from a process exit status.
    pub fn from_status(status: std::process::ExitStatus) -> Self {
        Self {
            exit_code: status.code(),
            success: status.success(),
        }
    }
}

/// Run a command through `sh -c` with the terminal attached.
///
/// stdin, stdout and stderr are inherited so a package manager can ask its
/// own questions. Fails only when the shell cannot be started.
pub fn execute(command: &str) -> Result<CommandResult> {
    tracing::debug!("running: {}", command);

    let status = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| {
            tracing::debug!("could not start sh: {}", e);
            AuditError::CommandFailed {
                command: command.to_string(),
                code: None,
            }
        })?;

    let result = CommandResult::from_status(status);
    tracing::debug!("exit code: {:?}", result.exit_code);
    Ok(result)
}
