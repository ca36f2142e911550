//! Offering to run the suggested install command.
//!
//! The command is printed (with `sudo` when not already root), then run
//! through the shell only if the user confirms. Batch runs print the
//! command and stop there.

use crate::error::Result;
use crate::shell::{self, CommandResult};
use crate::ui::{Prompt, UserInterface};

/// Exit code used when nothing was run, or the command died from a signal.
pub const NOT_RUN_EXIT_CODE: i32 = 2;

/// Mockable dependencies for the installer.
pub struct InstallerContext<'a> {
    /// Run a shell command with the terminal attached.
    pub run_command: &'a dyn Fn(&str) -> Result<CommandResult>,
    /// Whether the process already has root privileges.
    pub is_elevated: &'a dyn Fn() -> bool,
}

/// Build the default `InstallerContext` for production use.
pub fn default_context() -> InstallerContext<'static> {
    InstallerContext {
        run_command: &shell::execute,
        is_elevated: &shell::is_elevated,
    }
}

/// What happened to the install command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The user declined, or batch mode skipped the prompt.
    Declined,
    /// The command ran; `None` when it was killed by a signal.
    Executed { exit_code: Option<i32> },
}

impl InstallOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(&self) -> i32 {
        match self {
            InstallOutcome::Declined => NOT_RUN_EXIT_CODE,
            InstallOutcome::Executed { exit_code } => exit_code.unwrap_or(NOT_RUN_EXIT_CODE),
        }
    }
}

/// Prefix `command` with `sudo` unless already elevated.
pub fn elevate(command: &str, elevated: bool) -> String {
    if elevated {
        command.to_string()
    } else {
        format!("sudo {}", command)
    }
}

/// Show the install command and run it if the user agrees.
///
/// Interactive runs default to yes. In batch mode the command is only
/// printed.
pub fn offer_install(
    command: &str,
    ui: &mut dyn UserInterface,
    batch: bool,
    ctx: &InstallerContext<'_>,
) -> Result<InstallOutcome> {
    let command = elevate(command, (ctx.is_elevated)());

    ui.message("");
    ui.message("Suggested command:");
    ui.show_command(&command);

    if batch {
        tracing::debug!("batch mode, not running install command");
        ui.message("Batch mode: the command was not run.");
        return Ok(InstallOutcome::Declined);
    }

    let prompt = Prompt::new("install", "Run this command now?", true);
    if !ui.confirm(&prompt)? {
        ui.message("The command was not run.");
        return Ok(InstallOutcome::Declined);
    }

    let result = (ctx.run_command)(&command)?;
    match result.exit_code {
        Some(0) => ui.success("Install command completed"),
        Some(code) => ui.error(&format!("Install command exited with code {}", code)),
        None => ui.error("Install command was terminated by a signal"),
    }

    Ok(InstallOutcome::Executed {
        exit_code: result.exit_code,
    })
}
