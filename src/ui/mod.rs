//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for piped, scripted and batch runs
//! - [`MockUI`] for tests
//!
//! # Example
//!
//! ```
//! use depaudit::ui::{create_ui, OutputMode};
//!
//! // Batch mode never touches the terminal
//! let mut ui = create_ui(false, true, OutputMode::Normal, false);
//! ui.show_header("Dependency audit");
//! ui.success("All dependencies are installed");
//! ```

pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::{confirm_on_terminal, parse_confirmation};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, AuditTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &Prompt) -> Result<bool>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a shell command the user may run.
    fn show_command(&mut self, command: &str);
}

/// A yes/no question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Unique key for the prompt (used for lookup in tests).
    pub key: String,
    /// The question to display.
    pub question: String,
    /// Answer used when the user just presses enter, or when nothing can be read.
    pub default: bool,
}

impl Prompt {
    pub fn new(key: impl Into<String>, question: impl Into<String>, default: bool) -> Self {
        Self {
            key: key.into(),
            question: question.into(),
            default,
        }
    }

    /// The `[Y/n]` / `[y/N]` hint for this prompt's default.
    pub fn choices(&self) -> &'static str {
        if self.default {
            "[Y/n]"
        } else {
            "[y/N]"
        }
    }
}
