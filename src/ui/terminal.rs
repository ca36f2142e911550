//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use crate::error::Result;

use super::{confirm_on_terminal, AuditTheme, NonInteractiveUI, OutputMode, Prompt, UserInterface};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: AuditTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, colors: bool) -> Self {
        Self {
            term: Term::stdout(),
            theme: AuditTheme::for_colors(colors),
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        confirm_on_terminal(prompt, &self.term)
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "{}", self.theme.format_header(title)).ok();
    }

    fn show_command(&mut self, command: &str) {
        writeln!(self.term, "{}", self.theme.format_command(command)).ok();
    }
}

/// Create the appropriate UI based on context.
///
/// Batch mode always gets a UI that answers every question with its
/// default. Otherwise the terminal UI is used when stdout is a terminal,
/// and a line-reading UI when it is not.
pub fn create_ui(
    interactive: bool,
    batch: bool,
    mode: OutputMode,
    colors: bool,
) -> Box<dyn UserInterface> {
    if batch {
        Box::new(NonInteractiveUI::batch(mode))
    } else if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode, colors))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
