//! Non-interactive UI for piped and batch runs.

use std::io::{self, BufRead, Write};

use crate::error::Result;

use super::{parse_confirmation, OutputMode, Prompt, UserInterface};

/// UI implementation used when stdout is not a terminal, or in batch mode.
///
/// Output is plain text; warnings and errors go to stderr. Questions are
/// answered from `input` one line at a time. Without an input (batch mode)
/// every question takes its default and nothing is read.
pub struct NonInteractiveUI {
    mode: OutputMode,
    input: Option<Box<dyn BufRead>>,
}

impl NonInteractiveUI {
    /// Create a UI that answers questions from stdin.
    pub fn new(mode: OutputMode) -> Self {
        Self::with_input(mode, Box::new(io::BufReader::new(io::stdin())))
    }

    /// Create a UI that never reads input.
    pub fn batch(mode: OutputMode) -> Self {
        Self { mode, input: None }
    }

    /// Create with an explicit input source (for testing).
    pub fn with_input(mode: OutputMode, input: Box<dyn BufRead>) -> Self {
        Self {
            mode,
            input: Some(input),
        }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        let Some(input) = self.input.as_mut() else {
            tracing::debug!("batch mode, '{}' answered {}", prompt.key, prompt.default);
            return Ok(prompt.default);
        };

        print!("{} {} ", prompt.question, prompt.choices());
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF declines
            println!();
            return Ok(false);
        }
        Ok(parse_confirmation(&line, prompt.default))
    }

    fn show_header(&mut self, title: &str) {
        println!("{}", title);
    }

    fn show_command(&mut self, command: &str) {
        println!("  $ {}", command);
    }
}
