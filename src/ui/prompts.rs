//! Confirmation prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

use crate::error::{AuditError, Result};

use super::Prompt;

/// Convert dialoguer errors to AuditError.
fn map_dialoguer_err(e: dialoguer::Error) -> AuditError {
    AuditError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Ask a yes/no question on the terminal.
pub fn confirm_on_terminal(prompt: &Prompt, term: &Term) -> Result<bool> {
    Confirm::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .default(prompt.default)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}

/// Interpret a line typed in answer to a yes/no question.
///
/// An empty line takes the default; `y` and `yes` (any case) confirm;
/// anything else declines.
pub fn parse_confirmation(input: &str, default: bool) -> bool {
    match input.trim().to_lowercase().as_str() {
        "" => default,
        "y" | "yes" => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_line_takes_default() {
        assert!(parse_confirmation("", true));
        assert!(!parse_confirmation("\n", false));
    }

    #[test]
    fn yes_variants_confirm() {
        for input in ["y", "Y", "yes", "YES\n", "  yes  "] {
            assert!(parse_confirmation(input, false), "input {:?}", input);
        }
    }

    #[test]
    fn anything_else_declines() {
        for input in ["n", "no", "yep", "sure", "1"] {
            assert!(!parse_confirmation(input, true), "input {:?}", input);
        }
    }
}
