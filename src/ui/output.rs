//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also show what each audit stage found and where it searched.
    Verbose,
    /// Show the report and prompts only.
    #[default]
    Normal,
}

impl OutputMode {
    /// Build from the `--verbose` flag.
    pub fn from_verbose(verbose: bool) -> Self {
        if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows per-stage details.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }

    #[test]
    fn verbose_flag_selects_mode() {
        assert_eq!(OutputMode::from_verbose(true), OutputMode::Verbose);
        assert_eq!(OutputMode::from_verbose(false), OutputMode::Normal);
    }

    #[test]
    fn only_verbose_shows_details() {
        assert!(OutputMode::Verbose.shows_details());
        assert!(!OutputMode::Normal.shows_details());
    }
}
