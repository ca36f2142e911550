//! Probe outcome types.
//!
//! Every probe produces a `ProbeOutcome` instead of failing. Only
//! [`ProbeOutcome::Available`] means the dependency is present; the other
//! two outcomes put it on the missing list.

use std::fmt;

/// The result of probing a single capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The capability is present.
    Available,

    /// The probe ran and the capability is absent.
    Unavailable,

    /// The probe could not reach a verdict (nothing to search, tool
    /// crashed, unreadable directory). Counted as missing.
    Indeterminate {
        /// Why no verdict was possible.
        reason: String,
    },
}

impl ProbeOutcome {
    /// Whether the capability is present.
    pub fn is_available(&self) -> bool {
        matches!(self, ProbeOutcome::Available)
    }

    /// Whether the dependency belongs on the missing list.
    pub fn is_missing(&self) -> bool {
        !self.is_available()
    }

    /// Shorthand for an indeterminate outcome.
    pub fn indeterminate(reason: impl Into<String>) -> Self {
        ProbeOutcome::Indeterminate {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::Available => f.write_str("available"),
            ProbeOutcome::Unavailable => f.write_str("unavailable"),
            ProbeOutcome::Indeterminate { reason } => write!(f, "indeterminate ({})", reason),
        }
    }
}
