//! Error types for depaudit operations.
//!
//! This module defines [`AuditError`], the error type used for the few
//! structural failures that abort an audit, and a [`Result`] alias.
//!
//! # Error Handling Strategy
//!
//! - Probe failures are never errors: they become
//!   [`ProbeOutcome`](crate::requirements::ProbeOutcome) values and the
//!   dependency is reported as missing
//! - Use `AuditError` for failures that stop the program (bad config,
//!   unsupported platform, a command that could not be spawned)
//! - Use `anyhow::Error` (via `AuditError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for depaudit operations.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The host platform cannot run the desktop application at all.
    #[error("Unsupported platform: {platform}")]
    UnsupportedPlatform { platform: String },

    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file exists but could not be read.
    #[error("Failed to read config at {path}: {message}")]
    ConfigReadError { path: PathBuf, message: String },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Shell command could not be run.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AuditError {
    /// Process exit code for this error.
    ///
    /// Configuration problems are reported like bad arguments (1); everything
    /// else aborts with 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            AuditError::ConfigNotFound { .. }
            | AuditError::ConfigReadError { .. }
            | AuditError::ConfigParseError { .. }
            | AuditError::ConfigValidationError { .. } => 1,
            _ => 2,
        }
    }
}

/// Result type alias for depaudit operations.
pub type Result<T> = std::result::Result<T, AuditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_platform_displays_platform() {
        let err = AuditError::UnsupportedPlatform {
            platform: "windows".into(),
        };
        assert!(err.to_string().contains("windows"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn config_not_found_displays_path() {
        let err = AuditError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = AuditError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn config_read_error_is_bad_arguments() {
        let err = AuditError::ConfigReadError {
            path: PathBuf::from("/etc/depaudit"),
            message: "Is a directory".into(),
        };
        assert!(err.to_string().contains("/etc/depaudit"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn config_validation_error_is_bad_arguments() {
        let err = AuditError::ConfigValidationError {
            message: "unknown distribution 'plan9'".into(),
        };
        assert!(err.to_string().contains("plan9"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = AuditError::CommandFailed {
            command: "apt-get install libgtk-3-0".into(),
            code: None,
        };
        let msg = err.to_string();
        assert!(msg.contains("apt-get install"));
        assert!(msg.contains("None"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: AuditError = io_err.into();
        assert!(matches!(err, AuditError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: AuditError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, AuditError::Other(_)));
        assert_eq!(err.to_string(), "boom");
    }
}
