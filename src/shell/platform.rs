//! Host platform checks.

use crate::error::{AuditError, Result};
use std::fmt;

/// Operating system family the binary runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOS,
    /// BSDs and other Unix systems.
    OtherUnix,
    Windows,
}

impl Platform {
    /// The platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(target_os = "linux") {
            Platform::Linux
        } else if cfg!(target_os = "macos") {
            Platform::MacOS
        } else if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::OtherUnix
        }
    }

    /// Whether the desktop application can run here at all.
    ///
    /// Only Linux has package names, but any Unix can still get a report.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Platform::Windows)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::MacOS => "macos",
            Platform::OtherUnix => "unix",
            Platform::Windows => "windows",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fail with [`AuditError::UnsupportedPlatform`] on platforms the
/// application does not run on.
pub fn check_platform(platform: Platform) -> Result<()> {
    if platform.is_supported() {
        Ok(())
    } else {
        Err(AuditError::UnsupportedPlatform {
            platform: platform.to_string(),
        })
    }
}

/// Check if running as root/admin.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(not(unix))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_is_unsupported() {
        let err = check_platform(Platform::Windows).unwrap_err();
        assert!(matches!(err, AuditError::UnsupportedPlatform { .. }));
        assert!(err.to_string().contains("windows"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn unix_platforms_are_supported() {
        for platform in [Platform::Linux, Platform::MacOS, Platform::OtherUnix] {
            assert!(check_platform(platform).is_ok(), "{}", platform);
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn current_is_linux_on_linux() {
        assert_eq!(Platform::current(), Platform::Linux);
    }

    #[test]
    fn is_elevated_does_not_panic() {
        let _ = is_elevated();
    }
}
