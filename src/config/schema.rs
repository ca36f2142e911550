//! Configuration schema.
//!
//! All fields are optional; an empty file is a valid configuration.
//!
//! ```yaml
//! distribution: fedora
//! locale: fr_FR
//! settings:
//!   no_color: true
//! probe_paths:
//!   library_dirs: [/usr/lib64]
//!   executable_dirs: [/usr/bin]
//!   dictionary_dirs: [/usr/share/hunspell]
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuditConfig {
    /// Distribution to report packages for, instead of reading os-release.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution: Option<String>,

    /// Locale to derive the language profile from, instead of LC_ALL/LANG.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Output settings.
    pub settings: Settings,

    /// Replacement search locations for probes.
    pub probe_paths: ProbePaths,
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Disable colored output.
    #[serde(skip_serializing_if = "is_false")]
    pub no_color: bool,
}

/// Search locations that replace the system defaults when set.
///
/// A list that is present but empty means "search nothing", which makes
/// every probe of that kind report the dependency as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProbePaths {
    /// Shared library directories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub library_dirs: Option<Vec<PathBuf>>,

    /// Executable directories (replaces PATH).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executable_dirs: Option<Vec<PathBuf>>,

    /// Hunspell/myspell dictionary directories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dictionary_dirs: Option<Vec<PathBuf>>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config: AuditConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, AuditConfig::default());
    }

    #[test]
    fn parses_full_document() {
        let yaml = r#"
distribution: arch
locale: de_DE.UTF-8
settings:
  no_color: true
probe_paths:
  library_dirs: [/opt/lib]
  executable_dirs: []
"#;
        let config: AuditConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.distribution.as_deref(), Some("arch"));
        assert_eq!(config.locale.as_deref(), Some("de_DE.UTF-8"));
        assert!(config.settings.no_color);
        assert_eq!(
            config.probe_paths.library_dirs,
            Some(vec![PathBuf::from("/opt/lib")])
        );
        assert_eq!(config.probe_paths.executable_dirs, Some(vec![]));
        assert_eq!(config.probe_paths.dictionary_dirs, None);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<AuditConfig, _> = serde_yaml::from_str("distro: fedora");
        assert!(result.is_err());
    }

    #[test]
    fn default_serializes_to_empty_sections() {
        let yaml = serde_yaml::to_string(&AuditConfig::default()).unwrap();
        assert!(!yaml.contains("distribution"));
        assert!(!yaml.contains("no_color"));
    }
}
