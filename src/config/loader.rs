//! Configuration file discovery and loading.
//!
//! Configuration comes from one YAML file, either given with `--config`
//! or found at `<config dir>/depaudit/config.yml`, and is then overridden
//! by `DEPAUDIT_*` environment variables.

use crate::config::schema::AuditConfig;
use crate::config::validator::validate;
use crate::error::{AuditError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding `distribution`.
pub const DISTRIBUTION_ENV: &str = "DEPAUDIT_DISTRIBUTION";

/// Environment variable overriding `locale`.
pub const LOCALE_ENV: &str = "DEPAUDIT_LOCALE";

/// Default config location: `~/.config/depaudit/config.yml` on Linux.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("depaudit").join("config.yml"))
}

/// Load, override from the environment, and validate the configuration.
///
/// An explicit path must exist. Without one, a missing default file
/// yields the default configuration.
pub fn load_config(explicit: Option<&Path>) -> Result<AuditConfig> {
    load_config_with_env(explicit, |key: &str| std::env::var(key))
}

/// Load configuration with a custom env var lookup function.
///
/// This allows testing without modifying actual environment variables.
pub fn load_config_with_env<F>(explicit: Option<&Path>, env_fn: F) -> Result<AuditConfig>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    let mut config = match explicit {
        Some(path) => load_config_file(path)?,
        None => match default_config_path() {
            Some(path) if path.is_file() => load_config_file(&path)?,
            _ => {
                tracing::debug!("no configuration file, using defaults");
                AuditConfig::default()
            }
        },
    };

    apply_env_overrides(&mut config, env_fn);
    validate(&config)?;
    Ok(config)
}

/// Load a single config file and parse it into AuditConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigReadError` if it exists but cannot be read.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<AuditConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AuditError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            AuditError::ConfigReadError {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        }
    })?;

    tracing::debug!("loaded configuration from {}", path.display());
    parse_config(&content, path)
}

/// Parse YAML content into AuditConfig.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<AuditConfig> {
    if content.trim().is_empty() {
        return Ok(AuditConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| AuditError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Apply `DEPAUDIT_DISTRIBUTION` and `DEPAUDIT_LOCALE` over the file values.
///
/// Empty variables are ignored.
pub fn apply_env_overrides<F>(config: &mut AuditConfig, env_fn: F)
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    let non_empty = |key: &str| env_fn(key).ok().filter(|v| !v.trim().is_empty());

    if let Some(distribution) = non_empty(DISTRIBUTION_ENV) {
        tracing::debug!("{} overrides distribution", DISTRIBUTION_ENV);
        config.distribution = Some(distribution);
    }
    if let Some(locale) = non_empty(LOCALE_ENV) {
        tracing::debug!("{} overrides locale", LOCALE_ENV);
        config.locale = Some(locale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn no_env(_: &str) -> std::result::Result<String, std::env::VarError> {
        Err(std::env::VarError::NotPresent)
    }

    fn env_from(
        pairs: &[(&str, &str)],
    ) -> impl Fn(&str) -> std::result::Result<String, std::env::VarError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned().ok_or(std::env::VarError::NotPresent)
    }

    #[test]
    fn load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yml"));
        assert!(matches!(result, Err(AuditError::ConfigNotFound { .. })));
    }

    #[test]
    fn load_config_file_directory_is_a_config_error() {
        let temp = TempDir::new().unwrap();
        let err = load_config_file(temp.path()).unwrap_err();
        assert!(matches!(err, AuditError::ConfigReadError { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn load_config_file_parses_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "distribution: gentoo\n").unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.distribution.as_deref(), Some("gentoo"));
    }

    #[test]
    fn parse_config_reports_path_on_error() {
        let err = parse_config("settings: [", Path::new("/etc/depaudit.yml")).unwrap_err();
        match err {
            AuditError::ConfigParseError { path, .. } => {
                assert_eq!(path, PathBuf::from("/etc/depaudit.yml"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn empty_file_is_default_config() {
        let config = parse_config("\n", Path::new("config.yml")).unwrap();
        assert_eq!(config, AuditConfig::default());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.yml");

        let err = load_config_with_env(Some(&path), no_env).unwrap_err();

        assert!(matches!(err, AuditError::ConfigNotFound { .. }));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn env_overrides_file_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "distribution: fedora\nlocale: de_DE\n").unwrap();

        let config = load_config_with_env(
            Some(&path),
            env_from(&[(DISTRIBUTION_ENV, "ubuntu"), (LOCALE_ENV, "")]),
        )
        .unwrap();

        assert_eq!(config.distribution.as_deref(), Some("ubuntu"));
        assert_eq!(config.locale.as_deref(), Some("de_DE"));
    }

    #[test]
    fn invalid_distribution_fails_validation() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "distribution: slackware\n").unwrap();

        let err = load_config_with_env(Some(&path), no_env).unwrap_err();

        assert!(matches!(err, AuditError::ConfigValidationError { .. }));
    }

    #[test]
    fn invalid_distribution_from_env_fails_validation() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yml");
        fs::write(&path, "").unwrap();

        let err =
            load_config_with_env(Some(&path), env_from(&[(DISTRIBUTION_ENV, "beos")])).unwrap_err();

        assert!(err.to_string().contains("beos"));
    }

    #[test]
    fn default_path_ends_with_depaudit_config() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("depaudit/config.yml"));
        }
    }
}
