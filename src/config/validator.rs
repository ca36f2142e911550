//! Configuration validation rules.

use crate::config::schema::AuditConfig;
use crate::detection::{Distribution, KNOWN_DISTRIBUTIONS};
use crate::error::{AuditError, Result};

/// Validate a configuration.
///
/// The only value with a closed set is `distribution`; it must name a
/// known distribution or `unknown`.
pub fn validate(config: &AuditConfig) -> Result<()> {
    configured_distribution(config)?;

    if let Some(locale) = &config.locale {
        if locale.trim().is_empty() {
            return Err(AuditError::ConfigValidationError {
                message: "'locale' must not be empty".to_string(),
            });
        }
    }

    Ok(())
}

/// The distribution set in configuration, if any.
pub fn configured_distribution(config: &AuditConfig) -> Result<Option<Distribution>> {
    let Some(value) = &config.distribution else {
        return Ok(None);
    };

    value
        .parse::<Distribution>()
        .map(Some)
        .map_err(|_| AuditError::ConfigValidationError {
            message: format!(
                "unknown distribution '{}' (expected one of: {}, unknown)",
                value,
                known_names()
            ),
        })
}

fn known_names() -> String {
    KNOWN_DISTRIBUTIONS
        .iter()
        .map(|d| d.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
