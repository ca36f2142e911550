//! Configuration loading, parsing, and validation.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery, loading and environment overrides in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use depaudit::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yml");
//! fs::write(&path, "locale: fr_FR\nsettings:\n  no_color: true\n").unwrap();
//!
//! let config = load_config(Some(&path)).unwrap();
//! assert!(config.settings.no_color);
//! ```
//!
//! # Configuration File Locations
//!
//! 1. The file given with `--config` (must exist)
//! 2. Otherwise `<config dir>/depaudit/config.yml`, if present
//!
//! `DEPAUDIT_DISTRIBUTION` and `DEPAUDIT_LOCALE` override the file.

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    apply_env_overrides, default_config_path, load_config, load_config_file,
    load_config_with_env, parse_config, DISTRIBUTION_ENV, LOCALE_ENV,
};
pub use schema::{AuditConfig, ProbePaths, Settings};
pub use validator::{configured_distribution, validate};
