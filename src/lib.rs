//! depaudit - Pre-flight system dependency auditor.
//!
//! depaudit checks that the shared libraries, OCR engine, OCR language
//! data and spelling dictionary a desktop document application needs are
//! installed, reports what is missing with the package that provides it on
//! the detected Linux distribution, and offers to run the install command.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and the audit command
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`detection`] - Distribution and language profile detection
//! - [`error`] - Error types and result aliases
//! - [`requirements`] - Dependency catalog, probes, report and installer
//! - [`shell`] - Shell command execution and platform checks
//! - [`ui`] - Terminal output and prompts
//!
//! # Example
//!
//! ```
//! use depaudit::detection::{Distribution, LanguageProfile};
//! use depaudit::requirements::registry::CORE_MODULES;
//! use depaudit::requirements::{build_install_command, format_report};
//!
//! let profile = LanguageProfile::new("fra", "fr");
//! let missing: Vec<_> = CORE_MODULES[1..2].iter().map(|d| d.resolve(&profile)).collect();
//!
//! let report = format_report(&missing, Distribution::Fedora);
//! assert_eq!(report.lines, vec!["GTK 3 (libgtk-3.so.0, fedora: gtk3)"]);
//! assert_eq!(
//!     build_install_command(Distribution::Fedora, &report.packages).as_deref(),
//!     Some("dnf install gtk3")
//! );
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod requirements;
pub mod shell;
pub mod ui;

pub use error::{AuditError, Result};
