//! Dependency auditing.
//!
//! This module decides which of the desktop application's system
//! dependencies are missing and what to install to fix that.
//!
//! # Modules
//!
//! - [`registry`] - Static catalog of dependencies and their packages
//! - [`probe`] - Capability probes and their search locations
//! - [`ocr`] - OCR engine discovery
//! - [`status`] - Probe outcome types
//! - [`checker`] - The auditor walking the catalog
//! - [`report`] - Report lines and the install command
//! - [`installer`] - Offering to run the install command

pub mod checker;
pub mod installer;
pub mod ocr;
pub mod probe;
pub mod registry;
pub mod report;
pub mod status;

pub use checker::Auditor;
pub use installer::{default_context, elevate, offer_install, InstallOutcome, InstallerContext};
pub use ocr::{OcrEngine, TesseractEngine};
pub use probe::{Probe, ProbeEnvironment};
pub use registry::{Dependency, DependencyDescriptor, ProbeSpec};
pub use report::{build_install_command, format_report, Report};
pub use status::ProbeOutcome;
