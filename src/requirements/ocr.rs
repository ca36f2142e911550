//! OCR engine discovery.
//!
//! The auditor needs two facts from the OCR engine: whether it is installed,
//! and which languages it has trained data for. Both come through the
//! [`OcrEngine`] trait so tests can substitute a fake engine.

use crate::error::{AuditError, Result};
use crate::requirements::probe::resolve_tool_path;
use std::path::PathBuf;
use std::process::Command;

/// An OCR engine the auditor can interrogate.
pub trait OcrEngine {
    /// Engine name, for log output.
    fn name(&self) -> &str;

    /// Path of the engine executable, if installed.
    fn locate(&self) -> Option<PathBuf>;

    /// Languages the engine has trained data for.
    fn languages(&self) -> Result<Vec<String>>;
}

/// Tesseract, found on the probe PATH.
pub struct TesseractEngine<'a> {
    path: &'a [PathBuf],
}

impl<'a> TesseractEngine<'a> {
    /// Look for `tesseract` in the given PATH entries.
    pub fn new(path: &'a [PathBuf]) -> Self {
        Self { path }
    }
}

impl OcrEngine for TesseractEngine<'_> {
    fn name(&self) -> &str {
        "tesseract"
    }

    fn locate(&self) -> Option<PathBuf> {
        resolve_tool_path("tesseract", self.path)
    }

    fn languages(&self) -> Result<Vec<String>> {
        let binary = self.locate().ok_or_else(|| AuditError::CommandFailed {
            command: "tesseract --list-langs".to_string(),
            code: None,
        })?;

        let output = Command::new(&binary).arg("--list-langs").output()?;
        if !output.status.success() {
            return Err(AuditError::CommandFailed {
                command: format!("{} --list-langs", binary.display()),
                code: output.status.code(),
            });
        }

        // Tesseract 3 printed the list on stderr.
        let stdout = String::from_utf8_lossy(&output.stdout);
        let listing = if stdout.trim().is_empty() {
            String::from_utf8_lossy(&output.stderr).into_owned()
        } else {
            stdout.into_owned()
        };

        Ok(parse_language_list(&listing))
    }
}

/// Parse `tesseract --list-langs` output.
///
/// The first line is a header ("List of available languages ..."); every
/// other non-empty line is a language code.
pub fn parse_language_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !line.starts_with("List of available languages"))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parse_skips_header() {
        let output = "List of available languages in \"/usr/share/tesseract-ocr/5/tessdata/\" (3):\neng\nfra\nosd\n";
        assert_eq!(parse_language_list(output), vec!["eng", "fra", "osd"]);
    }

    #[test]
    fn parse_empty_output_has_no_languages() {
        assert!(parse_language_list("").is_empty());
        assert!(parse_language_list("List of available languages (0):\n").is_empty());
    }

    #[test]
    fn missing_engine_cannot_list_languages() {
        let temp = TempDir::new().unwrap();
        let path = vec![temp.path().to_path_buf()];
        let engine = TesseractEngine::new(&path);

        assert!(engine.locate().is_none());
        assert!(engine.languages().is_err());
    }

    #[cfg(unix)]
    #[test]
    fn lists_languages_from_fake_binary() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let binary = temp.path().join("tesseract");
        std::fs::write(
            &binary,
            "#!/bin/sh\necho 'List of available languages (2):'\necho eng\necho deu\n",
        )
        .unwrap();
        std::fs::set_permissions(&binary, std::fs::Permissions::from_mode(0o755)).unwrap();
        let path = vec![temp.path().to_path_buf()];

        let engine = TesseractEngine::new(&path);

        assert_eq!(engine.locate(), Some(binary));
        assert_eq!(engine.languages().unwrap(), vec!["eng", "deu"]);
    }

    #[cfg(unix)]
    #[test]
    fn reads_listing_from_stderr_for_old_versions() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let binary = temp.path().join("tesseract");
        std::fs::write(
            &binary,
            "#!/bin/sh\necho 'List of available languages (1):' >&2\necho fra >&2\n",
        )
        .unwrap();
        std::fs::set_permissions(&binary, std::fs::Permissions::from_mode(0o755)).unwrap();
        let path = vec![temp.path().to_path_buf()];

        assert_eq!(
            TesseractEngine::new(&path).languages().unwrap(),
            vec!["fra"]
        );
    }
}
