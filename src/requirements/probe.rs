//! Capability probes.
//!
//! Each probe answers one question ("is `libgtk-3.so.0` loadable?", "is
//! `tesseract` on PATH?", "is there a French hunspell dictionary?") with a
//! [`ProbeOutcome`]. Probes never fail: a missing directory or an
//! unreadable file is an outcome, not an error.
//!
//! All locations a probe searches come from a [`ProbeEnvironment`], which is
//! built from the running system by default and can be redirected from the
//! configuration file (tests point it at temporary directories).
//!
//! # Example
//!
//! ```
//! use depaudit::requirements::probe::{Probe, ProbeEnvironment, ToolProbe};
//!
//! let env = ProbeEnvironment::empty();
//! let probe = ToolProbe::new("tesseract", &env.executable_dirs);
//! assert!(probe.probe().is_missing());
//! ```

use crate::config::ProbePaths;
use crate::requirements::status::ProbeOutcome;
use std::fs;
use std::path::{Path, PathBuf};

/// A single capability check.
pub trait Probe {
    /// What is being looked for (soname, tool name, data file).
    fn identifier(&self) -> &str;

    /// Run the check.
    fn probe(&self) -> ProbeOutcome;
}

/// Search locations used by every probe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeEnvironment {
    /// Directories searched for shared libraries.
    pub library_dirs: Vec<PathBuf>,
    /// Directories searched for executables (PATH).
    pub executable_dirs: Vec<PathBuf>,
    /// Directories searched for hunspell/myspell dictionaries.
    pub dictionary_dirs: Vec<PathBuf>,
}

impl ProbeEnvironment {
    /// An environment with nothing to search.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Search locations of the running system.
    pub fn system() -> Self {
        Self::system_with_env(|key: &str| std::env::var(key))
    }

    /// Search locations with a custom env var lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn system_with_env<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        Self {
            library_dirs: default_library_dirs(&env_fn),
            executable_dirs: env_fn("PATH")
                .map(|p| split_path_list(&p))
                .unwrap_or_default(),
            dictionary_dirs: default_dictionary_dirs(&env_fn),
        }
    }

    /// Replace search locations with the ones set in configuration.
    pub fn with_overrides(mut self, paths: &ProbePaths) -> Self {
        if let Some(dirs) = &paths.library_dirs {
            self.library_dirs = dirs.clone();
        }
        if let Some(dirs) = &paths.executable_dirs {
            self.executable_dirs = dirs.clone();
        }
        if let Some(dirs) = &paths.dictionary_dirs {
            self.dictionary_dirs = dirs.clone();
        }
        self
    }
}

fn split_path_list(value: &str) -> Vec<PathBuf> {
    std::env::split_paths(value)
        .filter(|p| !p.as_os_str().is_empty())
        .collect()
}

fn default_library_dirs<F>(env_fn: &F) -> Vec<PathBuf>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let mut dirs = env_fn("LD_LIBRARY_PATH")
        .map(|p| split_path_list(&p))
        .unwrap_or_default();

    let multiarch = format!("{}-linux-gnu", std::env::consts::ARCH);
    for dir in [
        format!("/usr/lib/{}", multiarch),
        format!("/lib/{}", multiarch),
        "/usr/lib64".to_string(),
        "/lib64".to_string(),
        "/usr/lib".to_string(),
        "/lib".to_string(),
        "/usr/local/lib".to_string(),
    ] {
        let dir = PathBuf::from(dir);
        if !dirs.contains(&dir) {
            dirs.push(dir);
        }
    }
    dirs
}

fn default_dictionary_dirs<F>(env_fn: &F) -> Vec<PathBuf>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let mut dirs = env_fn("DICPATH")
        .map(|p| split_path_list(&p))
        .unwrap_or_default();
    dirs.extend(
        [
            "/usr/share/hunspell",
            "/usr/share/myspell",
            "/usr/share/myspell/dicts",
        ]
        .into_iter()
        .map(PathBuf::from),
    );
    dirs
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does NOT use
/// the `which` command, whose behavior varies across systems.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Shared library presence, by soname.
pub struct ModuleProbe<'a> {
    soname: String,
    search_dirs: &'a [PathBuf],
}

impl<'a> ModuleProbe<'a> {
    pub fn new(soname: &str, search_dirs: &'a [PathBuf]) -> Self {
        Self {
            soname: soname.to_string(),
            search_dirs,
        }
    }
}

impl Probe for ModuleProbe<'_> {
    fn identifier(&self) -> &str {
        &self.soname
    }

    fn probe(&self) -> ProbeOutcome {
        let existing: Vec<&PathBuf> = self.search_dirs.iter().filter(|d| d.is_dir()).collect();
        if existing.is_empty() {
            return ProbeOutcome::indeterminate("no library directory exists");
        }
        if existing.iter().any(|d| d.join(&self.soname).exists()) {
            ProbeOutcome::Available
        } else {
            ProbeOutcome::Unavailable
        }
    }
}

/// Executable presence on PATH.
pub struct ToolProbe<'a> {
    tool: String,
    path: &'a [PathBuf],
}

impl<'a> ToolProbe<'a> {
    pub fn new(tool: &str, path: &'a [PathBuf]) -> Self {
        Self {
            tool: tool.to_string(),
            path,
        }
    }
}

impl Probe for ToolProbe<'_> {
    fn identifier(&self) -> &str {
        &self.tool
    }

    fn probe(&self) -> ProbeOutcome {
        if self.path.is_empty() {
            return ProbeOutcome::indeterminate("PATH is empty");
        }
        match resolve_tool_path(&self.tool, self.path) {
            Some(_) => ProbeOutcome::Available,
            None => ProbeOutcome::Unavailable,
        }
    }
}

/// Hunspell/myspell dictionary presence for a language.
///
/// Matches `<lang>.dic` and regional variants `<lang>_<REGION>.dic`, so a
/// `fr` profile is satisfied by `fr_FR.dic`.
pub struct DictionaryProbe<'a> {
    language: String,
    dirs: &'a [PathBuf],
}

impl<'a> DictionaryProbe<'a> {
    pub fn new(language: &str, dirs: &'a [PathBuf]) -> Self {
        Self {
            language: language.to_string(),
            dirs,
        }
    }
}

impl Probe for DictionaryProbe<'_> {
    fn identifier(&self) -> &str {
        &self.language
    }

    fn probe(&self) -> ProbeOutcome {
        let mut readable = false;
        for dir in self.dirs {
            let Ok(entries) = fs::read_dir(dir) else {
                continue;
            };
            readable = true;
            let found = entries.flatten().any(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| is_dictionary_for(name, &self.language))
            });
            if found {
                return ProbeOutcome::Available;
            }
        }
        if readable {
            ProbeOutcome::Unavailable
        } else {
            ProbeOutcome::indeterminate("no dictionary directory is readable")
        }
    }
}

fn is_dictionary_for(file_name: &str, language: &str) -> bool {
    let Some(stem) = file_name.strip_suffix(".dic") else {
        return false;
    };
    stem == language
        || stem
            .strip_prefix(language)
            .is_some_and(|rest| rest.starts_with(['_', '-']))
}

/// Membership of a language in the OCR engine's language list.
pub struct OcrLanguageProbe<'a> {
    language: String,
    available: &'a [String],
}

impl<'a> OcrLanguageProbe<'a> {
    pub fn new(language: &str, available: &'a [String]) -> Self {
        Self {
            language: language.to_string(),
            available,
        }
    }
}

impl Probe for OcrLanguageProbe<'_> {
    fn identifier(&self) -> &str {
        &self.language
    }

    fn probe(&self) -> ProbeOutcome {
        if self.available.iter().any(|l| l == &self.language) {
            ProbeOutcome::Available
        } else {
            ProbeOutcome::Unavailable
        }
    }
}
