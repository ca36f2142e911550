//! Linux distribution detection.
//!
//! The distribution decides which package names and which install command
//! are suggested for missing dependencies. Detection reads `os-release`
//! and matches `ID` first, then every `ID_LIKE` entry, so derivatives
//! (Pop!_OS, elementary, Rocky, ...) resolve to the family they package for.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

/// A packaging family that depaudit knows package names for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Distribution {
    Debian,
    Ubuntu,
    LinuxMint,
    Fedora,
    Arch,
    Gentoo,
    Suse,
    /// Sentinel for anything that could not be resolved.
    Unknown,
}

/// Every distribution with an install command, in display order.
pub const KNOWN_DISTRIBUTIONS: &[Distribution] = &[
    Distribution::Debian,
    Distribution::Ubuntu,
    Distribution::LinuxMint,
    Distribution::Fedora,
    Distribution::Arch,
    Distribution::Gentoo,
    Distribution::Suse,
];

impl Distribution {
    /// Lowercase identifier (e.g. "debian").
    pub fn as_str(&self) -> &'static str {
        match self {
            Distribution::Debian => "debian",
            Distribution::Ubuntu => "ubuntu",
            Distribution::LinuxMint => "linuxmint",
            Distribution::Fedora => "fedora",
            Distribution::Arch => "arch",
            Distribution::Gentoo => "gentoo",
            Distribution::Suse => "suse",
            Distribution::Unknown => "unknown",
        }
    }

    /// Install command prefix for this distribution's package manager.
    pub fn install_prefix(&self) -> Option<&'static str> {
        match self {
            Distribution::Debian | Distribution::Ubuntu | Distribution::LinuxMint => {
                Some("apt-get install")
            }
            Distribution::Fedora => Some("dnf install"),
            Distribution::Arch => Some("pacman -S"),
            Distribution::Gentoo => Some("emerge"),
            Distribution::Suse => Some("zypper in"),
            Distribution::Unknown => None,
        }
    }

    /// Whether this is a real distribution rather than the sentinel.
    pub fn is_known(&self) -> bool {
        !matches!(self, Distribution::Unknown)
    }

    /// Map an `os-release` `ID` / `ID_LIKE` value to a distribution.
    ///
    /// Accepts the aliases used by derivatives that share a package
    /// namespace with their parent.
    pub fn from_os_id(id: &str) -> Option<Self> {
        let id = id.trim().to_lowercase();
        match id.as_str() {
            "debian" | "raspbian" => Some(Distribution::Debian),
            "ubuntu" => Some(Distribution::Ubuntu),
            "linuxmint" => Some(Distribution::LinuxMint),
            "fedora" => Some(Distribution::Fedora),
            "arch" | "archlinux" | "manjaro" | "endeavouros" => Some(Distribution::Arch),
            "gentoo" => Some(Distribution::Gentoo),
            "suse" | "sles" | "opensuse" => Some(Distribution::Suse),
            other if other.starts_with("opensuse") => Some(Distribution::Suse),
            _ => None,
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Distribution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized == "unknown" {
            return Ok(Distribution::Unknown);
        }
        KNOWN_DISTRIBUTIONS
            .iter()
            .copied()
            .find(|d| d.as_str() == normalized)
            .ok_or_else(|| format!("unknown distribution: {}", s))
    }
}

/// The fields of an `os-release` file that detection cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsRelease {
    /// `ID=` value.
    pub id: Option<String>,
    /// Space-separated `ID_LIKE=` values.
    pub id_like: Vec<String>,
    /// `PRETTY_NAME=` value, used in log output only.
    pub pretty_name: Option<String>,
}

impl OsRelease {
    /// Parse the `KEY=value` lines of an `os-release` file.
    pub fn parse(contents: &str) -> Self {
        let mut release = OsRelease::default();

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = unquote(value.trim());
            match key.trim() {
                "ID" => release.id = Some(value.to_lowercase()),
                "ID_LIKE" => {
                    release.id_like = value
                        .split_whitespace()
                        .map(|s| s.to_lowercase())
                        .collect()
                }
                "PRETTY_NAME" => release.pretty_name = Some(value.to_string()),
                _ => {}
            }
        }

        release
    }

    /// Resolve `ID`, then each `ID_LIKE` entry in order.
    pub fn distribution(&self) -> Option<Distribution> {
        self.id
            .iter()
            .chain(self.id_like.iter())
            .find_map(|id| Distribution::from_os_id(id))
    }
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Outcome of distribution detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionDetection {
    /// The resolved distribution (possibly `Unknown`).
    pub distribution: Distribution,
    /// Non-fatal warning to show the user when detection fell back.
    pub warning: Option<String>,
}

/// Detects the running distribution from `os-release` files.
#[derive(Debug, Clone)]
pub struct DistributionDetector {
    os_release_paths: Vec<PathBuf>,
}

impl Default for DistributionDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl DistributionDetector {
    /// Detector reading the standard `os-release` locations.
    pub fn new() -> Self {
        Self {
            os_release_paths: vec![
                PathBuf::from("/etc/os-release"),
                PathBuf::from("/usr/lib/os-release"),
            ],
        }
    }

    /// Detector reading the given files, first readable one wins.
    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            os_release_paths: paths,
        }
    }

    /// Detect the distribution, falling back to `Unknown` with a warning.
    pub fn detect(&self) -> DistributionDetection {
        let Some((path, contents)) = self
            .os_release_paths
            .iter()
            .find_map(|p| fs::read_to_string(p).ok().map(|c| (p, c)))
        else {
            tracing::warn!("no readable os-release file");
            return DistributionDetection {
                distribution: Distribution::Unknown,
                warning: Some(
                    "Could not determine your distribution (no os-release file found)".to_string(),
                ),
            };
        };

        let release = OsRelease::parse(&contents);
        tracing::debug!(
            "read {}: id={:?} id_like={:?} name={:?}",
            path.display(),
            release.id,
            release.id_like,
            release.pretty_name
        );

        match release.distribution() {
            Some(distribution) => DistributionDetection {
                distribution,
                warning: None,
            },
            None => {
                let id = release.id.as_deref().unwrap_or("(none)");
                tracing::warn!("unrecognized distribution id {}", id);
                DistributionDetection {
                    distribution: Distribution::Unknown,
                    warning: Some(format!(
                        "Unknown distribution '{}': package names cannot be suggested",
                        id
                    )),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parse_reads_id_and_id_like() {
        let release = OsRelease::parse(
            r#"NAME="Pop!_OS"
ID=pop
ID_LIKE="ubuntu debian"
PRETTY_NAME="Pop!_OS 22.04 LTS"
"#,
        );
        assert_eq!(release.id.as_deref(), Some("pop"));
        assert_eq!(release.id_like, vec!["ubuntu", "debian"]);
        assert_eq!(release.pretty_name.as_deref(), Some("Pop!_OS 22.04 LTS"));
    }

    #[test]
    fn parse_skips_comments_and_garbage() {
        let release = OsRelease::parse("# comment\n\nnot a pair\nID='fedora'\n");
        assert_eq!(release.id.as_deref(), Some("fedora"));
        assert!(release.id_like.is_empty());
    }

    #[test]
    fn derivative_resolves_through_id_like() {
        let release = OsRelease::parse("ID=pop\nID_LIKE=\"ubuntu debian\"\n");
        assert_eq!(release.distribution(), Some(Distribution::Ubuntu));
    }

    #[test]
    fn id_wins_over_id_like() {
        let release = OsRelease::parse("ID=linuxmint\nID_LIKE=\"ubuntu debian\"\n");
        assert_eq!(release.distribution(), Some(Distribution::LinuxMint));
    }

    #[test]
    fn opensuse_variants_are_suse() {
        assert_eq!(
            Distribution::from_os_id("opensuse-tumbleweed"),
            Some(Distribution::Suse)
        );
        assert_eq!(
            Distribution::from_os_id("opensuse-leap"),
            Some(Distribution::Suse)
        );
        assert_eq!(Distribution::from_os_id("sles"), Some(Distribution::Suse));
    }

    #[test]
    fn unrelated_id_is_none() {
        assert_eq!(Distribution::from_os_id("nixos"), None);
    }

    #[test]
    fn from_str_accepts_identifiers_and_sentinel() {
        assert_eq!("Fedora".parse::<Distribution>(), Ok(Distribution::Fedora));
        assert_eq!(
            "linuxmint".parse::<Distribution>(),
            Ok(Distribution::LinuxMint)
        );
        assert_eq!("unknown".parse::<Distribution>(), Ok(Distribution::Unknown));
        assert!("plan9".parse::<Distribution>().is_err());
    }

    #[test]
    fn display_round_trips_identifier() {
        for d in KNOWN_DISTRIBUTIONS {
            assert_eq!(d.to_string().parse::<Distribution>(), Ok(*d));
        }
    }

    #[test]
    fn every_known_distribution_has_install_prefix() {
        for d in KNOWN_DISTRIBUTIONS {
            assert!(d.install_prefix().is_some(), "{} has no prefix", d);
        }
        assert_eq!(Distribution::Unknown.install_prefix(), None);
        assert_eq!(Distribution::Fedora.install_prefix(), Some("dnf install"));
    }

    #[test]
    fn detect_reads_first_existing_file() {
        let temp = TempDir::new().unwrap();
        let present = temp.path().join("os-release");
        std::fs::write(&present, "ID=arch\n").unwrap();

        let detector =
            DistributionDetector::with_paths(vec![temp.path().join("missing"), present]);
        let detection = detector.detect();

        assert_eq!(detection.distribution, Distribution::Arch);
        assert!(detection.warning.is_none());
    }

    #[test]
    fn detect_unknown_id_warns() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("os-release");
        std::fs::write(&path, "ID=nixos\n").unwrap();

        let detection = DistributionDetector::with_paths(vec![path]).detect();

        assert_eq!(detection.distribution, Distribution::Unknown);
        assert!(detection.warning.unwrap().contains("nixos"));
    }

    #[test]
    fn detect_without_os_release_warns() {
        let temp = TempDir::new().unwrap();
        let detection =
            DistributionDetector::with_paths(vec![temp.path().join("nothing")]).detect();

        assert_eq!(detection.distribution, Distribution::Unknown);
        assert!(detection.warning.is_some());
    }
}
