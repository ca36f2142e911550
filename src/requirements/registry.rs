//! Dependency catalog.
//!
//! Static descriptors for everything the desktop application needs from the
//! system, with the package that provides it on each distribution. The
//! catalog is fixed at compile time; language-dependent entries carry
//! `{ocr}` / `{dict}` templates that are filled from the user's
//! [`LanguageProfile`] when the audit runs.

use crate::detection::Distribution::{Arch, Debian, Fedora, Gentoo, LinuxMint, Suse, Ubuntu};
use crate::detection::{Distribution, LanguageProfile};
use std::collections::BTreeMap;

/// How a dependency is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeSpec {
    /// A shared library, by soname.
    Module(&'static str),
    /// An executable on PATH.
    Tool(&'static str),
    /// Trained data for the profile's OCR language.
    OcrLanguage,
    /// A spelling dictionary for the profile's dictionary language.
    Dictionary,
}

/// Static description of one checkable dependency.
#[derive(Debug)]
pub struct DependencyDescriptor {
    /// Human-readable name; may contain `{ocr}` / `{dict}`.
    pub display_name: &'static str,
    /// How to check for it.
    pub probe: ProbeSpec,
    /// Providing package per distribution; may contain `{ocr}` / `{dict}`.
    pub packages: &'static [(Distribution, &'static str)],
}

/// A descriptor resolved against a language profile.
///
/// This is the record that ends up in the missing-dependency report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Human-readable name.
    pub display_name: String,
    /// What the probe looked for (soname, tool, data file).
    pub probe_id: String,
    /// Providing package per distribution. Distributions without an entry
    /// are reported with the probe identifier only.
    pub packages: BTreeMap<Distribution, String>,
}

impl Dependency {
    /// Package providing this dependency on `distribution`.
    pub fn package_for(&self, distribution: Distribution) -> Option<&str> {
        self.packages.get(&distribution).map(String::as_str)
    }
}

impl DependencyDescriptor {
    /// Fill templates from `profile`.
    ///
    /// Package names that depend on the language are dropped for the
    /// placeholder profile: there is no real package to suggest.
    pub fn resolve(&self, profile: &LanguageProfile) -> Dependency {
        let packages = self
            .packages
            .iter()
            .filter_map(|(distribution, template)| {
                fill_package(template, profile).map(|name| (*distribution, name))
            })
            .collect();

        Dependency {
            display_name: fill(self.display_name, profile),
            probe_id: self.probe_id(profile),
            packages,
        }
    }

    /// The identifier shown when no package is known.
    pub fn probe_id(&self, profile: &LanguageProfile) -> String {
        match self.probe {
            ProbeSpec::Module(soname) => soname.to_string(),
            ProbeSpec::Tool(tool) => tool.to_string(),
            ProbeSpec::OcrLanguage => format!("tessdata/{}.traineddata", profile.ocr),
            ProbeSpec::Dictionary => format!("hunspell/{}.dic", profile.dictionary),
        }
    }
}

fn fill(template: &str, profile: &LanguageProfile) -> String {
    template
        .replace("{ocr}", &profile.ocr)
        .replace("{dict}", &profile.dictionary)
}

fn fill_package(template: &str, profile: &LanguageProfile) -> Option<String> {
    if profile.is_placeholder() && is_template(template) {
        return None;
    }
    Some(fill(template, profile))
}

fn is_template(s: &str) -> bool {
    s.contains("{ocr}") || s.contains("{dict}")
}

/// Libraries the application links against at runtime, in report order.
pub static CORE_MODULES: &[DependencyDescriptor] = &[
    DependencyDescriptor {
        display_name: "GObject introspection",
        probe: ProbeSpec::Module("libgirepository-1.0.so.1"),
        packages: &[
            (Debian, "libgirepository-1.0-1"),
            (Ubuntu, "libgirepository-1.0-1"),
            (LinuxMint, "libgirepository-1.0-1"),
            (Fedora, "gobject-introspection"),
            (Arch, "gobject-introspection-runtime"),
            (Gentoo, "dev-libs/gobject-introspection"),
            (Suse, "libgirepository-1_0-1"),
        ],
    },
    DependencyDescriptor {
        display_name: "GTK 3",
        probe: ProbeSpec::Module("libgtk-3.so.0"),
        packages: &[
            (Debian, "libgtk-3-0"),
            (Ubuntu, "libgtk-3-0"),
            (LinuxMint, "libgtk-3-0"),
            (Fedora, "gtk3"),
            (Arch, "gtk3"),
            (Gentoo, "x11-libs/gtk+"),
            (Suse, "libgtk-3-0"),
        ],
    },
    DependencyDescriptor {
        display_name: "Cairo",
        probe: ProbeSpec::Module("libcairo.so.2"),
        packages: &[
            (Debian, "libcairo2"),
            (Ubuntu, "libcairo2"),
            (LinuxMint, "libcairo2"),
            (Fedora, "cairo"),
            (Arch, "cairo"),
            (Gentoo, "x11-libs/cairo"),
            (Suse, "libcairo2"),
        ],
    },
    DependencyDescriptor {
        display_name: "Poppler GLib (PDF rendering)",
        probe: ProbeSpec::Module("libpoppler-glib.so.8"),
        packages: &[
            (Debian, "libpoppler-glib8"),
            (Ubuntu, "libpoppler-glib8"),
            (LinuxMint, "libpoppler-glib8"),
            (Fedora, "poppler-glib"),
            (Arch, "poppler-glib"),
            (Gentoo, "app-text/poppler"),
            (Suse, "libpoppler-glib8"),
        ],
    },
    DependencyDescriptor {
        display_name: "libnotify",
        probe: ProbeSpec::Module("libnotify.so.4"),
        packages: &[
            (Debian, "libnotify4"),
            (Ubuntu, "libnotify4"),
            (LinuxMint, "libnotify4"),
            (Fedora, "libnotify"),
            (Arch, "libnotify"),
            (Gentoo, "x11-libs/libnotify"),
            (Suse, "libnotify4"),
        ],
    },
    DependencyDescriptor {
        display_name: "Libinsane (scanner access)",
        probe: ProbeSpec::Module("libinsane.so.1"),
        packages: &[(Debian, "libinsane1"), (Ubuntu, "libinsane1")],
    },
];

/// The OCR engine itself.
pub static OCR_ENGINE: DependencyDescriptor = DependencyDescriptor {
    display_name: "Tesseract OCR",
    probe: ProbeSpec::Tool("tesseract"),
    packages: &[
        (Debian, "tesseract-ocr"),
        (Ubuntu, "tesseract-ocr"),
        (LinuxMint, "tesseract-ocr"),
        (Fedora, "tesseract"),
        (Arch, "tesseract"),
        (Gentoo, "app-text/tesseract"),
        (Suse, "tesseract-ocr"),
    ],
};

/// Trained data for the user's OCR language.
pub static OCR_LANGUAGE_DATA: DependencyDescriptor = DependencyDescriptor {
    display_name: "Tesseract language data ({ocr})",
    probe: ProbeSpec::OcrLanguage,
    packages: &[
        (Debian, "tesseract-ocr-{ocr}"),
        (Ubuntu, "tesseract-ocr-{ocr}"),
        (LinuxMint, "tesseract-ocr-{ocr}"),
        (Fedora, "tesseract-langpack-{ocr}"),
        (Arch, "tesseract-data-{ocr}"),
    ],
};

/// Spelling dictionary for the user's language.
pub static SPELLING_DICTIONARY: DependencyDescriptor = DependencyDescriptor {
    display_name: "Spelling dictionary ({dict})",
    probe: ProbeSpec::Dictionary,
    packages: &[
        (Debian, "hunspell-{dict}"),
        (Ubuntu, "hunspell-{dict}"),
        (LinuxMint, "hunspell-{dict}"),
        (Fedora, "hunspell-{dict}"),
        (Arch, "hunspell-{dict}"),
        (Gentoo, "app-dicts/myspell-{dict}"),
    ],
};
