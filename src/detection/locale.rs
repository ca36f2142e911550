//! Language profile detection.
//!
//! The user's locale decides which OCR language data and which spelling
//! dictionary the application needs. Only the first two characters of the
//! locale are significant (`fr_FR.UTF-8` -> `fr`).

/// Placeholder shown in place of a language code the locale could not provide.
pub const PLACEHOLDER_LANGUAGE: &str = "<your language>";

/// Environment variables consulted for the locale, highest priority first.
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

/// OCR and dictionary language codes for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageProfile {
    /// Tesseract language code (ISO 639-2, e.g. "fra").
    pub ocr: String,
    /// Spelling dictionary language code (e.g. "fr").
    pub dictionary: String,
    placeholder: bool,
}

impl LanguageProfile {
    /// A profile for concrete language codes.
    pub fn new(ocr: impl Into<String>, dictionary: impl Into<String>) -> Self {
        Self {
            ocr: ocr.into(),
            dictionary: dictionary.into(),
            placeholder: false,
        }
    }

    /// The fallback profile for unrecognized locales.
    pub fn placeholder() -> Self {
        Self {
            ocr: PLACEHOLDER_LANGUAGE.to_string(),
            dictionary: PLACEHOLDER_LANGUAGE.to_string(),
            placeholder: true,
        }
    }

    /// Whether this is the fallback profile (codes are not real).
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }
}

struct LanguageRow {
    /// Two-letter locale code; `None` covers an unset, `C` or `POSIX` locale.
    locale: Option<&'static str>,
    ocr: &'static str,
    dictionary: &'static str,
}

const LANGUAGE_TABLE: &[LanguageRow] = &[
    LanguageRow {
        locale: None,
        ocr: "eng",
        dictionary: "en",
    },
    LanguageRow {
        locale: Some("en"),
        ocr: "eng",
        dictionary: "en",
    },
    LanguageRow {
        locale: Some("fr"),
        ocr: "fra",
        dictionary: "fr",
    },
    LanguageRow {
        locale: Some("de"),
        ocr: "deu",
        dictionary: "de",
    },
    LanguageRow {
        locale: Some("es"),
        ocr: "spa",
        dictionary: "es",
    },
    LanguageRow {
        locale: Some("it"),
        ocr: "ita",
        dictionary: "it",
    },
    LanguageRow {
        locale: Some("pt"),
        ocr: "por",
        dictionary: "pt",
    },
    LanguageRow {
        locale: Some("nl"),
        ocr: "nld",
        dictionary: "nl",
    },
    LanguageRow {
        locale: Some("ru"),
        ocr: "rus",
        dictionary: "ru",
    },
    LanguageRow {
        locale: Some("pl"),
        ocr: "pol",
        dictionary: "pl",
    },
    LanguageRow {
        locale: Some("sv"),
        ocr: "swe",
        dictionary: "sv",
    },
];

/// Look up the profile for a two-letter code (`None` = no locale).
pub fn lookup_language(code: Option<&str>) -> Option<LanguageProfile> {
    LANGUAGE_TABLE
        .iter()
        .find(|row| row.locale == code)
        .map(|row| LanguageProfile::new(row.ocr, row.dictionary))
}

/// Outcome of language profile detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageDetection {
    /// The resolved profile (possibly the placeholder).
    pub profile: LanguageProfile,
    /// The raw locale string, if one was set.
    pub locale: Option<String>,
    /// Non-fatal warning to show the user when detection fell back.
    pub warning: Option<String>,
}

/// Resolve a raw locale string (e.g. `fr_FR.UTF-8`) to a language profile.
pub fn profile_for_locale(locale: Option<&str>) -> LanguageDetection {
    let locale = locale.map(str::trim).filter(|l| !l.is_empty());

    let code = match locale {
        None => None,
        Some(l) if is_neutral_locale(l) => None,
        Some(l) => Some(l.chars().take(2).collect::<String>().to_lowercase()),
    };

    match lookup_language(code.as_deref()) {
        Some(profile) => LanguageDetection {
            profile,
            locale: locale.map(String::from),
            warning: None,
        },
        None => {
            let raw = locale.unwrap_or_default();
            tracing::warn!("no language profile for locale {}", raw);
            LanguageDetection {
                profile: LanguageProfile::placeholder(),
                locale: locale.map(String::from),
                warning: Some(format!(
                    "Unknown locale '{}': language-specific packages cannot be suggested",
                    raw
                )),
            }
        }
    }
}

/// Detect the language profile from locale variables read through `env_fn`.
///
/// Pass `std::env::var` for the process environment; tests pass a map.
pub fn detect_language_profile_with_env<F>(env_fn: F) -> LanguageDetection
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let locale = LOCALE_VARS
        .iter()
        .filter_map(|var| env_fn(var).ok())
        .find(|value| !value.trim().is_empty());
    tracing::debug!("locale from environment: {:?}", locale);
    profile_for_locale(locale.as_deref())
}

fn is_neutral_locale(locale: &str) -> bool {
    locale == "C" || locale == "POSIX" || locale.starts_with("C.")
}
