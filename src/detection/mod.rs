//! Platform, distribution and locale detection.

pub mod distribution;
pub mod locale;

pub use distribution::{
    Distribution, DistributionDetection, DistributionDetector, OsRelease, KNOWN_DISTRIBUTIONS,
};
pub use locale::{
    detect_language_profile_with_env, lookup_language, profile_for_locale, LanguageDetection,
    LanguageProfile, PLACEHOLDER_LANGUAGE,
};
