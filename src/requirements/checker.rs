//! The dependency auditor.
//!
//! `Auditor` walks the catalog in a fixed order (core modules, OCR support,
//! spelling dictionary) and returns every dependency whose probe outcome
//! [`is_missing`](crate::requirements::ProbeOutcome::is_missing). Nothing
//! here returns an error; a probe that cannot decide is recorded as missing.

use crate::detection::LanguageProfile;
use crate::requirements::ocr::OcrEngine;
use crate::requirements::probe::{
    DictionaryProbe, ModuleProbe, OcrLanguageProbe, Probe, ProbeEnvironment, ToolProbe,
};
use crate::requirements::registry::{
    Dependency, DependencyDescriptor, ProbeSpec, CORE_MODULES, OCR_ENGINE, OCR_LANGUAGE_DATA,
    SPELLING_DICTIONARY,
};

/// Audits the system against the dependency catalog.
pub struct Auditor<'a> {
    environment: &'a ProbeEnvironment,
    ocr: &'a dyn OcrEngine,
}

impl<'a> Auditor<'a> {
    /// Create an auditor searching `environment` and asking `ocr` for languages.
    pub fn new(environment: &'a ProbeEnvironment, ocr: &'a dyn OcrEngine) -> Self {
        Self { environment, ocr }
    }

    /// Core libraries that are not installed.
    pub fn find_missing_core_modules(&self) -> Vec<Dependency> {
        // Core modules never use language templates.
        let profile = LanguageProfile::placeholder();
        CORE_MODULES
            .iter()
            .filter(|descriptor| self.is_missing(descriptor, &profile, &[]))
            .map(|descriptor| descriptor.resolve(&profile))
            .collect()
    }

    /// OCR engine and OCR language data, reported independently.
    ///
    /// An engine that is absent, or that fails to list its languages, has
    /// no languages; the language data is then reported too.
    pub fn find_missing_ocr_support(&self, profile: &LanguageProfile) -> Vec<Dependency> {
        let mut missing = Vec::new();

        if self.is_missing(&OCR_ENGINE, profile, &[]) {
            missing.push(OCR_ENGINE.resolve(profile));
        }

        let languages = self.ocr_languages();
        if self.is_missing(&OCR_LANGUAGE_DATA, profile, &languages) {
            missing.push(OCR_LANGUAGE_DATA.resolve(profile));
        }

        missing
    }

    /// Spelling dictionary for the profile's language, if not installed.
    pub fn find_missing_dictionary(&self, profile: &LanguageProfile) -> Vec<Dependency> {
        if self.is_missing(&SPELLING_DICTIONARY, profile, &[]) {
            vec![SPELLING_DICTIONARY.resolve(profile)]
        } else {
            Vec::new()
        }
    }

    /// Everything missing: core modules, then OCR, then dictionary.
    pub fn audit_all(&self, profile: &LanguageProfile) -> Vec<Dependency> {
        let mut missing = self.find_missing_core_modules();
        missing.extend(self.find_missing_ocr_support(profile));
        missing.extend(self.find_missing_dictionary(profile));
        missing
    }

    fn ocr_languages(&self) -> Vec<String> {
        if self.ocr.locate().is_none() {
            tracing::debug!("{} not found, no OCR languages", self.ocr.name());
            return Vec::new();
        }
        match self.ocr.languages() {
            Ok(languages) => {
                tracing::debug!("{} languages: {:?}", self.ocr.name(), languages);
                languages
            }
            Err(e) => {
                tracing::debug!("{} could not list languages: {}", self.ocr.name(), e);
                Vec::new()
            }
        }
    }

    fn is_missing(
        &self,
        descriptor: &DependencyDescriptor,
        profile: &LanguageProfile,
        ocr_languages: &[String],
    ) -> bool {
        let probe = self.build_probe(descriptor, profile, ocr_languages);
        let outcome = probe.probe();
        tracing::debug!(
            "{} [{}]: {}",
            descriptor.display_name,
            probe.identifier(),
            outcome
        );
        outcome.is_missing()
    }

    fn build_probe<'p>(
        &'p self,
        descriptor: &DependencyDescriptor,
        profile: &LanguageProfile,
        ocr_languages: &'p [String],
    ) -> Box<dyn Probe + 'p> {
        match descriptor.probe {
            ProbeSpec::Module(soname) => {
                Box::new(ModuleProbe::new(soname, &self.environment.library_dirs))
            }
            ProbeSpec::Tool(tool) => Box::new(ToolProbe::new(tool, &self.environment.executable_dirs)),
            ProbeSpec::OcrLanguage => Box::new(OcrLanguageProbe::new(&profile.ocr, ocr_languages)),
            ProbeSpec::Dictionary => Box::new(DictionaryProbe::new(
                &profile.dictionary,
                &self.environment.dictionary_dirs,
            )),
        }
    }
}
