//! Audit command implementation.
//!
//! Runs the whole pipeline: platform check, distribution and language
//! detection, the audit itself, the report, and the offer to install.

use crate::cli::args::Cli;
use crate::config::{configured_distribution, AuditConfig};
use crate::detection::{
    detect_language_profile_with_env, profile_for_locale, Distribution, DistributionDetector,
    LanguageDetection,
};
use crate::error::Result;
use crate::requirements::installer::{
    default_context, offer_install, InstallerContext, NOT_RUN_EXIT_CODE,
};
use crate::requirements::ocr::{OcrEngine, TesseractEngine};
use crate::requirements::probe::ProbeEnvironment;
use crate::requirements::report::{build_install_command, format_report};
use crate::requirements::Auditor;
use crate::shell::{check_platform, Platform};
use crate::ui::UserInterface;

use super::{Command, CommandResult};

type EnvLookup<'a> = Box<dyn Fn(&str) -> std::result::Result<String, std::env::VarError> + 'a>;

/// Run-wide flags, threaded explicitly from `main`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuditOptions {
    /// Debug logging on stdout and the verbose output mode.
    pub verbose: bool,
    /// Never prompt and never run the install command.
    pub batch: bool,
    /// Colored output disabled by flag or configuration.
    pub no_color: bool,
}

impl AuditOptions {
    /// Combine command line flags with configuration settings.
    pub fn from_cli(cli: &Cli, config: &AuditConfig) -> Self {
        Self {
            verbose: cli.verbose,
            batch: cli.batch,
            no_color: cli.no_color || config.settings.no_color,
        }
    }
}

/// The audit command implementation.
///
/// Everything the audit touches on the host (platform, os-release files,
/// locale variables, search directories, the OCR engine, the package
/// manager) can be replaced for tests through the `with_*` methods.
pub struct AuditCommand<'a> {
    config: AuditConfig,
    options: AuditOptions,
    platform: Platform,
    detector: DistributionDetector,
    environment: ProbeEnvironment,
    locale_env: EnvLookup<'a>,
    ocr: Option<Box<dyn OcrEngine + 'a>>,
    installer: InstallerContext<'a>,
}

impl<'a> AuditCommand<'a> {
    /// Create an audit of the running system.
    pub fn new(config: AuditConfig, options: AuditOptions) -> Self {
        let environment = ProbeEnvironment::system().with_overrides(&config.probe_paths);
        Self {
            config,
            options,
            platform: Platform::current(),
            detector: DistributionDetector::new(),
            environment,
            locale_env: Box::new(|key: &str| std::env::var(key)),
            ocr: None,
            installer: default_context(),
        }
    }

    /// Pretend to run on `platform`.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Use a different distribution detector.
    pub fn with_detector(mut self, detector: DistributionDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Search these locations instead of the system ones.
    pub fn with_environment(mut self, environment: ProbeEnvironment) -> Self {
        self.environment = environment;
        self
    }

    /// Read locale variables through `env_fn`.
    pub fn with_locale_env<F>(mut self, env_fn: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<String, std::env::VarError> + 'a,
    {
        self.locale_env = Box::new(env_fn);
        self
    }

    /// Use a specific OCR engine instead of Tesseract on the probe PATH.
    pub fn with_ocr(mut self, ocr: Box<dyn OcrEngine + 'a>) -> Self {
        self.ocr = Some(ocr);
        self
    }

    /// Run install commands through `installer`.
    pub fn with_installer(mut self, installer: InstallerContext<'a>) -> Self {
        self.installer = installer;
        self
    }

    fn detect_distribution(&self, ui: &mut dyn UserInterface) -> Result<Distribution> {
        if let Some(distribution) = configured_distribution(&self.config)? {
            tracing::debug!("distribution {} from configuration", distribution);
            return Ok(distribution);
        }

        let detection = self.detector.detect();
        if let Some(warning) = &detection.warning {
            ui.warning(warning);
        }
        Ok(detection.distribution)
    }

    fn detect_language(&self, ui: &mut dyn UserInterface) -> LanguageDetection {
        let detection = match &self.config.locale {
            Some(locale) => {
                tracing::debug!("locale {} from configuration", locale);
                profile_for_locale(Some(locale.as_str()))
            }
            None => detect_language_profile_with_env(&*self.locale_env),
        };
        if let Some(warning) = &detection.warning {
            ui.warning(warning);
        }
        detection
    }
}

impl Command for AuditCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        check_platform(self.platform)?;

        let distribution = self.detect_distribution(ui)?;
        let language = self.detect_language(ui);
        let profile = &language.profile;

        if ui.output_mode().shows_details() {
            ui.message(&format!("Distribution: {}", distribution));
            ui.message(&format!(
                "Language: OCR {}, dictionary {} (locale {})",
                profile.ocr,
                profile.dictionary,
                language.locale.as_deref().unwrap_or("unset")
            ));
        }

        let tesseract = TesseractEngine::new(&self.environment.executable_dirs);
        let ocr: &dyn OcrEngine = match &self.ocr {
            Some(engine) => engine.as_ref(),
            None => &tesseract,
        };
        let auditor = Auditor::new(&self.environment, ocr);
        let missing = auditor.audit_all(profile);

        if missing.is_empty() {
            ui.success("All dependencies are installed");
            return Ok(CommandResult::success());
        }

        let report = format_report(&missing, distribution);
        ui.show_header("Missing dependencies:");
        for line in &report.lines {
            ui.message(&format!("  - {}", line));
        }

        let Some(command) = build_install_command(distribution, &report.packages) else {
            if distribution.is_known() {
                ui.warning("No package is known for these dependencies on your distribution");
            } else {
                ui.warning("Install the dependencies above with your package manager");
            }
            return Ok(CommandResult::failure(NOT_RUN_EXIT_CODE));
        };

        let outcome = offer_install(&command, ui, self.options.batch, &self.installer)?;
        Ok(CommandResult::from_exit_code(outcome.exit_code()))
    }
}
