//! Library integration tests.

use depaudit::AuditError;

#[test]
fn error_types_are_public() {
    let err = AuditError::UnsupportedPlatform {
        platform: "windows".into(),
    };
    assert!(err.to_string().contains("windows"));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> depaudit::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use depaudit::cli::Cli;
    use clap::Parser;

    let cli = Cli::parse_from(["depaudit", "-v", "--batch", "--config", "/tmp/a.yml"]);
    assert!(cli.verbose);
    assert!(cli.batch);
    assert!(!cli.no_color);
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/a.yml")));
}

#[test]
fn detection_types_are_public() {
    use depaudit::detection::{profile_for_locale, Distribution};

    let detection = profile_for_locale(Some("pt_BR.UTF-8"));
    assert_eq!(detection.profile.ocr, "por");
    assert_eq!(detection.profile.dictionary, "pt");
    assert_eq!("gentoo".parse::<Distribution>(), Ok(Distribution::Gentoo));
}

#[test]
fn ui_types_are_public() {
    use depaudit::ui::{MockUI, UserInterface};

    let mut ui = MockUI::new();
    ui.warning("careful");
    assert!(ui.has_warning("careful"));
}
