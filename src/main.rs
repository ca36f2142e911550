//! depaudit CLI entry point.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use depaudit::cli::{AuditCommand, AuditOptions, Cli, Command};
use depaudit::config::load_config;
use depaudit::ui::{create_ui, should_use_colors, OutputMode};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--verbose` flag sets level to DEBUG, written to stdout
/// 2. `RUST_LOG` environment variable (if set), written to stderr
/// 3. Default is off; the UI already shows warnings
fn init_tracing(verbose: bool, ansi: bool) {
    let (filter, writer) = if verbose {
        (
            EnvFilter::new("depaudit=debug"),
            BoxMakeWriter::new(std::io::stdout),
        )
    } else {
        (
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")),
            BoxMakeWriter::new(std::io::stderr),
        )
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(ansi)
                .with_writer(writer),
        )
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    init_tracing(cli.verbose, should_use_colors(cli.no_color));
    tracing::debug!("depaudit starting with args: {:?}", cli);

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(e.exit_code() as u8);
        }
    };

    let options = AuditOptions::from_cli(&cli, &config);
    let colors = should_use_colors(options.no_color);
    if !colors {
        console::set_colors_enabled(false);
    }

    let mut ui = create_ui(
        true,
        options.batch,
        OutputMode::from_verbose(options.verbose),
        colors,
    );

    let command = AuditCommand::new(config, options);
    match command.execute(ui.as_mut()) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
