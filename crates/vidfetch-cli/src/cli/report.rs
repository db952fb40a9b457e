//! Terminal output: the run summary on success, clap-styled errors on failure.

use std::fmt::Write as _;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::CommandFactory;
use vidfetch_core::options::{ParsedOptions, ValidationError, ValidationErrorKind};

use super::Cli;

/// Human-readable summary of the resolved options.
pub(super) fn summary(options: &ParsedOptions) -> String {
    let mut out = String::new();
    let urls = options.urls();

    let _ = writeln!(out, "URL sources ({}):", urls.len());
    for url in urls {
        let _ = writeln!(out, "  {url}");
    }
    let _ = writeln!(out, "Output directory: {}", options.output_directory);
    if let Some(username) = &options.username {
        let _ = writeln!(out, "Username: {username}");
    }
    let _ = writeln!(
        out,
        "Thumbnails: {}",
        if options.no_thumbnails { "off" } else { "on" }
    );
    if options.simulate {
        let _ = writeln!(out, "Simulate: on (nothing will be downloaded)");
    }
    if options.verbose {
        let _ = writeln!(out, "Verbose: on");
    }
    out
}

pub(super) fn clap_error_kind(kind: &ValidationErrorKind) -> ErrorKind {
    match kind {
        ValidationErrorKind::GracefulStop => ErrorKind::DisplayHelp,
        ValidationErrorKind::MissingRequiredArgument => ErrorKind::MissingRequiredArgument,
        ValidationErrorKind::ConflictingArguments => ErrorKind::ArgumentConflict,
        ValidationErrorKind::WrongInputForUrlsFlag => ErrorKind::InvalidValue,
        ValidationErrorKind::InputFileNotFound { .. } => ErrorKind::Io,
    }
}

/// Validation failure as a clap error, so it prints with clap's styling.
pub(super) fn to_clap_error(err: &ValidationError) -> clap::Error {
    Cli::command().error(clap_error_kind(&err.kind), &err.kind)
}

/// Prints `err` and returns the exit code for it.
///
/// A graceful stop prints help and exits 0. Parse and validation errors use
/// clap's formatting and exit codes.
pub fn report_error(err: &anyhow::Error) -> ExitCode {
    if let Some(err) = err.downcast_ref::<ValidationError>() {
        if err.is_graceful_stop() {
            let _ = Cli::command().print_help();
            return ExitCode::SUCCESS;
        }
        tracing::error!("{}", err);
        return print_clap_error(&to_clap_error(err));
    }

    if let Some(err) = err.downcast_ref::<clap::Error>() {
        return print_clap_error(err);
    }

    tracing::error!("{:#}", err);
    eprintln!("vidfetch error: {:#}", err);
    ExitCode::FAILURE
}

fn print_clap_error(err: &clap::Error) -> ExitCode {
    let _ = err.print();
    u8::try_from(err.exit_code()).map_or(ExitCode::FAILURE, ExitCode::from)
}
