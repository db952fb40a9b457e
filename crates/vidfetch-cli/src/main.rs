mod cli;

use std::process::ExitCode;

use crate::cli::Cli;

fn main() -> ExitCode {
    // Parse, validate and summarize; errors are rendered in clap's style.
    match Cli::run_from_args() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => cli::report_error(&err),
    }
}
