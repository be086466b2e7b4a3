//! Rapport - connectivity and weighted shortest paths over social graphs
//!
//! Loads an undirected weighted edge list and answers group membership,
//! lightest-route and closest-match queries against it.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use rapport_core::error::{ExitCode as RapportExitCode, RapportError};
use rapport_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Parsing failed before `Cli.format` exists, so scan argv for it
            if !argv_requests_json(env::args().skip(1)) {
                err.exit();
            }
            let Some(rapport_error) = parse_failure(&err) else {
                err.exit();
            };
            eprintln!("{}", rapport_error.to_json());
            return ExitCode::from(rapport_error.exit_code() as u8);
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let code = match commands::dispatch::run(&cli, start) {
        Ok(()) => RapportExitCode::Success,
        Err(e) => {
            report_error(&cli, &e);
            e.exit_code()
        }
    };

    tracing::debug!(elapsed = ?start.elapsed(), exit_code = code as u8, "finished");
    ExitCode::from(code as u8)
}

/// Map a clap failure onto the error taxonomy; `None` for help and version
fn parse_failure(err: &clap::Error) -> Option<RapportError> {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        | ErrorKind::DisplayVersion => None,
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::MissingSubcommand
        | ErrorKind::TooManyValues
        | ErrorKind::WrongNumberOfValues => Some(RapportError::UsageError(err.to_string())),
        _ => Some(RapportError::Other(err.to_string())),
    }
}

fn report_error(cli: &Cli, e: &RapportError) {
    if e.is_internal_fault() {
        // Always surfaced, even under --quiet
        tracing::error!(error = %e, "internal_fault");
    }

    match cli.format {
        OutputFormat::Json => eprintln!("{}", e.to_json()),
        OutputFormat::Human if e.is_internal_fault() => {
            eprintln!("error: {}", e);
            eprintln!("note: this is a bug in rapport; `path --no-verify` skips the cross-check");
        }
        OutputFormat::Human if !cli.quiet => eprintln!("error: {}", e),
        OutputFormat::Human => {}
    }
}

/// Whether argv asks for JSON output.
///
/// Scanning stops at `--`: everything after it is a person's name, and names
/// such as `--format` must not switch the error format.
fn argv_requests_json(args: impl IntoIterator<Item = String>) -> bool {
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--" => return false,
            "--format" => {
                if args.next().is_some_and(|v| v == "json") {
                    return true;
                }
            }
            "--format=json" => return true,
            _ => {}
        }
    }
    false
}
