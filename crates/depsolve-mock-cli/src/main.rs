use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use depsolve_mock_core::MockError;

mod dispatch;
mod logging;

use dispatch::{run_dispatch, DispatchOutcome};

/// Stands in for the dependency solver helper: answers one JSON request on
/// stdin with a canned response from a fixture file.
#[derive(Parser, Debug)]
#[command(name = "depsolve-mock")]
#[command(about = "Replay canned dependency solver responses from a fixture file", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// JSON fixture mapping command names to responses. Any single argument
    /// is taken as the path, including ones that start with `-`.
    #[arg(allow_hyphen_values = true)]
    fixture: PathBuf,
}

fn main() -> ExitCode {
    match run(std::env::args_os()) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run<I, T>(args: I) -> Result<DispatchOutcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = parse_cli(args)?;
    logging::init_logging();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_dispatch(&cli.fixture, stdin.lock(), &mut stdout.lock())
}

fn parse_cli<I, T>(args: I) -> Result<Cli, MockError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::MissingRequiredArgument => {
            MockError::Usage("no fixture file specified".to_string())
        }
        _ => MockError::Usage(
            "invalid number of arguments: you must specify exactly one fixture file".to_string(),
        ),
    })
}
