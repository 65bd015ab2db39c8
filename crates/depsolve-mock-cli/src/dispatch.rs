use std::io::{Read, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use depsolve_mock_core::{respond, FixtureDocument, Request};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DispatchOutcome {
    Answered,
    SimulatedError,
}

impl DispatchOutcome {
    pub(crate) fn exit_code(self) -> ExitCode {
        match self {
            Self::Answered => ExitCode::SUCCESS,
            Self::SimulatedError => ExitCode::FAILURE,
        }
    }
}

/// Runs one request/response cycle. Nothing is written to `output` unless
/// the response resolved.
pub(crate) fn run_dispatch<R, W>(
    fixture_path: &Path,
    input: R,
    output: &mut W,
) -> Result<DispatchOutcome>
where
    R: Read,
    W: Write,
{
    let request = Request::from_reader(input)?;
    debug!(command = %request.command, fixture = %fixture_path.display(), "decoded request");

    let fixture = FixtureDocument::load(fixture_path)?;
    let response = respond(&request, &fixture)?;

    if let Some(payload) = response.payload() {
        output
            .write_all(payload.as_str().as_bytes())
            .context("failed to write response")?;
    }
    output.flush().context("failed to flush response")?;

    if response.is_simulated_error() {
        debug!(command = %request.command, "responding with simulated error");
        Ok(DispatchOutcome::SimulatedError)
    } else {
        Ok(DispatchOutcome::Answered)
    }
}
