use tracing::debug;

use crate::classify::is_error;
use crate::error::MockError;
use crate::fixture::FixtureDocument;
use crate::request::Request;
use crate::resolve::{resolve, Payload};
use crate::substitute::substitute;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    payload: Option<Payload>,
    simulated_error: bool,
}

impl Response {
    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    /// True when the payload has the helper's error shape, in which case
    /// the caller must exit non-zero after writing it.
    pub fn is_simulated_error(&self) -> bool {
        self.simulated_error
    }
}

/// Resolves, substitutes and classifies the reply to `request`.
pub fn respond(request: &Request, fixture: &FixtureDocument) -> Result<Response, MockError> {
    let payload = resolve(request, fixture)?.map(|payload| substitute(payload, request));
    let simulated_error = is_error(payload.as_ref());
    debug!(
        command = %request.command,
        has_payload = payload.is_some(),
        simulated_error,
        "resolved response"
    );
    Ok(Response {
        payload,
        simulated_error,
    })
}
