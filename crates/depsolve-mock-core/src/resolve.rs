use std::fmt;

use tracing::debug;

use crate::error::MockError;
use crate::fixture::FixtureDocument;
use crate::request::{CommandKind, Request};

/// Serialized response text exactly as it will be written to stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload(String);

impl Payload {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Selects the canned response for `request`.
///
/// `search` requests must match an entry of the nested search map. Any
/// other command without a fixture entry resolves to `None`.
pub fn resolve(request: &Request, fixture: &FixtureDocument) -> Result<Option<Payload>, MockError> {
    match request.kind() {
        CommandKind::Search => {
            let key = request.search_key();
            debug!(key = %key, "looking up search response");
            let mut searches = fixture.search_responses()?;
            let raw = searches
                .remove(&key)
                .ok_or(MockError::SearchKeyMissing { key })?;
            Ok(Some(Payload::new(raw.get())))
        }
        CommandKind::Depsolve | CommandKind::Other => {
            let payload = fixture
                .response(&request.command)
                .map(|raw| Payload::new(raw.get()));
            if payload.is_none() {
                debug!(command = %request.command, "fixture has no response for command");
            }
            Ok(payload)
        }
    }
}
