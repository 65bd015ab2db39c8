use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::value::RawValue;

use crate::error::MockError;
use crate::request::SEARCH_COMMAND;

/// Canned responses keyed by command name.
///
/// Values stay in their serialized form until a request selects one, so a
/// fixture only has to be well-formed JSON at the top level.
#[derive(Debug)]
pub struct FixtureDocument {
    responses: HashMap<String, Box<RawValue>>,
}

impl FixtureDocument {
    pub fn load(path: &Path) -> Result<Self, MockError> {
        let mut file = File::open(path).map_err(|source| MockError::FixtureOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|source| MockError::FixtureRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json_slice(&contents)
    }

    pub fn from_json_str(input: &str) -> Result<Self, MockError> {
        Self::from_json_slice(input.as_bytes())
    }

    /// Invalid UTF-8 surfaces here as a decode error, not a read error.
    pub fn from_json_slice(input: &[u8]) -> Result<Self, MockError> {
        let responses: HashMap<String, Box<RawValue>> =
            serde_json::from_slice(input).map_err(MockError::FixtureDecode)?;
        Ok(Self { responses })
    }

    pub fn response(&self, command: &str) -> Option<&RawValue> {
        self.responses.get(command).map(|raw| &**raw)
    }

    /// Decodes the nested map stored under `search`. A `null` map is
    /// treated as empty.
    pub(crate) fn search_responses(&self) -> Result<HashMap<String, Box<RawValue>>, MockError> {
        let raw = self
            .response(SEARCH_COMMAND)
            .ok_or(MockError::SearchMapMissing)?;
        let searches: Option<HashMap<String, Box<RawValue>>> =
            serde_json::from_str(raw.get()).map_err(MockError::SearchMapDecode)?;
        Ok(searches.unwrap_or_default())
    }
}
