use std::io::Read;

use serde::{Deserialize, Deserializer};

use crate::error::MockError;

pub(crate) const SEARCH_COMMAND: &str = "search";
pub(crate) const DEPSOLVE_COMMAND: &str = "depsolve";

/// A single query sent to the solver helper on stdin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Request {
    pub command: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub arguments: Arguments,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Arguments {
    #[serde(default)]
    pub search: Option<SearchArguments>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub repos: Vec<Repo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchArguments {
    #[serde(default, deserialize_with = "null_as_default")]
    pub packages: Vec<String>,
}

/// Repository description; everything except the identifier is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Repo {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Search,
    Depsolve,
    Other,
}

impl Request {
    /// Decodes exactly one JSON value from `reader`. Anything after the
    /// first value is left unread.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, MockError> {
        let mut deserializer = serde_json::Deserializer::from_reader(reader);
        Self::deserialize(&mut deserializer).map_err(MockError::RequestDecode)
    }

    pub fn from_json_str(input: &str) -> Result<Self, MockError> {
        Self::from_reader(input.as_bytes())
    }

    pub fn kind(&self) -> CommandKind {
        match self.command.as_str() {
            SEARCH_COMMAND => CommandKind::Search,
            DEPSOLVE_COMMAND => CommandKind::Depsolve,
            _ => CommandKind::Other,
        }
    }

    /// Requested package names joined with `,`, in request order.
    pub fn search_key(&self) -> String {
        self.arguments
            .search
            .as_ref()
            .map(|search| search.packages.join(","))
            .unwrap_or_default()
    }

    pub fn first_repo_id(&self) -> Option<&str> {
        self.arguments.repos.first().map(|repo| repo.id.as_str())
    }
}

/// Callers serialize unset lists and records as `null`; treat that like a
/// missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
