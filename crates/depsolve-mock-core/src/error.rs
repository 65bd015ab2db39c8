use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions the double can hit before a response is emitted.
///
/// Every variant terminates the invocation with exit status 1. A resolved
/// payload that merely looks like an error is not represented here; see
/// [`crate::is_error`].
#[derive(Debug, Error)]
pub enum MockError {
    #[error("{0}")]
    Usage(String),

    #[error("failed to open fixture file {}", path.display())]
    FixtureOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read fixture file {}", path.display())]
    FixtureRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to decode request")]
    RequestDecode(#[source] serde_json::Error),

    #[error("failed to decode fixture document")]
    FixtureDecode(#[source] serde_json::Error),

    #[error("fixture document has no search response map")]
    SearchMapMissing,

    #[error("failed to decode search response map")]
    SearchMapDecode(#[source] serde_json::Error),

    #[error("search response map is missing key = {key}")]
    SearchKeyMissing { key: String },
}
