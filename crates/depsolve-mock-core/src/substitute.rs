use tracing::debug;

use crate::request::{CommandKind, Request};
use crate::resolve::Payload;

pub const REPO_ID_PLACEHOLDER: &str = "REPOID";

/// Replaces every `REPOID` in a `depsolve` response with the id of the
/// first requested repository. Only the first repository is ever used.
pub fn substitute(payload: Payload, request: &Request) -> Payload {
    if request.kind() != CommandKind::Depsolve {
        return payload;
    }
    let Some(repo_id) = request.first_repo_id() else {
        return payload;
    };

    debug!(repo_id, "substituting repository placeholder");
    Payload::new(payload.as_str().replace(REPO_ID_PLACEHOLDER, repo_id))
}
