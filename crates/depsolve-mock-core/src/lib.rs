mod classify;
mod error;
mod fixture;
mod request;
mod resolve;
mod respond;
mod substitute;

pub use classify::{decode_error_shape, is_error, ErrorShape};
pub use error::MockError;
pub use fixture::FixtureDocument;
pub use request::{Arguments, CommandKind, Repo, Request, SearchArguments};
pub use resolve::{resolve, Payload};
pub use respond::{respond, Response};
pub use substitute::{substitute, REPO_ID_PLACEHOLDER};
