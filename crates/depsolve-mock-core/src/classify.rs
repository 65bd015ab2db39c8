use serde::Deserialize;
use serde_json::Value;

use crate::resolve::Payload;

/// The helper's error reply. No other fields are tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorShape {
    pub kind: String,
    pub reason: String,
}

/// Attempts to read `text` as an [`ErrorShape`]. Only JSON objects are
/// considered; arrays would otherwise bind positionally to the fields.
pub fn decode_error_shape(text: &str) -> Option<ErrorShape> {
    let value: Value = serde_json::from_str(text).ok()?;
    if !value.is_object() {
        return None;
    }
    ErrorShape::deserialize(value).ok()
}

pub fn is_error(payload: Option<&Payload>) -> bool {
    payload
        .and_then(|payload| decode_error_shape(payload.as_str()))
        .is_some()
}
