//! Helpers shared by the entity payloads

use crate::shared::{FormError, Selection, SelectionContext};

/// The selection a context-bound payload is created under.
pub fn require_selection(ctx: &SelectionContext) -> Result<&Selection, FormError> {
    ctx.selection().ok_or(FormError::MissingScope("una empresa"))
}

/// Serialize a typed payload into the JSON body sent to the API.
pub fn to_body<T: serde::Serialize>(payload: &T) -> serde_json::Value {
    serde_json::to_value(payload).unwrap_or(serde_json::Value::Null)
}
