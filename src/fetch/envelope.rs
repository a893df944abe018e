use serde_json::Value;

use crate::fetch::FetchError;

/// Unwraps the item list from a response body.
///
/// A bare array is returned as is; an object yields its `results` field.
/// Anything else is rejected rather than passed through as a "list".
pub fn normalize(body: Value) -> Result<Value, FetchError> {
    match body {
        Value::Array(_) => Ok(body),
        Value::Object(mut fields) => fields.remove("results").ok_or(FetchError::Envelope {
            shape: "an object without `results`",
        }),
        other => Err(FetchError::Envelope {
            shape: shape_name(&other),
        }),
    }
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
