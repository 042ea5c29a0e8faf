//! Pure functions for encoding session data to and from cache bytes.
//!
//! Session data is stored as a JSON object, which keeps backend values
//! human-readable and self-describing.

use super::{SessionData, SessionError, Value};

/// Serializes session data to JSON bytes.
pub fn serialize_data(data: &SessionData) -> Result<Vec<u8>, SessionError> {
    serde_json::to_vec(data).map_err(|e| SessionError::Serialization(e.to_string()))
}

/// Deserializes JSON bytes to session data.
///
/// Anything other than a JSON object is rejected.
pub fn deserialize_data(bytes: &[u8]) -> Result<SessionData, SessionError> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(SessionError::Deserialization(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
        Err(e) => Err(SessionError::Deserialization(e.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
