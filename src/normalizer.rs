use crate::errors::AppError;
use serde::Serialize;
use serde_json::{Map, Value};

/// Projects a parsed request shape onto the upstream payload.
///
/// The shape's serde attributes are the field table: wire names come from
/// `rename(serialize = ..)` and unset optional fields are skipped, recursively
/// through nested sub-shapes and list elements. Empty strings survive.
pub fn normalize<T: Serialize>(shape: &T) -> Result<Map<String, Value>, AppError> {
    match serde_json::to_value(shape) {
        Ok(Value::Object(payload)) => Ok(payload),
        Ok(other) => Err(AppError::Internal(format!(
            "request shape serialized to a non-object: {}",
            other
        ))),
        Err(e) => Err(AppError::Internal(format!(
            "failed to serialize request shape: {}",
            e
        ))),
    }
}
