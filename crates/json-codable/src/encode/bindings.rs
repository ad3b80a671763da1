//! The four encode-side field bindings.
//!
//! Required bindings fail with [`EncodeError::Unencodable`] when the value
//! cannot be encoded. Optional bindings never fail: an absent or unencodable
//! value becomes `(key, null)`.

use json_codable_value::JsonValue;

use super::{Encodable, EncodeField};
use crate::error::EncodeError;

pub fn required<T: Encodable + ?Sized>(key: &str, value: &T) -> EncodeField {
    match value.encode() {
        Ok(json) => Ok((key.to_string(), json)),
        Err(cause) => {
            tracing::debug!(key, %cause, "required field could not be encoded");
            Err(EncodeError::Unencodable)
        }
    }
}

pub fn required_array<T: Encodable>(key: &str, values: &[T]) -> EncodeField {
    required(key, values)
}

pub fn optional<T: Encodable + ?Sized>(key: &str, value: Option<&T>) -> EncodeField {
    let json = match value.map(|v| v.encode()) {
        None => JsonValue::Null,
        Some(Ok(json)) => json,
        Some(Err(cause)) => {
            tracing::debug!(key, %cause, "optional field degraded to null");
            JsonValue::Null
        }
    };
    Ok((key.to_string(), json))
}

pub fn optional_array<T: Encodable>(key: &str, values: Option<&[T]>) -> EncodeField {
    optional(key, values)
}
