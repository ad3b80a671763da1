//! The four decode-side field bindings.
//!
//! Each takes the enclosing tree and a field name. An absent tree is
//! [`DecodeError::EmptyJson`] for all four; what happens after that depends
//! on whether the field is required and whether it holds an array.

use json_codable_value::JsonValue;

use super::Decodable;
use crate::error::DecodeError;
use crate::options::ArrayPolicy;

fn tree(json: Option<&JsonValue>) -> Result<&JsonValue, DecodeError> {
    json.ok_or(DecodeError::EmptyJson)
}

/// Decode `json[field]` as `T`.
///
/// Absence and decode failure both surface as
/// [`DecodeError::NotFound`] naming the field.
pub fn required<T: Decodable>(json: Option<&JsonValue>, field: &str) -> Result<T, DecodeError> {
    let value = tree(json)?.get(field).ok_or_else(|| DecodeError::not_found(field))?;
    T::decode(Some(value)).map_err(|cause| {
        tracing::debug!(field, %cause, "required field did not decode");
        DecodeError::not_found(field)
    })
}

/// Decode every element of the array at `json[field]`.
///
/// A missing field, or one that is not an array, is
/// [`DecodeError::NotFound`]. The first element that fails aborts the
/// binding with that element's error.
pub fn required_array<T: Decodable>(
    json: Option<&JsonValue>,
    field: &str,
) -> Result<Vec<T>, DecodeError> {
    let items = tree(json)?
        .get(field)
        .and_then(JsonValue::as_array)
        .ok_or_else(|| DecodeError::not_found(field))?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            T::decode(Some(item)).inspect_err(|cause| {
                tracing::debug!(field, index, %cause, "required array element did not decode");
            })
        })
        .collect()
}

/// Decode `json[field]` as `T`, or `None` if it is absent or malformed.
pub fn optional<T: Decodable>(
    json: Option<&JsonValue>,
    field: &str,
) -> Result<Option<T>, DecodeError> {
    let Some(value) = tree(json)?.get(field) else {
        return Ok(None);
    };
    match T::decode(Some(value)) {
        Ok(decoded) => Ok(Some(decoded)),
        Err(cause) => {
            tracing::debug!(field, %cause, "optional field absorbed a decode failure");
            Ok(None)
        }
    }
}

/// Decode the array at `json[field]`, dropping elements that fail.
///
/// Same as [`optional_array_with`] under [`ArrayPolicy::Lenient`].
pub fn optional_array<T: Decodable>(
    json: Option<&JsonValue>,
    field: &str,
) -> Result<Option<Vec<T>>, DecodeError> {
    optional_array_with(json, field, ArrayPolicy::Lenient)
}

/// Decode the array at `json[field]`.
///
/// `None` when the field is absent or not an array. Under
/// [`ArrayPolicy::Lenient`] a failing element is dropped; under
/// [`ArrayPolicy::Strict`] it fails the binding with
/// [`DecodeError::Invalid`].
pub fn optional_array_with<T: Decodable>(
    json: Option<&JsonValue>,
    field: &str,
    policy: ArrayPolicy,
) -> Result<Option<Vec<T>>, DecodeError> {
    let Some(items) = tree(json)?.get(field).and_then(JsonValue::as_array) else {
        return Ok(None);
    };
    let mut out = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match T::decode(Some(item)) {
            Ok(decoded) => out.push(decoded),
            Err(cause) => match policy {
                ArrayPolicy::Lenient => {
                    tracing::debug!(field, index, %cause, "dropped optional array element");
                }
                ArrayPolicy::Strict => {
                    tracing::debug!(field, index, %cause, "optional array element rejected");
                    return Err(DecodeError::invalid(field));
                }
            },
        }
    }
    Ok(Some(out))
}
