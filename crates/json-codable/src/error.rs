use thiserror::Error;

/// Failure of a decode or of a decode-side field binding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The tree handed to the decoder was absent.
    #[error("no JSON to decode")]
    EmptyJson,
    /// A required field is missing or its value did not decode.
    #[error("required field `{field}` not found")]
    NotFound { field: String },
    /// A value could not be coerced into the requested type.
    #[error("value could not be decoded into the requested type")]
    Undecodable,
    /// An element of an optional array failed under the strict array policy.
    #[error("field `{field}` holds an invalid element")]
    Invalid { field: String },
    #[error("decoded value failed validation")]
    ValidationFailed,
}

impl DecodeError {
    pub(crate) fn not_found(field: &str) -> Self {
        DecodeError::NotFound {
            field: field.to_string(),
        }
    }

    pub(crate) fn invalid(field: &str) -> Self {
        DecodeError::Invalid {
            field: field.to_string(),
        }
    }
}

/// Failure of an encode or of an encode-side field binding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("value has no JSON representation")]
    Unencodable,
    #[error("value failed validation before encoding")]
    ValidationFailed,
}
