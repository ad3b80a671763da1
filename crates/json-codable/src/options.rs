//! Knobs for the decode and encode chains.
//!
//! Every field has a default, so a partial (or empty) JSON document is a
//! valid configuration:
//!
//! ```json
//! { "decode": { "optional_array": "strict" }, "encode": { "omit_nulls": true } }
//! ```

use json_codable_value::JsonError;
use serde::{Deserialize, Serialize};

/// What an optional-array binding does with an element that fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayPolicy {
    /// Drop the element and keep the rest.
    #[default]
    Lenient,
    /// Fail the binding with [`DecodeError::Invalid`](crate::DecodeError::Invalid).
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    pub optional_array: ArrayPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Leave out pairs whose value is null instead of writing `"key": null`.
    pub omit_nulls: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodableOptions {
    pub decode: DecodeOptions,
    pub encode: EncodeOptions,
}

impl CodableOptions {
    pub fn from_json_str(text: &str) -> Result<Self, JsonError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_all_defaults() {
        let options = CodableOptions::from_json_str("{}").unwrap();
        assert_eq!(options, CodableOptions::default());
        assert_eq!(options.decode.optional_array, ArrayPolicy::Lenient);
        assert!(!options.encode.omit_nulls);
    }

    #[test]
    fn partial_document_overrides_named_fields() {
        let options =
            CodableOptions::from_json_str(r#"{"decode":{"optional_array":"strict"}}"#).unwrap();
        assert_eq!(options.decode.optional_array, ArrayPolicy::Strict);
        assert!(!options.encode.omit_nulls);
    }

    #[test]
    fn unknown_policy_is_a_parse_error() {
        let err = CodableOptions::from_json_str(r#"{"decode":{"optional_array":"loose"}}"#)
            .unwrap_err();
        assert!(matches!(err, JsonError::Parse(_)));
    }
}
