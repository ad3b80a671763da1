//! Turning typed values into a [`JsonValue`] tree.
//!
//! A model type implements [`Encodable`] by projecting each field into a
//! `(key, value)` pair with the bindings in [`bindings`] and folding them
//! with [`Encodable::encode_to_json`].

pub mod bindings;
mod primitives;

use json_codable_value::{JsonValue, Map};

use crate::error::EncodeError;
use crate::options::EncodeOptions;
use crate::validation::Validation;

/// One field projected by an encode binding.
pub type EncodeField = Result<(String, JsonValue), EncodeError>;

pub trait Encodable {
    fn encode(&self) -> Result<JsonValue, EncodeError>;

    /// Pre-encode check. [`Validation::Unimplemented`] never aborts.
    fn validate_encode(&self) -> Validation {
        Validation::Unimplemented
    }

    /// Fold `fields` into an object after validating `self`.
    ///
    /// Later keys overwrite earlier ones. The first failed field aborts the
    /// whole encode.
    fn encode_to_json<I>(&self, fields: I) -> Result<JsonValue, EncodeError>
    where
        Self: Sized,
        I: IntoIterator<Item = EncodeField>,
    {
        self.encode_to_json_with(EncodeOptions::default(), fields)
    }

    fn encode_to_json_with<I>(
        &self,
        options: EncodeOptions,
        fields: I,
    ) -> Result<JsonValue, EncodeError>
    where
        Self: Sized,
        I: IntoIterator<Item = EncodeField>,
    {
        if self.validate_encode().is_failed() {
            tracing::debug!(
                ty = std::any::type_name::<Self>(),
                "value rejected by validator before encoding"
            );
            return Err(EncodeError::ValidationFailed);
        }
        let mut map = Map::new();
        for field in fields {
            let (key, value) = field?;
            if options.omit_nulls && value.is_null() {
                map.shift_remove(&key);
            } else {
                map.insert(key, value);
            }
        }
        Ok(JsonValue::Object(map))
    }
}
