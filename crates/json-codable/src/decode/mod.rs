//! Building typed values out of a [`JsonValue`] tree.
//!
//! A model type implements [`Decodable`] by pulling each of its fields out
//! of the tree with one of the four bindings in [`bindings`] (or the
//! equivalent [`FieldReader`] methods) and finishing with
//! [`Decodable::validated`]:
//!
//! ```
//! use json_codable::{Decodable, DecodeError, FieldReader, JsonValue, Validation};
//!
//! struct Point {
//!     x: i64,
//!     label: Option<String>,
//! }
//!
//! impl Decodable for Point {
//!     fn decode(json: Option<&JsonValue>) -> Result<Self, DecodeError> {
//!         let r = FieldReader::new(json);
//!         Point {
//!             x: r.required("x")?,
//!             label: r.optional("label")?,
//!         }
//!         .validated()
//!     }
//!
//!     fn validate_decode(&self) -> Validation {
//!         Validation::check(self.x >= 0)
//!     }
//! }
//!
//! let json: JsonValue = r#"{"x": 3}"#.parse().unwrap();
//! let point = Point::decode(Some(&json)).unwrap();
//! assert_eq!(point.x, 3);
//! assert_eq!(point.label, None);
//! ```

pub mod bindings;
mod primitives;

use json_codable_value::JsonValue;

use crate::error::DecodeError;
use crate::options::DecodeOptions;
use crate::validation::Validation;

pub trait Decodable: Sized {
    /// Build a value from `json`. `None` means there was no value at all.
    fn decode(json: Option<&JsonValue>) -> Result<Self, DecodeError>;

    /// Post-decode check. Types without one report
    /// [`Validation::Unimplemented`], which never aborts a decode.
    fn validate_decode(&self) -> Validation {
        Validation::Unimplemented
    }

    /// Run [`Decodable::validate_decode`], failing only on
    /// [`Validation::Failed`].
    fn validated(self) -> Result<Self, DecodeError> {
        match self.validate_decode() {
            Validation::Unimplemented | Validation::Passed => Ok(self),
            Validation::Failed => {
                tracing::debug!(
                    ty = std::any::type_name::<Self>(),
                    "decoded value rejected by validator"
                );
                Err(DecodeError::ValidationFailed)
            }
        }
    }
}

/// A tree plus the options its optional-array bindings honour.
#[derive(Debug, Clone, Copy)]
pub struct FieldReader<'a> {
    json: Option<&'a JsonValue>,
    options: DecodeOptions,
}

impl<'a> FieldReader<'a> {
    pub fn new(json: Option<&'a JsonValue>) -> Self {
        Self::with_options(json, DecodeOptions::default())
    }

    pub fn with_options(json: Option<&'a JsonValue>, options: DecodeOptions) -> Self {
        Self { json, options }
    }

    pub fn json(&self) -> Option<&'a JsonValue> {
        self.json
    }

    pub fn required<T: Decodable>(&self, field: &str) -> Result<T, DecodeError> {
        bindings::required(self.json, field)
    }

    pub fn required_array<T: Decodable>(&self, field: &str) -> Result<Vec<T>, DecodeError> {
        bindings::required_array(self.json, field)
    }

    pub fn optional<T: Decodable>(&self, field: &str) -> Result<Option<T>, DecodeError> {
        bindings::optional(self.json, field)
    }

    pub fn optional_array<T: Decodable>(
        &self,
        field: &str,
    ) -> Result<Option<Vec<T>>, DecodeError> {
        bindings::optional_array_with(self.json, field, self.options.optional_array)
    }
}
