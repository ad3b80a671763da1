//! json-codable - declarative, field-by-field JSON marshalling.
//!
//! A model type implements [`Decodable`] and/or [`Encodable`] and binds each
//! of its fields with one of four bindings per direction: required scalar,
//! required array, optional scalar, optional array. Failures are reported
//! through [`DecodeError`] / [`EncodeError`]; per-type validation hooks
//! return a [`Validation`], where a missing validator never counts as a
//! failure.
//!
//! The JSON tree ([`JsonValue`]) and the decimal type ([`Decimal`]) come
//! from the `json-codable-value` and `json-codable-decimal` crates and are
//! re-exported here.

pub mod decode;
pub mod encode;
mod error;
pub mod options;
mod validation;

pub use decode::{Decodable, FieldReader};
pub use encode::{Encodable, EncodeField};
pub use error::{DecodeError, EncodeError};
pub use json_codable_decimal::{Decimal, DecimalError};
pub use json_codable_value::{JsonError, JsonType, JsonValue, Map, Number, NumberKind};
pub use options::{ArrayPolicy, CodableOptions, DecodeOptions, EncodeOptions};
pub use validation::Validation;
