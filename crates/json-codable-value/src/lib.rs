//! json-codable-value - a dynamically-typed JSON value tree.
//!
//! [`JsonValue`] is a closed sum over the six JSON kinds. Numbers carry
//! their storage format ([`NumberKind`]) so exact conversions are possible,
//! and a family of `as_*` accessors coerces between kinds without failing
//! loudly. Bytes and text cross the boundary through `serde_json`.

mod codec;
mod coerce;
mod error;
mod number;
mod value;

pub use error::JsonError;
pub use json_codable_decimal::Decimal;
pub use number::{Number, NumberKind};
pub use value::{JsonType, JsonValue, Map};
