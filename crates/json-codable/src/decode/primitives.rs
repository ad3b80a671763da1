//! [`Decodable`] for scalars, sequences and raw trees.

use json_codable_decimal::Decimal;
use json_codable_value::JsonValue;

use super::Decodable;
use crate::error::DecodeError;

macro_rules! decode_via {
    ($($t:ty => $accessor:ident),* $(,)?) => {
        $(
            impl Decodable for $t {
                fn decode(json: Option<&JsonValue>) -> Result<Self, DecodeError> {
                    json.and_then(JsonValue::$accessor).ok_or(DecodeError::Undecodable)
                }
            }
        )*
    };
}

decode_via! {
    String => as_string,
    bool => as_bool,
    f32 => as_f32,
    f64 => as_f64,
    i64 => as_i64,
    isize => as_int,
    u64 => as_u64,
    usize => as_uint,
    Decimal => as_decimal,
}

// Narrow integers refuse out-of-range values instead of wrapping.
macro_rules! decode_narrowed {
    ($($t:ty => $accessor:ident),* $(,)?) => {
        $(
            impl Decodable for $t {
                fn decode(json: Option<&JsonValue>) -> Result<Self, DecodeError> {
                    json.and_then(JsonValue::$accessor)
                        .and_then(|wide| <$t>::try_from(wide).ok())
                        .ok_or(DecodeError::Undecodable)
                }
            }
        )*
    };
}

decode_narrowed! {
    i8 => as_i64,
    i16 => as_i64,
    i32 => as_i64,
    u8 => as_u64,
    u16 => as_u64,
    u32 => as_u64,
}

impl Decodable for JsonValue {
    fn decode(json: Option<&JsonValue>) -> Result<Self, DecodeError> {
        json.cloned().ok_or(DecodeError::Undecodable)
    }
}

impl<T: Decodable> Decodable for Vec<T> {
    /// Every element must decode; the first failure is returned.
    fn decode(json: Option<&JsonValue>) -> Result<Self, DecodeError> {
        json.and_then(JsonValue::as_array)
            .ok_or(DecodeError::Undecodable)?
            .iter()
            .map(|item| T::decode(Some(item)))
            .collect()
    }
}
