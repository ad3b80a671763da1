//! [`Encodable`] for scalars, sequences and raw trees.

use json_codable_decimal::Decimal;
use json_codable_value::JsonValue;

use super::Encodable;
use crate::error::EncodeError;

macro_rules! encode_from {
    ($($t:ty),* $(,)?) => {
        $(
            impl Encodable for $t {
                fn encode(&self) -> Result<JsonValue, EncodeError> {
                    Ok(JsonValue::from(*self))
                }
            }
        )*
    };
}

encode_from!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! encode_float {
    ($($t:ty),*) => {
        $(
            impl Encodable for $t {
                /// NaN and infinities have no JSON spelling.
                fn encode(&self) -> Result<JsonValue, EncodeError> {
                    if self.is_finite() {
                        Ok(JsonValue::from(*self))
                    } else {
                        Err(EncodeError::Unencodable)
                    }
                }
            }
        )*
    };
}

encode_float!(f32, f64);

impl Encodable for str {
    fn encode(&self) -> Result<JsonValue, EncodeError> {
        Ok(JsonValue::from(self))
    }
}

impl Encodable for String {
    fn encode(&self) -> Result<JsonValue, EncodeError> {
        self.as_str().encode()
    }
}

impl Encodable for Decimal {
    fn encode(&self) -> Result<JsonValue, EncodeError> {
        if self.is_finite() {
            Ok(JsonValue::from(self.clone()))
        } else {
            Err(EncodeError::Unencodable)
        }
    }
}

impl Encodable for JsonValue {
    fn encode(&self) -> Result<JsonValue, EncodeError> {
        Ok(self.clone())
    }
}

impl<T: Encodable> Encodable for [T] {
    /// Elements that are [`EncodeError::Unencodable`] are left out of the
    /// array. Any other element error is returned.
    fn encode(&self) -> Result<JsonValue, EncodeError> {
        let mut items = Vec::with_capacity(self.len());
        for (index, item) in self.iter().enumerate() {
            match item.encode() {
                Ok(json) => items.push(json),
                Err(EncodeError::Unencodable) => {
                    tracing::trace!(index, "skipped unencodable sequence element");
                }
                Err(other) => return Err(other),
            }
        }
        Ok(JsonValue::Array(items))
    }
}

impl<T: Encodable> Encodable for Vec<T> {
    fn encode(&self) -> Result<JsonValue, EncodeError> {
        self.as_slice().encode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Validation;
    use serde_json::json;

    #[test]
    fn scalars_wrap_directly() {
        assert_eq!(true.encode(), Ok(JsonValue::from(true)));
        assert_eq!(u64::MAX.encode(), Ok(JsonValue::from(u64::MAX)));
        assert_eq!("hi".encode(), Ok(JsonValue::from("hi")));
        assert_eq!(1.5f32.encode(), Ok(JsonValue::from(1.5)));
    }

    #[test]
    fn non_finite_numbers_are_unencodable() {
        assert_eq!(f64::NAN.encode(), Err(EncodeError::Unencodable));
        assert_eq!(f32::NEG_INFINITY.encode(), Err(EncodeError::Unencodable));
        assert_eq!(Decimal::nan().encode(), Err(EncodeError::Unencodable));
        assert_eq!(Decimal::infinity().encode(), Err(EncodeError::Unencodable));
    }

    #[test]
    fn decimal_keeps_its_digits() {
        let d = Decimal::parse("1234.5678901234567");
        assert_eq!(d.encode().unwrap().to_string(), "1234.5678901234567");
    }

    struct Rejected;

    impl Encodable for Rejected {
        fn encode(&self) -> Result<JsonValue, EncodeError> {
            self.encode_to_json(std::iter::empty())
        }

        fn validate_encode(&self) -> Validation {
            Validation::Failed
        }
    }

    #[test]
    fn sequence_skips_only_unencodable() {
        let values = vec![1.0, f64::NAN, 3.0];
        assert_eq!(values.encode(), Ok(JsonValue::from(json!([1.0, 3.0]))));
        assert_eq!(vec![Rejected].encode(), Err(EncodeError::ValidationFailed));
    }
}
