//! Typed coercion accessors.
//!
//! Each accessor returns the requested type when a coercion from the stored
//! kind is defined, and `None` otherwise; none of them fail loudly. Text is
//! read as a number through a decimal intermediate, so `"0.1"` and
//! `"9007199254740993"` are never routed through binary floating point.
//!
//! | accessor | Bool | Number | String | other |
//! |---|---|---|---|---|
//! | `as_string` | - | decimal text | as-is | - |
//! | `as_number`, `as_decimal` | 0 / 1 | as-is | parsed | - |
//! | `as_f32`, `as_f64` | 0 / 1 | nearest | parsed | - |
//! | `as_i64`, `as_int`, `as_u64`, `as_uint` | 0 / 1 | truncated, range-checked | parsed, truncated | - |
//! | `as_bool` | as-is | non-zero | `true`/`false`/`yes`/`no`, or non-zero | - |

use json_codable_decimal::Decimal;
use url::Url;

use crate::number::Number;
use crate::value::{JsonValue, Map};

fn decimal_from_text(text: &str) -> Option<Decimal> {
    text.parse::<Decimal>().ok().filter(|d| !d.is_nan())
}

impl JsonValue {
    /// Borrow the stored text without coercion.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<String> {
        match self {
            JsonValue::String(s) => Some(s.clone()),
            JsonValue::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            JsonValue::Number(n) => Some(n.clone()),
            JsonValue::String(s) => decimal_from_text(s).map(Number::Decimal),
            JsonValue::Bool(b) => Some(Number::Int(i64::from(*b))),
            _ => None,
        }
    }

    /// Exact decimal value, converted according to the number's storage
    /// format (see [`Number::to_decimal`]).
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            JsonValue::Number(n) => Some(n.to_decimal()),
            JsonValue::String(s) => decimal_from_text(s),
            JsonValue::Bool(b) => Some(Decimal::from(*b)),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(n.to_f64()),
            JsonValue::String(s) => decimal_from_text(s).map(|d| d.to_f64()),
            JsonValue::Bool(b) => Some(f64::from(u8::from(*b))),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            JsonValue::Number(n) => Some(n.to_f32()),
            JsonValue::String(s) => decimal_from_text(s).map(|d| d.to_f32()),
            JsonValue::Bool(b) => Some(f32::from(u8::from(*b))),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonValue::Number(n) => n.to_i64(),
            JsonValue::String(s) => decimal_from_text(s)?.to_i64(),
            JsonValue::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<isize> {
        isize::try_from(self.as_i64()?).ok()
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            JsonValue::Number(n) => n.to_u64(),
            JsonValue::String(s) => decimal_from_text(s)?.to_u64(),
            JsonValue::Bool(b) => Some(u64::from(*b)),
            _ => None,
        }
    }

    pub fn as_uint(&self) -> Option<usize> {
        usize::try_from(self.as_u64()?).ok()
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            JsonValue::Number(n) => n.truthiness(),
            JsonValue::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" => Some(true),
                "false" | "no" => Some(false),
                other => decimal_from_text(other).map(|d| !d.is_zero()),
            },
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<JsonValue>> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// The string coercion, parsed as an absolute URL.
    pub fn as_url(&self) -> Option<Url> {
        Url::parse(&self.as_string()?).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_from_string_uses_decimal_intermediate() {
        assert_eq!(JsonValue::from("9007199254740993").as_i64(), Some(9_007_199_254_740_993));
        assert_eq!(JsonValue::from("12.7").as_i64(), Some(12));
        assert_eq!(JsonValue::from("twelve").as_i64(), None);
    }

    #[test]
    fn string_from_number() {
        assert_eq!(JsonValue::from(1234).as_string().as_deref(), Some("1234"));
        assert_eq!(JsonValue::from(1.5).as_string().as_deref(), Some("1.5"));
        assert_eq!(JsonValue::from(true).as_string(), None);
        assert_eq!(JsonValue::from(1.5).as_str(), None);
    }

    #[test]
    fn bool_table() {
        assert_eq!(JsonValue::from(true).as_bool(), Some(true));
        assert_eq!(JsonValue::from(0).as_bool(), Some(false));
        assert_eq!(JsonValue::from(2).as_bool(), Some(true));
        assert_eq!(JsonValue::from("TRUE").as_bool(), Some(true));
        assert_eq!(JsonValue::from("no").as_bool(), Some(false));
        assert_eq!(JsonValue::from("0").as_bool(), Some(false));
        assert_eq!(JsonValue::from("maybe").as_bool(), None);
        assert_eq!(JsonValue::Null.as_bool(), None);
    }

    #[test]
    fn nan_text_is_not_a_number() {
        assert!(JsonValue::from("NaN").as_decimal().is_none());
        assert!(JsonValue::from("NaN").as_number().is_none());
    }

    #[test]
    fn unsigned_rejects_negative() {
        assert_eq!(JsonValue::from(-1).as_u64(), None);
        assert_eq!(JsonValue::from("-1").as_uint(), None);
        assert_eq!(JsonValue::from(u64::MAX).as_u64(), Some(u64::MAX));
    }

    #[test]
    fn url_from_string() {
        let url = JsonValue::from("https://example.com/a?b=c").as_url().unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
        assert!(JsonValue::from("not a url").as_url().is_none());
    }
}
