//! serde bridge and the byte/text boundary.
//!
//! Parsing goes through `serde_json` with `arbitrary_precision`, so number
//! literals arrive as text: integers that fit 64 bits become
//! [`Number::Int`] / [`Number::UInt`], everything else keeps its exact
//! decimal value as [`Number::Decimal`]. A parse either produces a whole tree
//! or an error.

use std::fmt;
use std::str::FromStr;

use json_codable_decimal::Decimal;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::JsonError;
use crate::number::Number;
use crate::value::JsonValue;

fn number_from_json(n: &serde_json::Number) -> Number {
    if let Some(i) = n.as_i64() {
        return Number::Int(i);
    }
    if let Some(u) = n.as_u64() {
        return Number::UInt(u);
    }
    let d = Decimal::parse(&n.to_string());
    if d.is_finite() {
        Number::Decimal(d)
    } else {
        Number::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

/// `None` for NaN and infinities, which JSON cannot spell.
fn number_to_json(n: &Number) -> Option<serde_json::Number> {
    match n {
        Number::Int(i) => Some((*i).into()),
        Number::UInt(u) => Some((*u).into()),
        Number::Float(f) => serde_json::Number::from_f64(*f),
        Number::Decimal(d) if d.is_finite() => d.to_string().parse().ok(),
        Number::Decimal(_) => None,
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Number(n) => JsonValue::Number(number_from_json(&n)),
            Value::String(s) => JsonValue::String(s),
            Value::Array(items) => JsonValue::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                JsonValue::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => number_to_json(&n).map_or(Value::Null, Value::Number),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(items) => Value::Array(items.into_iter().map(Self::from).collect()),
            JsonValue::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Number::Int(i) => serializer.serialize_i64(*i),
            Number::UInt(u) => serializer.serialize_u64(*u),
            Number::Float(f) if f.is_finite() => serializer.serialize_f64(*f),
            _ => match number_to_json(self) {
                Some(n) => n.serialize(serializer),
                None => serializer.serialize_unit(),
            },
        }
    }
}

impl Serialize for JsonValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            JsonValue::Null => serializer.serialize_unit(),
            JsonValue::Bool(b) => serializer.serialize_bool(*b),
            JsonValue::Number(n) => n.serialize(serializer),
            JsonValue::String(s) => serializer.serialize_str(s),
            JsonValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            JsonValue::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(JsonValue::from)
    }
}

impl JsonValue {
    /// Parse a complete JSON document.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, JsonError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Compact JSON bytes.
    pub fn to_vec(&self) -> Result<Vec<u8>, JsonError> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn to_string_pretty(&self) -> Result<String, JsonError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FromStr for JsonValue {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

impl fmt::Display for JsonValue {
    /// Compact JSON text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::NumberKind;

    #[test]
    fn parsed_numbers_pick_storage_format() {
        let v: JsonValue = r#"[1, -1, 18446744073709551615, 1.234, 123456789012345678901234567890]"#
            .parse()
            .unwrap();
        let kinds: Vec<NumberKind> = v
            .as_array()
            .unwrap()
            .iter()
            .map(|item| match item {
                JsonValue::Number(n) => n.kind(),
                other => panic!("expected number, got {other:?}"),
            })
            .collect();
        assert_eq!(
            kinds,
            [
                NumberKind::Signed,
                NumberKind::Signed,
                NumberKind::Unsigned,
                NumberKind::Decimal,
                NumberKind::Decimal,
            ]
        );
    }

    #[test]
    fn decimal_literals_print_exactly() {
        let text = r#"{"price":1234.5678901234567,"big":123456789012345678901234567890}"#;
        let v: JsonValue = text.parse().unwrap();
        assert_eq!(v.to_string(), text);
    }

    #[test]
    fn non_finite_numbers_serialize_as_null() {
        let v = JsonValue::from(vec![
            JsonValue::from(f64::NAN),
            JsonValue::from(Decimal::infinity()),
        ]);
        assert_eq!(v.to_string(), "[null,null]");
        assert_eq!(Value::from(JsonValue::from(f64::INFINITY)), Value::Null);
    }
}
