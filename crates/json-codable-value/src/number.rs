//! JSON numbers tagged with their storage format.

use std::fmt;

use json_codable_decimal::Decimal;

/// A JSON number.
///
/// The variant records how the number is stored so lossless conversions can
/// pick the right path: integers convert through 64-bit integers, floats
/// through their shortest decimal text, decimals are taken as-is.
#[derive(Debug, Clone)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
    Decimal(Decimal),
}

/// Storage format of a [`Number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberKind {
    Signed,
    Unsigned,
    Floating,
    Decimal,
}

impl Number {
    pub fn kind(&self) -> NumberKind {
        match self {
            Number::Int(_) => NumberKind::Signed,
            Number::UInt(_) => NumberKind::Unsigned,
            Number::Float(_) => NumberKind::Floating,
            Number::Decimal(_) => NumberKind::Decimal,
        }
    }

    /// Widest lossless conversion for the storage format.
    pub fn to_decimal(&self) -> Decimal {
        match self {
            Number::Int(i) => Decimal::from(*i),
            Number::UInt(u) => Decimal::from(*u),
            Number::Float(f) => Decimal::from(*f),
            Number::Decimal(d) => d.clone(),
        }
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Int(i) => *i as f64,
            Number::UInt(u) => *u as f64,
            Number::Float(f) => *f,
            Number::Decimal(d) => d.to_f64(),
        }
    }

    pub fn to_f32(&self) -> f32 {
        match self {
            Number::Int(i) => *i as f32,
            Number::UInt(u) => *u as f32,
            Number::Float(f) => *f as f32,
            Number::Decimal(d) => d.to_f32(),
        }
    }

    /// Integer part truncated toward zero; `None` when out of range.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Number::Int(i) => Some(*i),
            Number::UInt(u) => i64::try_from(*u).ok(),
            Number::Float(f) => {
                let t = f.trunc();
                let in_range = t.is_finite()
                    && t >= -9_223_372_036_854_775_808.0
                    && t < 9_223_372_036_854_775_808.0;
                in_range.then_some(t as i64)
            }
            Number::Decimal(d) => d.to_i64(),
        }
    }

    /// Integer part truncated toward zero; `None` when negative or out of range.
    pub fn to_u64(&self) -> Option<u64> {
        match self {
            Number::Int(i) => u64::try_from(*i).ok(),
            Number::UInt(u) => Some(*u),
            Number::Float(f) => {
                let t = f.trunc();
                (t.is_finite() && t >= 0.0 && t < 18_446_744_073_709_551_616.0).then_some(t as u64)
            }
            Number::Decimal(d) => d.to_u64(),
        }
    }

    /// Non-zero is `true`. NaN has no truth value.
    pub fn truthiness(&self) -> Option<bool> {
        match self {
            Number::Int(i) => Some(*i != 0),
            Number::UInt(u) => Some(*u != 0),
            Number::Float(f) => (!f.is_nan()).then_some(*f != 0.0),
            Number::Decimal(d) => (!d.is_nan()).then(|| !d.is_zero()),
        }
    }
}

impl PartialEq for Number {
    /// Numbers compare by value, whatever their storage format.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (Number::UInt(a), Number::UInt(b)) => a == b,
            (Number::Float(a), Number::Float(b)) => a == b,
            _ => self.to_decimal() == other.to_decimal(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::UInt(u) => write!(f, "{u}"),
            Number::Float(x) => write!(f, "{}", Decimal::from(*x)),
            Number::Decimal(d) => write!(f, "{d}"),
        }
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number::Int(value as i64)
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number::UInt(value as u64)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        // Widen through the shortest text so 1.234f32 becomes 1.234, not
        // 1.2339999675750732.
        Number::Float(format!("{value:e}").parse().unwrap_or(f64::from(value)))
    }
}

impl From<Decimal> for Number {
    fn from(value: Decimal) -> Self {
        Number::Decimal(value)
    }
}
