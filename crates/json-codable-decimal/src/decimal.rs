//! The [`Decimal`] value type: construction, comparison, predicates and
//! conversions. Arithmetic lives in `ops.rs`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Signed, ToPrimitive, Zero};

use crate::error::DecimalError;
use crate::parse::parse_decimal;

/// Adjusted exponents beyond this overflow to infinity or underflow to zero.
pub(crate) const EXPONENT_LIMIT: i64 = 16_384;

/// Adjusted exponents within this range print in plain notation.
const PLAIN_NOTATION_LIMIT: i64 = 64;

/// An immutable, arbitrary-precision decimal number.
///
/// Finite values are normalized (no trailing zeros in the mantissa), so two
/// decimals with the same numeric value share one representation. NaN and
/// the two infinities follow IEEE float semantics for comparison: NaN is
/// unordered and never equal to itself.
///
/// ```
/// use json_codable_decimal::Decimal;
///
/// let a = Decimal::parse("0.1");
/// let b = Decimal::parse("0.2");
/// assert_eq!((a + b).to_string(), "0.3");
/// ```
#[derive(Debug, Clone)]
pub struct Decimal {
    pub(crate) repr: Repr,
}

#[derive(Debug, Clone)]
pub(crate) enum Repr {
    Finite { mantissa: BigInt, exponent: i64 },
    Infinite { negative: bool },
    NaN,
}

pub(crate) fn pow10(n: u32) -> BigInt {
    BigInt::from(10u8).pow(n)
}

/// Number of decimal digits in the magnitude of `m` (zero has one digit).
pub(crate) fn digit_count(m: &BigInt) -> i64 {
    let magnitude = m.magnitude();
    if let Some(small) = magnitude.to_u64() {
        return small.checked_ilog10().map_or(1, |d| i64::from(d) + 1);
    }
    // 10^estimate <= 2^(bits - 1) <= magnitude < 2 * 10^(estimate + 1)
    let estimate = ((magnitude.bits() - 1) as f64 * std::f64::consts::LOG10_2) as u32;
    if *magnitude >= BigUint::from(10u8).pow(estimate + 1) {
        i64::from(estimate) + 2
    } else {
        i64::from(estimate) + 1
    }
}

/// Round `mantissa * 10^exponent` half-up (away from zero) to at most
/// `precision` significant digits.
pub(crate) fn round_significant(mantissa: BigInt, exponent: i64, precision: i64) -> (BigInt, i64) {
    let excess = digit_count(&mantissa) - precision;
    if excess <= 0 {
        return (mantissa, exponent);
    }
    let divisor = pow10(excess as u32);
    let mut kept = &mantissa / &divisor;
    let dropped = (&mantissa % &divisor).abs();
    if dropped * 2u8 >= divisor {
        if mantissa.is_negative() {
            kept -= 1u8;
        } else {
            kept += 1u8;
        }
    }
    (kept, exponent + excess)
}

/// `m * 10^by` for a non-negative `by`.
pub(crate) fn scale_up(m: &BigInt, by: i64) -> BigInt {
    if by <= 0 {
        return m.clone();
    }
    m * pow10(by as u32)
}

impl Decimal {
    /// Build a finite value from `mantissa * 10^exponent`, normalizing and
    /// applying the exponent limits.
    pub(crate) fn from_parts(mut mantissa: BigInt, mut exponent: i64) -> Self {
        if mantissa.is_zero() {
            return Self::zero();
        }
        let ten = BigInt::from(10u8);
        while (&mantissa % &ten).is_zero() {
            mantissa /= &ten;
            exponent = exponent.saturating_add(1);
        }
        let adjusted = exponent.saturating_add(digit_count(&mantissa) - 1);
        if adjusted > EXPONENT_LIMIT {
            return Self::infinite(mantissa.is_negative());
        }
        if adjusted < -EXPONENT_LIMIT {
            return Self::zero();
        }
        Self {
            repr: Repr::Finite { mantissa, exponent },
        }
    }

    pub(crate) fn infinite(negative: bool) -> Self {
        Self {
            repr: Repr::Infinite { negative },
        }
    }

    pub fn zero() -> Self {
        Self {
            repr: Repr::Finite {
                mantissa: BigInt::zero(),
                exponent: 0,
            },
        }
    }

    pub fn one() -> Self {
        Self::from(1u8)
    }

    /// The positive infinity.
    pub fn infinity() -> Self {
        Self::infinite(false)
    }

    pub fn neg_infinity() -> Self {
        Self::infinite(true)
    }

    /// The not-a-number sentinel, also produced by malformed literals.
    pub fn nan() -> Self {
        Self { repr: Repr::NaN }
    }

    /// Alias of [`Decimal::nan`]; every NaN here is quiet.
    pub fn quiet_nan() -> Self {
        Self::nan()
    }

    /// Parse a decimal literal, yielding NaN instead of an error when the
    /// text is malformed.
    ///
    /// Accepts an optional sign, digits with an optional fraction, an
    /// optional `e`/`E` exponent, and the words `NaN` / `Infinity`.
    pub fn parse(text: &str) -> Self {
        parse_decimal(text).unwrap_or_else(|_| Self::nan())
    }

    // -----------------------------------------------------------------------
    // Predicates
    // -----------------------------------------------------------------------

    pub fn is_nan(&self) -> bool {
        matches!(self.repr, Repr::NaN)
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self.repr, Repr::Infinite { .. })
    }

    /// `true` unless the value is infinite or NaN.
    pub fn is_finite(&self) -> bool {
        matches!(self.repr, Repr::Finite { .. })
    }

    pub fn is_zero(&self) -> bool {
        matches!(&self.repr, Repr::Finite { mantissa, .. } if mantissa.is_zero())
    }

    /// `true` for negative finite values and negative infinity. Zero is
    /// unsigned here, so `-0` reports `false`.
    pub fn is_sign_minus(&self) -> bool {
        match &self.repr {
            Repr::Finite { mantissa, .. } => mantissa.is_negative(),
            Repr::Infinite { negative } => *negative,
            Repr::NaN => false,
        }
    }

    /// Probed through `f64`: values below the double range report `false`
    /// even though they are non-zero decimals.
    pub fn is_normal(&self) -> bool {
        self.to_f64().is_normal()
    }

    /// Probed through `f64`, with the same caveat as [`Decimal::is_normal`].
    pub fn is_subnormal(&self) -> bool {
        self.to_f64().is_subnormal()
    }

    /// NaN values are always quiet.
    pub fn is_signaling(&self) -> bool {
        false
    }

    /// `true` for finite values without a fractional part.
    pub fn is_integer(&self) -> bool {
        matches!(&self.repr, Repr::Finite { exponent, .. } if *exponent >= 0)
    }

    // -----------------------------------------------------------------------
    // Conversions
    // -----------------------------------------------------------------------

    /// Nearest `f64`, computed from the decimal text.
    pub fn to_f64(&self) -> f64 {
        match &self.repr {
            Repr::Finite { .. } => self.to_string().parse().unwrap_or(f64::NAN),
            Repr::Infinite { negative: true } => f64::NEG_INFINITY,
            Repr::Infinite { negative: false } => f64::INFINITY,
            Repr::NaN => f64::NAN,
        }
    }

    /// Nearest `f32`, computed from the decimal text.
    pub fn to_f32(&self) -> f32 {
        match &self.repr {
            Repr::Finite { .. } => self.to_string().parse().unwrap_or(f32::NAN),
            Repr::Infinite { negative: true } => f32::NEG_INFINITY,
            Repr::Infinite { negative: false } => f32::INFINITY,
            Repr::NaN => f32::NAN,
        }
    }

    /// Integer part, truncated toward zero. `None` for non-finite values and
    /// values outside the `i128` range.
    pub fn to_i128(&self) -> Option<i128> {
        self.truncated()?.to_i128()
    }

    pub fn to_i64(&self) -> Option<i64> {
        self.truncated()?.to_i64()
    }

    pub fn to_u64(&self) -> Option<u64> {
        self.truncated()?.to_u64()
    }

    fn truncated(&self) -> Option<BigInt> {
        let Repr::Finite { mantissa, exponent } = &self.repr else {
            return None;
        };
        if *exponent >= 0 {
            // Anything past 40 digits is outside every primitive range.
            if exponent + digit_count(mantissa) > 40 {
                return None;
            }
            return Some(scale_up(mantissa, *exponent));
        }
        let scale = -exponent;
        if scale > digit_count(mantissa) {
            return Some(BigInt::zero());
        }
        Some(mantissa / pow10(scale as u32))
    }

    fn cmp_finite(ma: &BigInt, ea: i64, mb: &BigInt, eb: i64) -> Ordering {
        let (sa, sb) = (ma.sign(), mb.sign());
        if sa != sb {
            return sa.cmp(&sb);
        }
        if sa == Sign::NoSign {
            return Ordering::Equal;
        }
        let adjusted_a = ea + digit_count(ma);
        let adjusted_b = eb + digit_count(mb);
        let magnitude = if adjusted_a != adjusted_b {
            adjusted_a.cmp(&adjusted_b)
        } else {
            let e = ea.min(eb);
            scale_up(&ma.abs(), ea - e).cmp(&scale_up(&mb.abs(), eb - e))
        };
        if sa == Sign::Minus {
            magnitude.reverse()
        } else {
            magnitude
        }
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Self::zero()
    }
}

// ---------------------------------------------------------------------------
// Construction from primitives
// ---------------------------------------------------------------------------

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Decimal {
                fn from(value: $t) -> Self {
                    Self::from_parts(BigInt::from(value), 0)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<f64> for Decimal {
    fn from(value: f64) -> Self {
        if value.is_nan() {
            return Self::nan();
        }
        if value.is_infinite() {
            return Self::infinite(value < 0.0);
        }
        // `{:e}` is the shortest text that parses back to the same double.
        Self::parse(&format!("{value:e}"))
    }
}

impl From<f32> for Decimal {
    fn from(value: f32) -> Self {
        if value.is_nan() {
            return Self::nan();
        }
        if value.is_infinite() {
            return Self::infinite(value < 0.0);
        }
        Self::parse(&format!("{value:e}"))
    }
}

impl From<bool> for Decimal {
    fn from(value: bool) -> Self {
        Self::from(u8::from(value))
    }
}

impl From<&str> for Decimal {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for Decimal {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s)
    }
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (&self.repr, &other.repr) {
            (Repr::NaN, _) | (_, Repr::NaN) => None,
            (Repr::Infinite { negative: a }, Repr::Infinite { negative: b }) => Some(b.cmp(a)),
            (Repr::Infinite { negative }, Repr::Finite { .. }) => Some(if *negative {
                Ordering::Less
            } else {
                Ordering::Greater
            }),
            (Repr::Finite { .. }, Repr::Infinite { negative }) => Some(if *negative {
                Ordering::Greater
            } else {
                Ordering::Less
            }),
            (
                Repr::Finite {
                    mantissa: ma,
                    exponent: ea,
                },
                Repr::Finite {
                    mantissa: mb,
                    exponent: eb,
                },
            ) => Some(Self::cmp_finite(ma, *ea, mb, *eb)),
        }
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

/// Lets decimals key hash maps and sets. NaN is still unequal to itself, so
/// a NaN key can be inserted but never looked up.
impl Eq for Decimal {}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Finite values are normalized, so equal values share one repr.
        match &self.repr {
            Repr::Finite { mantissa, exponent } => {
                0u8.hash(state);
                mantissa.hash(state);
                exponent.hash(state);
            }
            Repr::Infinite { negative } => {
                1u8.hash(state);
                negative.hash(state);
            }
            Repr::NaN => 2u8.hash(state),
        }
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::NaN => f.write_str("NaN"),
            Repr::Infinite { negative: true } => f.write_str("-Infinity"),
            Repr::Infinite { negative: false } => f.write_str("Infinity"),
            Repr::Finite { mantissa, exponent } => write_finite(f, mantissa, *exponent),
        }
    }
}

fn write_finite(f: &mut fmt::Formatter<'_>, mantissa: &BigInt, exponent: i64) -> fmt::Result {
    let digits = mantissa.magnitude().to_string();
    if mantissa.is_negative() {
        f.write_str("-")?;
    }
    let adjusted = exponent + digits.len() as i64 - 1;
    if adjusted.abs() > PLAIN_NOTATION_LIMIT {
        let (head, tail) = digits.split_at(1);
        f.write_str(head)?;
        if !tail.is_empty() {
            write!(f, ".{tail}")?;
        }
        return write!(f, "e{adjusted}");
    }
    if exponent >= 0 {
        f.write_str(&digits)?;
        for _ in 0..exponent {
            f.write_str("0")?;
        }
        return Ok(());
    }
    let scale = (-exponent) as usize;
    if digits.len() > scale {
        let (int, frac) = digits.split_at(digits.len() - scale);
        write!(f, "{int}.{frac}")
    } else {
        f.write_str("0.")?;
        for _ in 0..(scale - digits.len()) {
            f.write_str("0")?;
        }
        f.write_str(&digits)
    }
}
