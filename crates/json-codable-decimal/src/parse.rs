//! Decimal literal parser.

use num_bigint::BigInt;

use crate::decimal::Decimal;
use crate::error::DecimalError;

/// Strict parse of a decimal literal; surrounding whitespace is ignored.
pub(crate) fn parse_decimal(text: &str) -> Result<Decimal, DecimalError> {
    let malformed = || DecimalError::Malformed(text.to_string());
    let s = text.trim();

    match s {
        "NaN" | "nan" => return Ok(Decimal::nan()),
        "Infinity" | "+Infinity" | "inf" | "+inf" => return Ok(Decimal::infinity()),
        "-Infinity" | "-inf" => return Ok(Decimal::neg_infinity()),
        _ => {}
    }

    let (negative, unsigned) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (number, exponent_text) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
        Some(i) => (&unsigned[..i], Some(&unsigned[i + 1..])),
        None => (unsigned, None),
    };
    let (int_part, frac_part) = match number.find('.') {
        Some(i) => (&number[..i], &number[i + 1..]),
        None => (number, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(malformed());
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(malformed());
    }

    let exponent = match exponent_text {
        Some(e) => e.parse::<i64>().map_err(|_| malformed())?,
        None => 0,
    };
    let exponent = exponent
        .checked_sub(frac_part.len() as i64)
        .ok_or_else(malformed)?;

    let mut digits = String::with_capacity(int_part.len() + frac_part.len());
    digits.push_str(int_part);
    digits.push_str(frac_part);
    let mut mantissa = BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(malformed)?;
    if negative {
        mantissa = -mantissa;
    }

    Ok(Decimal::from_parts(mantissa, exponent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_json_number_grammar() {
        for text in ["0", "-0", "12", "-12.5", "1.25e3", "1.25E-3", "6.02e+23", " 42 "] {
            assert!(parse_decimal(text).is_ok(), "{text}");
        }
    }

    #[test]
    fn accepts_lenient_forms() {
        assert_eq!(parse_decimal(".5").unwrap(), parse_decimal("0.5").unwrap());
        assert_eq!(parse_decimal("5.").unwrap(), parse_decimal("5").unwrap());
        assert_eq!(parse_decimal("+7").unwrap(), parse_decimal("7").unwrap());
    }

    #[test]
    fn rejects_malformed() {
        for text in ["", ".", "-", "abc", "1.2.3", "1e", "1e5.5", "--1", "1_000", "0x10", "true"] {
            assert_eq!(
                parse_decimal(text),
                Err(DecimalError::Malformed(text.to_string())),
                "{text}"
            );
        }
    }

    #[test]
    fn special_words() {
        assert!(parse_decimal("NaN").unwrap().is_nan());
        assert!(parse_decimal("Infinity").unwrap().is_infinite());
        assert!(parse_decimal("-Infinity").unwrap().is_sign_minus());
    }
}
