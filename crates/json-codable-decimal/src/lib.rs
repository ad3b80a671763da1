//! Exact decimal arithmetic for JSON numbers.
//!
//! [`Decimal`] keeps a value as `mantissa * 10^exponent` over an
//! arbitrary-precision integer, so a literal such as `1234.5678901234567`
//! survives parsing, arithmetic and printing without binary rounding drift.
//! Binary floats enter through their shortest round-trip text, never through
//! their raw bit pattern.

mod decimal;
mod error;
mod ops;
mod parse;

pub use decimal::Decimal;
pub use error::DecimalError;
