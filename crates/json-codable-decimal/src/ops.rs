//! Arithmetic on [`Decimal`]. Every operation returns a new value.
//!
//! Addition, subtraction and multiplication are exact. Division is exact
//! when the quotient terminates and otherwise rounds half-up to
//! [`DIVISION_PRECISION`] significant digits. Non-finite operands follow
//! IEEE float rules (`inf - inf` and `0 / 0` are NaN, `x / 0` is infinite).

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::decimal::{digit_count, round_significant, scale_up, Decimal, Repr};

/// Significant digits kept by a non-terminating division.
const DIVISION_PRECISION: i64 = 38;

fn add(a: &Decimal, b: &Decimal) -> Decimal {
    match (&a.repr, &b.repr) {
        (Repr::NaN, _) | (_, Repr::NaN) => Decimal::nan(),
        (Repr::Infinite { negative: x }, Repr::Infinite { negative: y }) => {
            if x == y {
                a.clone()
            } else {
                Decimal::nan()
            }
        }
        (Repr::Infinite { .. }, _) => a.clone(),
        (_, Repr::Infinite { .. }) => b.clone(),
        (
            Repr::Finite {
                mantissa: ma,
                exponent: ea,
            },
            Repr::Finite {
                mantissa: mb,
                exponent: eb,
            },
        ) => {
            let e = (*ea).min(*eb);
            Decimal::from_parts(scale_up(ma, ea - e) + scale_up(mb, eb - e), e)
        }
    }
}

fn negate(a: &Decimal) -> Decimal {
    match &a.repr {
        Repr::NaN => Decimal::nan(),
        Repr::Infinite { negative } => Decimal::infinite(!negative),
        Repr::Finite { mantissa, exponent } => Decimal::from_parts(-mantissa, *exponent),
    }
}

fn sub(a: &Decimal, b: &Decimal) -> Decimal {
    add(a, &negate(b))
}

fn mul(a: &Decimal, b: &Decimal) -> Decimal {
    match (&a.repr, &b.repr) {
        (Repr::NaN, _) | (_, Repr::NaN) => Decimal::nan(),
        (Repr::Infinite { .. }, _) | (_, Repr::Infinite { .. }) => {
            if a.is_zero() || b.is_zero() {
                Decimal::nan()
            } else {
                Decimal::infinite(a.is_sign_minus() != b.is_sign_minus())
            }
        }
        (
            Repr::Finite {
                mantissa: ma,
                exponent: ea,
            },
            Repr::Finite {
                mantissa: mb,
                exponent: eb,
            },
        ) => Decimal::from_parts(ma * mb, ea.saturating_add(*eb)),
    }
}

fn div(a: &Decimal, b: &Decimal) -> Decimal {
    match (&a.repr, &b.repr) {
        (Repr::NaN, _) | (_, Repr::NaN) => Decimal::nan(),
        (Repr::Infinite { .. }, Repr::Infinite { .. }) => Decimal::nan(),
        (Repr::Infinite { negative }, Repr::Finite { mantissa, .. }) => {
            Decimal::infinite(*negative != mantissa.is_negative())
        }
        (Repr::Finite { .. }, Repr::Infinite { .. }) => Decimal::zero(),
        (
            Repr::Finite {
                mantissa: ma,
                exponent: ea,
            },
            Repr::Finite {
                mantissa: mb,
                exponent: eb,
            },
        ) => {
            if mb.is_zero() {
                if ma.is_zero() {
                    return Decimal::nan();
                }
                return Decimal::infinite(ma.is_negative());
            }
            divide_finite(ma, *ea, mb, *eb)
        }
    }
}

fn divide_finite(ma: &BigInt, ea: i64, mb: &BigInt, eb: i64) -> Decimal {
    // Enough digits for the precision plus at least one to round on.
    let shift = (DIVISION_PRECISION + 1 + digit_count(mb) - digit_count(ma)).max(0);
    let numerator = scale_up(ma, shift);
    let quotient = &numerator / mb;
    let exponent = ea - eb - shift;
    if (&numerator % mb).is_zero() {
        return Decimal::from_parts(quotient, exponent);
    }
    let (kept, exponent) = round_significant(quotient, exponent, DIVISION_PRECISION);
    Decimal::from_parts(kept, exponent)
}

/// Round a finite value to `precision` significant digits, recording in
/// `inexact` whether any digit was dropped.
fn limit_precision(value: Decimal, precision: i64, inexact: &mut bool) -> Decimal {
    match value.repr {
        Repr::Finite { mantissa, exponent } if digit_count(&mantissa) > precision => {
            *inexact = true;
            let (kept, exponent) = round_significant(mantissa, exponent, precision);
            Decimal::from_parts(kept, exponent)
        }
        repr => Decimal { repr },
    }
}

impl Decimal {
    /// Raise to an integer power by repeated squaring. A negative exponent
    /// yields the reciprocal of the positive power.
    ///
    /// Powers that fit in 39 digits are exact. Larger intermediates are
    /// rounded to that width, and the result of such a power is rounded to
    /// 38 significant digits.
    pub fn pow(&self, exponent: i32) -> Decimal {
        if exponent == 0 {
            return Decimal::one();
        }
        let working = DIVISION_PRECISION + 1;
        let mut inexact = false;
        let mut result = Decimal::one();
        let mut base = self.clone();
        let mut n = exponent.unsigned_abs();
        while n > 0 {
            if n & 1 == 1 {
                result = limit_precision(&result * &base, working, &mut inexact);
            }
            n >>= 1;
            if n > 0 {
                base = limit_precision(&base * &base, working, &mut inexact);
            }
        }
        if inexact {
            result = limit_precision(result, DIVISION_PRECISION, &mut inexact);
        }
        if exponent < 0 {
            Decimal::one() / result
        } else {
            result
        }
    }

    pub fn abs(&self) -> Decimal {
        if self.is_sign_minus() {
            negate(self)
        } else {
            self.clone()
        }
    }

    /// `other - self`: the stride that advances `self` to `other`.
    pub fn distance_to(&self, other: &Decimal) -> Decimal {
        sub(other, self)
    }

    pub fn advanced_by(&self, amount: &Decimal) -> Decimal {
        add(self, amount)
    }
}

macro_rules! binary_op {
    ($trait:ident, $method:ident, $f:ident) => {
        impl $trait<&Decimal> for &Decimal {
            type Output = Decimal;
            fn $method(self, rhs: &Decimal) -> Decimal {
                $f(self, rhs)
            }
        }

        impl $trait<Decimal> for Decimal {
            type Output = Decimal;
            fn $method(self, rhs: Decimal) -> Decimal {
                $f(&self, &rhs)
            }
        }

        impl $trait<&Decimal> for Decimal {
            type Output = Decimal;
            fn $method(self, rhs: &Decimal) -> Decimal {
                $f(&self, rhs)
            }
        }

        impl $trait<Decimal> for &Decimal {
            type Output = Decimal;
            fn $method(self, rhs: Decimal) -> Decimal {
                $f(self, &rhs)
            }
        }
    };
}

binary_op!(Add, add, add);
binary_op!(Sub, sub, sub);
binary_op!(Mul, mul, mul);
binary_op!(Div, div, div);

macro_rules! assign_op {
    ($trait:ident, $method:ident, $f:ident) => {
        impl $trait<Decimal> for Decimal {
            fn $method(&mut self, rhs: Decimal) {
                let result = $f(self, &rhs);
                *self = result;
            }
        }

        impl $trait<&Decimal> for Decimal {
            fn $method(&mut self, rhs: &Decimal) {
                let result = $f(self, rhs);
                *self = result;
            }
        }

        impl $trait<i64> for Decimal {
            fn $method(&mut self, rhs: i64) {
                let result = $f(self, &Decimal::from(rhs));
                *self = result;
            }
        }

        impl $trait<f64> for Decimal {
            fn $method(&mut self, rhs: f64) {
                let result = $f(self, &Decimal::from(rhs));
                *self = result;
            }
        }
    };
}

assign_op!(AddAssign, add_assign, add);
assign_op!(SubAssign, sub_assign, sub);
assign_op!(MulAssign, mul_assign, mul);
assign_op!(DivAssign, div_assign, div);

impl Neg for Decimal {
    type Output = Decimal;
    fn neg(self) -> Decimal {
        negate(&self)
    }
}

impl Neg for &Decimal {
    type Output = Decimal;
    fn neg(self) -> Decimal {
        negate(self)
    }
}
