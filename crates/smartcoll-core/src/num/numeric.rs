// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Per-Representation Arithmetic
//!
//! `Numeric` is implemented once for every supported representation and is
//! the single place where the semantics of each kind live:
//!
//! - fixed-width integers (`i8`..`i64`) wrap in two's complement on
//!   overflow, including `abs`/`neg` of `MIN` and `MIN / -1`;
//! - floats follow IEEE 754, so division by zero yields an infinity or NaN;
//! - `BigInt` is exact;
//! - `Decimal` is exact for add, subtract and multiply. Results outside of
//!   its 96-bit range are reported as [`ArithmeticError::Overflow`], and
//!   results needing more fractional digits than it can hold (at most 28)
//!   as [`ArithmeticError::PrecisionLoss`] instead of being rounded.
//!
//! Integer and decimal division by zero is reported as
//! [`ArithmeticError::DivisionByZero`].

use crate::{
    error::{ArithmeticError, Result},
    num::{
        kind::NumericKind,
        ops::wrapping_arithmetic::{
            WrappingAbsVal, WrappingAddVal, WrappingDivVal, WrappingMulVal, WrappingNegVal,
            WrappingSubVal,
        },
        value::NumericValue,
    },
};
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::{Debug, Display};

/// A numeric representation supported by the arithmetic dispatcher.
///
/// Both operands of a binary method always share the implementing type, so
/// no coercion between kinds can happen through this trait.
pub trait Numeric:
    Clone
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Zero
    + One
    + Into<NumericValue>
    + TryFrom<NumericValue, Error = ArithmeticError>
    + Send
    + Sync
    + 'static
{
    /// The kind tag of this representation.
    const KIND: NumericKind;

    /// Returns `self + rhs`.
    fn add_val(&self, rhs: &Self) -> Result<Self>;

    /// Returns `self - rhs`.
    fn sub_val(&self, rhs: &Self) -> Result<Self>;

    /// Returns `self * rhs`.
    fn mul_val(&self, rhs: &Self) -> Result<Self>;

    /// Returns `self / rhs` using the native division of the representation.
    fn div_val(&self, rhs: &Self) -> Result<Self>;

    /// Returns the absolute value.
    fn abs_val(&self) -> Self;

    /// Returns the negated value.
    fn neg_val(&self) -> Self;

    /// Returns `true` if the value truncated toward zero is an even integer.
    ///
    /// Non-finite floats saturate to an integer first: NaN counts as zero
    /// (even), positive infinity as the largest `i32` (odd) and negative
    /// infinity as the smallest `i32` (even).
    fn is_even(&self) -> bool;

    /// Returns the smaller operand, preferring `rhs` when the two are not
    /// ordered `self < rhs` (this includes equality and NaN).
    #[inline]
    fn min_val(&self, rhs: &Self) -> Self {
        if self < rhs {
            self.clone()
        } else {
            rhs.clone()
        }
    }

    /// Returns the larger operand, preferring `rhs` when the two are not
    /// ordered `self > rhs` (this includes equality and NaN).
    #[inline]
    fn max_val(&self, rhs: &Self) -> Self {
        if self > rhs {
            self.clone()
        } else {
            rhs.clone()
        }
    }

    /// Rounds to `scale` fractional digits.
    ///
    /// A no-op for every kind without a decimal scale.
    #[inline]
    fn rescale(self, _scale: u32, _strategy: RoundingStrategy) -> Self {
        self
    }
}

#[cold]
fn division_by_zero(kind: NumericKind) -> ArithmeticError {
    tracing::debug!(target: "smartcoll::arith", %kind, "rejected division by zero");
    ArithmeticError::DivisionByZero { kind }
}

#[cold]
fn overflow(operation: &'static str, kind: NumericKind) -> ArithmeticError {
    tracing::debug!(target: "smartcoll::arith", %kind, operation, "result out of range");
    ArithmeticError::Overflow { operation, kind }
}

#[cold]
fn precision_loss(operation: &'static str, kind: NumericKind) -> ArithmeticError {
    tracing::debug!(target: "smartcoll::arith", %kind, operation, "result would be rounded");
    ArithmeticError::PrecisionLoss { operation, kind }
}

/// Returns `d` as an integer count of `10^-scale` units.
///
/// `scale` must not be smaller than `d.scale()`.
#[inline]
fn decimal_units(d: &Decimal, scale: u32) -> BigInt {
    BigInt::from(d.mantissa()) * BigInt::from(10u8).pow(scale - d.scale())
}

/// Accepts `result` only if it equals the exact value `units * 10^-scale`.
///
/// `rust_decimal` rounds silently once a result needs more than 28
/// fractional digits, which always shows up as a scale below `scale`.
fn ensure_exact(
    result: Decimal,
    units: impl FnOnce(u32) -> BigInt,
    scale: u32,
    operation: &'static str,
) -> Result<Decimal> {
    if result.scale() >= scale {
        return Ok(result);
    }
    // Trailing zeros may have been dropped without changing the value.
    if decimal_units(&result, scale) == units(scale) {
        Ok(result)
    } else {
        Err(precision_loss(operation, NumericKind::Decimal))
    }
}

macro_rules! impl_numeric_for_int {
    ($t:ty, $kind:ident) => {
        impl Numeric for $t {
            const KIND: NumericKind = NumericKind::$kind;

            #[inline(always)]
            fn add_val(&self, rhs: &Self) -> Result<Self> {
                Ok((*self).wrapping_add_val(*rhs))
            }

            #[inline(always)]
            fn sub_val(&self, rhs: &Self) -> Result<Self> {
                Ok((*self).wrapping_sub_val(*rhs))
            }

            #[inline(always)]
            fn mul_val(&self, rhs: &Self) -> Result<Self> {
                Ok((*self).wrapping_mul_val(*rhs))
            }

            #[inline(always)]
            fn div_val(&self, rhs: &Self) -> Result<Self> {
                if *rhs == 0 {
                    return Err(division_by_zero(Self::KIND));
                }
                Ok((*self).wrapping_div_val(*rhs))
            }

            #[inline(always)]
            fn abs_val(&self) -> Self {
                (*self).wrapping_abs_val()
            }

            #[inline(always)]
            fn neg_val(&self) -> Self {
                (*self).wrapping_neg_val()
            }

            #[inline(always)]
            fn is_even(&self) -> bool {
                *self % 2 == 0
            }
        }
    };
}

impl_numeric_for_int!(i8, I8);
impl_numeric_for_int!(i16, I16);
impl_numeric_for_int!(i32, I32);
impl_numeric_for_int!(i64, I64);

macro_rules! impl_numeric_for_float {
    ($t:ty, $kind:ident) => {
        impl Numeric for $t {
            const KIND: NumericKind = NumericKind::$kind;

            #[inline(always)]
            fn add_val(&self, rhs: &Self) -> Result<Self> {
                Ok(*self + *rhs)
            }

            #[inline(always)]
            fn sub_val(&self, rhs: &Self) -> Result<Self> {
                Ok(*self - *rhs)
            }

            #[inline(always)]
            fn mul_val(&self, rhs: &Self) -> Result<Self> {
                Ok(*self * *rhs)
            }

            #[inline(always)]
            fn div_val(&self, rhs: &Self) -> Result<Self> {
                Ok(*self / *rhs)
            }

            #[inline(always)]
            fn abs_val(&self) -> Self {
                <$t>::abs(*self)
            }

            #[inline(always)]
            fn neg_val(&self) -> Self {
                -*self
            }

            #[inline(always)]
            fn is_even(&self) -> bool {
                if self.is_nan() {
                    true
                } else if self.is_infinite() {
                    self.is_sign_negative()
                } else {
                    <$t>::trunc(*self) % 2.0 == 0.0
                }
            }
        }
    };
}

impl_numeric_for_float!(f32, F32);
impl_numeric_for_float!(f64, F64);

impl Numeric for BigInt {
    const KIND: NumericKind = NumericKind::BigInt;

    #[inline]
    fn add_val(&self, rhs: &Self) -> Result<Self> {
        Ok(self + rhs)
    }

    #[inline]
    fn sub_val(&self, rhs: &Self) -> Result<Self> {
        Ok(self - rhs)
    }

    #[inline]
    fn mul_val(&self, rhs: &Self) -> Result<Self> {
        Ok(self * rhs)
    }

    #[inline]
    fn div_val(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(division_by_zero(Self::KIND));
        }
        Ok(self / rhs)
    }

    #[inline]
    fn abs_val(&self) -> Self {
        Signed::abs(self)
    }

    #[inline]
    fn neg_val(&self) -> Self {
        -self
    }

    #[inline]
    fn is_even(&self) -> bool {
        (self % &BigInt::from(2u8)).is_zero()
    }
}

impl Numeric for Decimal {
    const KIND: NumericKind = NumericKind::Decimal;

    #[inline]
    fn add_val(&self, rhs: &Self) -> Result<Self> {
        let sum = self
            .checked_add(*rhs)
            .ok_or_else(|| overflow("add", Self::KIND))?;
        ensure_exact(
            sum,
            |s| decimal_units(self, s) + decimal_units(rhs, s),
            self.scale().max(rhs.scale()),
            "add",
        )
    }

    #[inline]
    fn sub_val(&self, rhs: &Self) -> Result<Self> {
        let difference = self
            .checked_sub(*rhs)
            .ok_or_else(|| overflow("subtract", Self::KIND))?;
        ensure_exact(
            difference,
            |s| decimal_units(self, s) - decimal_units(rhs, s),
            self.scale().max(rhs.scale()),
            "subtract",
        )
    }

    #[inline]
    fn mul_val(&self, rhs: &Self) -> Result<Self> {
        let product = self
            .checked_mul(*rhs)
            .ok_or_else(|| overflow("multiply", Self::KIND))?;
        let scale = self.scale() + rhs.scale();
        ensure_exact(
            product,
            |s| {
                BigInt::from(self.mantissa())
                    * BigInt::from(rhs.mantissa())
                    * BigInt::from(10u8).pow(s - scale)
            },
            scale,
            "multiply",
        )
    }

    #[inline]
    fn div_val(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(division_by_zero(Self::KIND));
        }
        self.checked_div(*rhs)
            .ok_or_else(|| overflow("divide", Self::KIND))
    }

    #[inline]
    fn abs_val(&self) -> Self {
        Decimal::abs(self)
    }

    #[inline]
    fn neg_val(&self) -> Self {
        -*self
    }

    #[inline]
    fn is_even(&self) -> bool {
        (self.trunc() % Decimal::TWO).is_zero()
    }

    #[inline]
    fn rescale(self, scale: u32, strategy: RoundingStrategy) -> Self {
        self.round_dp_with_strategy(scale, strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_fixed_width_wraps() {
        assert_eq!(127i8.add_val(&1).unwrap(), -128);
        assert_eq!(i16::MIN.sub_val(&1).unwrap(), i16::MAX);
        assert_eq!(i32::MAX.mul_val(&2).unwrap(), -2);
        assert_eq!(i64::MIN.div_val(&-1).unwrap(), i64::MIN);
    }

    #[test]
    fn test_minimum_value_abs_and_neg_are_idempotent() {
        assert_eq!(i8::MIN.abs_val(), i8::MIN);
        assert_eq!(i8::MIN.neg_val(), i8::MIN);
        assert_eq!(i64::MIN.neg_val(), i64::MIN);
    }

    #[test]
    fn test_integer_division_truncates_and_rejects_zero() {
        assert_eq!(7i32.div_val(&2).unwrap(), 3);
        assert_eq!((-7i32).div_val(&2).unwrap(), -3);
        assert_eq!(
            5i16.div_val(&0),
            Err(ArithmeticError::DivisionByZero {
                kind: NumericKind::I16
            })
        );
    }

    #[test]
    fn test_float_division_follows_ieee() {
        assert_eq!(1.0f64.div_val(&0.0).unwrap(), f64::INFINITY);
        assert_eq!((-1.0f32).div_val(&0.0).unwrap(), f32::NEG_INFINITY);
        assert!(0.0f64.div_val(&0.0).unwrap().is_nan());
    }

    #[test]
    fn test_float_min_max_with_nan_prefers_rhs() {
        assert!(f64::NAN.min_val(&1.0) == 1.0);
        assert!(1.0f64.min_val(&f64::NAN).is_nan());
        assert!(f64::NAN.max_val(&1.0) == 1.0);
    }

    #[test]
    fn test_bigint_is_exact() {
        let big = BigInt::from(i64::MAX);
        let sum = big.add_val(&BigInt::from(1)).unwrap();
        assert_eq!(sum.to_string(), "9223372036854775808");
        let product = sum.mul_val(&sum).unwrap();
        assert_eq!(
            product.to_string(),
            "85070591730234615865843651857942052864"
        );
        assert_eq!(BigInt::from(-7).div_val(&BigInt::from(2)).unwrap(), BigInt::from(-3));
        assert!(BigInt::from(1).div_val(&BigInt::from(0)).is_err());
    }

    #[test]
    fn test_decimal_is_exact_and_reports_overflow() {
        assert_eq!(dec("0.1").add_val(&dec("0.2")).unwrap(), dec("0.3"));
        assert_eq!(dec("1.5").mul_val(&dec("-2")).unwrap(), dec("-3.0"));
        assert_eq!(
            Decimal::MAX.add_val(&Decimal::ONE),
            Err(ArithmeticError::Overflow {
                operation: "add",
                kind: NumericKind::Decimal
            })
        );
        assert_eq!(
            dec("1").div_val(&Decimal::ZERO),
            Err(ArithmeticError::DivisionByZero {
                kind: NumericKind::Decimal
            })
        );
    }

    #[test]
    fn test_decimal_rejects_results_it_would_round() {
        let loss = |operation| {
            Err(ArithmeticError::PrecisionLoss {
                operation,
                kind: NumericKind::Decimal,
            })
        };
        let large = dec("100000000000000000000");
        let tiny = dec("0.0000000001");
        assert_eq!(large.add_val(&tiny), loss("add"));
        assert_eq!(large.sub_val(&tiny), loss("subtract"));
        assert_eq!(tiny.sub_val(&large), loss("subtract"));
        assert_eq!(
            dec("0.000000000000001").mul_val(&dec("0.000000000000003")),
            loss("multiply")
        );

        // Dropping trailing zeros does not change the value.
        assert_eq!(
            dec("0.00000000000010000").mul_val(&dec("0.00000000000020000")),
            Ok(dec("0.00000000000000000000000002"))
        );
        assert_eq!(large.add_val(&dec("0.5")), Ok(dec("100000000000000000000.5")));
    }

    #[test]
    fn test_is_even_truncates() {
        assert!(4i8.is_even());
        assert!(!(-3i64).is_even());
        assert!(4.5f64.is_even());
        assert!(!f32::INFINITY.is_even());
        assert!(f32::NEG_INFINITY.is_even());
        assert!(f64::NAN.is_even());
        assert!(!(-7.9f32).is_even());
        assert!(BigInt::from(-10).is_even());
        assert!(dec("2.9").is_even());
        assert!(!dec("-3.1").is_even());
    }

    #[test]
    fn test_rescale_only_touches_decimal() {
        assert_eq!(
            dec("2.345").rescale(2, RoundingStrategy::MidpointNearestEven),
            dec("2.34")
        );
        assert_eq!(2.345f64.rescale(2, RoundingStrategy::MidpointNearestEven), 2.345);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::arithmetic::operation::{
        BinaryOperation, ADDITION, MAXIMUM, MINIMUM, MULTIPLICATION, SUBTRACTION,
    };
    use crate::num::value::NumericValue;
    use proptest::prelude::*;

    /// Checks that the tagged path agrees with the statically typed one.
    fn agrees_at_runtime<T: Numeric, O: BinaryOperation>(op: O, a: &T, b: &T) -> bool {
        let dynamic = op.apply_value(&a.clone().into(), &b.clone().into());
        let kind_kept = dynamic.as_ref().map_or(true, |v| v.kind() == T::KIND);
        kind_kept && dynamic == op.apply(a, b).map(Into::<NumericValue>::into)
    }

    macro_rules! numeric_laws {
        ($($name:ident: $t:ty => $strategy:expr;)+) => {
            $(
                mod $name {
                    use super::*;

                    proptest! {
                        #[test]
                        fn add_and_mul_commute(a in $strategy, b in $strategy) {
                            prop_assert_eq!(a.add_val(&b), b.add_val(&a));
                            prop_assert_eq!(a.mul_val(&b), b.mul_val(&a));
                        }

                        #[test]
                        fn min_and_max_commute(a in $strategy, b in $strategy) {
                            prop_assert_eq!(a.min_val(&b), b.min_val(&a));
                            prop_assert_eq!(a.max_val(&b), b.max_val(&a));
                        }

                        #[test]
                        fn subtract_zero_is_identity(a in $strategy) {
                            prop_assert_eq!(a.sub_val(&<$t as Zero>::zero()), Ok(a.clone()));
                        }

                        #[test]
                        fn double_negation_round_trips(a in $strategy) {
                            prop_assert_eq!(a.neg_val().neg_val(), a);
                        }

                        #[test]
                        fn tagged_dispatch_matches_typed(a in $strategy, b in $strategy) {
                            prop_assert!(agrees_at_runtime(ADDITION, &a, &b));
                            prop_assert!(agrees_at_runtime(SUBTRACTION, &a, &b));
                            prop_assert!(agrees_at_runtime(MULTIPLICATION, &a, &b));
                            prop_assert!(agrees_at_runtime(MINIMUM, &a, &b));
                            prop_assert!(agrees_at_runtime(MAXIMUM, &a, &b));
                        }
                    }
                }
            )+
        };
    }

    numeric_laws! {
        i8_laws: i8 => any::<i8>();
        i16_laws: i16 => any::<i16>();
        i32_laws: i32 => any::<i32>();
        i64_laws: i64 => any::<i64>();
        f32_laws: f32 => -1e6f32..1e6f32;
        f64_laws: f64 => -1e6f64..1e6f64;
        bigint_laws: BigInt => any::<i128>().prop_map(BigInt::from);
        decimal_laws: Decimal => (-1_000_000_000_000i64..1_000_000_000_000, 0u32..10)
            .prop_map(|(m, s)| Decimal::new(m, s));
    }

    proptest! {
        #[test]
        fn decimal_add_then_subtract_is_exact(
            a in (-1_000_000_000_000i64..1_000_000_000_000, 0u32..10)
                .prop_map(|(m, s)| Decimal::new(m, s)),
            b in (-1_000_000_000_000i64..1_000_000_000_000, 0u32..10)
                .prop_map(|(m, s)| Decimal::new(m, s)),
        ) {
            prop_assert_eq!(a.add_val(&b).and_then(|sum| sum.sub_val(&b)), Ok(a));
        }
    }
}
