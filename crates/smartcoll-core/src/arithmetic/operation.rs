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

//! # Operation Strategies
//!
//! One stateless unit struct per operation, each implementing
//! [`BinaryOperation`] or [`UnaryOperation`] uniformly across every
//! [`NumericKind`]. The structs are `Copy` and carry no state, so the
//! `pub const` singletons (`ADDITION`, `MINIMUM`, ...) can be shared freely
//! between threads.
//!
//! Two call paths exist:
//!
//! - `apply::<T>` binds the representation statically at the call site.
//! - `apply_value` dispatches on the kind tag of the left operand and
//!   rejects a right operand of any other kind.
//!
//! ```rust
//! use smartcoll_core::arithmetic::operation::{BinaryOperation, ADDITION};
//! use smartcoll_core::num::value::NumericValue;
//!
//! assert_eq!(ADDITION.apply(&2i16, &3i16), Ok(5));
//!
//! let sum = ADDITION.apply_value(&NumericValue::F64(0.5), &NumericValue::F64(0.25));
//! assert_eq!(sum, Ok(NumericValue::F64(0.75)));
//!
//! let mixed = ADDITION.apply_value(&NumericValue::I32(1), &NumericValue::I64(1));
//! assert!(mixed.is_err());
//! ```

use crate::{
    error::{ArithmeticError, Result},
    num::{kind::NumericKind, numeric::Numeric, value::NumericValue},
};

#[cold]
fn unsupported(lhs: NumericKind, rhs: NumericKind) -> ArithmeticError {
    tracing::debug!(target: "smartcoll::arith", %lhs, %rhs, "rejected operands of different kinds");
    ArithmeticError::UnsupportedRepresentation { lhs, rhs }
}

macro_rules! dispatch_binary {
    ($op:expr, $a:expr, $b:expr; $($variant:ident),+ $(,)?) => {
        match ($a, $b) {
            $(
                (NumericValue::$variant(x), NumericValue::$variant(y)) => {
                    $op.apply(x, y).map(NumericValue::$variant)
                }
            )+
            (lhs, rhs) => Err(unsupported(lhs.kind(), rhs.kind())),
        }
    };
}

macro_rules! dispatch_unary {
    ($op:expr, $a:expr; $($variant:ident),+ $(,)?) => {
        match $a {
            $( NumericValue::$variant(x) => NumericValue::$variant($op.apply(x)), )+
        }
    };
}

/// A named binary operation defined for every numeric representation.
pub trait BinaryOperation: Copy + Send + Sync + 'static {
    /// The name of the operation, e.g. `"add"`.
    const NAME: &'static str;

    /// Applies the operation to two operands of the same representation.
    fn apply<T: Numeric>(&self, a: &T, b: &T) -> Result<T>;

    /// Applies the operation to two tagged values.
    ///
    /// The implementation is selected by the kind of `a`. If `b` has a
    /// different kind the call fails with
    /// [`ArithmeticError::UnsupportedRepresentation`]; no conversion is
    /// attempted.
    fn apply_value(&self, a: &NumericValue, b: &NumericValue) -> Result<NumericValue> {
        dispatch_binary!(self, a, b; I8, I16, I32, I64, F32, F64, BigInt, Decimal)
    }
}

/// A named unary operation defined for every numeric representation.
pub trait UnaryOperation: Copy + Send + Sync + 'static {
    /// The name of the operation, e.g. `"negate"`.
    const NAME: &'static str;

    /// Applies the operation to one operand.
    fn apply<T: Numeric>(&self, a: &T) -> T;

    /// Applies the operation to a tagged value, keeping its kind.
    fn apply_value(&self, a: &NumericValue) -> NumericValue {
        dispatch_unary!(self, a; I8, I16, I32, I64, F32, F64, BigInt, Decimal)
    }
}

/// `a + b`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Addition;

/// `a - b`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Subtraction;

/// `a * b`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Multiplication;

/// `a / b` with the native division of the representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Division;

/// The smaller of `a` and `b`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Minimum;

/// The larger of `a` and `b`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Maximum;

/// `|a|`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Absolute;

/// `-a`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Negation;

/// Shared [`Addition`] strategy.
pub const ADDITION: Addition = Addition;
/// Shared [`Subtraction`] strategy.
pub const SUBTRACTION: Subtraction = Subtraction;
/// Shared [`Multiplication`] strategy.
pub const MULTIPLICATION: Multiplication = Multiplication;
/// Shared [`Division`] strategy.
pub const DIVISION: Division = Division;
/// Shared [`Minimum`] strategy.
pub const MINIMUM: Minimum = Minimum;
/// Shared [`Maximum`] strategy.
pub const MAXIMUM: Maximum = Maximum;
/// Shared [`Absolute`] strategy.
pub const ABSOLUTE: Absolute = Absolute;
/// Shared [`Negation`] strategy.
pub const NEGATION: Negation = Negation;

macro_rules! impl_binary_operation {
    ($op:ty, $name:literal, $method:ident) => {
        impl BinaryOperation for $op {
            const NAME: &'static str = $name;

            #[inline(always)]
            fn apply<T: Numeric>(&self, a: &T, b: &T) -> Result<T> {
                a.$method(b)
            }
        }
    };
}

macro_rules! impl_total_binary_operation {
    ($op:ty, $name:literal, $method:ident) => {
        impl BinaryOperation for $op {
            const NAME: &'static str = $name;

            #[inline(always)]
            fn apply<T: Numeric>(&self, a: &T, b: &T) -> Result<T> {
                Ok(a.$method(b))
            }
        }
    };
}

macro_rules! impl_unary_operation {
    ($op:ty, $name:literal, $method:ident) => {
        impl UnaryOperation for $op {
            const NAME: &'static str = $name;

            #[inline(always)]
            fn apply<T: Numeric>(&self, a: &T) -> T {
                a.$method()
            }
        }
    };
}

impl_binary_operation!(Addition, "add", add_val);
impl_binary_operation!(Subtraction, "subtract", sub_val);
impl_binary_operation!(Multiplication, "multiply", mul_val);
impl_binary_operation!(Division, "divide", div_val);
impl_total_binary_operation!(Minimum, "min", min_val);
impl_total_binary_operation!(Maximum, "max", max_val);
impl_unary_operation!(Absolute, "abs", abs_val);
impl_unary_operation!(Negation, "negate", neg_val);

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use rust_decimal::Decimal;

    fn samples() -> Vec<(NumericValue, NumericValue)> {
        vec![
            (NumericValue::I8(6), NumericValue::I8(3)),
            (NumericValue::I16(6), NumericValue::I16(3)),
            (NumericValue::I32(6), NumericValue::I32(3)),
            (NumericValue::I64(6), NumericValue::I64(3)),
            (NumericValue::F32(6.0), NumericValue::F32(3.0)),
            (NumericValue::F64(6.0), NumericValue::F64(3.0)),
            (
                NumericValue::BigInt(BigInt::from(6)),
                NumericValue::BigInt(BigInt::from(3)),
            ),
            (
                NumericValue::Decimal(Decimal::from(6)),
                NumericValue::Decimal(Decimal::from(3)),
            ),
        ]
    }

    #[test]
    fn test_every_kind_is_dispatched_and_preserved() {
        for (a, b) in samples() {
            let kind = a.kind();
            for result in [
                ADDITION.apply_value(&a, &b),
                SUBTRACTION.apply_value(&a, &b),
                MULTIPLICATION.apply_value(&a, &b),
                DIVISION.apply_value(&a, &b),
                MINIMUM.apply_value(&a, &b),
                MAXIMUM.apply_value(&a, &b),
            ] {
                assert_eq!(result.unwrap().kind(), kind);
            }
            assert_eq!(ABSOLUTE.apply_value(&a).kind(), kind);
            assert_eq!(NEGATION.apply_value(&a).kind(), kind);
        }
    }

    #[test]
    fn test_runtime_results_match_static_results() {
        assert_eq!(
            ADDITION.apply_value(&NumericValue::I32(6), &NumericValue::I32(3)),
            Ok(NumericValue::I32(9))
        );
        assert_eq!(
            DIVISION.apply_value(&NumericValue::I8(7), &NumericValue::I8(2)),
            Ok(NumericValue::I8(3))
        );
        assert_eq!(
            MINIMUM.apply_value(
                &NumericValue::BigInt(BigInt::from(-4)),
                &NumericValue::BigInt(BigInt::from(2))
            ),
            Ok(NumericValue::BigInt(BigInt::from(-4)))
        );
        assert_eq!(
            NEGATION.apply_value(&NumericValue::I64(i64::MIN)),
            NumericValue::I64(i64::MIN)
        );
        assert_eq!(
            ABSOLUTE.apply_value(&NumericValue::F32(-2.5)),
            NumericValue::F32(2.5)
        );
    }

    #[test]
    fn test_mismatched_kinds_are_rejected() {
        let err = MULTIPLICATION
            .apply_value(&NumericValue::F32(1.0), &NumericValue::F64(1.0))
            .unwrap_err();
        assert_eq!(
            err,
            ArithmeticError::UnsupportedRepresentation {
                lhs: NumericKind::F32,
                rhs: NumericKind::F64,
            }
        );
    }

    #[test]
    fn test_division_by_zero_surfaces_through_dispatch() {
        assert_eq!(
            DIVISION.apply_value(&NumericValue::I32(1), &NumericValue::I32(0)),
            Err(ArithmeticError::DivisionByZero {
                kind: NumericKind::I32
            })
        );
        let inf = DIVISION
            .apply_value(&NumericValue::F64(1.0), &NumericValue::F64(0.0))
            .unwrap();
        assert_eq!(inf, NumericValue::F64(f64::INFINITY));
    }

    #[test]
    fn test_names() {
        assert_eq!(Addition::NAME, "add");
        assert_eq!(Division::NAME, "divide");
        assert_eq!(Negation::NAME, "negate");
    }

    #[test]
    fn test_strategies_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync + 'static>(_: T) {}
        assert_send_sync(ADDITION);
        assert_send_sync(NEGATION);

        let handle = std::thread::spawn(|| ADDITION.apply(&40i64, &2i64));
        assert_eq!(handle.join().unwrap(), Ok(42));
    }
}
