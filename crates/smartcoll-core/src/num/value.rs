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

use crate::{error::ArithmeticError, num::kind::NumericKind};
use num_bigint::BigInt;
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// A numeric value tagged with its representation kind.
///
/// This is the runtime-dispatch counterpart of the static [`Numeric`]
/// trait: code that only learns the representation at runtime stores
/// `NumericValue`s and hands them to an operation's `apply_value`.
///
/// Two values are only equal (or ordered) when they share a kind;
/// `NumericValue::I32(1)` and `NumericValue::I64(1)` are unrelated.
///
/// [`Numeric`]: crate::num::numeric::Numeric
#[derive(Debug, Clone, PartialEq)]
pub enum NumericValue {
    /// An 8-bit signed integer.
    I8(i8),
    /// A 16-bit signed integer.
    I16(i16),
    /// A 32-bit signed integer.
    I32(i32),
    /// A 64-bit signed integer.
    I64(i64),
    /// A single-precision float.
    F32(f32),
    /// A double-precision float.
    F64(f64),
    /// An arbitrary-precision integer.
    BigInt(BigInt),
    /// An arbitrary-precision decimal.
    Decimal(Decimal),
}

impl NumericValue {
    /// Returns the kind tag of the value.
    #[inline]
    pub fn kind(&self) -> NumericKind {
        match self {
            NumericValue::I8(_) => NumericKind::I8,
            NumericValue::I16(_) => NumericKind::I16,
            NumericValue::I32(_) => NumericKind::I32,
            NumericValue::I64(_) => NumericKind::I64,
            NumericValue::F32(_) => NumericKind::F32,
            NumericValue::F64(_) => NumericKind::F64,
            NumericValue::BigInt(_) => NumericKind::BigInt,
            NumericValue::Decimal(_) => NumericKind::Decimal,
        }
    }

    /// Returns `true` if both values share a kind.
    #[inline]
    pub fn same_kind(&self, other: &NumericValue) -> bool {
        self.kind() == other.kind()
    }
}

impl PartialOrd for NumericValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (NumericValue::I8(a), NumericValue::I8(b)) => a.partial_cmp(b),
            (NumericValue::I16(a), NumericValue::I16(b)) => a.partial_cmp(b),
            (NumericValue::I32(a), NumericValue::I32(b)) => a.partial_cmp(b),
            (NumericValue::I64(a), NumericValue::I64(b)) => a.partial_cmp(b),
            (NumericValue::F32(a), NumericValue::F32(b)) => a.partial_cmp(b),
            (NumericValue::F64(a), NumericValue::F64(b)) => a.partial_cmp(b),
            (NumericValue::BigInt(a), NumericValue::BigInt(b)) => a.partial_cmp(b),
            (NumericValue::Decimal(a), NumericValue::Decimal(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl std::fmt::Display for NumericValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NumericValue::I8(v) => write!(f, "{v}"),
            NumericValue::I16(v) => write!(f, "{v}"),
            NumericValue::I32(v) => write!(f, "{v}"),
            NumericValue::I64(v) => write!(f, "{v}"),
            NumericValue::F32(v) => write!(f, "{v}"),
            NumericValue::F64(v) => write!(f, "{v}"),
            NumericValue::BigInt(v) => write!(f, "{v}"),
            NumericValue::Decimal(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_value_conversions {
    ($t:ty, $variant:ident) => {
        impl From<$t> for NumericValue {
            #[inline]
            fn from(v: $t) -> Self {
                NumericValue::$variant(v)
            }
        }

        impl TryFrom<NumericValue> for $t {
            type Error = ArithmeticError;

            #[inline]
            fn try_from(value: NumericValue) -> Result<Self, Self::Error> {
                match value {
                    NumericValue::$variant(v) => Ok(v),
                    other => Err(ArithmeticError::UnsupportedRepresentation {
                        lhs: NumericKind::$variant,
                        rhs: other.kind(),
                    }),
                }
            }
        }
    };
}

impl_value_conversions!(i8, I8);
impl_value_conversions!(i16, I16);
impl_value_conversions!(i32, I32);
impl_value_conversions!(i64, I64);
impl_value_conversions!(f32, F32);
impl_value_conversions!(f64, F64);
impl_value_conversions!(BigInt, BigInt);
impl_value_conversions!(Decimal, Decimal);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(NumericValue::from(1i8).kind(), NumericKind::I8);
        assert_eq!(NumericValue::from(1.5f32).kind(), NumericKind::F32);
        assert_eq!(NumericValue::from(BigInt::from(3)).kind(), NumericKind::BigInt);
        assert_eq!(NumericValue::from(Decimal::ONE).kind(), NumericKind::Decimal);
    }

    #[test]
    fn test_values_of_different_kinds_are_unrelated() {
        let a = NumericValue::from(1i32);
        let b = NumericValue::from(1i64);
        assert_ne!(a, b);
        assert_eq!(a.partial_cmp(&b), None);
        assert!(!a.same_kind(&b));
        assert!(NumericValue::from(1i32) < NumericValue::from(2i32));
    }

    #[test]
    fn test_try_from_rejects_other_kind() {
        assert_eq!(i16::try_from(NumericValue::I16(7)), Ok(7));
        assert_eq!(
            f64::try_from(NumericValue::I64(7)),
            Err(ArithmeticError::UnsupportedRepresentation {
                lhs: NumericKind::F64,
                rhs: NumericKind::I64,
            })
        );
    }

    #[test]
    fn test_display_delegates() {
        assert_eq!(NumericValue::from(-12i16).to_string(), "-12");
        assert_eq!(NumericValue::from(Decimal::new(125, 2)).to_string(), "1.25");
    }
}
