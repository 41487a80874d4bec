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

//! Error type for the arithmetic dispatcher.

use crate::num::kind::NumericKind;

/// Convenience alias used throughout the arithmetic layer.
pub type Result<T> = std::result::Result<T, ArithmeticError>;

/// The error type for arithmetic operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArithmeticError {
    /// The operands do not share one numeric representation.
    ///
    /// Values are never coerced between kinds, so a binary operation on
    /// e.g. an `i32` and an `f64` is rejected instead of widened.
    #[error("unsupported representation: cannot combine {lhs} with {rhs}")]
    UnsupportedRepresentation {
        /// Kind of the left operand, which selects the implementation.
        lhs: NumericKind,
        /// Kind of the right operand.
        rhs: NumericKind,
    },
    /// An integer or decimal division had a zero divisor.
    #[error("division by zero for {kind}")]
    DivisionByZero {
        /// Kind of the operands.
        kind: NumericKind,
    },
    /// The result does not fit the bounded decimal representation.
    #[error("{operation} overflowed the {kind} representation")]
    Overflow {
        /// Name of the operation that overflowed.
        operation: &'static str,
        /// Kind of the operands.
        kind: NumericKind,
    },
    /// The exact result needs more fractional digits than the bounded
    /// decimal representation holds, so it could only be returned rounded.
    #[error("{operation} lost precision in the {kind} representation")]
    PrecisionLoss {
        /// Name of the operation that would have rounded.
        operation: &'static str,
        /// Kind of the operands.
        kind: NumericKind,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = ArithmeticError::UnsupportedRepresentation {
            lhs: NumericKind::I32,
            rhs: NumericKind::F64,
        };
        assert_eq!(e.to_string(), "unsupported representation: cannot combine i32 with f64");

        let e = ArithmeticError::DivisionByZero {
            kind: NumericKind::BigInt,
        };
        assert_eq!(e.to_string(), "division by zero for BigInt");

        let e = ArithmeticError::Overflow {
            operation: "multiply",
            kind: NumericKind::Decimal,
        };
        assert_eq!(e.to_string(), "multiply overflowed the Decimal representation");

        let e = ArithmeticError::PrecisionLoss {
            operation: "add",
            kind: NumericKind::Decimal,
        };
        assert_eq!(e.to_string(), "add lost precision in the Decimal representation");
    }
}
