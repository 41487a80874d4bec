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

//! Error type shared by every collection shape.

use smartcoll_core::ArithmeticError;

/// Convenience alias used throughout the collection algebra.
pub type Result<T> = std::result::Result<T, CollectionError>;

/// The error type for collection algebra operations.
///
/// Every fallible operation fails with exactly one of these kinds. Policies
/// that merely look lossy (zip truncation, last-write-wins on duplicate
/// keys after a transform) are not errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// The operation needs at least one element.
    #[error("{operation} requires a non-empty collection")]
    EmptyCollection {
        /// Name of the rejected operation.
        operation: &'static str,
    },
    /// A predicate-based lookup matched nothing.
    #[error("no element matches the given predicate")]
    NotFound,
    /// An element could not be converted to the requested type.
    #[error("element at position {index} cannot be cast from {from} to {to}")]
    InvalidCast {
        /// Position of the first non-conforming element in iteration order.
        index: usize,
        /// Source element type.
        from: &'static str,
        /// Requested target type.
        to: &'static str,
    },
    /// A documented precondition of the operation does not hold.
    #[error("precondition violated: {reason}")]
    PreconditionViolated {
        /// Which precondition failed.
        reason: &'static str,
    },
    /// The operation has no meaningful result for an empty collection.
    #[error("{operation} is not supported on an empty collection")]
    UnsupportedOnEmpty {
        /// Name of the rejected operation.
        operation: &'static str,
    },
    /// A numeric helper failed inside the arithmetic dispatcher.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartcoll_core::NumericKind;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            CollectionError::EmptyCollection { operation: "head" }.to_string(),
            "head requires a non-empty collection"
        );
        assert_eq!(
            CollectionError::InvalidCast {
                index: 2,
                from: "i64",
                to: "i8"
            }
            .to_string(),
            "element at position 2 cannot be cast from i64 to i8"
        );
        assert_eq!(
            CollectionError::PreconditionViolated {
                reason: "mapping is not bijective"
            }
            .to_string(),
            "precondition violated: mapping is not bijective"
        );
    }

    #[test]
    fn test_arithmetic_errors_convert_transparently() {
        let inner = ArithmeticError::DivisionByZero {
            kind: NumericKind::I32,
        };
        let outer: CollectionError = inner.clone().into();
        assert_eq!(outer.to_string(), inner.to_string());
        assert_eq!(outer, CollectionError::Arithmetic(inner));
    }
}
