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

//! # Arithmetic Dispatcher
//!
//! Generic entry points that route an operation to the implementation of
//! whichever representation the operands have. The free functions below
//! bind the representation statically; the strategies in [`operation`]
//! also offer a runtime path over [`NumericValue`](crate::num::value::NumericValue).
//!
//! ## Submodules
//!
//! - `operation`: `BinaryOperation`/`UnaryOperation` and the stateless
//!   strategy singletons (`ADDITION`, `SUBTRACTION`, `MULTIPLICATION`,
//!   `DIVISION`, `MINIMUM`, `MAXIMUM`, `ABSOLUTE`, `NEGATION`).
//! - `scaled`: `ScaledDivision`, a division strategy with a configurable
//!   decimal precision.

pub mod operation;
pub mod scaled;

use crate::{error::Result, num::numeric::Numeric};
use operation::{
    BinaryOperation, UnaryOperation, ABSOLUTE, ADDITION, DIVISION, MAXIMUM, MINIMUM,
    MULTIPLICATION, NEGATION, SUBTRACTION,
};
use std::cmp::Ordering;

/// Returns `a + b`.
#[inline]
pub fn add<T: Numeric>(a: &T, b: &T) -> Result<T> {
    ADDITION.apply(a, b)
}

/// Returns `a - b`.
#[inline]
pub fn sub<T: Numeric>(a: &T, b: &T) -> Result<T> {
    SUBTRACTION.apply(a, b)
}

/// Returns `a * b`.
#[inline]
pub fn mul<T: Numeric>(a: &T, b: &T) -> Result<T> {
    MULTIPLICATION.apply(a, b)
}

/// Returns `a / b`.
#[inline]
pub fn div<T: Numeric>(a: &T, b: &T) -> Result<T> {
    DIVISION.apply(a, b)
}

/// Returns the smaller of `a` and `b`.
#[inline]
pub fn min<T: Numeric>(a: &T, b: &T) -> Result<T> {
    MINIMUM.apply(a, b)
}

/// Returns the larger of `a` and `b`.
#[inline]
pub fn max<T: Numeric>(a: &T, b: &T) -> Result<T> {
    MAXIMUM.apply(a, b)
}

/// Returns `|a|`.
#[inline]
pub fn abs<T: Numeric>(a: &T) -> T {
    ABSOLUTE.apply(a)
}

/// Returns `-a`.
#[inline]
pub fn negate<T: Numeric>(a: &T) -> T {
    NEGATION.apply(a)
}

/// Compares two values of the same representation.
///
/// Returns `None` only for unordered floats (NaN).
#[inline]
pub fn compare<T: Numeric>(a: &T, b: &T) -> Option<Ordering> {
    a.partial_cmp(b)
}
