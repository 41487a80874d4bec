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

//! # Smartcoll Core
//!
//! A type-dispatching arithmetic layer that lets generic numeric code work
//! uniformly across fixed-width signed integers (`i8`, `i16`, `i32`, `i64`),
//! binary floats (`f32`, `f64`) and the arbitrary-precision `BigInt` and
//! `Decimal`, without the caller choosing an operation per type.
//!
//! ## Modules
//!
//! - `num`: the closed set of numeric kinds, the `Numeric` trait with one
//!   implementation per representation, the tagged `NumericValue`, and
//!   by-value wrapping integer arithmetic.
//! - `arithmetic`: stateless operation strategies (add, subtract, multiply,
//!   divide, min, max, abs, negate) with a static and a runtime dispatch
//!   path, plus generic free functions.
//! - `error`: `ArithmeticError`.
//!
//! ## Semantics
//!
//! Operations only ever combine two operands of the same representation
//! and always produce a result of that representation. Fixed-width
//! integers wrap on overflow, floats follow IEEE 754, and the
//! arbitrary-precision kinds are exact. Operands of different kinds are
//! rejected, never coerced.

pub mod arithmetic;
pub mod error;
pub mod num;

pub use arithmetic::operation::{BinaryOperation, UnaryOperation};
pub use error::ArithmeticError;
pub use num::{kind::NumericKind, numeric::Numeric, value::NumericValue};
pub use num_bigint::BigInt;
pub use rust_decimal::{Decimal, RoundingStrategy};
