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

//! # Numeric Foundations
//!
//! The closed set of numeric representations and the per-representation
//! semantics the dispatcher builds on.
//!
//! ## Submodules
//!
//! - `kind`: `NumericKind`, the tag naming one of the eight supported
//!   representations.
//! - `numeric`: the `Numeric` trait, implemented once per representation
//!   (`i8`, `i16`, `i32`, `i64`, `f32`, `f64`, `BigInt`, `Decimal`).
//! - `value`: `NumericValue`, a value tagged with its kind for code that
//!   only learns the representation at runtime.
//! - `ops`: by-value wrapping arithmetic traits for the fixed-width
//!   integers, mirroring the host's two's-complement overflow behavior.

pub mod kind;
pub mod numeric;
pub mod ops;
pub mod value;
