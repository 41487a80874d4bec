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

//! Ready-made closures for the collection algebra.
//!
//! Mappers plug into `transform`, reducers into `reduce`/`try_reduce`.
//! The numeric ones go through the arithmetic dispatcher, so they behave
//! the same way for every representation.

use smartcoll_core::{arithmetic, error::Result, Numeric};
use std::{cmp::Ordering, fmt::Display};

/// Mapper rendering an element with `Display`.
pub fn to_string<T: Display>() -> impl Fn(&T) -> String {
    |x| x.to_string()
}

/// Mapper rendering an element followed by `suffix`.
pub fn append<T: Display>(suffix: impl Into<String>) -> impl Fn(&T) -> String {
    let suffix = suffix.into();
    move |x| format!("{x}{suffix}")
}

/// Reducer concatenating elements, separated by `sep`. Start it from an
/// empty string.
pub fn join_with<T: Display>(sep: impl Into<String>) -> impl Fn(String, &T) -> String {
    let sep = sep.into();
    move |acc, x| {
        if acc.is_empty() {
            x.to_string()
        } else {
            format!("{acc}{sep}{x}")
        }
    }
}

/// Mapper adding `by`.
pub fn inc<T: Numeric>(by: T) -> impl Fn(&T) -> Result<T> {
    move |x| arithmetic::add(x, &by)
}

/// Mapper subtracting `by`.
pub fn dec<T: Numeric>(by: T) -> impl Fn(&T) -> Result<T> {
    move |x| arithmetic::sub(x, &by)
}

/// Reducer summing.
pub fn add<T: Numeric>() -> impl Fn(T, &T) -> Result<T> {
    |acc, x| arithmetic::add(&acc, x)
}

/// Reducer subtracting each element from the accumulator.
pub fn subtract<T: Numeric>() -> impl Fn(T, &T) -> Result<T> {
    |acc, x| arithmetic::sub(&acc, x)
}

/// Reducer multiplying.
pub fn multiply<T: Numeric>() -> impl Fn(T, &T) -> Result<T> {
    |acc, x| arithmetic::mul(&acc, x)
}

/// Reducer dividing the accumulator by each element.
pub fn divide<T: Numeric>() -> impl Fn(T, &T) -> Result<T> {
    |acc, x| arithmetic::div(&acc, x)
}

/// Reducer keeping the smaller value.
pub fn min<T: Numeric>() -> impl Fn(T, &T) -> Result<T> {
    |acc, x| arithmetic::min(&acc, x)
}

/// Reducer keeping the larger value.
pub fn max<T: Numeric>() -> impl Fn(T, &T) -> Result<T> {
    |acc, x| arithmetic::max(&acc, x)
}

/// Mapper taking the absolute value.
pub fn abs<T: Numeric>() -> impl Fn(&T) -> T {
    |x| arithmetic::abs(x)
}

/// Mapper negating.
pub fn negate<T: Numeric>() -> impl Fn(&T) -> T {
    |x| arithmetic::negate(x)
}

/// Comparator; `None` only for unordered floats.
pub fn compare<T: Numeric>() -> impl Fn(&T, &T) -> Option<Ordering> {
    |a, b| arithmetic::compare(a, b)
}
