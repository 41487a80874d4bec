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

//! Ready-made predicates for `filter`, `remove_where`, `find` and the
//! quantifiers.

use crate::collection::SmartCollection;
use smartcoll_core::Numeric;

/// Matches even numbers.
pub fn even<T: Numeric>() -> impl Fn(&T) -> bool {
    |x| x.is_even()
}

/// Matches odd numbers.
pub fn odd<T: Numeric>() -> impl Fn(&T) -> bool {
    |x| !x.is_even()
}

/// Matches strings containing `needle`.
pub fn contains_str<S: AsRef<str>>(needle: impl Into<String>) -> impl Fn(&S) -> bool {
    let needle = needle.into();
    move |s| s.as_ref().contains(needle.as_str())
}

/// Matches collections containing `elem`.
pub fn contains_elem<C>(elem: C::Item) -> impl Fn(&C) -> bool
where
    C: SmartCollection,
    C::Item: PartialEq,
{
    move |c| c.contains(&elem)
}

/// Matches values equal to `value`.
pub fn equals<T: PartialEq>(value: T) -> impl Fn(&T) -> bool {
    move |x| *x == value
}

/// Matches values less than `bound`.
pub fn less_than<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |x| *x < bound
}

/// Matches values less than or equal to `bound`.
pub fn less_equal<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |x| *x <= bound
}

/// Matches values greater than `bound`.
pub fn greater_than<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |x| *x > bound
}

/// Matches values greater than or equal to `bound`.
pub fn greater_equal<T: PartialOrd>(bound: T) -> impl Fn(&T) -> bool {
    move |x| *x >= bound
}
