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

use core::ops::{Add, Div, Mul, Neg, Sub};

macro_rules! wrapping_impl_binary_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: Self) -> Self {
                <$t>::$src_method(self, v)
            }
        }
    };
}

macro_rules! wrapping_impl_unary_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self) -> Self {
                <$t>::$src_method(self)
            }
        }
    };
}

/// Wrapping addition by value (no references).
///
/// Overflow wraps around in two's complement instead of panicking in debug
/// builds, which is the host behavior the dispatcher promises for every
/// fixed-width integer kind.
///
/// # Examples
///
/// ```rust
/// # use smartcoll_core::num::ops::wrapping_arithmetic::WrappingAddVal;
///
/// let a: i8 = 127;
/// assert_eq!(a.wrapping_add_val(1), -128);
///
/// let b: i16 = -32768;
/// assert_eq!(b.wrapping_add_val(-1), 32767);
/// ```
pub trait WrappingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs wrapping addition by value.
    fn wrapping_add_val(self, v: Self) -> Self;
}

wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, i8, wrapping_add);
wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, i16, wrapping_add);
wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, i32, wrapping_add);
wrapping_impl_binary_val!(WrappingAddVal, wrapping_add_val, i64, wrapping_add);

/// Wrapping subtraction by value (no references).
///
/// # Examples
///
/// ```rust
/// # use smartcoll_core::num::ops::wrapping_arithmetic::WrappingSubVal;
///
/// let a: i8 = -128;
/// assert_eq!(a.wrapping_sub_val(1), 127);
/// ```
pub trait WrappingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs wrapping subtraction by value.
    fn wrapping_sub_val(self, v: Self) -> Self;
}

wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, i8, wrapping_sub);
wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, i16, wrapping_sub);
wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, i32, wrapping_sub);
wrapping_impl_binary_val!(WrappingSubVal, wrapping_sub_val, i64, wrapping_sub);

/// Wrapping multiplication by value (no references).
///
/// # Examples
///
/// ```rust
/// # use smartcoll_core::num::ops::wrapping_arithmetic::WrappingMulVal;
///
/// let a: i8 = 64;
/// assert_eq!(a.wrapping_mul_val(2), -128);
/// let b: i32 = 1 << 16;
/// assert_eq!(b.wrapping_mul_val(1 << 16), 0);
/// ```
pub trait WrappingMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs wrapping multiplication by value.
    fn wrapping_mul_val(self, v: Self) -> Self;
}

wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, i8, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, i16, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, i32, wrapping_mul);
wrapping_impl_binary_val!(WrappingMulVal, wrapping_mul_val, i64, wrapping_mul);

/// Wrapping truncating division by value (no references).
///
/// The only overflowing case, `MIN / -1`, wraps to `MIN`. Division by zero
/// still panics, so callers must reject a zero divisor first.
///
/// # Examples
///
/// ```rust
/// # use smartcoll_core::num::ops::wrapping_arithmetic::WrappingDivVal;
///
/// let a: i8 = -128;
/// assert_eq!(a.wrapping_div_val(-1), -128);
/// assert_eq!(7i32.wrapping_div_val(-2), -3); // truncates toward zero
/// ```
pub trait WrappingDivVal: Sized + Div<Self, Output = Self> {
    /// Performs wrapping division by value.
    ///
    /// # Panics
    ///
    /// Panics if `v` is zero.
    fn wrapping_div_val(self, v: Self) -> Self;
}

wrapping_impl_binary_val!(WrappingDivVal, wrapping_div_val, i8, wrapping_div);
wrapping_impl_binary_val!(WrappingDivVal, wrapping_div_val, i16, wrapping_div);
wrapping_impl_binary_val!(WrappingDivVal, wrapping_div_val, i32, wrapping_div);
wrapping_impl_binary_val!(WrappingDivVal, wrapping_div_val, i64, wrapping_div);

/// Wrapping negation by value (no references).
///
/// Negating the minimum value of a signed type has no positive counterpart
/// and yields the minimum value again.
///
/// # Examples
///
/// ```rust
/// # use smartcoll_core::num::ops::wrapping_arithmetic::WrappingNegVal;
///
/// assert_eq!(100i8.wrapping_neg_val(), -100);
/// assert_eq!(i8::MIN.wrapping_neg_val(), i8::MIN);
/// ```
pub trait WrappingNegVal: Sized + Neg<Output = Self> {
    /// Performs wrapping negation by value.
    fn wrapping_neg_val(self) -> Self;
}

wrapping_impl_unary_val!(WrappingNegVal, wrapping_neg_val, i8, wrapping_neg);
wrapping_impl_unary_val!(WrappingNegVal, wrapping_neg_val, i16, wrapping_neg);
wrapping_impl_unary_val!(WrappingNegVal, wrapping_neg_val, i32, wrapping_neg);
wrapping_impl_unary_val!(WrappingNegVal, wrapping_neg_val, i64, wrapping_neg);

/// Wrapping absolute value by value (no references).
///
/// # Examples
///
/// ```rust
/// # use smartcoll_core::num::ops::wrapping_arithmetic::WrappingAbsVal;
///
/// assert_eq!((-5i16).wrapping_abs_val(), 5);
/// assert_eq!(i16::MIN.wrapping_abs_val(), i16::MIN);
/// ```
pub trait WrappingAbsVal: Sized {
    /// Computes the absolute value, wrapping at the minimum value.
    fn wrapping_abs_val(self) -> Self;
}

wrapping_impl_unary_val!(WrappingAbsVal, wrapping_abs_val, i8, wrapping_abs);
wrapping_impl_unary_val!(WrappingAbsVal, wrapping_abs_val, i16, wrapping_abs);
wrapping_impl_unary_val!(WrappingAbsVal, wrapping_abs_val, i32, wrapping_abs);
wrapping_impl_unary_val!(WrappingAbsVal, wrapping_abs_val, i64, wrapping_abs);

#[cfg(test)]
mod tests {
    use super::*;

    fn wrapping_add_val<T: WrappingAddVal>(a: T, b: T) -> T {
        a.wrapping_add_val(b)
    }
    fn wrapping_sub_val<T: WrappingSubVal>(a: T, b: T) -> T {
        a.wrapping_sub_val(b)
    }
    fn wrapping_mul_val<T: WrappingMulVal>(a: T, b: T) -> T {
        a.wrapping_mul_val(b)
    }
    fn wrapping_div_val<T: WrappingDivVal>(a: T, b: T) -> T {
        a.wrapping_div_val(b)
    }

    #[test]
    fn test_wrapping_add_val() {
        assert_eq!(wrapping_add_val(127i8, 1i8), -128i8);
        assert_eq!(wrapping_add_val(i64::MAX, 1i64), i64::MIN);
        assert_eq!(wrapping_add_val(3i32, 4i32), 7i32);
    }

    #[test]
    fn test_wrapping_sub_val() {
        assert_eq!(wrapping_sub_val(-128i8, 1i8), 127i8);
        assert_eq!(wrapping_sub_val(i16::MIN, 1i16), i16::MAX);
    }

    #[test]
    fn test_wrapping_mul_val() {
        assert_eq!(wrapping_mul_val(64i8, 2i8), -128i8);
        assert_eq!(wrapping_mul_val(-3i32, 5i32), -15i32);
    }

    #[test]
    fn test_wrapping_div_val() {
        assert_eq!(wrapping_div_val(i32::MIN, -1i32), i32::MIN);
        assert_eq!(wrapping_div_val(-7i64, 2i64), -3i64);
    }

    #[test]
    fn test_wrapping_neg_and_abs_at_minimum() {
        assert_eq!(i8::MIN.wrapping_neg_val(), i8::MIN);
        assert_eq!(i64::MIN.wrapping_abs_val(), i64::MIN);
        assert_eq!((-9i32).wrapping_abs_val(), 9i32);
    }
}
