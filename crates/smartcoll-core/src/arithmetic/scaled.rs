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

//! Division with a configurable decimal precision.
//!
//! `Division` keeps as many fractional digits as the decimal representation
//! can hold (up to 28). Callers that need a fixed number of digits, e.g.
//! currency amounts, configure a `ScaledDivision` instead. Every other kind
//! divides exactly like `Division`.

use crate::{
    arithmetic::operation::{BinaryOperation, DIVISION},
    error::Result,
    num::numeric::Numeric,
};
use rust_decimal::RoundingStrategy;

/// A division strategy that rounds decimal quotients to a fixed scale.
///
/// # Examples
///
/// ```rust
/// use smartcoll_core::arithmetic::{operation::BinaryOperation, scaled::ScaledDivision};
/// use smartcoll_core::{Decimal, RoundingStrategy};
///
/// let div = ScaledDivision::new()
///     .scale(2)
///     .rounding(RoundingStrategy::MidpointAwayFromZero);
/// let q = div.apply(&Decimal::from(2), &Decimal::from(3)).unwrap();
/// assert_eq!(q.to_string(), "0.67");
///
/// // Integer kinds are unaffected.
/// assert_eq!(div.apply(&7i32, &2i32), Ok(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaledDivision {
    scale: u32,
    rounding: RoundingStrategy,
}

impl Default for ScaledDivision {
    fn default() -> Self {
        Self {
            scale: 10,
            rounding: RoundingStrategy::MidpointNearestEven,
        }
    }
}

impl ScaledDivision {
    /// Creates a new `ScaledDivision` with 10 fractional digits and
    /// banker's rounding.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of fractional digits kept in decimal quotients.
    #[inline]
    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    /// Sets how decimal quotients are rounded to the configured scale.
    #[inline]
    pub fn rounding(mut self, rounding: RoundingStrategy) -> Self {
        self.rounding = rounding;
        self
    }

    /// Returns the configured scale.
    #[inline]
    pub fn get_scale(&self) -> u32 {
        self.scale
    }

    /// Returns the configured rounding strategy.
    #[inline]
    pub fn get_rounding(&self) -> RoundingStrategy {
        self.rounding
    }
}

impl BinaryOperation for ScaledDivision {
    const NAME: &'static str = "divide";

    #[inline]
    fn apply<T: Numeric>(&self, a: &T, b: &T) -> Result<T> {
        DIVISION
            .apply(a, b)
            .map(|q| q.rescale(self.scale, self.rounding))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ArithmeticError, num::kind::NumericKind, num::value::NumericValue};
    use rust_decimal::Decimal;

    #[test]
    fn test_default_configuration() {
        let div = ScaledDivision::new();
        assert_eq!(div.get_scale(), 10);
        assert_eq!(div.get_rounding(), RoundingStrategy::MidpointNearestEven);
    }

    #[test]
    fn test_decimal_quotient_is_rounded() {
        let div = ScaledDivision::new().scale(4);
        let q = div.apply(&Decimal::from(1), &Decimal::from(3)).unwrap();
        assert_eq!(q, Decimal::new(3333, 4));
    }

    #[test]
    fn test_float_quotient_is_untouched() {
        let div = ScaledDivision::new().scale(1);
        assert_eq!(div.apply(&1.0f64, &4.0f64), Ok(0.25));
    }

    #[test]
    fn test_runtime_dispatch_and_errors() {
        let div = ScaledDivision::new().scale(1);
        assert_eq!(
            div.apply_value(
                &NumericValue::Decimal(Decimal::from(1)),
                &NumericValue::Decimal(Decimal::from(8))
            ),
            Ok(NumericValue::Decimal(Decimal::new(1, 1)))
        );
        assert_eq!(
            div.apply_value(
                &NumericValue::Decimal(Decimal::from(1)),
                &NumericValue::Decimal(Decimal::ZERO)
            ),
            Err(ArithmeticError::DivisionByZero {
                kind: NumericKind::Decimal
            })
        );
    }
}
