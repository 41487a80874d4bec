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

/// The closed set of numeric representations the dispatcher understands.
///
/// Every `NumericValue` carries exactly one of these tags, and every
/// operation strategy has one implementation per tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericKind {
    /// 8-bit signed integer.
    I8,
    /// 16-bit signed integer.
    I16,
    /// 32-bit signed integer.
    I32,
    /// 64-bit signed integer.
    I64,
    /// Single-precision IEEE 754 float.
    F32,
    /// Double-precision IEEE 754 float.
    F64,
    /// Arbitrary-precision integer.
    BigInt,
    /// Arbitrary-precision decimal.
    Decimal,
}

impl NumericKind {
    /// All kinds, in declaration order.
    pub const ALL: [NumericKind; 8] = [
        NumericKind::I8,
        NumericKind::I16,
        NumericKind::I32,
        NumericKind::I64,
        NumericKind::F32,
        NumericKind::F64,
        NumericKind::BigInt,
        NumericKind::Decimal,
    ];

    /// Returns the short name of the kind.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            NumericKind::I8 => "i8",
            NumericKind::I16 => "i16",
            NumericKind::I32 => "i32",
            NumericKind::I64 => "i64",
            NumericKind::F32 => "f32",
            NumericKind::F64 => "f64",
            NumericKind::BigInt => "BigInt",
            NumericKind::Decimal => "Decimal",
        }
    }

    /// Returns `true` for the fixed-width signed integer kinds.
    #[inline]
    pub const fn is_fixed_width_integer(self) -> bool {
        matches!(
            self,
            NumericKind::I8 | NumericKind::I16 | NumericKind::I32 | NumericKind::I64
        )
    }

    /// Returns `true` for the binary floating point kinds.
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, NumericKind::F32 | NumericKind::F64)
    }

    /// Returns `true` for the arbitrary-precision kinds.
    #[inline]
    pub const fn is_arbitrary_precision(self) -> bool {
        matches!(self, NumericKind::BigInt | NumericKind::Decimal)
    }
}

impl std::fmt::Display for NumericKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
