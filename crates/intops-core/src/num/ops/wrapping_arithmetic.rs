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

use core::ops::{Add, Sub};

macro_rules! wrapping_impl_val {
    ($trait_name:ident, $method:ident, $src_method:ident; $($t:ty)*) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: Self) -> Self {
                    <$t>::$src_method(self, v)
                }
            }
        )*
    };
}

/// Wrapping addition by value (no references).
///
/// The result is computed modulo `2^N` where `N` is the bit width of the
/// type, which is the two's complement behavior the unchecked operations
/// promise on overflow.
///
/// # Examples
///
/// ```rust
/// # use intops_core::num::ops::wrapping_arithmetic::WrappingAddVal;
/// assert_eq!(i32::MAX.wrapping_add_val(1), i32::MIN);
/// assert_eq!(2i32.wrapping_add_val(3), 5);
/// ```
pub trait WrappingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs wrapping addition by value.
    fn wrapping_add_val(self, v: Self) -> Self;
}

wrapping_impl_val!(WrappingAddVal, wrapping_add_val, wrapping_add; i8 i16 i32 i64 i128 isize);

/// Wrapping subtraction by value (no references).
///
/// # Examples
///
/// ```rust
/// # use intops_core::num::ops::wrapping_arithmetic::WrappingSubVal;
/// assert_eq!(i32::MIN.wrapping_sub_val(1), i32::MAX);
/// assert_eq!(2i32.wrapping_sub_val(3), -1);
/// ```
pub trait WrappingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs wrapping subtraction by value.
    fn wrapping_sub_val(self, v: Self) -> Self;
}

wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, wrapping_sub; i8 i16 i32 i64 i128 isize);
