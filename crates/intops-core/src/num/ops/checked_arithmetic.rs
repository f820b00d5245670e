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

use core::ops::{Add, Div};

macro_rules! checked_impl_val {
    ($trait_name:ident, $method:ident, $src_method:ident; $($t:ty)*) => {
        $(
            impl $trait_name for $t {
                #[inline(always)]
                fn $method(self, v: $t) -> Option<$t> {
                    <$t>::$src_method(self, v)
                }
            }
        )*
    };
}

/// Checked addition by value.
///
/// Mirrors the primitive `checked_add`, but as a trait that can appear in
/// generic bounds without the by-reference signature of `num_traits::CheckedAdd`.
///
/// # Examples
///
/// ```rust
/// # use intops_core::num::ops::checked_arithmetic::CheckedAddVal;
/// let a: i32 = i32::MAX;
/// assert_eq!(a.checked_add_val(1), None);
/// assert_eq!(5i32.checked_add_val(-3), Some(2));
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` if overflow occurs.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

checked_impl_val!(CheckedAddVal, checked_add_val, checked_add; i8 i16 i32 i64 i128 isize);

/// Checked division by value.
///
/// Returns `None` both for a zero divisor and for the single overflowing
/// quotient of signed types (`MIN / -1`). Callers that need to tell the two
/// apart must test the divisor first.
///
/// # Examples
///
/// ```rust
/// # use intops_core::num::ops::checked_arithmetic::CheckedDivVal;
/// assert_eq!(7i32.checked_div_val(0), None);
/// assert_eq!(i32::MIN.checked_div_val(-1), None);
/// assert_eq!(10i32.checked_div_val(2), Some(5));
/// ```
pub trait CheckedDivVal: Sized + Div<Self, Output = Self> {
    /// Performs checked division by value, returning `None` on a zero divisor
    /// or an unrepresentable quotient.
    fn checked_div_val(self, v: Self) -> Option<Self>;
}

checked_impl_val!(CheckedDivVal, checked_div_val, checked_div; i8 i16 i32 i64 i128 isize);
