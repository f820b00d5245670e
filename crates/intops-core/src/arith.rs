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

//! # Arithmetic Operations
//!
//! Pure operations over signed primitive integers. Every function here is
//! stateless and reentrant; the only side effect is the write into a
//! caller-supplied output location performed by the checked forms.
//!
//! ## Unchecked operations
//!
//! `add`, `subtract` and `max` accept every input and always return a value.
//! Addition and subtraction wrap around at the type bounds; detecting overflow
//! is the caller's responsibility. `max` breaks ties in favor of its first
//! argument.
//!
//! ## Checked operations
//!
//! `checked_sum` and `checked_divide` return an [`ErrorCode`] on every call,
//! including success, and write the value through `result`. The checks run in
//! a fixed order:
//!
//! 1. A missing output location yields `NullPointer`.
//! 2. A zero divisor yields `DivisionByZero`.
//! 3. An unrepresentable result yields `InvalidParameter`.
//!
//! On any failure `result` is left untouched.
//!
//! `try_sum` and `try_divide` are the same operations expressed as a
//! `Result`, for callers that do not need the output-location contract.
//!
//! ## Example
//!
//! ```rust
//! use intops_core::{checked_divide, ErrorCode};
//!
//! let mut quotient = -1;
//! assert_eq!(checked_divide(10, 2, Some(&mut quotient)), ErrorCode::None);
//! assert_eq!(quotient, 5);
//!
//! assert_eq!(checked_divide(7, 0, Some(&mut quotient)), ErrorCode::DivisionByZero);
//! assert_eq!(quotient, 5);
//! ```

use crate::{
    error::{ArithmeticError, ErrorCode},
    num::{
        constants::Zero,
        ops::{
            checked_arithmetic::{CheckedAddVal, CheckedDivVal},
            wrapping_arithmetic::{WrappingAddVal, WrappingSubVal},
        },
    },
};
use num_traits::{PrimInt, Signed};
use std::fmt::Debug;

/// Returns `a + b`, wrapping on overflow.
#[inline]
pub fn add<T>(a: T, b: T) -> T
where
    T: PrimInt + Signed + WrappingAddVal,
{
    a.wrapping_add_val(b)
}

/// Returns `a - b`, wrapping on overflow.
#[inline]
pub fn subtract<T>(a: T, b: T) -> T
where
    T: PrimInt + Signed + WrappingSubVal,
{
    a.wrapping_sub_val(b)
}

/// Returns the greater of `a` and `b`, or `a` when they are equal.
#[inline]
pub fn max<T>(a: T, b: T) -> T
where
    T: PrimInt + Signed,
{
    if a >= b {
        a
    } else {
        b
    }
}

/// Returns `a + b`, or [`ArithmeticError::Overflow`] if the sum does not fit in `T`.
#[inline]
pub fn try_sum<T>(a: T, b: T) -> Result<T, ArithmeticError>
where
    T: PrimInt + Signed + CheckedAddVal,
{
    a.checked_add_val(b).ok_or(ArithmeticError::Overflow)
}

/// Returns `a / b` truncated toward zero.
///
/// # Errors
///
/// [`ArithmeticError::DivisionByZero`] if `b` is zero, and
/// [`ArithmeticError::Overflow`] for `T::MIN / -1`.
#[inline]
pub fn try_divide<T>(a: T, b: T) -> Result<T, ArithmeticError>
where
    T: PrimInt + Signed + Zero + CheckedDivVal,
{
    if b == T::ZERO {
        return Err(ArithmeticError::DivisionByZero);
    }
    a.checked_div_val(b).ok_or(ArithmeticError::Overflow)
}

/// Writes `a + b` into `result`.
///
/// Returns `ErrorCode::None` on success, `ErrorCode::NullPointer` if `result`
/// is `None`, and `ErrorCode::InvalidParameter` if the sum overflows `T`.
/// `result` is only written on success.
#[inline]
pub fn checked_sum<T>(a: T, b: T, result: Option<&mut T>) -> ErrorCode
where
    T: PrimInt + Signed + CheckedAddVal + Debug,
{
    store("checked_sum", a, b, result, try_sum)
}

/// Writes `a / b` into `result`.
///
/// Returns `ErrorCode::None` on success, `ErrorCode::NullPointer` if `result`
/// is `None`, `ErrorCode::DivisionByZero` if `b` is zero, and
/// `ErrorCode::InvalidParameter` for `T::MIN / -1`. `result` is only written
/// on success.
#[inline]
pub fn checked_divide<T>(a: T, b: T, result: Option<&mut T>) -> ErrorCode
where
    T: PrimInt + Signed + Zero + CheckedDivVal + Debug,
{
    store("checked_divide", a, b, result, try_divide)
}

#[inline(always)]
fn store<T, F>(op: &'static str, a: T, b: T, result: Option<&mut T>, compute: F) -> ErrorCode
where
    T: Copy + Debug,
    F: FnOnce(T, T) -> Result<T, ArithmeticError>,
{
    let Some(slot) = result else {
        log::trace!("{op}({a:?}, {b:?}) rejected: no output location");
        return ErrorCode::NullPointer;
    };

    match compute(a, b) {
        Ok(value) => {
            *slot = value;
            ErrorCode::None
        }
        Err(e) => {
            let code = ErrorCode::from(e);
            log::trace!("{op}({a:?}, {b:?}) rejected with {code}: {e}");
            code
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SENTINEL: i32 = 0x5A5A_5A5A;

    #[test]
    fn test_add_basic_and_wrapping() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(-7, 7), 0);
        assert_eq!(add(i32::MAX, 1), i32::MIN);
        assert_eq!(add(i32::MIN, -1), i32::MAX);
    }

    #[test]
    fn test_subtract_basic_and_wrapping() {
        assert_eq!(subtract(10, 4), 6);
        assert_eq!(subtract(4, 10), -6);
        assert_eq!(subtract(i32::MIN, 1), i32::MAX);
        assert_eq!(subtract(0, i32::MIN), i32::MIN);
    }

    #[test]
    fn test_max_prefers_first_argument_on_tie() {
        assert_eq!(max(3, 9), 9);
        assert_eq!(max(9, 3), 9);
        assert_eq!(max(-4, -4), -4);
        assert_eq!(max(i32::MIN, i32::MAX), i32::MAX);
    }

    #[test]
    fn test_checked_sum_success() {
        let mut out = SENTINEL;
        assert_eq!(checked_sum(5, -3, Some(&mut out)), ErrorCode::None);
        assert_eq!(out, 2);
    }

    #[test]
    fn test_checked_sum_overflow_leaves_result_untouched() {
        let mut out = SENTINEL;
        assert_eq!(
            checked_sum(i32::MAX, 1, Some(&mut out)),
            ErrorCode::InvalidParameter
        );
        assert_eq!(out, SENTINEL);
        assert_eq!(
            checked_sum(i32::MIN, -1, Some(&mut out)),
            ErrorCode::InvalidParameter
        );
        assert_eq!(out, SENTINEL);
    }

    #[test]
    fn test_checked_sum_without_output_location() {
        assert_eq!(checked_sum::<i32>(1, 2, None), ErrorCode::NullPointer);
        assert_eq!(checked_sum::<i32>(i32::MAX, 1, None), ErrorCode::NullPointer);
    }

    #[test]
    fn test_checked_divide_success() {
        let mut out = SENTINEL;
        assert_eq!(checked_divide(10, 2, Some(&mut out)), ErrorCode::None);
        assert_eq!(out, 5);
        assert_eq!(checked_divide(-7, 2, Some(&mut out)), ErrorCode::None);
        assert_eq!(out, -3);
    }

    #[test]
    fn test_checked_divide_by_zero_leaves_result_untouched() {
        let mut out = SENTINEL;
        assert_eq!(
            checked_divide(7, 0, Some(&mut out)),
            ErrorCode::DivisionByZero
        );
        assert_eq!(out, SENTINEL);
    }

    #[test]
    fn test_checked_divide_min_by_minus_one() {
        let mut out = SENTINEL;
        assert_eq!(
            checked_divide(i32::MIN, -1, Some(&mut out)),
            ErrorCode::InvalidParameter
        );
        assert_eq!(out, SENTINEL);
    }

    #[test]
    fn test_null_check_precedes_divisor_check() {
        assert_eq!(checked_divide::<i32>(7, 0, None), ErrorCode::NullPointer);
        assert_eq!(checked_divide::<i32>(i32::MIN, -1, None), ErrorCode::NullPointer);
    }

    #[test]
    fn test_try_forms() {
        assert_eq!(try_sum(5, -3), Ok(2));
        assert_eq!(try_sum(i32::MAX, 1), Err(ArithmeticError::Overflow));
        assert_eq!(try_divide(10, 2), Ok(5));
        assert_eq!(try_divide(7, 0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(try_divide(i32::MIN, -1), Err(ArithmeticError::Overflow));
    }

    #[test]
    fn test_generic_over_other_widths() {
        let mut out: i8 = 0;
        assert_eq!(checked_sum(100i8, 27, Some(&mut out)), ErrorCode::None);
        assert_eq!(out, 127);
        assert_eq!(
            checked_sum(100i8, 28, Some(&mut out)),
            ErrorCode::InvalidParameter
        );
        assert_eq!(add(i64::MAX, 1), i64::MIN);
    }

    proptest! {
        #[test]
        fn prop_add_is_commutative(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(add(a, b), add(b, a));
        }

        #[test]
        fn prop_subtract_is_antisymmetric_without_overflow(a in any::<i32>(), b in any::<i32>()) {
            if a.checked_sub(b).is_some() && b.checked_sub(a).is_some() {
                prop_assert_eq!(subtract(a, b), -subtract(b, a));
            }
        }

        #[test]
        fn prop_max_bounds_both_operands(a in any::<i32>(), b in any::<i32>()) {
            let m = max(a, b);
            prop_assert!(m >= a && m >= b);
            prop_assert!(m == a || m == b);
        }

        #[test]
        fn prop_max_of_equal_is_operand(a in any::<i32>()) {
            prop_assert_eq!(max(a, a), a);
        }

        #[test]
        fn prop_missing_output_location_is_null_pointer(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(checked_sum::<i32>(a, b, None), ErrorCode::NullPointer);
            prop_assert_eq!(checked_divide::<i32>(a, b, None), ErrorCode::NullPointer);
        }

        #[test]
        fn prop_checked_sum_agrees_with_wide_arithmetic(a in any::<i32>(), b in any::<i32>()) {
            let mut out = SENTINEL;
            let code = checked_sum(a, b, Some(&mut out));
            let wide = i64::from(a) + i64::from(b);
            match i32::try_from(wide) {
                Ok(expected) => {
                    prop_assert_eq!(code, ErrorCode::None);
                    prop_assert_eq!(out, expected);
                }
                Err(_) => {
                    prop_assert_eq!(code, ErrorCode::InvalidParameter);
                    prop_assert_eq!(out, SENTINEL);
                }
            }
        }

        #[test]
        fn prop_checked_divide_agrees_with_wide_arithmetic(
            a in prop_oneof![any::<i32>(), Just(i32::MIN), Just(i32::MAX)],
            b in prop_oneof![any::<i32>(), Just(-1), Just(0), Just(1)],
        ) {
            let mut out = SENTINEL;
            let code = checked_divide(a, b, Some(&mut out));
            if b == 0 {
                prop_assert_eq!(code, ErrorCode::DivisionByZero);
                prop_assert_eq!(out, SENTINEL);
            } else {
                match i32::try_from(i64::from(a) / i64::from(b)) {
                    Ok(expected) => {
                        prop_assert_eq!(code, ErrorCode::None);
                        prop_assert_eq!(out, expected);
                    }
                    Err(_) => {
                        prop_assert_eq!(code, ErrorCode::InvalidParameter);
                        prop_assert_eq!(out, SENTINEL);
                    }
                }
            }
        }

        #[test]
        fn prop_calls_are_idempotent(a in any::<i32>(), b in any::<i32>()) {
            let (mut first, mut second) = (SENTINEL, SENTINEL);
            prop_assert_eq!(
                checked_divide(a, b, Some(&mut first)),
                checked_divide(a, b, Some(&mut second))
            );
            prop_assert_eq!(first, second);
            prop_assert_eq!(add(a, b), add(a, b));
            prop_assert_eq!(try_sum(a, b), try_sum(a, b));
        }
    }
}
