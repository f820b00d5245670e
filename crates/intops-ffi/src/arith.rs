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

//! # Foreign Function Interface (FFI) for the Arithmetic Operations
//!
//! C-callable wrappers around `intops_core::arith`. The unchecked functions
//! pass straight through. The checked functions take the destination as a
//! raw `int32_t*` and translate a `NULL` pointer into
//! `IntopsErrorCode::NullPointer`.
//!
//! ## Safety
//!
//! A non-null `result` pointer must be valid for a write of one aligned
//! `int32_t` and must not alias memory the caller is reading concurrently.

use crate::error::IntopsErrorCode;
use intops_core::arith;

/// Returns `a + b`, wrapping on overflow.
#[no_mangle]
pub extern "C" fn intops_add(a: i32, b: i32) -> i32 {
    arith::add(a, b)
}

/// Returns `a - b`, wrapping on overflow.
#[no_mangle]
pub extern "C" fn intops_subtract(a: i32, b: i32) -> i32 {
    arith::subtract(a, b)
}

/// Returns the greater of `a` and `b`, or `a` when they are equal.
#[no_mangle]
pub extern "C" fn intops_max(a: i32, b: i32) -> i32 {
    arith::max(a, b)
}

/// Writes `a + b` into `*result`.
///
/// Returns `NullPointer` if `result` is null and `InvalidParameter` if the
/// sum overflows. `*result` is written only when `None` is returned.
///
/// # Safety
///
/// `result` must be null or valid for a write of one `i32`.
#[no_mangle]
pub unsafe extern "C" fn intops_sum(a: i32, b: i32, result: *mut i32) -> IntopsErrorCode {
    if result.is_null() {
        log::debug!("called `intops_sum` with null result pointer");
    }
    arith::checked_sum(a, b, result.as_mut()).into()
}

/// Writes `a / b` into `*result`, truncating toward zero.
///
/// Returns `NullPointer` if `result` is null, `DivisionByZero` if `b` is
/// zero, and `InvalidParameter` for `INT32_MIN / -1`. `*result` is written
/// only when `None` is returned.
///
/// # Safety
///
/// `result` must be null or valid for a write of one `i32`.
#[no_mangle]
pub unsafe extern "C" fn intops_divide(a: i32, b: i32, result: *mut i32) -> IntopsErrorCode {
    if result.is_null() {
        log::debug!("called `intops_divide` with null result pointer");
    }
    arith::checked_divide(a, b, result.as_mut()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::ptr::null_mut;

    #[test]
    fn test_unchecked_pass_through() {
        assert_eq!(intops_add(2, 3), 5);
        assert_eq!(intops_add(i32::MAX, 1), i32::MIN);
        assert_eq!(intops_subtract(2, 3), -1);
        assert_eq!(intops_max(-1, -2), -1);
        assert_eq!(intops_max(8, 8), 8);
    }

    #[test]
    fn test_sum_writes_result() {
        let mut out = 0;
        unsafe {
            assert_eq!(intops_sum(5, -3, &mut out), IntopsErrorCode::None);
        }
        assert_eq!(out, 2);
    }

    #[test]
    fn test_sum_overflow_is_invalid_parameter() {
        let mut out = 17;
        unsafe {
            assert_eq!(
                intops_sum(i32::MAX, 1, &mut out),
                IntopsErrorCode::InvalidParameter
            );
        }
        assert_eq!(out, 17);
    }

    #[test]
    fn test_divide_writes_result() {
        let mut out = 0;
        unsafe {
            assert_eq!(intops_divide(10, 2, &mut out), IntopsErrorCode::None);
        }
        assert_eq!(out, 5);
    }

    #[test]
    fn test_divide_by_zero_leaves_result_untouched() {
        let mut out = 17;
        unsafe {
            assert_eq!(
                intops_divide(7, 0, &mut out),
                IntopsErrorCode::DivisionByZero
            );
        }
        assert_eq!(out, 17);
    }

    #[test]
    fn test_divide_min_by_minus_one() {
        let mut out = 17;
        unsafe {
            assert_eq!(
                intops_divide(i32::MIN, -1, &mut out),
                IntopsErrorCode::InvalidParameter
            );
        }
        assert_eq!(out, 17);
    }

    #[test]
    fn test_null_result_pointer() {
        unsafe {
            assert_eq!(intops_sum(1, 2, null_mut()), IntopsErrorCode::NullPointer);
            assert_eq!(intops_divide(1, 0, null_mut()), IntopsErrorCode::NullPointer);
        }
    }

    proptest! {
        #[test]
        fn prop_null_result_pointer_for_any_operands(a in any::<i32>(), b in any::<i32>()) {
            unsafe {
                prop_assert_eq!(intops_sum(a, b, null_mut()), IntopsErrorCode::NullPointer);
                prop_assert_eq!(intops_divide(a, b, null_mut()), IntopsErrorCode::NullPointer);
            }
        }

        #[test]
        fn prop_add_commutes_across_the_boundary(a in any::<i32>(), b in any::<i32>()) {
            prop_assert_eq!(intops_add(a, b), intops_add(b, a));
        }
    }
}
