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

use intops_core::ErrorCode;
use libc::c_char;

/// FFI-compatible error code returned by the checked functions.
///
/// The numeric values are stable and identical to those of
/// `intops_core::ErrorCode`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntopsErrorCode {
    /// The operation succeeded and the result was written.
    None = 0,
    /// The result pointer was null.
    NullPointer = 1,
    /// The divisor was zero.
    DivisionByZero = 2,
    /// The operands produce a result an `int32_t` cannot represent.
    InvalidParameter = 3,
}

impl From<ErrorCode> for IntopsErrorCode {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::None => Self::None,
            ErrorCode::NullPointer => Self::NullPointer,
            ErrorCode::DivisionByZero => Self::DivisionByZero,
            ErrorCode::InvalidParameter => Self::InvalidParameter,
        }
    }
}

impl From<IntopsErrorCode> for ErrorCode {
    #[inline]
    fn from(code: IntopsErrorCode) -> Self {
        match code {
            IntopsErrorCode::None => Self::None,
            IntopsErrorCode::NullPointer => Self::NullPointer,
            IntopsErrorCode::DivisionByZero => Self::DivisionByZero,
            IntopsErrorCode::InvalidParameter => Self::InvalidParameter,
        }
    }
}

impl std::fmt::Display for IntopsErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&ErrorCode::from(*self), f)
    }
}

/// Returns a static, NUL-terminated name for a raw error code.
///
/// The code is taken as a plain integer so that values outside the
/// enumeration are handled; they yield `"Unknown"`. The returned pointer is
/// never null and must not be freed.
#[no_mangle]
pub extern "C" fn intops_error_code_str(code: i32) -> *const c_char {
    let name = match ErrorCode::try_from(code) {
        Ok(ErrorCode::None) => c"None",
        Ok(ErrorCode::NullPointer) => c"NullPointer",
        Ok(ErrorCode::DivisionByZero) => c"DivisionByZero",
        Ok(ErrorCode::InvalidParameter) => c"InvalidParameter",
        Err(e) => {
            log::debug!("called `intops_error_code_str` with {e}");
            c"Unknown"
        }
    };
    name.as_ptr()
}
