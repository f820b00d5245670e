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

//! Error reporting for the checked operations.
//!
//! [`ErrorCode`] is the stable, numbered outcome every checked operation
//! returns. Its discriminants are part of the public contract and must never
//! change: `None` is always zero, so any non-zero code means failure.
//!
//! [`ArithmeticError`] is the idiomatic error type of the `Result` forms
//! (`try_sum`, `try_divide`). It converts losslessly into an `ErrorCode`.

use std::fmt::Display;
use thiserror::Error;

/// Outcome of a checked operation.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorCode {
    /// The operation succeeded and the result was written.
    #[default]
    None = 0,
    /// No output location was supplied.
    NullPointer = 1,
    /// The divisor was zero.
    DivisionByZero = 2,
    /// The operands produce a result the operand type cannot represent.
    InvalidParameter = 3,
}

impl ErrorCode {
    /// Every error code, in discriminant order.
    pub const ALL: [ErrorCode; 4] = [
        Self::None,
        Self::NullPointer,
        Self::DivisionByZero,
        Self::InvalidParameter,
    ];

    /// Returns `true` if this code signals success.
    #[inline]
    pub fn is_ok(self) -> bool {
        self == Self::None
    }

    /// Returns the raw numeric value of this code.
    #[inline]
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// Returns the variant name of this code.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::NullPointer => "NullPointer",
            Self::DivisionByZero => "DivisionByZero",
            Self::InvalidParameter => "InvalidParameter",
        }
    }

    /// Collapses the outcome of a `Result` form into its error code.
    #[inline]
    pub fn from_result<T>(result: &Result<T, ArithmeticError>) -> Self {
        match result {
            Ok(_) => Self::None,
            Err(e) => (*e).into(),
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw value that does not name any [`ErrorCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown error code {0}")]
pub struct UnknownErrorCode(pub i32);

impl TryFrom<i32> for ErrorCode {
    type Error = UnknownErrorCode;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::None),
            1 => Ok(Self::NullPointer),
            2 => Ok(Self::DivisionByZero),
            3 => Ok(Self::InvalidParameter),
            other => Err(UnknownErrorCode(other)),
        }
    }
}

impl From<ErrorCode> for i32 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.as_raw()
    }
}

/// The error type of the `Result`-returning operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// The divisor was zero.
    #[error("division by zero")]
    DivisionByZero,
    /// The exact result does not fit in the operand type.
    #[error("arithmetic overflow: result is not representable in the operand type")]
    Overflow,
}

impl From<ArithmeticError> for ErrorCode {
    #[inline]
    fn from(e: ArithmeticError) -> Self {
        match e {
            ArithmeticError::DivisionByZero => Self::DivisionByZero,
            ArithmeticError::Overflow => Self::InvalidParameter,
        }
    }
}
