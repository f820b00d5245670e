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

//! # intops Core
//!
//! Pure arithmetic over signed primitive integers with explicit error
//! signaling. The crate exposes two tiers of operations:
//!
//! - **Unchecked** (`add`, `subtract`, `max`): always produce a value.
//!   Addition and subtraction wrap on overflow (two's complement).
//! - **Checked** (`checked_sum`, `checked_divide`): report every outcome,
//!   success included, as an [`ErrorCode`] and deliver the value through a
//!   caller-supplied output location. `try_sum` and `try_divide` are the
//!   `Result`-returning forms of the same operations.
//!
//! ## Modules
//!
//! - `arith`: The operations themselves, generic over signed integers and
//!   primarily used with `i32`.
//! - `error`: The stable, C-compatible [`ErrorCode`] enumeration and the
//!   [`ArithmeticError`] type returned by the `Result` forms.
//! - `num`: By-value checked and wrapping arithmetic traits plus the `Zero`
//!   constant trait that bound the generic operations.
//!
//! All operations are reentrant and touch no shared state, so they may be
//! called from any number of threads without coordination.

pub mod arith;
pub mod error;
pub mod num;

pub use arith::{add, checked_divide, checked_sum, max, subtract, try_divide, try_sum};
pub use error::{ArithmeticError, ErrorCode, UnknownErrorCode};
