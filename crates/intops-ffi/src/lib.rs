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

//! # intops FFI
//!
//! **C-Compatible Bindings for the intops arithmetic library.**
//!
//! This crate exposes the operations of `intops-core` over a stable C ABI so
//! that C, C++ and any language with a C FFI can call them directly.
//!
//! ## Core Design Principles
//!
//! 1.  **Plain Values**: Every operand and result is an `int32_t`. No handles
//!     and no allocation cross the boundary, so there is nothing to free.
//! 2.  **Error Codes, Not Aborts**: The checked functions return an
//!     `IntopsErrorCode` on every call. A `NULL` output pointer is reported as
//!     `IntopsErrorCode::NullPointer` rather than aborting the host process.
//! 3.  **Untouched on Failure**: The output pointer is written only when the
//!     returned code is `IntopsErrorCode::None`.
//!
//! ## Exported API
//!
//! * `intops_add`, `intops_subtract`, `intops_max`
//! * `intops_sum`, `intops_divide`
//! * `intops_error_code_str`

pub mod arith;
pub mod error;
