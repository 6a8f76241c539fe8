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

//! Error type shared by the fallible numeric routines.

/// The error type for the numeric routines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NumberError {
    /// A checked arithmetic operation left the range of the integer type.
    #[error("integer overflow during {operation}")]
    Overflow {
        /// The operation that overflowed (e.g., "addition").
        operation: &'static str,
    },
    /// The routine requires a strictly positive input.
    #[error("expected a positive value")]
    NonPositive,
    /// A divisor list contained zero.
    #[error("divisor list contains zero")]
    ZeroDivisor,
}

impl NumberError {
    /// Overflow of a checked addition.
    #[inline]
    pub const fn addition_overflow() -> Self {
        Self::Overflow {
            operation: "addition",
        }
    }
}
