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

//! # Euler Numeric Trait
//!
//! Unified numeric bounds for the problem routines. `EulerNumeric` collects
//! the intrinsic integer traits (`PrimInt`), checked remainder, formatting and
//! the small constants from `constants` into a single alias, so generic
//! signatures stay short.
//!
//! All primitive integers, signed and unsigned, satisfy the bound.

use crate::num::constants::{Five, Three, Two};
use num_traits::{CheckedRem, PrimInt};

/// A trait alias for integer types accepted by the problem routines.
///
/// `PrimInt` already brings checked addition and multiplication; the
/// remainder is needed in checked form because `MIN % -1` overflows for
/// signed types.
pub trait EulerNumeric:
    PrimInt + CheckedRem + std::fmt::Debug + std::fmt::Display + Two + Three + Five
{
}

impl<T> EulerNumeric for T where
    T: PrimInt + CheckedRem + std::fmt::Debug + std::fmt::Display + Two + Three + Five
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_numeric<T: EulerNumeric>() {}

    #[test]
    fn test_all_primitive_integers_are_numeric() {
        assert_numeric::<u8>();
        assert_numeric::<u16>();
        assert_numeric::<u32>();
        assert_numeric::<u64>();
        assert_numeric::<u128>();
        assert_numeric::<usize>();
        assert_numeric::<i8>();
        assert_numeric::<i16>();
        assert_numeric::<i32>();
        assert_numeric::<i64>();
        assert_numeric::<i128>();
        assert_numeric::<isize>();
    }
}
