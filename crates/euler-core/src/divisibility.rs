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

//! # Multiples Below a Limit
//!
//! Sums of the non-negative integers below a limit that are multiples of at
//! least one divisor out of a set. `divisible_sum` is the instance for the
//! divisors 3 and 5.
//!
//! A value that is a multiple of several divisors (e.g., 15 for 3 and 5) is
//! counted exactly once: the divisor test short-circuits on the first match.

use crate::{error::NumberError, num::EulerNumeric};

/// Returns `true` if `value` is an exact multiple of at least one divisor.
///
/// Zero divisors never match.
///
/// # Examples
///
/// ```rust
/// # use euler_core::divisibility::is_multiple_of_any;
/// assert!(is_multiple_of_any(9_u32, &[3, 5]));
/// assert!(is_multiple_of_any(15_u32, &[3, 5]));
/// assert!(!is_multiple_of_any(7_u32, &[3, 5]));
/// assert!(!is_multiple_of_any(7_u32, &[0]));
/// ```
#[inline]
pub fn is_multiple_of_any<T>(value: T, divisors: &[T]) -> bool
where
    T: EulerNumeric,
{
    // `checked_rem` only fails for a zero divisor or `MIN % -1`, and the
    // latter is a multiple.
    divisors
        .iter()
        .any(|d| !d.is_zero() && value.checked_rem(d).is_none_or(|r| r.is_zero()))
}

/// Sums all integers in `[0, limit)` that are multiples of at least one of
/// `divisors`.
///
/// A `limit <= 0` yields zero.
///
/// # Errors
///
/// Returns `NumberError::ZeroDivisor` if `divisors` contains zero, and
/// `NumberError::Overflow` if the sum does not fit `T`.
///
/// # Examples
///
/// ```rust
/// # use euler_core::divisibility::multiples_sum;
/// assert_eq!(multiples_sum(100_i64, &[7, 11]), Ok(1153));
/// assert_eq!(multiples_sum(-5_i64, &[7, 11]), Ok(0));
/// ```
pub fn multiples_sum<T>(limit: T, divisors: &[T]) -> Result<T, NumberError>
where
    T: EulerNumeric,
{
    if divisors.iter().any(|d| d.is_zero()) {
        return Err(NumberError::ZeroDivisor);
    }

    tracing::trace!(%limit, ?divisors, "summing multiples");

    let mut sum = T::zero();
    let mut value = T::zero();
    while value < limit {
        if is_multiple_of_any(value, divisors) {
            sum = sum
                .checked_add(&value)
                .ok_or(NumberError::addition_overflow())?;
        }
        // value < limit <= T::MAX
        value = value + T::one();
    }
    Ok(sum)
}

/// Sums all integers in `[0, limit)` divisible by 3 or by 5.
///
/// A `limit <= 0` yields zero.
///
/// # Errors
///
/// Returns `NumberError::Overflow` if the sum does not fit `T`.
///
/// # Examples
///
/// ```rust
/// # use euler_core::divisibility::divisible_sum;
/// // 3 + 5 + 6 + 9
/// assert_eq!(divisible_sum(10_u32), Ok(23));
/// ```
#[inline]
pub fn divisible_sum<T>(limit: T) -> Result<T, NumberError>
where
    T: EulerNumeric,
{
    multiples_sum(limit, &[T::THREE, T::FIVE])
}
