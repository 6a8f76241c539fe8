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

//! # Fibonacci Terms
//!
//! The Fibonacci sequence under the 0-indexed convention `F(0) = 0`,
//! `F(1) = 1`, `F(n) = F(n - 1) + F(n - 2)`.
//!
//! `Fibonacci<T>` walks the terms iteratively and ends once the next term
//! would overflow `T`, so every routine built on it is bounded by the width
//! of the integer type rather than by recursion depth.
//!
//! ## Usage
//!
//! ```rust
//! use euler_core::fibonacci::{Fibonacci, Parity, fibonacci_sum_by_parity};
//!
//! let terms: Vec<u32> = Fibonacci::new().take(8).collect();
//! assert_eq!(terms, vec![0, 1, 1, 2, 3, 5, 8, 13]);
//!
//! // 0 + 2 + 8 + 34
//! assert_eq!(fibonacci_sum_by_parity(100_u32, Parity::Even), Ok(44));
//! ```

use crate::{error::NumberError, num::EulerNumeric};
use std::iter::FusedIterator;

/// An iterator over the Fibonacci terms representable in `T`.
///
/// # Examples
///
/// ```rust
/// # use euler_core::fibonacci::Fibonacci;
/// // F(13) = 233 is the last term that fits into a u8.
/// assert_eq!(Fibonacci::<u8>::new().count(), 14);
/// assert_eq!(Fibonacci::<u8>::new().last(), Some(233));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fibonacci<T> {
    current: Option<T>,
    next: Option<T>,
}

impl<T> Fibonacci<T>
where
    T: EulerNumeric,
{
    /// Creates an iterator starting at `F(0)`.
    #[inline]
    pub fn new() -> Self {
        Self {
            current: Some(T::zero()),
            next: Some(T::one()),
        }
    }
}

impl<T> Default for Fibonacci<T>
where
    T: EulerNumeric,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Iterator for Fibonacci<T>
where
    T: EulerNumeric,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = self.next;
        self.next = self.next.and_then(|next| current.checked_add(&next));
        Some(current)
    }
}

impl<T> FusedIterator for Fibonacci<T> where T: EulerNumeric {}

/// Returns the `n`-th Fibonacci term.
///
/// # Errors
///
/// Returns `NumberError::Overflow` if `F(n)` does not fit `T`.
///
/// # Examples
///
/// ```rust
/// # use euler_core::fibonacci::fibonacci;
/// assert_eq!(fibonacci::<u64>(10), Ok(55));
/// assert!(fibonacci::<u8>(14).is_err());
/// ```
#[inline]
pub fn fibonacci<T>(n: usize) -> Result<T, NumberError>
where
    T: EulerNumeric,
{
    Fibonacci::new()
        .nth(n)
        .ok_or(NumberError::addition_overflow())
}

/// The parity a term must have to be accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// The parity of `value`. Negative odd values are `Odd`.
    #[inline]
    pub fn of<T>(value: T) -> Self
    where
        T: EulerNumeric,
    {
        if (value % T::TWO).is_zero() {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    /// Returns `true` if `value` has this parity.
    #[inline]
    pub fn matches<T>(self, value: T) -> bool
    where
        T: EulerNumeric,
    {
        Self::of(value) == self
    }
}

impl std::fmt::Display for Parity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Parity::Even => write!(f, "even"),
            Parity::Odd => write!(f, "odd"),
        }
    }
}

/// Sums the Fibonacci terms of the given parity that are below `limit`.
///
/// Terms are visited from `F(0)` on; the first term `>= limit` ends the walk
/// and is not part of the sum.
///
/// # Errors
///
/// Returns `NumberError::Overflow` if the sum does not fit `T`.
pub fn fibonacci_sum_by_parity<T>(limit: T, parity: Parity) -> Result<T, NumberError>
where
    T: EulerNumeric,
{
    tracing::trace!(%limit, %parity, "summing fibonacci terms");

    Fibonacci::new()
        .take_while(|&term| term < limit)
        .filter(|&term| parity.matches(term))
        .try_fold(T::zero(), |sum, term| {
            sum.checked_add(&term)
                .ok_or(NumberError::addition_overflow())
        })
}

/// Sums the even-valued Fibonacci terms below `limit`.
///
/// # Errors
///
/// Returns `NumberError::Overflow` if the sum does not fit `T`.
///
/// # Examples
///
/// ```rust
/// # use euler_core::fibonacci::even_fibonacci_sum;
/// assert_eq!(even_fibonacci_sum(4_000_000_u64), Ok(4_613_732));
/// ```
#[inline]
pub fn even_fibonacci_sum<T>(limit: T) -> Result<T, NumberError>
where
    T: EulerNumeric,
{
    fibonacci_sum_by_parity(limit, Parity::Even)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    type IntegerType = u64;

    #[test]
    fn test_fibonacci_base_cases() {
        assert_eq!(fibonacci::<IntegerType>(0), Ok(0));
        assert_eq!(fibonacci::<IntegerType>(1), Ok(1));
        assert_eq!(fibonacci::<IntegerType>(2), Ok(1));
    }

    #[test]
    fn test_fibonacci_tenth_term() {
        assert_eq!(fibonacci::<IntegerType>(10), Ok(55));
        assert_eq!(fibonacci::<i32>(10), Ok(55));
    }

    #[test]
    fn test_fibonacci_largest_u64_term() {
        assert_eq!(fibonacci::<IntegerType>(93), Ok(12_200_160_415_121_876_738));
        assert_eq!(
            fibonacci::<IntegerType>(94),
            Err(NumberError::addition_overflow())
        );
    }

    #[test]
    fn test_iterator_prefix() {
        let terms: Vec<IntegerType> = Fibonacci::new().take(12).collect();
        assert_eq!(terms, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89]);
    }

    #[test]
    fn test_iterator_ends_at_type_width_and_stays_fused() {
        let mut it = Fibonacci::<i8>::new();
        let terms: Vec<i8> = it.by_ref().collect();
        assert_eq!(terms.last(), Some(&89));
        assert_eq!(terms.len(), 12);
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_parity_of() {
        assert_eq!(Parity::of(0_i32), Parity::Even);
        assert_eq!(Parity::of(8_i32), Parity::Even);
        assert_eq!(Parity::of(13_i32), Parity::Odd);
        assert_eq!(Parity::of(-3_i32), Parity::Odd);
        assert_eq!(Parity::of(-4_i32), Parity::Even);
    }

    #[test]
    fn test_even_fibonacci_sum_problem_two() {
        assert_eq!(even_fibonacci_sum::<IntegerType>(4_000_000), Ok(4_613_732));
    }

    #[test]
    fn test_even_and_odd_policies_diverge_below_hundred() {
        // even: 0 + 2 + 8 + 34, odd: 1 + 1 + 3 + 5 + 13 + 21 + 55 + 89
        assert_eq!(fibonacci_sum_by_parity::<IntegerType>(100, Parity::Even), Ok(44));
        assert_eq!(fibonacci_sum_by_parity::<IntegerType>(100, Parity::Odd), Ok(188));
    }

    #[test]
    fn test_odd_policy_coincides_at_four_million() {
        assert_eq!(
            fibonacci_sum_by_parity::<IntegerType>(4_000_000, Parity::Odd),
            Ok(4_613_732)
        );
    }

    #[test]
    fn test_term_equal_to_limit_is_excluded() {
        // 34 is even and equals the limit
        assert_eq!(even_fibonacci_sum::<IntegerType>(34), Ok(10));
        assert_eq!(even_fibonacci_sum::<IntegerType>(35), Ok(44));
    }

    #[test]
    fn test_non_positive_limit_sums_nothing() {
        assert_eq!(even_fibonacci_sum::<i64>(0), Ok(0));
        assert_eq!(even_fibonacci_sum::<i64>(-10), Ok(0));
    }

    #[test]
    fn test_limit_at_type_max_sums_all_terms() {
        // even terms of u8: 0, 2, 8, 34, 144 = 188
        assert_eq!(even_fibonacci_sum::<u8>(u8::MAX), Ok(188));
        // all odd terms of u8 overflow the accumulator
        assert_eq!(
            fibonacci_sum_by_parity::<u8>(u8::MAX, Parity::Odd),
            Err(NumberError::addition_overflow())
        );
    }

    proptest! {
        #[test]
        fn prop_fibonacci_recurrence(n in 2_usize..=93) {
            let f = fibonacci::<IntegerType>(n).unwrap();
            let f1 = fibonacci::<IntegerType>(n - 1).unwrap();
            let f2 = fibonacci::<IntegerType>(n - 2).unwrap();
            prop_assert_eq!(f, f1 + f2);
        }

        #[test]
        fn prop_parity_sums_partition_all_terms(limit in 0_u64..1_000_000_000) {
            let all: u64 = Fibonacci::<u64>::new().take_while(|&t| t < limit).sum();
            let even = fibonacci_sum_by_parity(limit, Parity::Even).unwrap();
            let odd = fibonacci_sum_by_parity(limit, Parity::Odd).unwrap();
            prop_assert_eq!(even + odd, all);
        }
    }
}
