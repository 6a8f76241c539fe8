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

//! # Primes and Factors
//!
//! Trial-division routines over the primitive integers: primality, prime
//! factorization, largest prime factor and divisor enumeration.
//!
//! All square-root bounds are evaluated as `d <= n / d` instead of
//! `d * d <= n`, so no routine can overflow while scanning candidates.
//!
//! ## Largest prime factor
//!
//! Two variants are provided:
//!
//! - `largest_prime_factor` divides every found factor out of the value and
//!   continues with the cofactor. It is correct for every positive value.
//! - `largest_prime_factor_within_sqrt` only scans candidates up to
//!   `integer_sqrt(value) + 1`. It returns the true answer only when the
//!   largest prime factor lies within that bound (which holds for
//!   `600851475143`, but not for, e.g., `2 * 97`).

use crate::{error::NumberError, num::EulerNumeric};
use std::iter::FusedIterator;

/// Returns `true` if `number` is prime.
///
/// Numbers below 2 are not prime, 2 is the only even prime, and odd numbers
/// are tested against every odd divisor up to their square root.
///
/// # Examples
///
/// ```rust
/// # use euler_core::prime::is_prime;
/// assert!(is_prime(2_u32));
/// assert!(is_prime(97_u32));
/// assert!(!is_prime(1_u32));
/// assert!(!is_prime(9_u32));
/// ```
pub fn is_prime<T>(number: T) -> bool
where
    T: EulerNumeric,
{
    if number < T::TWO {
        return false;
    }
    if number == T::TWO {
        return true;
    }
    if (number % T::TWO).is_zero() {
        return false;
    }

    let mut divisor = T::THREE;
    while divisor <= number / divisor {
        if (number % divisor).is_zero() {
            return false;
        }
        divisor = divisor + T::TWO;
    }
    true
}

/// Returns the largest integer whose square does not exceed `value`.
///
/// Non-positive values yield zero.
///
/// # Examples
///
/// ```rust
/// # use euler_core::prime::integer_sqrt;
/// assert_eq!(integer_sqrt(15_u32), 3);
/// assert_eq!(integer_sqrt(16_u32), 4);
/// assert_eq!(integer_sqrt(u64::MAX), u64::from(u32::MAX));
/// ```
pub fn integer_sqrt<T>(value: T) -> T
where
    T: EulerNumeric,
{
    if value <= T::zero() {
        return T::zero();
    }
    if value < T::TWO + T::TWO {
        return T::one();
    }

    // Newton's method from above; `value / 2 >= sqrt(value)` for value >= 4.
    let mut x = value / T::TWO;
    let mut y = (x + value / x) / T::TWO;
    while y < x {
        x = y;
        y = (x + value / x) / T::TWO;
    }
    x
}

/// An iterator over the prime factors of a positive value, in non-decreasing
/// order and with multiplicity.
///
/// # Examples
///
/// ```rust
/// # use euler_core::prime::PrimeFactors;
/// let factors: Vec<u32> = PrimeFactors::new(360_u32).unwrap().collect();
/// assert_eq!(factors, vec![2, 2, 2, 3, 3, 5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeFactors<T> {
    remaining: T,
    divisor: T,
}

impl<T> PrimeFactors<T>
where
    T: EulerNumeric,
{
    /// Creates the factorization of `value`. The factorization of 1 is empty.
    ///
    /// # Errors
    ///
    /// Returns `NumberError::NonPositive` if `value <= 0`.
    #[inline]
    pub fn new(value: T) -> Result<Self, NumberError> {
        if value <= T::zero() {
            return Err(NumberError::NonPositive);
        }
        Ok(Self {
            remaining: value,
            divisor: T::TWO,
        })
    }

    /// The part of the value that has not been factored yet.
    #[inline]
    pub fn remaining(&self) -> T {
        self.remaining
    }
}

impl<T> Iterator for PrimeFactors<T>
where
    T: EulerNumeric,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining <= T::one() {
            return None;
        }

        while self.divisor <= self.remaining / self.divisor {
            if (self.remaining % self.divisor).is_zero() {
                self.remaining = self.remaining / self.divisor;
                return Some(self.divisor);
            }
            self.divisor = if self.divisor == T::TWO {
                T::THREE
            } else {
                self.divisor + T::TWO
            };
        }

        // No divisor up to its square root: the cofactor is prime.
        let last = self.remaining;
        self.remaining = T::one();
        Some(last)
    }
}

impl<T> FusedIterator for PrimeFactors<T> where T: EulerNumeric {}

/// Returns the largest prime factor of `value`, or 1 for `value == 1`.
///
/// # Errors
///
/// Returns `NumberError::NonPositive` if `value <= 0`.
///
/// # Examples
///
/// ```rust
/// # use euler_core::prime::largest_prime_factor;
/// assert_eq!(largest_prime_factor(13_195_u64), Ok(29));
/// assert_eq!(largest_prime_factor(194_u64), Ok(97));
/// ```
pub fn largest_prime_factor<T>(value: T) -> Result<T, NumberError>
where
    T: EulerNumeric,
{
    tracing::trace!(%value, "factoring");

    // Factors arrive in non-decreasing order.
    Ok(PrimeFactors::new(value)?.last().unwrap_or_else(T::one))
}

/// Returns the largest prime `p <= integer_sqrt(value) + 1` dividing `value`,
/// or 1 if there is none.
///
/// This is the largest prime factor of `value` only if that factor does not
/// exceed the scan bound; use `largest_prime_factor` for arbitrary values.
/// Non-positive values yield 1.
///
/// # Examples
///
/// ```rust
/// # use euler_core::prime::largest_prime_factor_within_sqrt;
/// assert_eq!(largest_prime_factor_within_sqrt(13_195_u64), 29);
/// // 97 lies beyond the bound of 2 * 97
/// assert_eq!(largest_prime_factor_within_sqrt(194_u64), 2);
/// ```
pub fn largest_prime_factor_within_sqrt<T>(value: T) -> T
where
    T: EulerNumeric,
{
    let mut largest = T::one();
    if value <= T::zero() {
        return largest;
    }

    // 0 and 1 are never prime, so the scan starts at 2.
    let bound = integer_sqrt(value) + T::one();
    let mut candidate = T::TWO;
    while candidate <= bound {
        if (value % candidate).is_zero() && is_prime(candidate) {
            largest = candidate;
        }
        candidate = candidate + T::one();
    }
    largest
}

/// Returns all positive divisors of `value` in ascending order.
///
/// # Errors
///
/// Returns `NumberError::NonPositive` if `value <= 0`.
///
/// # Examples
///
/// ```rust
/// # use euler_core::prime::divisors;
/// assert_eq!(divisors(28_u32), Ok(vec![1, 2, 4, 7, 14, 28]));
/// assert_eq!(divisors(1_u32), Ok(vec![1]));
/// ```
pub fn divisors<T>(value: T) -> Result<Vec<T>, NumberError>
where
    T: EulerNumeric,
{
    if value <= T::zero() {
        return Err(NumberError::NonPositive);
    }

    let mut low = Vec::new();
    let mut high = Vec::new();
    let mut candidate = T::one();
    while candidate <= value / candidate {
        if (value % candidate).is_zero() {
            low.push(candidate);
            let pair = value / candidate;
            if pair != candidate {
                high.push(pair);
            }
        }
        candidate = candidate + T::one();
    }

    low.extend(high.into_iter().rev());
    Ok(low)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    type IntegerType = u64;

    fn naive_is_prime(n: IntegerType) -> bool {
        n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    #[test]
    fn test_is_prime_small_values() {
        assert!(!is_prime::<IntegerType>(0));
        assert!(!is_prime::<IntegerType>(1));
        assert!(is_prime::<IntegerType>(2));
        assert!(is_prime::<IntegerType>(3));
        assert!(!is_prime::<IntegerType>(4));
        assert!(is_prime::<IntegerType>(5));
        assert!(!is_prime::<IntegerType>(9));
        assert!(!is_prime::<IntegerType>(25));
        assert!(is_prime::<IntegerType>(97));
    }

    #[test]
    fn test_is_prime_negative_values() {
        assert!(!is_prime::<i64>(-2));
        assert!(!is_prime::<i64>(-7));
        assert!(!is_prime::<i64>(i64::MIN));
    }

    #[test]
    fn test_is_prime_near_type_max() {
        assert!(is_prime::<u8>(251));
        assert!(!is_prime::<u8>(u8::MAX));
        assert!(is_prime::<i8>(127));
        assert!(is_prime::<u32>(4_294_967_291));
        assert!(is_prime::<i64>(6857));
        assert!(!is_prime::<i64>(600_851_475_143));
    }

    #[test]
    fn test_integer_sqrt_values() {
        assert_eq!(integer_sqrt::<IntegerType>(0), 0);
        assert_eq!(integer_sqrt::<IntegerType>(1), 1);
        assert_eq!(integer_sqrt::<IntegerType>(2), 1);
        assert_eq!(integer_sqrt::<IntegerType>(3), 1);
        assert_eq!(integer_sqrt::<IntegerType>(4), 2);
        assert_eq!(integer_sqrt::<IntegerType>(99), 9);
        assert_eq!(integer_sqrt::<IntegerType>(100), 10);
        assert_eq!(integer_sqrt::<IntegerType>(600_851_475_143), 775_146);
        assert_eq!(integer_sqrt::<i64>(-9), 0);
        assert_eq!(integer_sqrt::<u8>(u8::MAX), 15);
        assert_eq!(integer_sqrt::<i8>(i8::MAX), 11);
    }

    #[test]
    fn test_prime_factors_of_problem_three() {
        let factors: Vec<IntegerType> = PrimeFactors::new(600_851_475_143).unwrap().collect();
        assert_eq!(factors, vec![71, 839, 1471, 6857]);
    }

    #[test]
    fn test_prime_factors_of_one_is_empty() {
        let mut factors = PrimeFactors::<IntegerType>::new(1).unwrap();
        assert_eq!(factors.next(), None);
        assert_eq!(factors.remaining(), 1);
    }

    #[test]
    fn test_prime_factors_of_prime_is_itself() {
        let factors: Vec<i32> = PrimeFactors::new(97).unwrap().collect();
        assert_eq!(factors, vec![97]);
    }

    #[test]
    fn test_prime_factors_rejects_non_positive() {
        assert_eq!(PrimeFactors::<i64>::new(0), Err(NumberError::NonPositive));
        assert_eq!(PrimeFactors::<i64>::new(-12), Err(NumberError::NonPositive));
    }

    #[test]
    fn test_prime_factors_at_type_max() {
        // 255 = 3 * 5 * 17
        let factors: Vec<u8> = PrimeFactors::new(u8::MAX).unwrap().collect();
        assert_eq!(factors, vec![3, 5, 17]);
    }

    #[test]
    fn test_largest_prime_factor_examples() {
        assert_eq!(largest_prime_factor::<IntegerType>(13_195), Ok(29));
        assert_eq!(largest_prime_factor::<IntegerType>(600_851_475_143), Ok(6857));
        assert_eq!(largest_prime_factor::<IntegerType>(1), Ok(1));
        assert_eq!(largest_prime_factor::<IntegerType>(2), Ok(2));
        assert_eq!(largest_prime_factor::<i64>(0), Err(NumberError::NonPositive));
    }

    #[test]
    fn test_largest_prime_factor_beyond_square_root() {
        assert_eq!(largest_prime_factor::<IntegerType>(2 * 97), Ok(97));
        assert_eq!(largest_prime_factor_within_sqrt::<IntegerType>(2 * 97), 2);
    }

    #[test]
    fn test_within_sqrt_agrees_when_bound_holds() {
        assert_eq!(largest_prime_factor_within_sqrt::<IntegerType>(13_195), 29);
        assert_eq!(
            largest_prime_factor_within_sqrt::<IntegerType>(600_851_475_143),
            6857
        );
    }

    #[test]
    fn test_within_sqrt_degenerate_values() {
        assert_eq!(largest_prime_factor_within_sqrt::<i64>(0), 1);
        assert_eq!(largest_prime_factor_within_sqrt::<i64>(1), 1);
        assert_eq!(largest_prime_factor_within_sqrt::<i64>(-15), 1);
        // bound is integer_sqrt(2) + 1 = 2
        assert_eq!(largest_prime_factor_within_sqrt::<i64>(2), 2);
        assert_eq!(largest_prime_factor_within_sqrt::<i64>(6), 3);
    }

    #[test]
    fn test_divisors_values() {
        assert_eq!(divisors::<IntegerType>(1), Ok(vec![1]));
        assert_eq!(divisors::<IntegerType>(13), Ok(vec![1, 13]));
        assert_eq!(divisors::<IntegerType>(36), Ok(vec![1, 2, 3, 4, 6, 9, 12, 18, 36]));
        assert_eq!(divisors::<i32>(-4), Err(NumberError::NonPositive));
    }

    proptest! {
        #[test]
        fn prop_is_prime_matches_naive(n in 0_u64..50_000) {
            prop_assert_eq!(is_prime(n), naive_is_prime(n));
        }

        #[test]
        fn prop_integer_sqrt_is_floor(n in 0_u64..u64::MAX) {
            let r = integer_sqrt(n);
            prop_assert!(r * r <= n);
            let next = r + 1;
            prop_assert!(next.checked_mul(next).is_none_or(|sq| sq > n));
        }

        #[test]
        fn prop_prime_factors_multiply_back(n in 1_u64..5_000_000) {
            let factors: Vec<u64> = PrimeFactors::new(n).unwrap().collect();
            prop_assert!(factors.iter().all(|&f| is_prime(f)));
            prop_assert!(factors.windows(2).all(|w| w[0] <= w[1]));
            prop_assert_eq!(factors.iter().product::<u64>(), n);
        }

        #[test]
        fn prop_largest_prime_factor_divides_value(n in 2_u64..5_000_000) {
            let largest = largest_prime_factor(n).unwrap();
            prop_assert!(is_prime(largest));
            prop_assert_eq!(n % largest, 0);
        }

        #[test]
        fn prop_divisors_are_exactly_the_divisors(n in 1_u64..20_000) {
            let expected: Vec<u64> = (1..=n).filter(|d| n % d == 0).collect();
            prop_assert_eq!(divisors(n), Ok(expected));
        }
    }
}
