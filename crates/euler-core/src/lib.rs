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

//! # Euler Core
//!
//! Integer predicates and sequence generators behind the first Project Euler
//! problems. Every routine is generic over the primitive integer types through
//! the `EulerNumeric` bound, uses checked arithmetic where a running value can
//! grow, and reports failures through a single `NumberError`.
//!
//! ## Modules
//!
//! - `num`: Associated-constant traits (`Two`, `Three`, `Five`) and the
//!   `EulerNumeric` bound alias collecting everything the routines require.
//! - `divisibility`: Multiple tests and sums of the multiples below a limit
//!   (`divisible_sum`, `multiples_sum`, `is_multiple_of_any`).
//! - `fibonacci`: The `Fibonacci` term iterator, term lookup (`fibonacci`) and
//!   parity-filtered sums below a limit (`even_fibonacci_sum`).
//! - `prime`: Trial-division primality (`is_prime`), the `PrimeFactors`
//!   iterator, largest prime factor (full and square-root bounded variants)
//!   and divisor enumeration.
//! - `error`: The `NumberError` type shared by all fallible routines.
//!
//! ## Example
//!
//! ```rust
//! use euler_core::{divisible_sum, even_fibonacci_sum, largest_prime_factor};
//!
//! assert_eq!(divisible_sum(1000_i64), Ok(233_168));
//! assert_eq!(even_fibonacci_sum(4_000_000_i64), Ok(4_613_732));
//! assert_eq!(largest_prime_factor(600_851_475_143_i64), Ok(6857));
//! ```

pub mod divisibility;
pub mod error;
pub mod fibonacci;
pub mod num;
pub mod prime;

pub use divisibility::{divisible_sum, is_multiple_of_any, multiples_sum};
pub use error::NumberError;
pub use fibonacci::{Fibonacci, Parity, even_fibonacci_sum, fibonacci, fibonacci_sum_by_parity};
pub use num::EulerNumeric;
pub use prime::{
    PrimeFactors, divisors, integer_sqrt, is_prime, largest_prime_factor,
    largest_prime_factor_within_sqrt,
};
