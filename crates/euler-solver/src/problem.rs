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

//! The problem catalog.

use euler_core::{NumberError, divisible_sum, even_fibonacci_sum, largest_prime_factor};

/// The integer type every problem is solved in.
pub type Answer = i64;

/// A failure while solving one problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("problem {problem} failed: {source}")]
pub struct SolveError {
    /// The number of the problem that failed.
    pub problem: u32,
    /// The underlying numeric error.
    #[source]
    pub source: NumberError,
}

/// A problem instance together with its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    /// Sum of all multiples of 3 or 5 below `limit`.
    MultiplesOfThreeOrFive { limit: Answer },
    /// Sum of the even-valued Fibonacci terms below `limit`.
    EvenFibonacciNumbers { limit: Answer },
    /// Largest prime factor of `value`.
    LargestPrimeFactor { value: Answer },
}

impl Problem {
    /// The Project Euler problem number.
    #[inline]
    pub fn number(&self) -> u32 {
        match self {
            Problem::MultiplesOfThreeOrFive { .. } => 1,
            Problem::EvenFibonacciNumbers { .. } => 2,
            Problem::LargestPrimeFactor { .. } => 3,
        }
    }

    /// The Project Euler problem title.
    #[inline]
    pub fn title(&self) -> &'static str {
        match self {
            Problem::MultiplesOfThreeOrFive { .. } => "Multiples of 3 or 5",
            Problem::EvenFibonacciNumbers { .. } => "Even Fibonacci Numbers",
            Problem::LargestPrimeFactor { .. } => "Largest Prime Factor",
        }
    }

    /// Computes the answer.
    pub fn solve(&self) -> Result<Answer, SolveError> {
        tracing::debug!(problem = %self, "solving");

        let result = match *self {
            Problem::MultiplesOfThreeOrFive { limit } => divisible_sum(limit),
            Problem::EvenFibonacciNumbers { limit } => even_fibonacci_sum(limit),
            Problem::LargestPrimeFactor { value } => largest_prime_factor(value),
        };

        let answer = result.map_err(|source| SolveError {
            problem: self.number(),
            source,
        })?;
        tracing::debug!(problem = self.number(), answer, "solved");
        Ok(answer)
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Problem::MultiplesOfThreeOrFive { limit }
            | Problem::EvenFibonacciNumbers { limit } => {
                write!(f, "Problem {} ({}, limit {})", self.number(), self.title(), limit)
            }
            Problem::LargestPrimeFactor { value } => {
                write!(f, "Problem {} ({}, value {})", self.number(), self.title(), value)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_follow_catalog_order() {
        assert_eq!(Problem::MultiplesOfThreeOrFive { limit: 10 }.number(), 1);
        assert_eq!(Problem::EvenFibonacciNumbers { limit: 10 }.number(), 2);
        assert_eq!(Problem::LargestPrimeFactor { value: 10 }.number(), 3);
    }

    #[test]
    fn test_solve_worked_examples() {
        assert_eq!(Problem::MultiplesOfThreeOrFive { limit: 10 }.solve(), Ok(23));
        assert_eq!(Problem::EvenFibonacciNumbers { limit: 100 }.solve(), Ok(44));
        assert_eq!(Problem::LargestPrimeFactor { value: 13_195 }.solve(), Ok(29));
    }

    #[test]
    fn test_solve_reports_failing_problem() {
        let err = Problem::LargestPrimeFactor { value: 0 }.solve().unwrap_err();
        assert_eq!(err.problem, 3);
        assert_eq!(err.source, NumberError::NonPositive);
        assert_eq!(err.to_string(), "problem 3 failed: expected a positive value");
    }

    #[test]
    fn test_even_fibonacci_below_type_max_fits() {
        // (F(92) - 1) / 2
        assert_eq!(
            Problem::EvenFibonacciNumbers { limit: Answer::MAX }.solve(),
            Ok(3_770_056_902_373_173_214)
        );
    }

    #[test]
    fn test_display_names_problem_and_input() {
        assert_eq!(
            Problem::LargestPrimeFactor { value: 13_195 }.to_string(),
            "Problem 3 (Largest Prime Factor, value 13195)"
        );
        assert_eq!(
            Problem::MultiplesOfThreeOrFive { limit: 1000 }.to_string(),
            "Problem 1 (Multiples of 3 or 5, limit 1000)"
        );
    }
}
