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

//! # Problem Set
//!
//! The run configuration of the solver: one input per problem. There is no
//! file or command-line surface; `ProblemSet::default()` holds the canonical
//! Project Euler instances and the `with_*` methods exist for tests and
//! embedding.
//!
//! ```rust
//! use euler_solver::problem_set::ProblemSet;
//!
//! let set = ProblemSet::default().with_multiples_limit(10);
//! assert_eq!(set.multiples_limit(), 10);
//! assert_eq!(set.fibonacci_limit(), 4_000_000);
//! ```

use crate::problem::{Answer, Problem};

/// The canonical bound of problem 1.
pub const DEFAULT_MULTIPLES_LIMIT: Answer = 1000;
/// The canonical bound of problem 2.
pub const DEFAULT_FIBONACCI_LIMIT: Answer = 4_000_000;
/// The canonical input of problem 3.
pub const DEFAULT_FACTORIZATION_VALUE: Answer = 600_851_475_143;

/// The inputs of the three problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemSet {
    multiples_limit: Answer,
    fibonacci_limit: Answer,
    factorization_value: Answer,
}

impl Default for ProblemSet {
    fn default() -> Self {
        Self {
            multiples_limit: DEFAULT_MULTIPLES_LIMIT,
            fibonacci_limit: DEFAULT_FIBONACCI_LIMIT,
            factorization_value: DEFAULT_FACTORIZATION_VALUE,
        }
    }
}

impl ProblemSet {
    #[inline]
    pub fn with_multiples_limit(mut self, limit: Answer) -> Self {
        self.multiples_limit = limit;
        self
    }

    #[inline]
    pub fn with_fibonacci_limit(mut self, limit: Answer) -> Self {
        self.fibonacci_limit = limit;
        self
    }

    #[inline]
    pub fn with_factorization_value(mut self, value: Answer) -> Self {
        self.factorization_value = value;
        self
    }

    #[inline]
    pub fn multiples_limit(&self) -> Answer {
        self.multiples_limit
    }

    #[inline]
    pub fn fibonacci_limit(&self) -> Answer {
        self.fibonacci_limit
    }

    #[inline]
    pub fn factorization_value(&self) -> Answer {
        self.factorization_value
    }

    /// The problems in report order.
    pub fn problems(&self) -> [Problem; 3] {
        [
            Problem::MultiplesOfThreeOrFive {
                limit: self.multiples_limit,
            },
            Problem::EvenFibonacciNumbers {
                limit: self.fibonacci_limit,
            },
            Problem::LargestPrimeFactor {
                value: self.factorization_value,
            },
        ]
    }
}
