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

//! # Euler Solver
//!
//! Runs the fixed Project Euler problem set on top of `euler_core` and turns
//! the answers into a console report.
//!
//! ## Modules
//!
//! - `problem`: The `Problem` catalog and `SolveError`, tying each problem
//!   number to the core routine that answers it.
//! - `problem_set`: `ProblemSet`, the run configuration holding the bound of
//!   every problem, with `Default` set to the canonical instances.
//! - `report`: `Report`, one `ReportLine` per solved problem, rendered as
//!   `Problem <n>: <answer>`.
//!
//! ## Usage
//!
//! ```rust
//! use euler_solver::{problem_set::ProblemSet, report::Report};
//!
//! let report = Report::solve(&ProblemSet::default()).unwrap();
//! assert_eq!(
//!     report.to_string(),
//!     "Problem 1: 233168\nProblem 2: 4613732\nProblem 3: 6857\n"
//! );
//! ```

pub mod problem;
pub mod problem_set;
pub mod report;
