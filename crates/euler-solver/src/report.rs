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

//! # Console Report
//!
//! One line per solved problem, in problem order:
//!
//! ```raw
//! Problem 1: 233168
//! Problem 2: 4613732
//! Problem 3: 6857
//! ```

use crate::{
    problem::{Answer, SolveError},
    problem_set::ProblemSet,
};

/// The answer to one problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLine {
    pub problem: u32,
    pub answer: Answer,
}

impl std::fmt::Display for ReportLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Problem {}: {}", self.problem, self.answer)
    }
}

/// The answers to a whole problem set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    lines: Vec<ReportLine>,
}

impl Report {
    /// Solves every problem of `set` in order.
    ///
    /// # Errors
    ///
    /// Returns the error of the first problem that fails; later problems are
    /// not attempted.
    pub fn solve(set: &ProblemSet) -> Result<Self, SolveError> {
        let lines = set
            .problems()
            .iter()
            .map(|problem| {
                problem.solve().map(|answer| ReportLine {
                    problem: problem.number(),
                    answer,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(problems = lines.len(), "problem set solved");
        Ok(Self { lines })
    }

    #[inline]
    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    /// The answer reported for `problem`, if it was part of the set.
    pub fn answer(&self, problem: u32) -> Option<Answer> {
        self.lines
            .iter()
            .find(|line| line.problem == problem)
            .map(|line| line.answer)
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
