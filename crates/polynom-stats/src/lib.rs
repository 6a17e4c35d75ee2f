//! # polynom-stats
//!
//! Comparison and copy counters for sorting experiments.
//!
//! [`OpStats`] is a plain additive accumulator: sorting code increments it
//! as it compares and copies elements, per-trial counters are summed with
//! `+`/`+=`, and totals are divided by the trial count with `/`/`/=` to
//! report averages.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign};

/// Comparison and copy counts accumulated by a single run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpStats {
    /// Number of element comparisons performed.
    pub comparisons: u64,
    /// Number of element copies performed.
    pub copies: u64,
}

impl OpStats {
    /// Creates a zeroed counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one comparison.
    pub fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    /// Counts one copy.
    pub fn record_copy(&mut self) {
        self.copies += 1;
    }

    /// Adds another counter's totals into this one.
    pub fn accumulate(&mut self, other: Self) {
        self.comparisons += other.comparisons;
        self.copies += other.copies;
    }

    /// Divides both counters by `trials`, for averaging repeated runs.
    ///
    /// # Panics
    ///
    /// Panics if `trials` is zero.
    pub fn scale_down(&mut self, trials: u64) {
        self.comparisons /= trials;
        self.copies /= trials;
    }
}

impl AddAssign for OpStats {
    fn add_assign(&mut self, other: Self) {
        self.accumulate(other);
    }
}

impl Add for OpStats {
    type Output = Self;

    fn add(mut self, other: Self) -> Self::Output {
        self += other;
        self
    }
}

impl DivAssign<u64> for OpStats {
    fn div_assign(&mut self, trials: u64) {
        self.scale_down(trials);
    }
}

impl Div<u64> for OpStats {
    type Output = Self;

    fn div(mut self, trials: u64) -> Self::Output {
        self /= trials;
        self
    }
}

impl fmt::Display for OpStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "comparisons: {}, copies: {}",
            self.comparisons, self.copies
        )
    }
}
