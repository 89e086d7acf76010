// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timing and pass/fail summary lines.

use serde::Serialize;

use crate::clock::Picoseconds;
use crate::outcome::Record;
use crate::quantify::quantify;

/// Counts derived from a set of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub examples: usize,
    pub failures: usize,
    pub pending: usize,
}

impl Tally {
    pub fn from_records(records: &[Record]) -> Self {
        records.iter().fold(Tally::default(), |mut tally, record| {
            tally.examples += 1;
            if record.outcome().is_failure() {
                tally.failures += 1;
            }
            if record.outcome().is_pending() {
                tally.pending += 1;
            }
            tally
        })
    }

    /// True when no record failed. Pending records do not count against a run.
    pub fn passed(&self) -> bool {
        self.failures == 0
    }
}

/// "Finished in 2.0 seconds".
pub fn timing_summary(elapsed: Picoseconds) -> String {
    // An exact zero renders like the untimed report ("0 seconds").
    if elapsed == Picoseconds::ZERO {
        return format!("Finished in {}", quantify(0u8, "second"));
    }
    format!("Finished in {}", quantify(elapsed.as_secs_f64(), "second"))
}

/// "3 examples, 1 failures".
pub fn success_summary(records: &[Record]) -> String {
    Tally::from_records(records).to_string()
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", quantify(self.examples, "example"), quantify(self.failures, "failure"))
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
