// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Clock readings used to time a report.

use std::time::{Duration, Instant};

use serde::Serialize;

const PICOS_PER_SEC: u128 = 1_000_000_000_000;
const PICOS_PER_NANO: u128 = 1_000;

/// A clock reading or elapsed span, in units of 10^-12 seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Picoseconds(pub u128);

impl Picoseconds {
    pub const ZERO: Picoseconds = Picoseconds(0);

    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / PICOS_PER_SEC as f64
    }

    /// Span between an earlier reading and this one, clamped at zero.
    pub fn since(self, earlier: Picoseconds) -> Picoseconds {
        Picoseconds(self.0.saturating_sub(earlier.0))
    }
}

impl From<Duration> for Picoseconds {
    fn from(duration: Duration) -> Self {
        Picoseconds(duration.as_nanos() * PICOS_PER_NANO)
    }
}

/// Source of timestamps for the timed report.
pub trait Clock {
    fn now(&self) -> Picoseconds;
}

/// Monotonic clock counting from its creation.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Picoseconds {
        self.origin.elapsed().into()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
