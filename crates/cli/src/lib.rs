// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A small behavior-specification library.
//!
//! Requirements are grouped under a label with [`describe`], each checked by a
//! closure that returns a `bool` or an explicit [`Outcome`]. The resulting
//! [`Record`]s render as a document followed by a timing line and a pass/fail
//! summary:
//!
//! ```
//! use specdoc::{describe, it, pending, render};
//!
//! let records = [
//!     describe("abs", [
//!         it("turns negatives positive", || (-1i32).abs() == 1),
//!         it("handles i32::MIN", || pending("decide on overflow")),
//!     ]),
//!     describe("max", [it("picks the larger value", || 3i32.max(7) == 7)]),
//! ]
//! .concat();
//!
//! assert_eq!(render(&records), [
//!     "",
//!     "abs",
//!     " - turns negatives positive",
//!     " - handles i32::MIN\n     # decide on overflow",
//!     "",
//!     "max",
//!     " - picks the larger value",
//!     "",
//!     "Finished in 0 seconds",
//!     "",
//!     "3 examples, 0 failures",
//! ]);
//! ```

pub mod cli;
pub mod clock;
pub mod color;
pub mod config;
pub mod discovery;
pub mod document;
pub mod error;
pub mod outcome;
pub mod quantify;
pub mod report;
pub mod selfcheck;
pub mod summary;
pub mod verify;

#[cfg(test)]
pub mod test_utils;

pub use clock::{Clock, MonotonicClock, Picoseconds};
pub use document::{Grouping, document};
pub use error::{Error, Result};
pub use outcome::{Checkable, Outcome, Record, pending};
pub use quantify::{Quantity, quantify};
pub use report::{PURE_ELAPSED, Reporter, render, run_to_stdout};
pub use summary::{Tally, success_summary, timing_summary};
pub use verify::{Verification, describe, it, try_describe, try_it};
