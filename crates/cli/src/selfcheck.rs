// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! specdoc's own behavior, described with specdoc.
//!
//! Run by `specdoc self-check`.

use crate::clock::Picoseconds;
use crate::document::{Grouping, document};
use crate::outcome::{Checkable, Outcome, Record, pending};
use crate::quantify::quantify;
use crate::summary::{success_summary, timing_summary};
use crate::verify::{describe, it};

/// Every group of the self-check suite, in order.
pub fn suite() -> Vec<Record> {
    [quantify_group(), checkable_group(), document_group(), summary_group()].concat()
}

fn quantify_group() -> Vec<Record> {
    describe(
        "quantify",
        [
            it("uses the singular for one", || quantify(1u32, "x") == "1 x"),
            it("writes one as \"1\" for floats", || quantify(1.0f64, "x") == "1 x"),
            it("pluralizes zero", || quantify(0i32, "x") == "0 xs"),
            it("pluralizes two", || quantify(2i32, "x") == "2 xs"),
            it("pluralizes negative one", || quantify(-1i32, "x") == "-1 xs"),
        ],
    )
}

fn checkable_group() -> Vec<Record> {
    describe(
        "checkable",
        [
            it("maps true to success", || true.into_outcome() == Outcome::Success),
            it("maps false to fail", || false.into_outcome() == Outcome::Fail),
            it("passes outcomes through", || {
                pending("r").into_outcome() == Outcome::Pending("r".to_string())
            }),
        ],
    )
}

fn document_group() -> Vec<Record> {
    let split = [
        Record::new("L1", "A", Outcome::Success),
        Record::new("L1", "B", Outcome::Success),
        Record::new("L2", "C", Outcome::Success),
        Record::new("L1", "D", Outcome::Success),
    ];
    describe(
        "document",
        [
            it("keeps separated labels in separate groups", || {
                document(&split, Grouping::Adjacent).iter().filter(|l| l.is_empty()).count() == 3
            }),
            it("merges labels when grouping by label", || {
                document(&split, Grouping::Label).iter().filter(|l| l.is_empty()).count() == 2
            }),
            it("renders the group label before its entries", || {
                let records = describe("abs", [it("neg→pos", || (-1i32).abs() == 1)]);
                document(&records, Grouping::Adjacent) == ["", "abs", " - neg→pos"]
            }),
            it("indents pending reasons", || {
                let records = [Record::new("g", "r", pending("why"))];
                document(&records, Grouping::Adjacent)[2] == " - r\n     # why"
            }),
        ],
    )
}

fn summary_group() -> Vec<Record> {
    describe(
        "summary",
        [
            it("counts nothing for no records", || {
                success_summary(&[]) == "0 examples, 0 failures"
            }),
            it("counts only failures as failures", || {
                let records = [
                    Record::new("g", "a", Outcome::Success),
                    Record::new("g", "b", Outcome::Fail),
                    Record::new("g", "c", pending("x")),
                ];
                success_summary(&records) == "3 examples, 1 failure"
            }),
            it("reports elapsed seconds", || {
                timing_summary(Picoseconds(2_000_000_000_000)) == "Finished in 2.0 seconds"
            }),
        ],
    )
}

#[cfg(test)]
#[path = "selfcheck_tests.rs"]
mod tests;
