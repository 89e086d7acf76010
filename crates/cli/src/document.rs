// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering records into a document of display lines.
//!
//! ```text
//!
//! abs
//!  - turns negatives positive
//!  x handles zero
//!  - handles i32::MIN
//!      # decide on overflow
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;

use crate::outcome::{Outcome, Record};

/// How records are partitioned into groups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    /// Runs of consecutive records with the same label. A label that comes
    /// back after a different one starts a new group.
    #[default]
    Adjacent,
    /// One group per distinct label, in order of first appearance.
    Label,
}

/// A group of records sharing a label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'a> {
    pub label: &'a str,
    pub records: Vec<&'a Record>,
}

/// Partition `records` into groups, keeping record order within each group.
pub fn group_records(records: &[Record], grouping: Grouping) -> Vec<Group<'_>> {
    let mut groups: Vec<Group<'_>> = Vec::new();
    match grouping {
        Grouping::Adjacent => {
            for record in records {
                match groups.last_mut() {
                    Some(last) if last.label == record.group() => last.records.push(record),
                    _ => groups.push(Group { label: record.group(), records: vec![record] }),
                }
            }
        }
        Grouping::Label => {
            let mut index: HashMap<&str, usize> = HashMap::new();
            for record in records {
                match index.get(record.group()) {
                    Some(&i) => groups[i].records.push(record),
                    None => {
                        index.insert(record.group(), groups.len());
                        groups.push(Group { label: record.group(), records: vec![record] });
                    }
                }
            }
        }
    }
    groups
}

/// One logical line of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocLine<'a> {
    Blank,
    Group(&'a str),
    /// A requirement. Pending entries span two physical lines.
    Entry(&'a Record),
}

impl fmt::Display for DocLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocLine::Blank => Ok(()),
            DocLine::Group(label) => f.write_str(label),
            DocLine::Entry(record) => match record.outcome() {
                Outcome::Success => write!(f, " - {}", record.requirement()),
                Outcome::Fail => write!(f, " x {}", record.requirement()),
                Outcome::Pending(reason) => {
                    write!(f, " - {}\n     # {}", record.requirement(), reason)
                }
            },
        }
    }
}

/// Lay out `records` as a blank line and a label per group, followed by the
/// group's entries.
pub fn document_lines(records: &[Record], grouping: Grouping) -> Vec<DocLine<'_>> {
    let groups = group_records(records, grouping);
    let mut lines = Vec::with_capacity(records.len() + groups.len() * 2);
    for group in groups {
        lines.push(DocLine::Blank);
        lines.push(DocLine::Group(group.label));
        lines.extend(group.records.into_iter().map(DocLine::Entry));
    }
    lines
}

/// Render `records` as text lines.
pub fn document(records: &[Record], grouping: Grouping) -> Vec<String> {
    document_lines(records, grouping).iter().map(ToString::to_string).collect()
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
