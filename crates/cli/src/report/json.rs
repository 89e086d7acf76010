// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use std::io::Write;

use chrono::Utc;
use serde_json::json;
use termcolor::WriteColor;

use crate::clock::Picoseconds;
use crate::document::{Grouping, group_records};
use crate::error::Result;
use crate::outcome::Record;
use crate::summary::Tally;

use super::ReportFormatter;

/// JSON format report formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    grouping: Grouping,
}

impl JsonFormatter {
    pub fn new(grouping: Grouping) -> Self {
        Self { grouping }
    }

    fn value(&self, records: &[Record], elapsed: Picoseconds) -> serde_json::Value {
        let tally = Tally::from_records(records);
        let groups: Vec<_> = group_records(records, self.grouping)
            .into_iter()
            .map(|group| {
                let requirements: Vec<_> = group
                    .records
                    .iter()
                    .map(|r| json!({ "requirement": r.requirement(), "outcome": r.outcome() }))
                    .collect();
                json!({ "label": group.label, "requirements": requirements })
            })
            .collect();

        json!({
            "generated": Utc::now().to_rfc3339(),
            "elapsed_seconds": elapsed.as_secs_f64(),
            "summary": {
                "examples": tally.examples,
                "failures": tally.failures,
                "pending": tally.pending,
                "passed": tally.passed(),
            },
            "groups": groups,
        })
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, records: &[Record], elapsed: Picoseconds) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.value(records, elapsed))?)
    }

    fn format_to(
        &self,
        writer: &mut dyn WriteColor,
        records: &[Record],
        elapsed: Picoseconds,
    ) -> Result<()> {
        serde_json::to_writer_pretty(&mut *writer, &self.value(records, elapsed))?;
        writeln!(writer)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
