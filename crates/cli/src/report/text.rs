// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::io::Write;

use termcolor::{ColorSpec, WriteColor};

use crate::clock::Picoseconds;
use crate::color::scheme;
use crate::document::{DocLine, Grouping, document, document_lines};
use crate::error::Result;
use crate::outcome::{Outcome, Record};
use crate::summary::{Tally, timing_summary};

use super::ReportFormatter;

/// Text format report formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter {
    grouping: Grouping,
}

impl TextFormatter {
    pub fn new(grouping: Grouping) -> Self {
        Self { grouping }
    }

    /// The document followed by the timing and summary lines.
    pub fn lines(&self, records: &[Record], elapsed: Picoseconds) -> Vec<String> {
        let mut lines = document(records, self.grouping);
        lines.push(String::new());
        lines.push(timing_summary(elapsed));
        lines.push(String::new());
        lines.push(Tally::from_records(records).to_string());
        lines
    }

    /// Write the document lines, one line per write.
    pub fn write_document<W: WriteColor + ?Sized>(
        &self,
        writer: &mut W,
        records: &[Record],
    ) -> Result<()> {
        for line in document_lines(records, self.grouping) {
            match line {
                DocLine::Blank => writeln!(writer)?,
                DocLine::Group(_) => write_styled(writer, &scheme::group_label(), &line)?,
                DocLine::Entry(record) => {
                    write_styled(writer, &entry_spec(record.outcome()), &line)?
                }
            }
        }
        Ok(())
    }

    /// Write the timing and summary lines, each after a blank line.
    pub fn write_summary<W: WriteColor + ?Sized>(
        &self,
        writer: &mut W,
        records: &[Record],
        elapsed: Picoseconds,
    ) -> Result<()> {
        let tally = Tally::from_records(records);
        writeln!(writer)?;
        writeln!(writer, "{}", timing_summary(elapsed))?;
        writeln!(writer)?;
        let spec = if tally.passed() { scheme::summary_pass() } else { scheme::summary_fail() };
        write_styled(writer, &spec, &tally)?;
        Ok(())
    }
}

fn entry_spec(outcome: &Outcome) -> ColorSpec {
    match outcome {
        Outcome::Success => scheme::pass(),
        Outcome::Fail => scheme::fail(),
        Outcome::Pending(_) => scheme::pending(),
    }
}

fn write_styled<W: WriteColor + ?Sized>(
    writer: &mut W,
    spec: &ColorSpec,
    text: &dyn std::fmt::Display,
) -> std::io::Result<()> {
    writer.set_color(spec)?;
    write!(writer, "{text}")?;
    writer.reset()?;
    writeln!(writer)
}

impl ReportFormatter for TextFormatter {
    fn format(&self, records: &[Record], elapsed: Picoseconds) -> Result<String> {
        let mut output = self.lines(records, elapsed).join("\n");
        output.push('\n');
        Ok(output)
    }

    fn format_to(
        &self,
        writer: &mut dyn WriteColor,
        records: &[Record],
        elapsed: Picoseconds,
    ) -> Result<()> {
        self.write_document(writer, records)?;
        self.write_summary(writer, records, elapsed)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
