// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report assembly and output.
//!
//! A report is the rendered document followed by a timing line and a
//! pass/fail summary, each preceded by a blank line.

mod json;
mod text;

use termcolor::WriteColor;

use crate::cli::OutputFormat;
use crate::clock::{Clock, MonotonicClock, Picoseconds};
use crate::color::{ColorMode, no_color_env, resolve_color};
use crate::document::Grouping;
use crate::error::{Error, Result};
use crate::outcome::Record;
use crate::summary::Tally;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Elapsed time shown by reports rendered without reading a clock.
pub const PURE_ELAPSED: Picoseconds = Picoseconds::ZERO;

/// Trait for formatting records into various output formats.
pub trait ReportFormatter {
    /// Format records into the target format.
    fn format(&self, records: &[Record], elapsed: Picoseconds) -> Result<String>;

    /// Write formatted output to `writer`, with color where the writer supports it.
    fn format_to(
        &self,
        writer: &mut dyn WriteColor,
        records: &[Record],
        elapsed: Picoseconds,
    ) -> Result<()>;
}

fn formatter(format: OutputFormat, grouping: Grouping) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(grouping)),
        OutputFormat::Json => Box::new(JsonFormatter::new(grouping)),
    }
}

/// Format a report, returning the output string.
pub fn format_report(
    format: OutputFormat,
    records: &[Record],
    elapsed: Picoseconds,
    grouping: Grouping,
) -> Result<String> {
    formatter(format, grouping).format(records, elapsed)
}

/// Format a report directly to a writer.
pub fn format_report_to(
    writer: &mut dyn WriteColor,
    format: OutputFormat,
    records: &[Record],
    elapsed: Picoseconds,
    grouping: Grouping,
) -> Result<()> {
    formatter(format, grouping).format_to(writer, records, elapsed)
}

/// Render a complete report without reading a clock.
///
/// The timing line always reads "Finished in 0 seconds".
pub fn render(records: &[Record]) -> Vec<String> {
    Reporter::default().render(records)
}

/// Writes reports for a suite of records.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reporter {
    grouping: Grouping,
}

impl Reporter {
    pub fn new(grouping: Grouping) -> Self {
        Self { grouping }
    }

    pub fn grouping(&self) -> Grouping {
        self.grouping
    }

    /// Report lines for `records`, timed at [`PURE_ELAPSED`].
    pub fn render(&self, records: &[Record]) -> Vec<String> {
        TextFormatter::new(self.grouping).lines(records, PURE_ELAPSED)
    }

    /// Resolve `suite` and write its report to `sink`, timing the run.
    ///
    /// The measured span starts before `suite` runs and ends after the
    /// document lines are written, so it covers both.
    pub fn run<W, C, F>(&self, sink: &mut W, clock: &C, suite: F) -> Result<Tally>
    where
        W: WriteColor + ?Sized,
        C: Clock + ?Sized,
        F: FnOnce() -> Vec<Record>,
    {
        self.try_run(sink, clock, || Ok::<_, Error>(suite()))
    }

    /// Like [`Reporter::run`] for a suite that can fail.
    ///
    /// A suite error is returned before anything is written to `sink`.
    pub fn try_run<W, C, F, E>(
        &self,
        sink: &mut W,
        clock: &C,
        suite: F,
    ) -> std::result::Result<Tally, E>
    where
        W: WriteColor + ?Sized,
        C: Clock + ?Sized,
        F: FnOnce() -> std::result::Result<Vec<Record>, E>,
        E: From<Error>,
    {
        let formatter = TextFormatter::new(self.grouping);
        let start = clock.now();
        let records = suite()?;
        formatter.write_document(sink, &records)?;
        let end = clock.now();
        let elapsed = end.since(start);
        formatter.write_summary(sink, &records, elapsed)?;
        std::io::Write::flush(sink).map_err(Error::from)?;

        let tally = Tally::from_records(&records);
        tracing::debug!(
            "reported {} example(s), {} failure(s) in {:.6}s",
            tally.examples,
            tally.failures,
            elapsed.as_secs_f64()
        );
        Ok(tally)
    }
}

/// Run `suite` and report it on stdout with the monotonic clock.
///
/// ```
/// use specdoc::{describe, it, run_to_stdout};
///
/// let tally = run_to_stdout(|| describe("abs", [it("neg→pos", || (-1i32).abs() == 1)]))?;
/// assert!(tally.passed());
/// # Ok::<(), specdoc::Error>(())
/// ```
pub fn run_to_stdout<F>(suite: F) -> Result<Tally>
where
    F: FnOnce() -> Vec<Record>,
{
    let choice = resolve_color(ColorMode::Auto, no_color_env());
    let mut stdout = termcolor::StandardStream::stdout(choice);
    Reporter::default().run(&mut stdout, &MonotonicClock::new(), suite)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
