// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report command implementation.
//!
//! Renders stored records without timing them.

use std::fs::File;
use std::io::{BufReader, Read};
use std::process::ExitCode;

use anyhow::Context;
use termcolor::StandardStream;

use specdoc::cli::{Cli, ReportArgs};
use specdoc::report::{self, PURE_ELAPSED};
use specdoc::{Record, Tally};

/// Run the report command.
pub fn run(cli: &Cli, args: &ReportArgs) -> anyhow::Result<ExitCode> {
    let config = crate::load_config(cli)?;
    let settings = args.output.resolve(&config.report);

    let records = match args.input_path() {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            read_records(BufReader::new(file))
                .with_context(|| format!("failed to read records from {}", path.display()))?
        }
        None => {
            read_records(std::io::stdin().lock()).context("failed to read records from stdin")?
        }
    };
    tracing::debug!("read {} record(s)", records.len());

    let mut stdout = StandardStream::stdout(settings.color);
    report::format_report_to(
        &mut stdout,
        settings.format,
        &records,
        PURE_ELAPSED,
        settings.grouping,
    )?;

    Ok(crate::exit_code(&Tally::from_records(&records)))
}

fn read_records(reader: impl Read) -> specdoc::Result<Vec<Record>> {
    Ok(serde_json::from_reader(reader)?)
}
