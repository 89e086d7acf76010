// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Self-check command implementation.

use std::process::ExitCode;

use termcolor::StandardStream;

use specdoc::cli::{Cli, OutputArgs, OutputFormat};
use specdoc::{Clock, MonotonicClock, Reporter, Tally, report, selfcheck};

/// Run specdoc's own behavior suite and report it.
pub fn run(cli: &Cli, args: &OutputArgs) -> anyhow::Result<ExitCode> {
    let config = crate::load_config(cli)?;
    let settings = args.resolve(&config.report);
    let clock = MonotonicClock::new();
    let mut stdout = StandardStream::stdout(settings.color);

    let tally = match settings.format {
        OutputFormat::Text => {
            Reporter::new(settings.grouping).run(&mut stdout, &clock, selfcheck::suite)?
        }
        OutputFormat::Json => {
            let start = clock.now();
            let records = selfcheck::suite();
            let elapsed = clock.now().since(start);
            report::format_report_to(
                &mut stdout,
                OutputFormat::Json,
                &records,
                elapsed,
                settings.grouping,
            )?;
            Tally::from_records(&records)
        }
    };

    Ok(crate::exit_code(&tally))
}
