// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_report;
mod cmd_self_check;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use specdoc::cli::{Cli, Command};
use specdoc::config::{self, Config};
use specdoc::discovery;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("specdoc: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    match &cli.command {
        Command::Report(args) => cmd_report::run(cli, args),
        Command::SelfCheck(args) => cmd_self_check::run(cli, args),
        Command::Completions(args) => {
            let mut stdout = std::io::stdout().lock();
            clap_complete::generate(args.shell, &mut Cli::command(), "specdoc", &mut stdout);
            stdout.flush()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Log to stderr, filtered by `SPECDOC_LOG` (or `debug` with `--verbose`).
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("SPECDOC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the config named on the command line, or discover one from cwd.
pub(crate) fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    if let Some(ref path) = cli.config {
        return config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()));
    }

    let cwd = std::env::current_dir()?;
    match discovery::find_config(&cwd) {
        Some(path) => config::load(&path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => {
            tracing::debug!("no config found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Exit code for a finished report: 1 when any requirement failed.
pub(crate) fn exit_code(tally: &specdoc::Tally) -> ExitCode {
    if tally.passed() { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
