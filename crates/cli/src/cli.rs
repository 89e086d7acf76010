// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Deserialize;
use termcolor::ColorChoice;

use crate::color::{ColorMode, no_color_env, resolve_color};
use crate::config::ReportConfig;
use crate::document::Grouping;

/// Render behavior-specification results as readable reports
#[derive(Parser)]
#[command(name = "specdoc")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "SPECDOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render a report from a JSON file of records
    Report(ReportArgs),
    /// Run specdoc's own behavior suite
    SelfCheck(OutputArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct ReportArgs {
    /// JSON array of records (reads stdin when omitted or "-")
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

impl ReportArgs {
    /// Input file, or None for stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}

/// Output flags shared by the report-producing commands.
#[derive(clap::Args, Default)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long)]
    pub output: Option<OutputFormat>,

    /// How records are grouped under labels
    #[arg(long, value_name = "MODE")]
    pub grouping: Option<Grouping>,

    /// Color output mode
    #[arg(long, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,
}

/// Output settings after applying flags over config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub grouping: Grouping,
    pub color: ColorChoice,
}

impl OutputArgs {
    /// Flags win over config values, which win over defaults.
    pub fn resolve(&self, config: &ReportConfig) -> OutputSettings {
        let mode = self.color.unwrap_or(config.color);
        OutputSettings {
            format: self.output.unwrap_or(config.format),
            grouping: self.grouping.unwrap_or(config.grouping),
            color: resolve_color(mode, self.no_color || no_color_env()),
        }
    }
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
