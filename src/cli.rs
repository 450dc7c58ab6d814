use std::path::PathBuf;

use clap::{ArgGroup, Parser, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "obs-log-analyzer")]
#[command(author, version, about = "Diagnose common problems in OBS Studio log files")]
#[command(long_about = "Scans an OBS log for known misconfigurations and reports them \
    grouped as Critical, Warning and Info.\n\n\
    Exit codes:\n  \
    0 - Analysis completed (including \"NO LOG\")\n  \
    2 - Configuration, fetch or I/O error")]
#[command(group(ArgGroup::new("input").required(true).args(["url", "file"])))]
pub struct Cli {
    /// GitHub Gist link to an OBS log
    #[arg(short, long)]
    pub url: Option<String>,

    /// Local OBS log file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the fetch progress spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,
}

impl Cli {
    /// Tracing filter directive for the `-v` count.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
