// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `tripdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tripdag",
    version,
    about = "Validate 'must go after' constraints and plan the shortest trip order.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the trip file (TOML).
    ///
    /// Default: `Trip.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Trip.toml", global = true)]
    pub trip: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TRIPDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    /// Parse + validate the file and print the request, but don't check or
    /// plan anything.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// What to do with the trip. Defaults to `plan`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Only validate the selections, including the precedence cycle check.
    Check,
    /// Validate, then compute the shortest visiting order.
    Plan,
}

impl CliArgs {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Plan)
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
