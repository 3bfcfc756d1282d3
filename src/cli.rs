// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `assetpipe`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "assetpipe",
    version,
    about = "Compile, concatenate and minify front-end assets, optionally on file changes.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the pipeline config file (TOML).
    ///
    /// Default: `Assetpipe.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Assetpipe.toml")]
    pub config: String,

    /// Keep running and re-run the task chain whenever watched files change.
    ///
    /// Requires a `[watch]` section in the config.
    #[arg(long)]
    pub watch: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `ASSETPIPE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the resolved pipeline, but don't run any task.
    #[arg(long)]
    pub dry_run: bool,
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
