//! CLI argument definitions for the dosage schedule compiler.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dosage",
    version,
    about = "Compile structured dosage schedules into medication requests",
    long_about = "Compile structured dosage schedules into medication requests.\n\n\
                  Reads a JSON schedule request (free text, morning/noon/evening/night,\n\
                  clock times, weekdays, intervals, or combined schedules) and prints\n\
                  the MedicationRequest JSON with grouped dosage instructions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compile a schedule request file and print the medication request.
    Compile(CompileArgs),

    /// List the supported schedule schemas.
    Schemas,

    /// List the dose unit codes and their labels.
    Units(UnitsArgs),
}

#[derive(Parser)]
pub struct CompileArgs {
    /// Path to the JSON schedule request.
    #[arg(value_name = "REQUEST")]
    pub request: PathBuf,

    /// Unit table CSV (code,label) replacing the built-in table.
    #[arg(long = "units", value_name = "CSV")]
    pub units: Option<PathBuf>,

    /// Compiler configuration TOML.
    #[arg(long = "config", value_name = "TOML")]
    pub config: Option<PathBuf>,

    /// Also print a short text rendering of each instruction.
    #[arg(long = "text")]
    pub text: bool,
}

#[derive(Parser)]
pub struct UnitsArgs {
    /// Unit table CSV (code,label) replacing the built-in table.
    #[arg(long = "units", value_name = "CSV")]
    pub units: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
