//! CLI argument definitions for the SOC configuration wizard.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "soc-wizard",
    version,
    about = "SOC configuration wizard - collect, validate and export build configurations",
    long_about = "Collect an embedded system (SOC) build configuration step by step.\n\n\
                  Answers are saved to the state directory between runs, each step is\n\
                  validated before it can be completed, and the whole configuration can\n\
                  be exported to and imported from a portable JSON snapshot."
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

    /// Config file (default: platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding saved progress (overrides the config file).
    #[arg(long = "state-dir", value_name = "DIR", global = true)]
    pub state_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the wizard steps.
    Steps,

    /// Show completion progress and the next step to work on.
    Status,

    /// Set one answer.
    ///
    /// List sections take comma-separated values; contact details use
    /// `contact.<field>` (for example `contact.email`). An empty value clears
    /// the answer.
    Set(SetArgs),

    /// Validate a step and mark it completed.
    Complete(CompleteArgs),

    /// Validate a step without completing it.
    Validate(StepArgs),

    /// Export the configuration to a snapshot file.
    Export(PathArgs),

    /// Replace the configuration with a snapshot file.
    Import(PathArgs),

    /// Clear all answers and saved progress.
    Reset,

    /// Build a submission from a finished configuration.
    Submit(SubmitArgs),
}

#[derive(Parser)]
pub struct SetArgs {
    /// Section key (e.g. `title`, `corePlatforms`, `contact.email`).
    #[arg(value_name = "FIELD")]
    pub field: String,

    /// New value.
    #[arg(value_name = "VALUE", default_value = "")]
    pub value: String,
}

#[derive(Parser)]
pub struct StepArgs {
    /// Step id (e.g. `project-overview`).
    #[arg(value_name = "STEP")]
    pub step: String,
}

#[derive(Parser)]
pub struct CompleteArgs {
    /// Step id (e.g. `project-overview`).
    #[arg(value_name = "STEP")]
    pub step: String,

    /// Complete the step even if validation fails.
    #[arg(long = "force")]
    pub force: bool,
}

#[derive(Parser)]
pub struct PathArgs {
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

#[derive(Parser)]
pub struct SubmitArgs {
    /// Write the submission JSON here instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
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
