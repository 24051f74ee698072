//! SOC configuration wizard CLI.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use soc_cli::commands::{
    CommandOutput, run_complete, run_export, run_import, run_reset, run_set, run_status,
    run_steps, run_submit, run_validate,
};
use soc_cli::config::WizardConfig;
use soc_cli::logging::{LogConfig, LogFormat, init_logging};
use soc_persistence::FileStore;
use soc_wizard::WizardStore;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli) {
        Ok(output) => {
            print!("{}", output.text);
            output.exit_code
        }
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<CommandOutput> {
    let config = WizardConfig::load(cli.config.as_deref());
    let state_dir = cli.state_dir.unwrap_or_else(|| config.state_dir());
    let storage = FileStore::open(&state_dir)
        .with_context(|| format!("open state directory {}", state_dir.display()))?;
    let mut store = WizardStore::open(storage, config.autosave);

    let output = match cli.command {
        Command::Steps => run_steps(&store),
        Command::Status => run_status(&store),
        Command::Set(args) => run_set(&mut store, &args.field, &args.value)?,
        Command::Complete(args) => run_complete(&mut store, &args.step, args.force)?,
        Command::Validate(args) => run_validate(&store, &args.step)?,
        Command::Export(args) => run_export(&store, &args.path)?,
        Command::Import(args) => run_import(&mut store, &args.path)?,
        Command::Reset => run_reset(&mut store)?,
        Command::Submit(args) => run_submit(&store, args.output.as_deref())?,
    };

    // Write pending changes before exit
    store.flush().context("save wizard state")?;
    Ok(output)
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
