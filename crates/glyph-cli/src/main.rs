//! Pictograph dataset CLI.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use serde::Serialize;
use tracing::level_filters::LevelFilter;

use glyph_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use glyph_cli::commands::{run_convert, run_load, run_validate};
use glyph_cli::logging::{LogConfig, LogFormat, init_logging};
use glyph_cli::summary::{
    print_batch, print_catalogue, print_continuations, print_load_summary, print_positions,
    print_validation,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the selected command. `Ok(false)` means the command completed but
/// found the data invalid.
fn run(cli: &Cli) -> Result<bool> {
    let config = cli.config.as_deref();
    match &cli.command {
        Command::Letters => print_catalogue(),
        Command::Load(args) => print_load_summary(&run_load(config, args)?),
        Command::Positions(args) => print_positions(&run_load(config, args)?),
        Command::Continuations { position, sources } => {
            print_continuations(&run_load(config, sources)?, position);
        }
        Command::Convert {
            input,
            json,
            prefixes,
        } => {
            let batch = run_convert(config, input, prefixes)?;
            if *json {
                print_json(&batch)?;
            } else {
                print_batch(&batch);
            }
        }
        Command::Validate { sources, json } => {
            let outcome = run_validate(config, sources)?;
            if *json {
                print_json(&outcome)?;
            } else {
                print_validation(&outcome);
            }
            return Ok(outcome.is_valid());
        }
    }
    Ok(true)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{text}");
    Ok(())
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
