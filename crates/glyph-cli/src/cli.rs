//! CLI argument definitions for the pictograph dataset tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "glyph",
    version,
    about = "Pictograph dataset engine - load, query and validate pictograph tables",
    long_about = "Load pictograph source tables into a queryable index.\n\n\
                  Converts raw rows into typed records, classifies them and\n\
                  reports rows that could not be indexed."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// TOML file listing sources and channel prefixes.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the letter catalogue grouped by letter type.
    Letters,

    /// Build the index and print the load report.
    Load(SourceArgs),

    /// List the start positions present in the dataset.
    Positions(SourceArgs),

    /// List the records that can follow a position.
    Continuations {
        /// Position the next record must start from (e.g. alpha5).
        #[arg(value_name = "POSITION")]
        position: String,

        #[command(flatten)]
        sources: SourceArgs,
    },

    /// Convert records from a JSON file (one object or an array).
    Convert {
        #[arg(value_name = "JSON")]
        input: PathBuf,

        /// Print typed records and failures as JSON.
        #[arg(long = "json")]
        json: bool,

        #[command(flatten)]
        prefixes: PrefixArgs,
    },

    /// Check every row and the built index; exits with 1 when invalid.
    Validate {
        #[command(flatten)]
        sources: SourceArgs,

        /// Print the reports as JSON.
        #[arg(long = "json")]
        json: bool,
    },
}

#[derive(Args, Clone, Default)]
pub struct SourceArgs {
    /// CSV files or directories of CSV files, loaded in order.
    #[arg(value_name = "SOURCES")]
    pub sources: Vec<PathBuf>,

    #[command(flatten)]
    pub prefixes: PrefixArgs,
}

#[derive(Args, Clone, Default)]
pub struct PrefixArgs {
    /// Column prefix of the primary channel (default: blue).
    #[arg(long = "primary-prefix", value_name = "PREFIX")]
    pub primary_prefix: Option<String>,

    /// Column prefix of the secondary channel (default: red).
    #[arg(long = "secondary-prefix", value_name = "PREFIX")]
    pub secondary_prefix: Option<String>,
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn continuations_takes_position_then_sources() {
        let cli = Cli::try_parse_from([
            "glyph",
            "continuations",
            "alpha5",
            "box.csv",
            "diamond.csv",
            "--primary-prefix",
            "left",
        ])
        .expect("parse");
        let Command::Continuations { position, sources } = cli.command else {
            panic!("expected continuations");
        };
        assert_eq!(position, "alpha5");
        assert_eq!(sources.sources.len(), 2);
        assert_eq!(sources.prefixes.primary_prefix.as_deref(), Some("left"));
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["glyph", "validate", "--config", "glyph.toml", "--json"])
            .expect("parse");
        assert_eq!(cli.config, Some(PathBuf::from("glyph.toml")));
        assert!(matches!(cli.command, Command::Validate { json: true, .. }));
    }
}
