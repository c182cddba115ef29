//! Command line interface definition using clap.
//!
//! This module defines the [`Cli`] structure and its subcommands.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::loader::InputFormat;
use crate::report::{OutputFormat, Section};

/// Default input file looked up when `--file` is omitted.
pub const DEFAULT_INPUT: &str = "steps.csv";

/// Compute a build order for construction steps from their dependencies.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the dependency file to read.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_INPUT)]
    pub file: PathBuf,

    /// Change to this directory before doing anything.
    #[arg(short = 'C', long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Input format; inferred from the file extension when omitted.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<InputFormat>,

    /// Output format for the printed sections.
    #[arg(short, long, value_enum, value_name = "FORMAT", default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Enable verbose logging output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Optional subcommand to execute; defaults to `report` when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Parse command-line arguments, providing `report` as the default command.
    #[must_use]
    pub fn parse_with_default() -> Self {
        Self::parse().with_default_command()
    }

    /// Parse the provided arguments, applying the default command when needed.
    ///
    /// # Errors
    ///
    /// Returns the clap error when the arguments are invalid.
    pub fn try_parse_from_with_default<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(args).map(Self::with_default_command)
    }

    /// Apply the default command if none was specified.
    #[must_use]
    pub fn with_default_command(mut self) -> Self {
        if self.command.is_none() {
            self.command = Some(Commands::Report);
        }
        self
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_INPUT),
            directory: None,
            format: None,
            output: OutputFormat::Text,
            verbose: false,
            command: None,
        }
        .with_default_command()
    }
}

/// Available top-level commands.
#[derive(Debug, Subcommand, PartialEq, Eq, Clone, Copy, Default)]
pub enum Commands {
    /// Print every section: steps, dependencies, graph and build order `default`.
    #[default]
    Report,

    /// List the distinct steps.
    Steps,

    /// List the dependency pairs as read from the input.
    Pairs,

    /// Show each step with the steps it waits on.
    Graph,

    /// Print one valid build order, failing if the dependencies form a cycle.
    Order,
}

impl Commands {
    /// Report sections printed by this command.
    #[must_use]
    pub const fn sections(self) -> &'static [Section] {
        match self {
            Self::Report => &[
                Section::Steps,
                Section::Dependencies,
                Section::Graph,
                Section::Build,
            ],
            Self::Steps => &[Section::Steps],
            Self::Pairs => &[Section::Dependencies],
            Self::Graph => &[Section::Graph],
            Self::Order => &[Section::Build],
        }
    }
}
