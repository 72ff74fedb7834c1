use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "symbolmap")]
#[command(about = "Symbolic interpretation of codebase structure", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    /// -v: Show stage progress
    /// -vv: Show per-stage counts
    /// -vvv: Show all trace output
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interpret one or more structural extracts
    Analyze {
        /// Structural extract JSON files
        #[arg(required = true)]
        extracts: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .symbolmap.toml)
        #[arg(short, long, env = "SYMBOLMAP_CONFIG")]
        config: Option<PathBuf>,
    },

    /// Initialize a symbolmap configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// List the archetypes and what they stand for
    Archetypes,
}
