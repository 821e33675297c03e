//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// flagenv - Inspect how environment variables bind to flags.
#[derive(Debug, Parser)]
#[command(name = "flagenv")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the generated environment variable name of each flag
    Names(NamesArgs),

    /// Bind declared flags to the environment and report where each value came from
    Resolve(ResolveArgs),

    /// Print the environment, sorted, as KEY=VALUE lines
    Env(EnvArgs),
}

/// Where environment variables are read from.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EnvSourceArgs {
    /// Read variables from a .env file (repeatable, later files win)
    #[arg(long, value_name = "FILE")]
    pub env_file: Vec<PathBuf>,

    /// Ignore the process environment
    #[arg(long)]
    pub no_process_env: bool,
}

/// Arguments for the `names` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct NamesArgs {
    /// Prefix segment (repeatable, joined with '_')
    #[arg(short, long = "prefix", value_name = "SEGMENT")]
    pub prefix: Vec<String>,

    /// Flag names
    #[arg(required = true)]
    pub flags: Vec<String>,
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ResolveArgs {
    /// Flag declaration file
    #[arg(short, long, env = "FLAGENV_CONFIG", value_name = "FILE")]
    pub config: PathBuf,

    #[command(flatten)]
    pub source: EnvSourceArgs,

    /// Set a flag explicitly, as if given on the command line
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, String)>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `env` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct EnvArgs {
    #[command(flatten)]
    pub source: EnvSourceArgs,
}

fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))
}
