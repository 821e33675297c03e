//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::io::Write;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::Theme;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command, writing its report to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    theme: Theme,
}

impl CommandDispatcher {
    /// Create a new dispatcher printing with `theme`.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, out: &mut dyn Write) -> Result<CommandResult> {
        match &cli.command {
            Commands::Names(args) => {
                let cmd = super::names::NamesCommand::new(args.clone());
                cmd.execute(out)
            }
            Commands::Resolve(args) => {
                let cmd = super::resolve::ResolveCommand::new(args.clone(), self.theme.clone());
                cmd.execute(out)
            }
            Commands::Env(args) => {
                let cmd = super::env::EnvCommand::new(args.clone());
                cmd.execute(out)
            }
        }
    }
}
