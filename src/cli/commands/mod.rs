//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`].

pub mod dispatcher;
pub mod env;
pub mod names;
pub mod resolve;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use anyhow::Context;

use crate::cli::args::EnvSourceArgs;
use crate::env::Env;
use crate::error::Result;

/// Build the environment described by the source arguments.
///
/// The process environment comes first, then each file in order.
pub(crate) fn load_env(source: &EnvSourceArgs) -> Result<Env> {
    let mut env = if source.no_process_env {
        Env::new()
    } else {
        Env::from_os()
    };
    for path in &source.env_file {
        let file = Env::load_file(path)
            .with_context(|| format!("Failed to read env file {}", path.display()))?;
        env.merge(&file);
    }
    Ok(env)
}
