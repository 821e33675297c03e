//! flagenv - Bind environment variables to command-line flags.
//!
//! Programs declare their configuration once, as flags, and flagenv lets
//! every flag be supplied through an environment variable as well. Values
//! set explicitly (e.g. on the command line) always win over the
//! environment.
//!
//! # Modules
//!
//! - [`binder`] - The [`EnvSet`] binder, name generation and introspection
//! - [`config`] - Flag declaration files used by the CLI
//! - [`env`] - Environment snapshots and .env files
//! - [`error`] - Error types and result aliases
//! - [`flags`] - The flag registry abstraction and [`FlagSet`](flags::FlagSet)
//! - [`cli`] - Command-line interface of the `flagenv` binary
//! - [`ui`] - Terminal styling for the binary
//!
//! The crate root also exposes a process-wide default binder
//! ([`var`], [`flag`], [`parse`], [`parse_env`], [`parsed`], [`visit_all`],
//! [`command_line_prefix`], [`with_flags`]).
//!
//! # Example
//!
//! ```
//! use flagenv::{Env, EnvSet, Options};
//! use flagenv::flags::FlagSet;
//!
//! let mut fs = FlagSet::new("app");
//! let level = fs.var("log-level", String::from("info"), "log verbosity");
//! let workers = fs.var("workers", 4u32, "worker threads");
//! fs.set("workers", "8").unwrap(); // e.g. from the command line
//!
//! let mut es = EnvSet::new(&mut fs, Options::new().prefix(["app_"]));
//! let env = Env::parse(["APP_LOG_LEVEL=debug", "APP_WORKERS=2"]).unwrap();
//! es.parse_env(&env).unwrap();
//!
//! assert_eq!(es.applied("log-level"), Some("APP_LOG_LEVEL"));
//! assert_eq!(es.applied("workers"), None);
//! assert_eq!(fs.get(&level).map(String::as_str), Some("debug"));
//! assert_eq!(fs.get(&workers), Some(&8));
//! ```

pub mod binder;
pub mod cli;
pub mod config;
pub mod env;
pub mod error;
pub mod flags;
pub mod ui;
mod global;

pub use binder::{EnvFlag, EnvName, EnvSet, Options};
pub use env::Env;
pub use error::{Error, FlagError, Result};
pub use global::{
    command_line_prefix, flag, parse, parse_env, parsed, var, visit_all, with_flags,
};
