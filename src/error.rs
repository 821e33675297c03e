//! Error types for flagenv operations.
//!
//! This module defines [`Error`], the error type returned throughout the
//! crate, [`FlagError`] for per-flag conversion failures, and a [`Result`]
//! type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Wiring mistakes (unknown flag handles, parsing the global binder after
//!   its prefix was frozen) panic; they are defects in the calling program
//! - Malformed environment input and flag values are returned as `Error`
//! - Use `anyhow::Error` (via `Error::Other`) for unexpected errors

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::flags::{FlagInfo, ValueError};

/// Core error type for flagenv operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The binder was already parsed. Returned by every parse after the first.
    #[error("the envset is already parsed")]
    AlreadyParsed,

    /// More than one flag rejected its environment value while
    /// continue-on-error was enabled. Per-flag errors are available through
    /// `EnvSet::visit_all`.
    #[error("multiple errors encountered when setting flag values ({count} flags failed)")]
    MultipleFailures { count: usize },

    /// A single flag rejected the value found in the environment.
    #[error(transparent)]
    Flag(Box<FlagError>),

    /// A raw environment entry did not contain a `=` separator.
    #[error("expected format key=value in '{entry}'")]
    EnvFormat { entry: String },

    /// An entry cannot be written to the process environment.
    #[error("cannot set environment variable {key:?}: {reason}")]
    InvalidEnvVar { key: String, reason: String },

    /// No flag with that name is registered.
    #[error("flag provided but not defined: {name}")]
    UnknownFlag { name: String },

    /// A flag rejected a value assigned through the registry.
    #[error(transparent)]
    Value(#[from] ValueError),

    /// Failed to read or decode a declaration file.
    #[error("Failed to load declarations at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<FlagError> for Error {
    fn from(err: FlagError) -> Self {
        Error::Flag(Box::new(err))
    }
}

impl Error {
    /// Returns `true` for [`Error::AlreadyParsed`].
    pub fn is_already_parsed(&self) -> bool {
        matches!(self, Error::AlreadyParsed)
    }
}

/// A flag rejected the value supplied by an environment variable.
#[derive(Debug, Clone, Error, Serialize)]
#[error("failed to set flag {:?} with value {value:?}", .flag.name)]
pub struct FlagError {
    /// The flag that failed.
    pub flag: FlagInfo,
    /// The value which failed to parse.
    pub value: String,
    /// The environment variable the value came from.
    pub name: String,
    /// Every environment variable name associated with the flag.
    pub all_names: Vec<String>,
    /// The conversion error reported by the flag.
    #[source]
    pub err: ValueError,
}

/// Result type alias for flagenv operations.
pub type Result<T> = std::result::Result<T, Error>;
