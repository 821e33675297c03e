//! Env command implementation.
//!
//! The `flagenv env` command prints the merged environment as sorted
//! `KEY=VALUE` lines, in the form a spawned process would receive it.

use std::io::Write;

use crate::cli::args::EnvArgs;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};
use super::load_env;

/// The env command implementation.
pub struct EnvCommand {
    args: EnvArgs,
}

impl EnvCommand {
    /// Create a new env command.
    pub fn new(args: EnvArgs) -> Self {
        Self { args }
    }
}

impl Command for EnvCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let env = load_env(&self.args.source)?;
        for entry in env.to_list() {
            writeln!(out, "{}", entry)?;
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::EnvSourceArgs;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn prints_files_sorted_and_merged() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("base.env");
        let local = temp.path().join("local.env");
        fs::write(&base, "G=H\nA=B\n").unwrap();
        fs::write(&local, "A=override\nC=D\n").unwrap();

        let cmd = EnvCommand::new(EnvArgs {
            source: EnvSourceArgs {
                env_file: vec![base, local],
                no_process_env: true,
            },
        });
        let mut out = Vec::new();
        cmd.execute(&mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "A=override\nC=D\nG=H\n");
    }

    #[test]
    fn missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let cmd = EnvCommand::new(EnvArgs {
            source: EnvSourceArgs {
                env_file: vec![temp.path().join("missing.env")],
                no_process_env: true,
            },
        });
        let err = cmd.execute(&mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("missing.env"));
    }
}
