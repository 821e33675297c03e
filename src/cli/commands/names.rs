//! Names command implementation.
//!
//! The `flagenv names` command prints the generated environment variable
//! name for each flag, one `flag<TAB>NAME` line per flag.

use std::io::Write;

use crate::binder::env_name;
use crate::cli::args::NamesArgs;
use crate::error::Result;

use super::dispatcher::{Command, CommandResult};

/// The names command implementation.
pub struct NamesCommand {
    args: NamesArgs,
}

impl NamesCommand {
    /// Create a new names command.
    pub fn new(args: NamesArgs) -> Self {
        Self { args }
    }
}

impl Command for NamesCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        for flag in &self.args.flags {
            writeln!(out, "{}\t{}", flag, env_name(&self.args.prefix, flag))?;
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(prefix: &[&str], flags: &[&str]) -> String {
        let cmd = NamesCommand::new(NamesArgs {
            prefix: prefix.iter().map(|s| s.to_string()).collect(),
            flags: flags.iter().map(|s| s.to_string()).collect(),
        });
        let mut out = Vec::new();
        cmd.execute(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_generated_names() {
        assert_eq!(run(&[], &["test-1", "test.2"]), "test-1\tTEST_1\ntest.2\tTEST_2\n");
    }

    #[test]
    fn applies_prefix() {
        assert_eq!(run(&["pre", "fixes"], &["testtest"]), "testtest\tPRE_FIXESTESTTEST\n");
    }
}
