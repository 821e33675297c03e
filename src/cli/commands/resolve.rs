//! Resolve command implementation.
//!
//! The `flagenv resolve` command loads a declaration file, binds the
//! declared flags to the environment and reports, for every flag, its
//! value and where that value came from.

use std::io::Write;

use serde::Serialize;

use crate::binder::EnvFlag;
use crate::cli::args::ResolveArgs;
use crate::config::load_declarations;
use crate::error::Result;
use crate::flags::FlagRegistry;
use crate::ui::Theme;

use super::dispatcher::{Command, CommandResult};
use super::load_env;

/// The resolve command implementation.
pub struct ResolveCommand {
    args: ResolveArgs,
    theme: Theme,
}

#[derive(Serialize)]
struct Report<'a> {
    prefix: &'a str,
    flags: Vec<EnvFlag<'a>>,
    excluded: Vec<String>,
    error: Option<String>,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(args: ResolveArgs, theme: Theme) -> Self {
        Self { args, theme }
    }

    fn source(&self, flag: &EnvFlag<'_>) -> String {
        let theme = &self.theme;
        match (flag.name, flag.err) {
            (Some(name), Some(err)) => theme
                .error
                .apply_to(format!("rejected {}: {}", name, err))
                .to_string(),
            (Some(name), None) if flag.applied => {
                theme.success.apply_to(format!("env {}", name)).to_string()
            }
            (Some(name), None) => theme
                .dim
                .apply_to(format!("matched {} (not applied)", name))
                .to_string(),
            (None, _) if flag.is_set => theme.info.apply_to("explicit").to_string(),
            (None, _) => theme.dim.apply_to("default").to_string(),
        }
    }

    fn write_text(&self, out: &mut dyn Write, report: &Report<'_>) -> Result<()> {
        let title = if report.prefix.is_empty() {
            "Flags".to_string()
        } else {
            format!("Flags (prefix {})", report.prefix)
        };
        writeln!(out, "{}", self.theme.format_header(&title))?;

        for flag in &report.flags {
            writeln!(
                out,
                "  {} = {}  {}  {}",
                self.theme.key.apply_to(&flag.flag.name),
                flag.flag.value,
                self.source(flag),
                self.theme
                    .dim
                    .apply_to(format!("[{}]", flag.all_names.join(", "))),
            )?;
        }
        for name in &report.excluded {
            writeln!(
                out,
                "  {}  {}",
                self.theme.key.apply_to(name),
                self.theme.dim.apply_to("excluded")
            )?;
        }
        if let Some(error) = &report.error {
            writeln!(out, "{}", self.theme.format_error(error))?;
        }
        Ok(())
    }
}

impl Command for ResolveCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let declarations = load_declarations(&self.args.config)?;
        let mut set = declarations.build()?;
        for (name, value) in &self.args.set {
            set.registry_mut().set(name, value)?;
        }

        let env = load_env(&self.args.source)?;
        let outcome = set.parse_env(&env);
        if let Err(err) = &outcome {
            tracing::debug!("Environment binding failed: {}", err);
        }

        let excluded = set
            .registry()
            .flags()
            .into_iter()
            .map(|f| f.name)
            .filter(|name| set.is_excluded(name))
            .collect();
        let mut flags = Vec::new();
        set.visit_all(|flag| flags.push(flag));
        let report = Report {
            prefix: set.prefix(),
            flags,
            excluded,
            error: outcome.as_ref().err().map(ToString::to_string),
        };

        if self.args.json {
            serde_json::to_writer_pretty(&mut *out, &report).map_err(anyhow::Error::from)?;
            writeln!(out)?;
        } else {
            self.write_text(out, &report)?;
        }

        Ok(if outcome.is_ok() {
            CommandResult::success()
        } else {
            CommandResult::failure(1)
        })
    }
}
