//! .env file loading.
//!
//! Reads environment files in the common `KEY=value` format into an
//! [`Env`], so a binder can be fed from a file instead of the process.

use std::path::Path;

use super::Env;
use crate::error::{Error, Result};

impl Env {
    /// Parse the contents of a .env file.
    ///
    /// # Supported Formats
    ///
    /// - Simple: `KEY=value`
    /// - Exported: `export KEY=value`
    /// - Quoted: `KEY="value with spaces"` or `KEY='single quoted'`
    /// - Empty: `KEY=`
    /// - Comments: `# This is a comment`
    ///
    /// Any other non-blank line is a format error naming that line.
    ///
    /// # Example
    ///
    /// ```
    /// use flagenv::Env;
    ///
    /// let env = Env::parse_dotenv(r#"
    /// ## server
    /// export PORT=8080
    /// GREETING="hello world"
    /// "#).unwrap();
    ///
    /// assert_eq!(env.get("PORT"), Some("8080"));
    /// assert_eq!(env.get("GREETING"), Some("hello world"));
    /// ```
    pub fn parse_dotenv(content: &str) -> Result<Self> {
        let mut env = Env::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = parse_line(line).ok_or_else(|| Error::EnvFormat {
                entry: line.to_string(),
            })?;
            env.insert(key, value);
        }

        Ok(env)
    }

    /// Load and parse a .env file.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let env = Self::parse_dotenv(&content)?;
        tracing::debug!("Loaded {} variables from {}", env.len(), path.display());
        Ok(env)
    }
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), unquote(value.trim()).to_string()))
}

fn unquote(value: &str) -> &str {
    let quoted = value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')));
    if quoted {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
