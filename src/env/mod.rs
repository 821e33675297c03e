//! Environment variables as a key/value map.
//!
//! The standard library exposes the environment as a list of pairs.
//! [`Env`] keeps it as a sorted map instead, which is what the binder
//! searches when resolving flag values.

pub mod file;

use std::collections::{BTreeMap, HashMap};

use crate::error::{Error, Result};

/// A snapshot of environment variables.
///
/// # Example
///
/// ```
/// use flagenv::Env;
///
/// let env = Env::parse(["A=3", "A=B", "C=D"]).unwrap();
/// assert_eq!(env.get("A"), Some("B"));
/// assert_eq!(env.to_list(), vec!["A=B", "C=D"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: BTreeMap<String, String>,
}

impl Env {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the process environment.
    ///
    /// Entries whose key or value is not valid UTF-8 are skipped.
    pub fn from_os() -> Self {
        let mut env = Self::new();
        for (key, value) in std::env::vars_os() {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => env.insert(key, value),
                (key, _) => {
                    tracing::debug!("Skipping non UTF-8 environment entry {:?}", key);
                }
            }
        }
        env
    }

    /// Parse `KEY=VALUE` entries, splitting each on the first `=`.
    ///
    /// Later duplicates win. An entry without `=` fails the whole batch.
    pub fn parse<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut env = Self::new();
        env.extend_from(entries)?;
        Ok(env)
    }

    /// Parse `KEY=VALUE` entries into this environment.
    ///
    /// Nothing is applied if any entry is malformed.
    pub fn extend_from<I, S>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Vec::new();
        for entry in entries {
            let entry = entry.as_ref();
            let (key, value) = entry.split_once('=').ok_or_else(|| Error::EnvFormat {
                entry: entry.to_string(),
            })?;
            parsed.push((key.to_string(), value.to_string()));
        }
        self.vars.extend(parsed);
        Ok(())
    }

    /// Render as `KEY=VALUE` strings sorted lexicographically.
    ///
    /// Sorting is by the full entry, not the key, so `A!=1` comes before
    /// `A=2`. Suitable for handing to a spawned process.
    pub fn to_list(&self) -> Vec<String> {
        let mut list: Vec<String> = self
            .vars
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        list.sort();
        list
    }

    /// Overlay every entry of `other`, overwriting on collision.
    pub fn merge(&mut self, other: &Env) {
        for (key, value) in &other.vars {
            self.vars.insert(key.clone(), value.clone());
        }
    }

    /// Write every entry into the process environment.
    ///
    /// Stops at the first entry the platform cannot hold. Entries written
    /// before it are left in place.
    pub fn apply_to_process(&self) -> Result<()> {
        for (key, value) in &self.vars {
            validate_process_var(key, value)?;
            tracing::trace!("Setting {} in process environment", key);
            std::env::set_var(key, value);
        }
        Ok(())
    }

    /// Look up a variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Add or replace a variable.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Check if a variable is present, even with an empty value.
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether there are no variables.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate over variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn validate_process_var(key: &str, value: &str) -> Result<()> {
    let reason = if key.is_empty() {
        "key is empty"
    } else if key.contains('=') {
        "key contains '='"
    } else if key.contains('\0') {
        "key contains a NUL byte"
    } else if value.contains('\0') {
        "value contains a NUL byte"
    } else {
        return Ok(());
    };
    Err(Error::InvalidEnvVar {
        key: key.to_string(),
        reason: reason.to_string(),
    })
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Env {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for Env {
    fn from(vars: HashMap<String, String>) -> Self {
        vars.into_iter().collect()
    }
}

impl From<BTreeMap<String, String>> for Env {
    fn from(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }
}
