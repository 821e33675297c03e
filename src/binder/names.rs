//! Environment variable naming.
//!
//! Every flag has an auto-generated environment name: the prefix segments
//! joined with `_`, directly followed by the flag name, with `.` and `-`
//! replaced by `_` and everything upper-cased. Explicit names given to
//! `EnvSet::var` go through the same normalisation.

use std::fmt;

/// String form of [`EnvName::Auto`].
///
/// No environment variable can have an empty name, so this token never
/// collides with a real one.
pub const AUTO_NAME: &str = "";

/// One candidate environment variable name for a flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EnvName {
    /// Substituted with the flag's auto-generated name at resolution time.
    Auto,
    /// An explicit name. Normalised when bound to a flag.
    Named(String),
}

impl EnvName {
    /// Build a candidate from user input, normalising it.
    ///
    /// [`AUTO_NAME`] maps to [`EnvName::Auto`].
    pub fn new(name: &str) -> Self {
        if name == AUTO_NAME {
            EnvName::Auto
        } else {
            EnvName::Named(normalize(name))
        }
    }

    /// The concrete name, given the flag's auto-generated one.
    pub fn resolve(&self, auto: &str) -> String {
        match self {
            EnvName::Auto => auto.to_string(),
            EnvName::Named(name) => name.clone(),
        }
    }

    /// This candidate with [`normalize`] applied to an explicit name.
    pub(crate) fn normalized(self) -> Self {
        match self {
            EnvName::Named(name) => EnvName::Named(normalize(&name)),
            auto => auto,
        }
    }

    /// Reason this candidate can never name an environment variable.
    pub(crate) fn invalid_reason(&self) -> Option<&'static str> {
        match self {
            EnvName::Auto => None,
            EnvName::Named(name) if name.is_empty() => {
                Some("empty name, use EnvName::Auto for the generated name")
            }
            EnvName::Named(name) if name.contains('=') => Some("name contains '='"),
            EnvName::Named(name) if name.contains('\0') => Some("name contains a NUL byte"),
            EnvName::Named(_) => None,
        }
    }
}

impl From<&str> for EnvName {
    fn from(name: &str) -> Self {
        EnvName::new(name)
    }
}

impl From<String> for EnvName {
    fn from(name: String) -> Self {
        EnvName::new(&name)
    }
}

impl From<&String> for EnvName {
    fn from(name: &String) -> Self {
        EnvName::new(name)
    }
}

impl fmt::Display for EnvName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvName::Auto => f.write_str("<auto>"),
            EnvName::Named(name) => f.write_str(name),
        }
    }
}

/// Normalise a name: `.` and `-` become `_`, then upper-case.
pub fn normalize(name: &str) -> String {
    name.replace(['.', '-'], "_").to_uppercase()
}

/// Join prefix segments the way the binder stores them.
pub fn join_prefix<S: AsRef<str>>(segments: &[S]) -> String {
    let parts: Vec<&str> = segments.iter().map(AsRef::as_ref).collect();
    normalize(&parts.join("_"))
}

/// The auto-generated environment name for a flag.
///
/// # Example
///
/// ```
/// use flagenv::binder::env_name;
///
/// assert_eq!(env_name(&["pre", "fixes"], "testtest"), "PRE_FIXESTESTTEST");
/// assert_eq!(env_name::<&str>(&[], "test.2"), "TEST_2");
/// assert_eq!(env_name(&["my"], "log-level"), "MYLOG_LEVEL");
/// ```
pub fn env_name<S: AsRef<str>>(prefix: &[S], flag_name: &str) -> String {
    auto_name(&join_prefix(prefix), flag_name)
}

/// The auto-generated name given an already joined prefix.
pub(crate) fn auto_name(prefix: &str, flag_name: &str) -> String {
    normalize(&format!("{}{}", prefix, flag_name))
}
