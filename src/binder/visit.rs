//! Introspection of bound flags.

use serde::Serialize;

use crate::flags::{FlagInfo, ValueError};

/// Describes how one flag relates to the environment.
///
/// Produced by `EnvSet::visit_all`, before or after parsing.
#[derive(Debug, Clone, Serialize)]
pub struct EnvFlag<'a> {
    /// The associated flag.
    pub flag: FlagInfo,
    /// The environment variable the flag's value was taken from. Set when a
    /// variable matched, whether or not the flag accepted the value.
    pub name: Option<&'a str>,
    /// The value of that variable.
    pub value: Option<&'a str>,
    /// True when the flag accepted that value. A variable can match without
    /// being applied when an earlier flag failed and continue-on-error is off.
    pub applied: bool,
    /// Every candidate environment variable name, in search order.
    pub all_names: Vec<String>,
    /// True when the registry reports the flag as explicitly set.
    pub is_set: bool,
    /// The error the flag returned for the environment value.
    pub err: Option<&'a ValueError>,
}

impl EnvFlag<'_> {
    /// Whether an environment variable supplied this flag's value.
    pub fn from_env(&self) -> bool {
        self.applied
    }
}
