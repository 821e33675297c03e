//! A minimal flag registry.
//!
//! [`FlagSet`] stores typed flag values and tracks which flags were
//! assigned explicitly. It does not parse command lines; callers feed it
//! values through [`FlagSet::set`].

use std::any::Any;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use super::{Flag, FlagId, FlagInfo, FlagRegistry, ValueError};
use crate::error::{Error, Result};

static NEXT_REGISTRY: AtomicU64 = AtomicU64::new(1);

/// A value that can be assigned from a string.
trait FlagValue: Send {
    fn set(&mut self, raw: &str) -> std::result::Result<(), ValueError>;
    fn render(&self) -> String;
    fn as_any(&self) -> &dyn Any;
}

struct Typed<T>(T);

impl<T> FlagValue for Typed<T>
where
    T: FromStr + Display + Send + 'static,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    fn set(&mut self, raw: &str) -> std::result::Result<(), ValueError> {
        self.0 = raw
            .parse::<T>()
            .map_err(|e| ValueError::new::<T, _>(raw, e))?;
        Ok(())
    }

    fn render(&self) -> String {
        self.0.to_string()
    }

    fn as_any(&self) -> &dyn Any {
        &self.0
    }
}

struct Entry {
    name: String,
    usage: String,
    default: String,
    value: Box<dyn FlagValue>,
}

/// A named collection of typed flags.
///
/// # Example
///
/// ```
/// use flagenv::flags::FlagSet;
///
/// let mut fs = FlagSet::new("server");
/// let host = fs.var("host", String::from("localhost"), "bind address");
/// let port = fs.var("port", 8080u16, "listen port");
///
/// fs.set("port", "9000").unwrap();
///
/// assert_eq!(fs.get(&host).map(String::as_str), Some("localhost"));
/// assert_eq!(fs.get(&port), Some(&9000));
/// assert!(fs.set("port", "many").is_err());
/// ```
pub struct FlagSet {
    id: u64,
    name: String,
    entries: Vec<Entry>,
    by_name: BTreeMap<String, usize>,
    actual: BTreeSet<usize>,
}

impl FlagSet {
    /// Create an empty flag set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: NEXT_REGISTRY.fetch_add(1, Ordering::Relaxed),
            name: name.into(),
            entries: Vec::new(),
            by_name: BTreeMap::new(),
            actual: BTreeSet::new(),
        }
    }

    /// Name given at construction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a flag and return its handle.
    ///
    /// # Panics
    ///
    /// Panics if a flag with the same name is already registered.
    pub fn var<T>(&mut self, name: impl Into<String>, default: T, usage: impl Into<String>) -> Flag<T>
    where
        T: FromStr + Display + Send + 'static,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            panic!("{} flag redefined: {}", self.name, name);
        }
        let index = self.entries.len();
        self.entries.push(Entry {
            name: name.clone(),
            usage: usage.into(),
            default: default.to_string(),
            value: Box::new(Typed(default)),
        });
        self.by_name.insert(name, index);
        Flag::new(FlagId::new(self.id, index))
    }

    /// Assign a flag explicitly, as a command-line parser would.
    ///
    /// Explicitly set flags are never overridden by environment variables.
    pub fn set(&mut self, name: &str, raw: &str) -> Result<()> {
        let index = *self.by_name.get(name).ok_or_else(|| Error::UnknownFlag {
            name: name.to_string(),
        })?;
        self.entries[index].value.set(raw)?;
        self.actual.insert(index);
        Ok(())
    }

    /// Read a flag's current value.
    ///
    /// Returns `None` for handles issued by another flag set.
    pub fn get<T: 'static>(&self, flag: &Flag<T>) -> Option<&T> {
        self.entry(flag.id())?.value.as_any().downcast_ref::<T>()
    }

    /// Number of registered flags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no flags are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, id: FlagId) -> Option<&Entry> {
        if id.registry() != self.id {
            return None;
        }
        self.entries.get(id.index())
    }

    fn info(&self, index: usize) -> FlagInfo {
        let entry = &self.entries[index];
        FlagInfo {
            id: FlagId::new(self.id, index),
            name: entry.name.clone(),
            usage: entry.usage.clone(),
            value: entry.value.render(),
            default: entry.default.clone(),
        }
    }
}

impl FlagRegistry for FlagSet {
    fn flags(&self) -> Vec<FlagInfo> {
        self.by_name.values().map(|&i| self.info(i)).collect()
    }

    fn explicitly_set(&self) -> Vec<FlagInfo> {
        let mut set: Vec<_> = self.actual.iter().map(|&i| self.info(i)).collect();
        set.sort_by(|a, b| a.name.cmp(&b.name));
        set
    }

    fn set_value(&mut self, id: FlagId, value: &str) -> std::result::Result<(), ValueError> {
        match self.entries.get_mut(id.index()) {
            Some(entry) if id.registry() == self.id => entry.value.set(value),
            _ => panic!("{:?} is not a member of the {} flag set", id, self.name),
        }
    }

    fn lookup(&self, id: FlagId) -> Option<FlagInfo> {
        self.entry(id)?;
        Some(self.info(id.index()))
    }

    fn lookup_name(&self, name: &str) -> Option<FlagInfo> {
        self.by_name.get(name).map(|&i| self.info(i))
    }
}
