//! Flag registry abstraction.
//!
//! The binder never parses command lines itself. It talks to a
//! [`FlagRegistry`], which can list registered flags, report which of them
//! were set explicitly, and assign a value from a string.
//!
//! - [`FlagId`] and [`Flag`] are the opaque handles a registry hands out
//! - [`FlagInfo`] is a snapshot of one registered flag
//! - [`ValueError`] is the structured conversion failure
//! - [`FlagSet`] is a minimal in-crate registry implementation

pub mod set;

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::{Serialize, Serializer};
use thiserror::Error;

pub use set::FlagSet;

/// Opaque handle identifying one flag in one registry.
///
/// Handles carry the identity of the registry that issued them, so a handle
/// from another registry never resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlagId {
    registry: u64,
    index: usize,
}

impl FlagId {
    /// Build a handle. Only registries should call this.
    pub fn new(registry: u64, index: usize) -> Self {
        Self { registry, index }
    }

    /// Identity of the issuing registry.
    pub fn registry(&self) -> u64 {
        self.registry
    }

    /// Position of the flag inside its registry.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Typed handle returned when registering a flag of type `T`.
pub struct Flag<T> {
    id: FlagId,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Flag<T> {
    pub(crate) fn new(id: FlagId) -> Self {
        Self {
            id,
            _marker: PhantomData,
        }
    }

    /// The untyped handle.
    pub fn id(&self) -> FlagId {
        self.id
    }
}

impl<T> Clone for Flag<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Flag<T> {}

impl<T> fmt::Debug for Flag<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Flag").field(&self.id).finish()
    }
}

impl<T> From<Flag<T>> for FlagId {
    fn from(flag: Flag<T>) -> Self {
        flag.id
    }
}

impl<T> From<&Flag<T>> for FlagId {
    fn from(flag: &Flag<T>) -> Self {
        flag.id
    }
}

/// Snapshot of a registered flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagInfo {
    #[serde(skip)]
    pub id: FlagId,
    pub name: String,
    pub usage: String,
    /// Current value rendered as a string.
    pub value: String,
    /// Default value rendered as a string.
    pub default: String,
}

/// A flag rejected a string value.
#[derive(Debug, Clone, Error)]
#[error("invalid value {value:?} for {kind}: {cause}")]
pub struct ValueError {
    /// Name of the type the value was converted to, e.g. `i64`.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
    #[source]
    pub cause: Arc<dyn std::error::Error + Send + Sync>,
}

impl ValueError {
    /// Wrap a conversion failure for type `T`.
    pub fn new<T, E>(value: impl Into<String>, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            kind: short_type_name::<T>(),
            value: value.into(),
            cause: Arc::new(cause),
        }
    }
}

impl Serialize for ValueError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ValueError", 3)?;
        state.serialize_field("kind", self.kind)?;
        state.serialize_field("value", &self.value)?;
        state.serialize_field("cause", &self.cause.to_string())?;
        state.end()
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    // Generic parameters would be cut in half by the path split.
    if full.contains('<') {
        return full;
    }
    full.rsplit("::").next().unwrap_or(full)
}

/// Capabilities the binder needs from a flag registry.
///
/// # Example
///
/// ```
/// use flagenv::flags::{FlagRegistry, FlagSet};
///
/// let mut fs = FlagSet::new("example");
/// let port = fs.var("port", 8080u16, "listen port");
///
/// fs.set_value(port.id(), "9090").unwrap();
/// assert_eq!(fs.get(&port), Some(&9090));
/// assert!(fs.explicitly_set().is_empty());
/// ```
pub trait FlagRegistry {
    /// All registered flags, in lexicographic order of name.
    fn flags(&self) -> Vec<FlagInfo>;

    /// Flags that were set explicitly, e.g. from the command line.
    fn explicitly_set(&self) -> Vec<FlagInfo>;

    /// Assign a value from a string without marking the flag explicitly set.
    fn set_value(&mut self, id: FlagId, value: &str) -> Result<(), ValueError>;

    /// Resolve a handle.
    fn lookup(&self, id: FlagId) -> Option<FlagInfo> {
        self.flags().into_iter().find(|f| f.id == id)
    }

    /// Resolve a flag by its exact registered name.
    fn lookup_name(&self, name: &str) -> Option<FlagInfo> {
        self.flags().into_iter().find(|f| f.name == name)
    }
}

impl<R: FlagRegistry + ?Sized> FlagRegistry for &mut R {
    fn flags(&self) -> Vec<FlagInfo> {
        (**self).flags()
    }

    fn explicitly_set(&self) -> Vec<FlagInfo> {
        (**self).explicitly_set()
    }

    fn set_value(&mut self, id: FlagId, value: &str) -> Result<(), ValueError> {
        (**self).set_value(id, value)
    }

    fn lookup(&self, id: FlagId) -> Option<FlagInfo> {
        (**self).lookup(id)
    }

    fn lookup_name(&self, name: &str) -> Option<FlagInfo> {
        (**self).lookup_name(name)
    }
}
