//! Process-wide default binder.
//!
//! A single [`EnvSet`] over a [`FlagSet`] named `command-line`, created on
//! first use. Every function takes one lock for its whole duration, so the
//! default binder may be used from any thread.
//!
//! # Example
//!
//! ```
//! let port = flagenv::with_flags(|fs| fs.var("example.port", 8080u16, "listen port"));
//! flagenv::var(port, ["", "port"]);
//!
//! let env = [("PORT", "9090")].into_iter().collect();
//! flagenv::parse_env(&env).unwrap();
//!
//! assert!(flagenv::parsed());
//! assert_eq!(flagenv::with_flags(|fs| fs.get(&port).copied()), Some(9090));
//! ```

use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use crate::binder::{EnvFlag, EnvName, EnvSet, Options};
use crate::env::Env;
use crate::error::Result;
use crate::flags::{FlagId, FlagSet};

struct CommandLine {
    set: EnvSet<FlagSet>,
    prefix_set: bool,
}

static COMMAND_LINE: LazyLock<Mutex<CommandLine>> = LazyLock::new(|| {
    Mutex::new(CommandLine {
        set: EnvSet::new(FlagSet::new("command-line"), Options::new()),
        prefix_set: false,
    })
});

// A usage panic while holding the lock must not wedge every later caller.
fn lock() -> MutexGuard<'static, CommandLine> {
    COMMAND_LINE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Run `f` with the default flag set, e.g. to register or read flags.
pub fn with_flags<T>(f: impl FnOnce(&mut FlagSet) -> T) -> T {
    f(lock().set.registry_mut())
}

/// [`EnvSet::var`] on the default binder.
pub fn var<I>(flag: impl Into<FlagId>, names: I)
where
    I: IntoIterator,
    I::Item: Into<EnvName>,
{
    lock().set.var(flag, names);
}

/// [`EnvSet::flag`] on the default binder.
pub fn flag<I>(flag_name: &str, names: I)
where
    I: IntoIterator,
    I::Item: Into<EnvName>,
{
    lock().set.flag(flag_name, names);
}

/// [`EnvSet::parse`] on the default binder.
pub fn parse() -> Result<()> {
    lock().set.parse()
}

/// [`EnvSet::parse_env`] on the default binder.
pub fn parse_env(env: &Env) -> Result<()> {
    lock().set.parse_env(env)
}

/// [`EnvSet::parsed`] on the default binder.
pub fn parsed() -> bool {
    lock().set.parsed()
}

/// [`EnvSet::visit_all`] on the default binder.
///
/// The lock is held while `visit` runs; calling back into this module from
/// `visit` deadlocks.
pub fn visit_all<F>(visit: F)
where
    F: FnMut(EnvFlag<'_>),
{
    lock().set.visit_all(visit);
}

/// Set the prefix used by the default binder.
///
/// # Panics
///
/// Panics if a prefix was already set or the default binder was parsed.
pub fn command_line_prefix<S: AsRef<str>>(segments: &[S]) {
    let mut guard = lock();
    if guard.prefix_set {
        panic!("prefix already set: {:?}", guard.set.prefix());
    }
    if guard.set.parsed() {
        panic!("default command-line envset already parsed");
    }
    guard.set.set_prefix(segments);
    guard.prefix_set = true;
}
