//! Binding environment variables to flags.
//!
//! [`EnvSet`] decides, for every flag in a [`FlagRegistry`], which single
//! environment variable supplies its value:
//!
//! - Flags set explicitly in the registry are skipped
//! - Excluded flags are skipped
//! - Candidate names are searched in order and the first non-empty value wins
//! - The winning name is recorded and reported by [`EnvSet::visit_all`]
//!
//! # Example
//!
//! ```
//! use flagenv::{Env, EnvSet, Options};
//! use flagenv::flags::FlagSet;
//!
//! let mut fs = FlagSet::new("example");
//! let s1 = fs.var("test1", String::new(), "");
//! let s2 = fs.var("test2", String::new(), "");
//!
//! let mut es = EnvSet::new(&mut fs, Options::new().prefix(["my_"]));
//! es.var(s2, ["other", ""]);
//!
//! let env: Env = [("MY_TEST1", "v1"), ("MY_TEST2", "v2"), ("OTHER", "v2.other")]
//!     .into_iter()
//!     .collect();
//! es.parse_env(&env).unwrap();
//!
//! assert_eq!(fs.get(&s1).map(String::as_str), Some("v1"));
//! assert_eq!(fs.get(&s2).map(String::as_str), Some("v2.other"));
//! ```

pub mod names;
pub mod visit;

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::env::Env;
use crate::error::{Error, FlagError, Result};
use crate::flags::{FlagId, FlagInfo, FlagRegistry, ValueError};

pub use names::{env_name, normalize, EnvName, AUTO_NAME};
pub use visit::EnvFlag;

/// Binder configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Segments joined with `_` and prepended to generated names.
    pub prefix: Vec<String>,
    /// Attempt every flag even after one rejects its value.
    pub continue_on_error: bool,
}

impl Options {
    /// Default options: no prefix, stop applying values after a failure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix segments.
    pub fn prefix<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prefix = segments.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable continue-on-error.
    pub fn continue_on_error(mut self, enabled: bool) -> Self {
        self.continue_on_error = enabled;
        self
    }
}

#[derive(Debug)]
struct Applied {
    name: String,
    value: String,
    /// The registry accepted the value.
    set: bool,
}

/// Environment variable support for a flag registry.
///
/// The registry may be owned or borrowed (`&mut R` is a registry too).
pub struct EnvSet<R> {
    registry: R,
    prefix: String,
    continue_on_error: bool,

    // All maps are keyed by flag name.
    names: HashMap<String, Vec<EnvName>>,
    exclude: HashSet<String>,
    applied: HashMap<String, Applied>,
    errs: HashMap<String, ValueError>,
    parsed: bool,
}

impl<R: FlagRegistry> EnvSet<R> {
    /// Create a binder for `registry`.
    pub fn new(registry: R, options: Options) -> Self {
        Self {
            registry,
            prefix: names::join_prefix(&options.prefix),
            continue_on_error: options.continue_on_error,
            names: HashMap::new(),
            exclude: HashSet::new(),
            applied: HashMap::new(),
            errs: HashMap::new(),
            parsed: false,
        }
    }

    /// Associate a flag with environment names other than the generated one.
    ///
    /// With no names the flag is excluded from environment parsing. Each
    /// name is normalised; [`AUTO_NAME`] (or [`EnvName::Auto`]) stands for
    /// the generated name.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not belong to this binder's registry, or
    /// if a name can never be an environment variable name.
    pub fn var<I>(&mut self, flag: impl Into<FlagId>, names: I)
    where
        I: IntoIterator,
        I::Item: Into<EnvName>,
    {
        let id = flag.into();
        let info = match self.registry.lookup(id) {
            Some(info) => info,
            None => panic!("{:?} is not a member of the flag registry", id),
        };
        self.bind(info, names);
    }

    /// Like [`EnvSet::var`], resolving the flag by its exact registered name.
    ///
    /// # Panics
    ///
    /// Panics if no flag carries that name.
    pub fn flag<I>(&mut self, flag_name: &str, names: I)
    where
        I: IntoIterator,
        I::Item: Into<EnvName>,
    {
        let info = match self.registry.lookup_name(flag_name) {
            Some(info) => info,
            None => panic!("{} is not a registered flag in the flag registry", flag_name),
        };
        self.bind(info, names);
    }

    /// Exclude a flag from environment parsing.
    pub fn exclude(&mut self, flag: impl Into<FlagId>) {
        self.var(flag, std::iter::empty::<EnvName>());
    }

    fn bind<I>(&mut self, info: FlagInfo, names: I)
    where
        I: IntoIterator,
        I::Item: Into<EnvName>,
    {
        let names: Vec<EnvName> = names
            .into_iter()
            .map(|name| Into::<EnvName>::into(name).normalized())
            .collect();
        if names.is_empty() {
            trace!("Excluding flag {} from environment", info.name);
            self.names.remove(&info.name);
            self.exclude.insert(info.name);
            return;
        }

        for name in &names {
            if let Some(reason) = name.invalid_reason() {
                panic!("invalid environment name {:?} for flag {}: {}", name, info.name, reason);
            }
        }
        self.exclude.remove(&info.name);
        self.names.insert(info.name, names);
    }

    /// Reports whether a parse has been attempted.
    pub fn parsed(&self) -> bool {
        self.parsed
    }

    /// Parse the process environment.
    pub fn parse(&mut self) -> Result<()> {
        if self.parsed {
            return Err(Error::AlreadyParsed);
        }
        self.parse_env(&Env::from_os())
    }

    /// Apply values from `env` to every flag that is neither excluded nor
    /// explicitly set.
    ///
    /// Parsing happens at most once; later calls return
    /// [`Error::AlreadyParsed`] without touching any flag.
    ///
    /// When a flag rejects its value, the returned error is that flag's
    /// [`FlagError`]. Without continue-on-error the remaining flags are still
    /// matched and recorded but their values are not applied. With
    /// continue-on-error every flag is applied, and more than one failure
    /// yields [`Error::MultipleFailures`]; the per-flag errors are then
    /// reported by [`EnvSet::visit_all`].
    pub fn parse_env(&mut self, env: &Env) -> Result<()> {
        if self.parsed {
            return Err(Error::AlreadyParsed);
        }
        self.parsed = true;

        let explicit = self.explicit_names();
        let mut first_err: Option<FlagError> = None;
        let mut failures = 0;

        for flag in self.registry.flags() {
            if self.exclude.contains(&flag.name) {
                continue;
            }
            if explicit.contains(&flag.name) {
                trace!("Flag {} was set explicitly, ignoring environment", flag.name);
                continue;
            }

            let all_names = self.all_names(&flag.name);
            let Some((name, value)) = all_names.iter().find_map(|name| {
                env.get(name)
                    .filter(|value| !value.is_empty())
                    .map(|value| (name.clone(), value.to_string()))
            }) else {
                continue;
            };

            let mut applied = Applied {
                name: name.clone(),
                value: value.clone(),
                set: false,
            };

            if first_err.is_some() && !self.continue_on_error {
                debug!("Not applying {} to flag {} after earlier failure", name, flag.name);
                self.applied.insert(flag.name.clone(), applied);
                continue;
            }

            let outcome = self.registry.set_value(flag.id, &value);
            applied.set = outcome.is_ok();
            self.applied.insert(flag.name.clone(), applied);
            match outcome {
                Ok(()) => debug!("Flag {} set from {}", flag.name, name),
                Err(err) => {
                    warn!("Flag {} rejected value from {}: {}", flag.name, name, err);
                    failures += 1;
                    self.errs.insert(flag.name.clone(), err.clone());
                    if first_err.is_none() {
                        first_err = Some(FlagError {
                            flag,
                            value,
                            name,
                            all_names,
                            err,
                        });
                    }
                }
            }
        }

        if failures > 1 {
            return Err(Error::MultipleFailures { count: failures });
        }
        match first_err {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    /// Visit every flag that is not excluded.
    ///
    /// Read-only; may be called any number of times, before or after parsing.
    pub fn visit_all<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(EnvFlag<'a>),
    {
        let explicit = self.explicit_names();
        for flag in self.registry.flags() {
            if self.exclude.contains(&flag.name) {
                continue;
            }
            let applied = self.applied.get(&flag.name);
            let all_names = self.all_names(&flag.name);
            let is_set = explicit.contains(&flag.name);
            let err = self.errs.get(&flag.name);
            visit(EnvFlag {
                flag,
                name: applied.map(|a| a.name.as_str()),
                value: applied.map(|a| a.value.as_str()),
                applied: applied.is_some_and(|a| a.set),
                all_names,
                is_set,
                err,
            });
        }
    }

    /// Every candidate environment name for a flag, in search order.
    pub fn all_names(&self, flag_name: &str) -> Vec<String> {
        let auto = names::auto_name(&self.prefix, flag_name);
        match self.names.get(flag_name) {
            Some(names) if !names.is_empty() => {
                names.iter().map(|name| name.resolve(&auto)).collect()
            }
            _ => vec![auto],
        }
    }

    /// The environment name that supplied a flag's value, if any.
    pub fn applied(&self, flag_name: &str) -> Option<&str> {
        self.applied.get(flag_name).map(|a| a.name.as_str())
    }

    /// Whether a flag is excluded from environment parsing.
    pub fn is_excluded(&self, flag_name: &str) -> bool {
        self.exclude.contains(flag_name)
    }

    /// The joined, normalised prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub(crate) fn set_prefix<S: AsRef<str>>(&mut self, segments: &[S]) {
        self.prefix = names::join_prefix(segments);
    }

    /// The underlying registry.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Mutable access to the underlying registry.
    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    /// Consume the binder and return its registry.
    pub fn into_registry(self) -> R {
        self.registry
    }

    fn explicit_names(&self) -> HashSet<String> {
        self.registry
            .explicitly_set()
            .into_iter()
            .map(|f| f.name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::FlagSet;

    fn env(pairs: &[(&str, &str)]) -> Env {
        pairs.iter().copied().collect()
    }

    #[test]
    fn generated_name_supplies_value() {
        let mut fs = FlagSet::new("test");
        let v = fs.var("test-1", String::new(), "");
        let mut es = EnvSet::new(&mut fs, Options::new());

        es.parse_env(&env(&[("TEST_1", "BOO")])).unwrap();
        assert_eq!(es.applied("test-1"), Some("TEST_1"));
        assert_eq!(fs.get(&v).map(String::as_str), Some("BOO"));
    }

    #[test]
    fn override_names_with_auto_placeholder() {
        let mut fs = FlagSet::new("test");
        let v = fs.var("test.2", String::new(), "");
        let mut es = EnvSet::new(&mut fs, Options::new());
        es.var(v, ["", "TEST"]);

        assert_eq!(es.all_names("test.2"), vec!["TEST_2", "TEST"]);
        es.parse_env(&env(&[("TEST", "FOO")])).unwrap();
        assert_eq!(es.applied("test.2"), Some("TEST"));
        assert_eq!(fs.get(&v).map(String::as_str), Some("FOO"));
    }

    #[test]
    fn first_candidate_wins() {
        let mut fs = FlagSet::new("test");
        let v = fs.var("v", String::new(), "");
        let mut es = EnvSet::new(&mut fs, Options::new());
        es.var(v, ["a", "b"]);

        es.parse_env(&env(&[("A", "from-a"), ("B", "from-b")])).unwrap();
        assert_eq!(es.applied("v"), Some("A"));
        assert_eq!(fs.get(&v).map(String::as_str), Some("from-a"));
    }

    #[test]
    fn empty_values_never_match() {
        let mut fs = FlagSet::new("test");
        let v = fs.var("v", String::from("default"), "");
        let mut es = EnvSet::new(&mut fs, Options::new());
        es.var(v, ["a", "b"]);

        es.parse_env(&env(&[("A", ""), ("B", "from-b")])).unwrap();
        assert_eq!(es.applied("v"), Some("B"));

        let mut fs = FlagSet::new("test");
        let w = fs.var("w", String::from("default"), "");
        let mut es = EnvSet::new(&mut fs, Options::new());
        es.parse_env(&env(&[("W", "")])).unwrap();
        assert_eq!(es.applied("w"), None);
        assert_eq!(fs.get(&w).map(String::as_str), Some("default"));
    }

    #[test]
    fn names_are_normalised() {
        let mut fs = FlagSet::new("test");
        let v = fs.var("test-1", String::new(), "");
        let mut es = EnvSet::new(&mut fs, Options::new());
        es.var(v, ["test4", "", "some.other-name"]);

        assert_eq!(es.all_names("test-1"), vec!["TEST4", "TEST_1", "SOME_OTHER_NAME"]);
    }

    #[test]
    fn hand_built_names_are_normalised() {
        let mut fs = FlagSet::new("test");
        let v = fs.var("v", String::new(), "");
        let mut es = EnvSet::new(&mut fs, Options::new());
        es.var(v, [EnvName::Named("my.lower-name".into()), EnvName::Auto]);

        assert_eq!(es.all_names("v"), vec!["MY_LOWER_NAME", "V"]);
        es.parse_env(&env(&[("MY_LOWER_NAME", "x")])).unwrap();
        assert_eq!(es.applied("v"), Some("MY_LOWER_NAME"));
    }

    #[test]
    fn prefix_applies_to_generated_names_only() {
        let mut fs = FlagSet::new("test");
        let v = fs.var("testtest", String::new(), "");
        let mut es = EnvSet::new(&mut fs, Options::new().prefix(["pre", "fixes"]));
        assert_eq!(es.prefix(), "PRE_FIXES");
        assert_eq!(es.all_names("testtest"), vec!["PRE_FIXESTESTTEST"]);

        es.var(v, ["", "plain"]);
        assert_eq!(es.all_names("testtest"), vec!["PRE_FIXESTESTTEST", "PLAIN"]);
    }

    #[test]
    fn exclusion_removes_override() {
        let mut fs = FlagSet::new("test");
        let v = fs.var("v", String::from("default"), "");
        let mut es = EnvSet::new(&mut fs, Options::new());
        es.var(v, ["other"]);
        es.exclude(v);

        assert!(es.is_excluded("v"));
        assert_eq!(es.all_names("v"), vec!["V"]);
        es.parse_env(&env(&[("V", "x"), ("OTHER", "y")])).unwrap();
        assert_eq!(es.applied("v"), None);

        let mut visited = 0;
        es.visit_all(|_| visited += 1);
        assert_eq!(visited, 0);
        drop(es);
        assert_eq!(fs.get(&v).map(String::as_str), Some("default"));
    }

    #[test]
    fn naming_again_clears_exclusion() {
        let mut fs = FlagSet::new("test");
        let v = fs.var("v", String::new(), "");
        let mut es = EnvSet::new(&mut fs, Options::new());
        es.exclude(v);
        es.var(v, ["x"]);

        assert!(!es.is_excluded("v"));
        assert_eq!(es.all_names("v"), vec!["X"]);
    }

    #[test]
    fn explicit_values_win() {
        let mut fs = FlagSet::new("test");
        let t1 = fs.var("t1", String::from("def"), "");
        let t2 = fs.var("t2", String::from("def"), "");
        fs.set("t1", "v1").unwrap();

        let mut es = EnvSet::new(&mut fs, Options::new());
        es.parse_env(&env(&[("T1", "wrong"), ("T2", "v2")])).unwrap();
        assert_eq!(es.applied("t1"), None);

        let mut seen = Vec::new();
        es.visit_all(|e| seen.push((e.flag.name.clone(), e.is_set)));
        assert_eq!(seen, vec![("t1".to_string(), true), ("t2".to_string(), false)]);

        drop(es);
        assert_eq!(fs.get(&t1).map(String::as_str), Some("v1"));
        assert_eq!(fs.get(&t2).map(String::as_str), Some("v2"));
    }

    #[test]
    fn second_parse_is_rejected_without_side_effects() {
        let mut fs = FlagSet::new("test");
        let v = fs.var("v", String::new(), "");
        let mut es = EnvSet::new(&mut fs, Options::new());
        assert!(!es.parsed());

        es.parse_env(&env(&[("V", "first")])).unwrap();
        assert!(es.parsed());

        let err = es.parse_env(&env(&[("V", "second")])).unwrap_err();
        assert!(err.is_already_parsed());
        assert!(es.parse().unwrap_err().is_already_parsed());
        assert_eq!(es.applied("v"), Some("V"));
        drop(es);
        assert_eq!(fs.get(&v).map(String::as_str), Some("first"));
    }

    #[test]
    fn failed_parse_still_counts_as_parsed() {
        let mut fs = FlagSet::new("test");
        fs.var("n", 0i32, "");
        let mut es = EnvSet::new(&mut fs, Options::new());

        assert!(es.parse_env(&env(&[("N", "x")])).is_err());
        assert!(es.parsed());
        assert!(es.parse_env(&env(&[("N", "1")])).unwrap_err().is_already_parsed());
    }

    #[test]
    fn conversion_error_carries_context() {
        let mut fs = FlagSet::new("test");
        let v = fs.var("abc123", 0i64, "");
        let mut es = EnvSet::new(&mut fs, Options::new());
        es.var(v, ["", "t", "foo"]);

        let err = es.parse_env(&env(&[("T", "NOTINT")])).unwrap_err();
        let Error::Flag(fe) = err else {
            panic!("expected flag error");
        };
        assert_eq!(fe.flag.name, "abc123");
        assert_eq!(fe.flag.default, "0");
        assert_eq!(fe.value, "NOTINT");
        assert_eq!(fe.name, "T");
        assert_eq!(fe.all_names, vec!["ABC123", "T", "FOO"]);
        assert_eq!(fe.err.kind, "i64");
        assert_eq!(fe.err.value, "NOTINT");
    }

    #[test]
    fn without_continue_on_error_later_values_are_not_applied() {
        let mut fs = FlagSet::new("test");
        fs.var("a", 0i32, "");
        let b = fs.var("b", 0i32, "");
        let c = fs.var("c", String::from("def"), "");
        let mut es = EnvSet::new(&mut fs, Options::new());

        let err = es
            .parse_env(&env(&[("A", "x"), ("B", "y"), ("C", "ok")]))
            .unwrap_err();
        assert!(matches!(err, Error::Flag(ref fe) if fe.flag.name == "a"));
        assert_eq!(es.applied("b"), Some("B"));
        assert_eq!(es.applied("c"), Some("C"));

        let mut seen = Vec::new();
        es.visit_all(|e| {
            seen.push((
                e.flag.name.clone(),
                e.err.is_some(),
                e.name.map(str::to_string),
                e.from_env(),
            ))
        });
        assert_eq!(
            seen,
            vec![
                ("a".to_string(), true, Some("A".to_string()), false),
                ("b".to_string(), false, Some("B".to_string()), false),
                ("c".to_string(), false, Some("C".to_string()), false)
            ]
        );
        drop(es);
        assert_eq!(fs.get(&b), Some(&0));
        assert_eq!(fs.get(&c).map(String::as_str), Some("def"));
    }

    #[test]
    fn continue_on_error_with_one_failure_returns_flag_error() {
        let mut fs = FlagSet::new("test");
        fs.var("a", 0i32, "");
        let b = fs.var("b", 0i32, "");
        let mut es = EnvSet::new(&mut fs, Options::new().continue_on_error(true));

        let err = es.parse_env(&env(&[("A", "x"), ("B", "2")])).unwrap_err();
        assert!(matches!(err, Error::Flag(ref fe) if fe.flag.name == "a"));
        drop(es);
        assert_eq!(fs.get(&b), Some(&2));
    }

    #[test]
    fn continue_on_error_with_two_failures_returns_aggregate() {
        let mut fs = FlagSet::new("test");
        fs.var("a", 0i32, "");
        fs.var("b", 0i32, "");
        let c = fs.var("c", 0i32, "");
        let mut es = EnvSet::new(&mut fs, Options::new().continue_on_error(true));

        let err = es
            .parse_env(&env(&[("A", "x"), ("B", "y"), ("C", "3")]))
            .unwrap_err();
        assert!(matches!(err, Error::MultipleFailures { count: 2 }));

        let mut failed = Vec::new();
        es.visit_all(|e| {
            if e.err.is_some() {
                failed.push(e.flag.name.clone());
            }
        });
        assert_eq!(failed, vec!["a", "b"]);
        drop(es);
        assert_eq!(fs.get(&c), Some(&3));
    }

    #[test]
    fn visit_all_reports_provenance() {
        let mut fs = FlagSet::new("test");
        let v = fs.var("test-1", String::new(), "");
        let v2 = fs.var("test.2", String::new(), "");
        let v3 = fs.var("test3", String::from("default"), "");
        let mut es = EnvSet::new(&mut fs, Options::new());
        es.var(v, ["TEST4", "", "TEST"]);
        es.var(v2, ["TEST", "", "TEST"]);
        es.exclude(v3);

        es.parse_env(&env(&[
            ("TEST_1", "BOO"),
            ("TEST_2", "FOO"),
            ("TEST3", "FOO"),
            ("TEST4", "V4"),
        ]))
        .unwrap();

        let mut seen = Vec::new();
        es.visit_all(|e| {
            seen.push((
                e.flag.name.clone(),
                e.name.map(str::to_string),
                e.value.map(str::to_string),
                e.all_names.clone(),
                e.from_env(),
            ))
        });
        assert_eq!(
            seen,
            vec![
                (
                    "test-1".to_string(),
                    Some("TEST4".to_string()),
                    Some("V4".to_string()),
                    vec!["TEST4".to_string(), "TEST_1".to_string(), "TEST".to_string()],
                    true,
                ),
                (
                    "test.2".to_string(),
                    Some("TEST_2".to_string()),
                    Some("FOO".to_string()),
                    vec!["TEST".to_string(), "TEST_2".to_string(), "TEST".to_string()],
                    true,
                ),
            ]
        );

        drop(es);
        assert_eq!(fs.get(&v3).map(String::as_str), Some("default"));
    }

    #[test]
    fn visit_all_before_parse_has_no_provenance() {
        let mut fs = FlagSet::new("test");
        fs.var("flag.1", String::new(), "");
        let es = EnvSet::new(&mut fs, Options::new());

        let mut names = Vec::new();
        es.visit_all(|e| names.push(e.name.map(str::to_string)));
        assert_eq!(names, vec![None]);
    }

    #[test]
    fn flag_by_name() {
        let mut fs = FlagSet::new("test");
        fs.var("testtest", String::new(), "");
        let mut es = EnvSet::new(&mut fs, Options::new());
        es.flag("testtest", ["boo"]);
        assert_eq!(es.all_names("testtest"), vec!["BOO"]);
    }

    #[test]
    #[should_panic(expected = "not a registered flag")]
    fn flag_by_unknown_name_panics() {
        let mut fs = FlagSet::new("test");
        fs.var("testtest", String::new(), "");
        let mut es = EnvSet::new(&mut fs, Options::new());
        es.flag("notaflag", ["boo"]);
    }

    #[test]
    #[should_panic(expected = "not a registered flag")]
    fn flag_name_lookup_is_case_sensitive() {
        let mut fs = FlagSet::new("test");
        fs.var("testtest", String::new(), "");
        let mut es = EnvSet::new(&mut fs, Options::new());
        es.flag("TESTTEST", ["boo"]);
    }

    #[test]
    #[should_panic(expected = "is not a member")]
    fn foreign_handle_panics() {
        let mut other = FlagSet::new("other");
        let foreign = other.var("v", String::new(), "");
        let mut fs = FlagSet::new("test");
        fs.var("v", String::new(), "");
        let mut es = EnvSet::new(&mut fs, Options::new());
        es.var(foreign, ["", "TESTAGAIN"]);
    }

    #[test]
    #[should_panic(expected = "invalid environment name")]
    fn name_with_equals_panics() {
        let mut fs = FlagSet::new("test");
        let v = fs.var("v", String::new(), "");
        let mut es = EnvSet::new(&mut fs, Options::new());
        es.var(v, ["A=B"]);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: Options = serde_json::from_str(r#"{"prefix": ["app"]}"#).unwrap();
        assert_eq!(options, Options::new().prefix(["app"]));
        assert!(!options.continue_on_error);
    }
}
