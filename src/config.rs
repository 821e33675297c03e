//! Flag declaration files.
//!
//! A declaration file describes a set of flags and how they bind to the
//! environment, so the CLI can inspect a program's configuration without
//! running it:
//!
//! ```yaml
//! prefix: [my, app]
//! continue_on_error: true
//! flags:
//!   - name: port
//!     type: uint
//!     default: "8080"
//!     usage: listen port
//!     env: ["", PORT]   # "" is the generated name
//!   - name: debug
//!     type: bool
//!     env: []           # never read from the environment
//! ```
//!
//! Without `env` a flag uses only its generated name.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::binder::{EnvSet, Options};
use crate::error::{Error, Result};
use crate::flags::{FlagRegistry, FlagSet, ValueError};

/// Value type of a declared flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagType {
    #[default]
    String,
    Int,
    Uint,
    Float,
    Bool,
}

/// One declared flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagDecl {
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: FlagType,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub usage: String,
    /// Absent: generated name only. Empty: excluded.
    #[serde(default)]
    pub env: Option<Vec<String>>,
}

/// A whole declaration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Declarations {
    #[serde(flatten)]
    pub options: Options,
    #[serde(default)]
    pub flags: Vec<FlagDecl>,
}

impl Declarations {
    /// Parse declarations from YAML.
    pub fn parse(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Register every declared flag and wire up its environment names.
    ///
    /// Fails when a default does not convert to the declared type or a flag
    /// is declared twice.
    pub fn build(&self) -> Result<EnvSet<FlagSet>> {
        let mut fs = FlagSet::new("declarations");
        for decl in &self.flags {
            if fs.lookup_name(&decl.name).is_some() {
                return Err(anyhow::anyhow!("flag {} declared more than once", decl.name).into());
            }
            register(&mut fs, decl)?;
        }

        let mut set = EnvSet::new(fs, self.options.clone());
        for decl in &self.flags {
            if let Some(names) = &decl.env {
                set.flag(&decl.name, names);
            }
        }
        Ok(set)
    }
}

fn register(fs: &mut FlagSet, decl: &FlagDecl) -> Result<()> {
    let name = decl.name.clone();
    let usage = decl.usage.clone();
    let default = decl.default.as_deref();
    match decl.kind {
        FlagType::String => {
            fs.var(name, parse_default::<String>(default)?, usage);
        }
        FlagType::Int => {
            fs.var(name, parse_default::<i64>(default)?, usage);
        }
        FlagType::Uint => {
            fs.var(name, parse_default::<u64>(default)?, usage);
        }
        FlagType::Float => {
            fs.var(name, parse_default::<f64>(default)?, usage);
        }
        FlagType::Bool => {
            fs.var(name, parse_default::<bool>(default)?, usage);
        }
    }
    Ok(())
}

fn parse_default<T>(raw: Option<&str>) -> Result<T>
where
    T: FromStr + Default,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        None => Ok(T::default()),
        Some(raw) => raw
            .parse()
            .map_err(|e| ValueError::new::<T, _>(raw, e).into()),
    }
}

/// Load and parse a declaration file.
pub fn load_declarations(path: &Path) -> Result<Declarations> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Declarations::parse(&content).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
