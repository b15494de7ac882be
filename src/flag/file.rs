//! Flag declarations loaded from TOML.
//!
//! Each top-level key names a flag and becomes a `--key` switch:
//!
//! ```toml
//! port = { default = "8080", usage = "Server port" }
//! verbose = { kind = "bool", usage = "Verbose output" }
//! ```
//!
//! Boolean flags are plain switches that start out `false`.

use std::collections::BTreeMap;
use std::path::Path;

use clap::{Arg, ArgAction, Command};
use serde::Deserialize;

use super::{FlagFileError, FlagSet};
use crate::Error;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Declaration {
    #[serde(default)]
    default: String,
    #[serde(default)]
    usage: String,
    #[serde(default)]
    kind: DeclaredKind,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum DeclaredKind {
    #[default]
    String,
    Bool,
}

/// Builds a command named `name` from a TOML file of flag declarations.
pub fn command_from_toml_file(
    name: impl Into<String>,
    path: impl AsRef<Path>,
) -> Result<Command, FlagFileError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FlagFileError::NotFound(path.to_path_buf())
        } else {
            FlagFileError::Read {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let declarations: BTreeMap<String, Declaration> =
        toml::from_str(&contents).map_err(|e| FlagFileError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
    build_command(name, declarations)
}

/// Builds a command named `name` from TOML flag declarations held in memory.
pub fn command_from_toml_str(
    name: impl Into<String>,
    contents: &str,
) -> Result<Command, FlagFileError> {
    let declarations: BTreeMap<String, Declaration> = toml::from_str(contents)?;
    build_command(name, declarations)
}

fn build_command(
    name: impl Into<String>,
    declarations: BTreeMap<String, Declaration>,
) -> Result<Command, FlagFileError> {
    let mut command = Command::new(name.into());
    for (flag, decl) in declarations {
        let arg = Arg::new(flag.clone()).long(flag.clone()).help(decl.usage);
        let arg = match decl.kind {
            DeclaredKind::Bool if !decl.default.is_empty() => {
                return Err(FlagFileError::BoolDefault(flag));
            }
            DeclaredKind::Bool => arg.action(ArgAction::SetTrue),
            DeclaredKind::String if decl.default.is_empty() => arg.action(ArgAction::Set),
            DeclaredKind::String => arg.action(ArgAction::Set).default_value(decl.default),
        };
        command = command.arg(arg);
    }
    Ok(command)
}

impl FlagSet {
    /// Builds an unparsed set from a TOML file of flag declarations.
    pub fn from_toml_file(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self, Error> {
        Ok(Self::new(command_from_toml_file(name, path)?))
    }
}
