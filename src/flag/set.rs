use std::borrow::Cow;
use std::collections::HashMap;
use std::ffi::{OsStr, OsString};

use clap::builder::{BoolishValueParser, TypedValueParser};
use clap::{Arg, ArgAction, ArgMatches, Command};

use super::{Flag, FlagRegistry};
use crate::Error;

/// A [`FlagRegistry`] over a `clap` command and its parsed matches.
///
/// Every named argument of the command is a flag, visited in declaration
/// order. A flag is named by its long switch, or by its id when it has none.
/// Positional arguments and the generated `--help`/`--version` switches are
/// not flags.
///
/// Values set through [`FlagRegistry::set`] are kept next to the matches and
/// take precedence over them.
///
/// ## Example
///
/// ```
/// use clap::{Arg, ArgAction, Command};
/// use flag_envs::{FlagRegistry, FlagSet};
///
/// let command = Command::new("server")
///     .arg(Arg::new("listen-addr").long("listen-addr").default_value("127.0.0.1:8080"))
///     .arg(Arg::new("envs").long("envs").action(ArgAction::SetTrue));
///
/// let mut flags = FlagSet::new(command);
/// flags.parse(["server", "--listen-addr", "0.0.0.0:80"])?;
///
/// assert!(flags.parsed());
/// assert_eq!(flags.get("listen-addr").as_deref(), Some("0.0.0.0:80"));
/// assert_eq!(flags.get_bool("envs"), Some(false));
/// # Ok::<(), flag_envs::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct FlagSet {
    command: Command,
    matches: Option<ArgMatches>,
    overrides: HashMap<String, String>,
}

impl FlagSet {
    /// Wraps `command`; the set is unparsed until [`parse`](Self::parse).
    pub fn new(mut command: Command) -> Self {
        command.build();
        Self {
            command,
            matches: None,
            overrides: HashMap::new(),
        }
    }

    /// Wraps a command whose arguments were already parsed elsewhere.
    pub fn from_matches(command: Command, matches: ArgMatches) -> Self {
        Self {
            matches: Some(matches),
            ..Self::new(command)
        }
    }

    /// Parses `args` into the command. As with `clap`, the first argument
    /// is the program name.
    ///
    /// On failure the set stays unparsed and the `clap` error, which also
    /// covers `--help` and `--version`, is returned as [`Error::Cli`].
    pub fn parse<I, T>(&mut self, args: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command.try_get_matches_from_mut(args)?;
        self.matches = Some(matches);
        self.overrides.clear();
        Ok(())
    }

    pub fn command(&self) -> &Command {
        &self.command
    }

    pub fn matches(&self) -> Option<&ArgMatches> {
        self.matches.as_ref()
    }

    /// The current value of `name`. Multiple values are joined with `,`.
    pub fn get(&self, name: &str) -> Option<String> {
        self.lookup(name).map(|f| f.value)
    }

    /// The current value of a boolean flag, or `None` if it is missing or
    /// holds something other than `true`/`false`.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name)?.parse().ok()
    }

    fn bindable(&self) -> impl Iterator<Item = &Arg> {
        self.command.get_arguments().filter(|arg| {
            !arg.is_positional()
                && !matches!(
                    arg.get_action(),
                    ArgAction::Help | ArgAction::HelpShort | ArgAction::HelpLong | ArgAction::Version
                )
        })
    }

    fn find(&self, name: &str) -> Option<&Arg> {
        self.bindable().find(|arg| flag_name(arg) == name)
    }

    fn describe(&self, arg: &Arg) -> Flag {
        let id = arg.get_id().as_str();
        let default = join(arg.get_default_values().iter().map(|v| v.to_string_lossy()));

        let value = match self.overrides.get(id) {
            Some(value) => value.clone(),
            None => self
                .matches
                .as_ref()
                .and_then(|m| m.try_get_raw(id).ok().flatten())
                .map(|raw| join(raw.map(OsStr::to_string_lossy)))
                .unwrap_or_else(|| default.clone()),
        };

        Flag {
            name: flag_name(arg).to_string(),
            default,
            value,
            usage: arg.get_help().map(|h| h.to_string()).unwrap_or_default(),
        }
    }
}

impl FlagRegistry for FlagSet {
    fn parsed(&self) -> bool {
        self.matches.is_some()
    }

    fn flags(&self) -> Vec<Flag> {
        self.bindable().map(|arg| self.describe(arg)).collect()
    }

    fn lookup(&self, name: &str) -> Option<Flag> {
        self.find(name).map(|arg| self.describe(arg))
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), Error> {
        let arg = self
            .find(name)
            .ok_or_else(|| Error::UnknownFlag(name.to_string()))?;

        let value = if matches!(arg.get_action(), ArgAction::SetTrue | ArgAction::SetFalse) {
            BoolishValueParser::new()
                .parse_ref(&self.command, Some(arg), OsStr::new(value))
                .map_err(|_| Error::InvalidBool {
                    name: name.to_string(),
                    value: value.to_string(),
                })?
                .to_string()
        } else {
            value.to_string()
        };

        let id = arg.get_id().to_string();
        self.overrides.insert(id, value);
        Ok(())
    }
}

fn flag_name(arg: &Arg) -> &str {
    arg.get_long().unwrap_or_else(|| arg.get_id().as_str())
}

fn join<'a>(values: impl Iterator<Item = Cow<'a, str>>) -> String {
    values.collect::<Vec<_>>().join(",")
}
