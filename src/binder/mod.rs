//! Binding flags to environment variables.

mod builder;

use std::collections::HashMap;
use std::io::{self, Write};

use log::{debug, trace, warn};

pub use builder::BinderBuilder;

use crate::env::{env_var_name, EnvSource, ProcessEnv};
use crate::flag::{Flag, FlagRegistry};
use crate::report::{Report, ReportRow, DEFAULT_VALUE_COLUMN};
use crate::wrap::word_wrap;
use crate::Error;

/// Default name of the flag that requests the report.
pub const RESERVED_FLAG: &str = "envs";

/// What to do when distinct flags map to the same environment variable,
/// such as `foo-bar` and `foo_bar`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Bind every flag from the shared variable without comment.
    #[default]
    Ignore,
    /// Bind as with `Ignore`, logging a warning per collision.
    Warn,
    /// Fail with [`Error::EnvNameCollision`] before any flag is changed.
    Reject,
}

/// Overrides flags from environment variables and builds the flag report.
///
/// A flag named `foo-bar` is bound to `FOO_BAR`. A variable that is set
/// and non-empty replaces the flag's current value; an empty variable counts
/// as unset.
///
/// ## Example
///
/// ```
/// use clap::{Arg, ArgAction, Command};
/// use flag_envs::{Binder, FlagSet, MapEnv};
///
/// let mut flags = FlagSet::new(
///     Command::new("server")
///         .arg(Arg::new("db-host").long("db-host").default_value("localhost"))
///         .arg(Arg::new("envs").long("envs").action(ArgAction::SetTrue)),
/// );
/// flags.parse(["server", "--envs"])?;
///
/// let env = MapEnv::new().with("DB_HOST", "db.internal");
/// let report = Binder::default().bind(&mut flags, &env)?;
///
/// assert_eq!(flags.get("db-host").as_deref(), Some("db.internal"));
/// assert_eq!(report.map(|r| r.rows().len()), Some(1));
/// # Ok::<(), flag_envs::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Binder {
    reserved_flag: String,
    collisions: CollisionPolicy,
}

impl Default for Binder {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Binder {
    pub fn builder() -> BinderBuilder {
        BinderBuilder::default()
    }

    pub fn reserved_flag_name(&self) -> &str {
        &self.reserved_flag
    }

    /// Applies environment overrides to every flag except the reserved one.
    ///
    /// Returns the report when the reserved flag is `true`, with the default
    /// value column dropped if no flag has a default. Fails with
    /// [`Error::NotParsed`] before touching any flag if the registry has not
    /// been parsed.
    pub fn bind<R, E>(&self, registry: &mut R, env: &E) -> Result<Option<Report>, Error>
    where
        R: FlagRegistry + ?Sized,
        E: EnvSource + ?Sized,
    {
        if !registry.parsed() {
            return Err(Error::NotParsed);
        }

        let print_report = registry
            .lookup(&self.reserved_flag)
            .is_some_and(|f| f.value == "true");

        let flags: Vec<Flag> = registry
            .flags()
            .into_iter()
            .filter(|f| f.name != self.reserved_flag)
            .collect();
        self.check_collisions(&flags)?;

        let mut rows = Vec::new();
        for flag in flags {
            let env_var = env_var_name(&flag.name);

            match env.get(&env_var) {
                Some(value) if !value.is_empty() => match registry.set(&flag.name, &value) {
                    Ok(()) => debug!("flag --{} overridden by {env_var}", flag.name),
                    Err(e) => warn!("ignoring {env_var} for flag --{}: {e}", flag.name),
                },
                Some(_) => trace!("{env_var} is empty, flag --{} unchanged", flag.name),
                None => {}
            }

            if print_report {
                let current = registry
                    .lookup(&flag.name)
                    .map_or(flag.value, |f| f.value);
                rows.push(ReportRow {
                    default: word_wrap(&flag.default),
                    current: word_wrap(&current),
                    flag: flag.name,
                    env_var,
                    usage: flag.usage,
                });
            }
        }

        Ok(print_report
            .then(|| Report::from_rows(rows).drop_column_if_empty(DEFAULT_VALUE_COLUMN)))
    }

    /// Runs [`bind`](Self::bind) and writes the report, if any, to `out`
    /// as a single block.
    pub fn run<R, E, W>(&self, registry: &mut R, env: &E, out: &mut W) -> Result<(), Error>
    where
        R: FlagRegistry + ?Sized,
        E: EnvSource + ?Sized,
        W: Write + ?Sized,
    {
        if let Some(report) = self.bind(registry, env)? {
            writeln!(out, "{report}")?;
            out.flush()?;
        }
        Ok(())
    }

    fn check_collisions(&self, flags: &[Flag]) -> Result<(), Error> {
        if self.collisions == CollisionPolicy::Ignore {
            return Ok(());
        }

        let mut seen: HashMap<String, &str> = HashMap::new();
        for flag in flags {
            let var = env_var_name(&flag.name);
            let Some(first) = seen.get(&var).copied() else {
                seen.insert(var, &flag.name);
                continue;
            };

            if self.collisions == CollisionPolicy::Reject {
                return Err(Error::EnvNameCollision {
                    var,
                    first: first.to_string(),
                    second: flag.name.clone(),
                });
            }
            warn!("flags --{first} and --{} both bind to {var}", flag.name);
        }
        Ok(())
    }
}

/// Binds every flag in `registry` to the process environment and, when the
/// `envs` flag is `true`, prints the flag report to stdout.
pub fn get_all_flags<R>(registry: &mut R) -> Result<(), Error>
where
    R: FlagRegistry + ?Sized,
{
    Binder::default().run(registry, &ProcessEnv, &mut io::stdout().lock())
}
