//! Bind command-line flags to environment variables.
//!
//! Every flag can be overridden by an environment variable named after it:
//! `db-host` reads `DB_HOST`. When the reserved `envs` flag is set, a table
//! of flags, variables, defaults, current values and descriptions is
//! printed.
//!
//! ```no_run
//! use clap::{Arg, ArgAction, Command};
//! use flag_envs::{get_all_flags, FlagSet};
//!
//! let mut flags = FlagSet::new(
//!     Command::new("server")
//!         .arg(Arg::new("db-host").long("db-host").default_value("localhost"))
//!         .arg(Arg::new("envs").long("envs").action(ArgAction::SetTrue)),
//! );
//! flags.parse(std::env::args_os())?;
//!
//! get_all_flags(&mut flags)?;
//! # Ok::<(), flag_envs::Error>(())
//! ```

pub mod binder;
pub mod env;
mod error;
pub mod flag;
pub mod report;
pub mod wrap;

pub use binder::{get_all_flags, Binder, BinderBuilder, CollisionPolicy, RESERVED_FLAG};
pub use env::{env_var_name, EnvSource, MapEnv, ProcessEnv};
pub use error::Error;
pub use flag::{
    command_from_toml_file, command_from_toml_str, Flag, FlagFileError, FlagRegistry, FlagSet,
};
pub use report::{Report, ReportRow};
pub use wrap::{word_wrap, wrap_at};
