//! Flag descriptors and the registries that hold them.

mod error;
mod file;
mod registry;
mod set;

pub use error::FlagFileError;
pub use file::{command_from_toml_file, command_from_toml_str};
pub use registry::FlagRegistry;
pub use set::FlagSet;

/// A registered flag: its declaration plus its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    pub name: String,
    /// The value as declared, before parsing or environment overrides.
    pub default: String,
    pub value: String,
    pub usage: String,
}

impl Flag {
    /// Declares a flag whose current value starts at `default`.
    pub fn new(
        name: impl Into<String>,
        default: impl Into<String>,
        usage: impl Into<String>,
    ) -> Self {
        let default = default.into();
        Self {
            name: name.into(),
            value: default.clone(),
            default,
            usage: usage.into(),
        }
    }
}
