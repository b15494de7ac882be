//! Environment variable naming and lookup.

use std::collections::HashMap;

/// Derives the environment variable bound to a flag.
///
/// Hyphens become underscores and the result is uppercased, so `foo-bar`
/// maps to `FOO_BAR`. Distinct flag names may map to the same variable
/// (`foo-bar` and `foo_bar`); see [`CollisionPolicy`](crate::CollisionPolicy).
pub fn env_var_name(flag_name: &str) -> String {
    flag_name.replace('-', "_").to_uppercase()
}

/// A read-only view of environment variables.
pub trait EnvSource {
    /// Returns the value of `key`, or `None` if it is unset or not valid unicode.
    fn get(&self, key: &str) -> Option<String>;
}

/// The environment of the current process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// An in-memory environment, for tests and for callers that assemble
/// their own variable table.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a variable.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
