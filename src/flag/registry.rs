use super::Flag;
use crate::Error;

/// A collection of named flags the binder can read and update.
///
/// Implementors own their descriptors; the binder borrows the registry for
/// a single call and only changes current values through [`set`](Self::set).
pub trait FlagRegistry {
    /// Whether command-line parsing has completed.
    fn parsed(&self) -> bool;

    /// A snapshot of every flag, in iteration order.
    fn flags(&self) -> Vec<Flag>;

    fn lookup(&self, name: &str) -> Option<Flag>;

    /// Replaces the current value of `name`.
    ///
    /// Returns [`Error::UnknownFlag`] if no such flag is registered.
    fn set(&mut self, name: &str, value: &str) -> Result<(), Error>;
}
