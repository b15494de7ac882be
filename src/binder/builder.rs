use super::{Binder, CollisionPolicy, RESERVED_FLAG};

/// Builder for a [`Binder`].
///
/// ## Example
///
/// ```
/// use flag_envs::{Binder, CollisionPolicy};
///
/// let binder = Binder::builder()
///     .reserved_flag("print-env")
///     .collisions(CollisionPolicy::Reject)
///     .build();
///
/// assert_eq!(binder.reserved_flag_name(), "print-env");
/// ```
#[derive(Debug)]
#[must_use = "builders do nothing until .build() is called"]
pub struct BinderBuilder {
    reserved_flag: String,
    collisions: CollisionPolicy,
}

impl Default for BinderBuilder {
    fn default() -> Self {
        Self {
            reserved_flag: RESERVED_FLAG.to_string(),
            collisions: CollisionPolicy::default(),
        }
    }
}

impl BinderBuilder {
    /// Names the flag that requests the report.
    ///
    /// The report is printed when this flag's value is `true`. The flag is
    /// never bound to the environment and never listed in the report.
    pub fn reserved_flag(mut self, name: impl Into<String>) -> Self {
        self.reserved_flag = name.into();
        self
    }

    /// Sets what happens when two flags derive the same variable name.
    pub fn collisions(mut self, policy: CollisionPolicy) -> Self {
        self.collisions = policy;
        self
    }

    pub fn build(self) -> Binder {
        Binder {
            reserved_flag: self.reserved_flag,
            collisions: self.collisions,
        }
    }
}
