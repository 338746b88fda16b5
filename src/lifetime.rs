//! Instantiation policy definitions.

/// Instantiation policies controlling instance caching behavior
///
/// Defines whether a class registration constructs a fresh instance per
/// request or constructs once and caches the result in the scope that
/// resolved it. Factories and plain values carry no lifetime: factories
/// are always transient and a value is its own cached form.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use wirebox::{Args, Construct, Container, DiResult, Lifetime};
///
/// struct Clock;
///
/// impl Construct for Clock {
///     fn construct(_args: &Args) -> DiResult<Self> {
///         Ok(Clock)
///     }
/// }
///
/// let container = Container::new();
/// container.register_class::<Clock>("clock", Lifetime::Singleton).unwrap();
///
/// // Singleton: same instance on every request in this scope
/// let a = container.get_instance::<Clock>("clock").unwrap();
/// let b = container.get_instance::<Clock>("clock").unwrap();
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifetime {
    /// New instance per resolution, never cached
    ///
    /// Transient registrations construct a fresh instance every time the
    /// name is requested. No caching is performed. This is the default
    /// policy of the registration model: use it for lightweight values
    /// where fresh instances are preferred over caching overhead.
    Transient,
    /// Single instance per resolving scope, cached on first construction
    ///
    /// Singleton registrations are constructed once when first requested
    /// and then cached in the container that performed the resolution.
    /// Later requests for the name in that scope return the identical
    /// instance. A child scope resolving a parent-registered singleton
    /// caches its own copy locally; the parent is never written.
    Singleton,
}

impl Lifetime {
    /// Returns true for [`Lifetime::Singleton`].
    pub fn is_singleton(&self) -> bool {
        matches!(self, Lifetime::Singleton)
    }

    /// Stable lowercase label, used by descriptors and Display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Lifetime::Transient => "transient",
            Lifetime::Singleton => "singleton",
        }
    }
}

impl std::fmt::Display for Lifetime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
