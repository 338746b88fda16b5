//! Registration descriptors for introspection and diagnostics.

use crate::container::Container;
use crate::lifetime::Lifetime;

/// Category of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// A constructible class registration
    Class,
    /// A factory registration, invoked per request
    Factory,
    /// A precomputed value registration
    Value,
}

impl ProviderKind {
    /// Stable lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Class => "class",
            ProviderKind::Factory => "factory",
            ProviderKind::Value => "value",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of one registration in a scope.
///
/// Metadata about a registered name usable for debugging, wiring
/// documentation, and startup health checks, without resolving anything.
///
/// # Use Cases
///
/// - **Debugging**: inspect what a scope registered and under which policy
/// - **Documentation**: dump the declared dependency edges of a graph
/// - **Health checks**: verify expected names are present before serving
///
/// # Examples
///
/// ```rust
/// use wirebox::{Args, Container, Lifetime, ProviderKind};
///
/// let container = Container::new();
/// container.register_value("url", "postgres://localhost".to_string()).unwrap();
/// container
///     .register_factory("pool", &["url"], |args: &Args| {
///         args.get::<String>(0).map(|url| format!("pool({})", url))
///     })
///     .unwrap();
///
/// let descriptors = container.descriptors();
/// assert_eq!(descriptors.len(), 2);
///
/// // Sorted by name: "pool" before "url"
/// assert_eq!(descriptors[0].name, "pool");
/// assert_eq!(descriptors[0].kind, ProviderKind::Factory);
/// assert_eq!(descriptors[0].dependencies, vec!["url".to_string()]);
///
/// assert_eq!(descriptors[1].name, "url");
/// assert_eq!(descriptors[1].kind, ProviderKind::Value);
/// assert!(descriptors[1].dependencies.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct RegistrationDescriptor {
    /// Registered dependency name
    pub name: String,
    /// Registration category
    pub kind: ProviderKind,
    /// Instantiation policy; `None` for factories and values
    pub lifetime: Option<Lifetime>,
    /// Declared dependency names, in positional order
    pub dependencies: Vec<String>,
    /// Whether a singleton instance sat in this scope's cache at snapshot
    /// time
    pub cached: bool,
}

impl RegistrationDescriptor {
    /// True for class registrations under [`Lifetime::Singleton`].
    pub fn is_singleton(&self) -> bool {
        self.lifetime.is_some_and(|lifetime| lifetime.is_singleton())
    }
}

impl Container {
    /// Describes every registration in this scope, sorted by name.
    ///
    /// Parent scopes are not included; call [`parent`] and describe each
    /// level for a full-chain view. The `cached` flag reflects this
    /// scope's local instance cache at the moment of the call.
    ///
    /// [`parent`]: Container::parent
    pub fn descriptors(&self) -> Vec<RegistrationDescriptor> {
        let registry = self.inner.registry.read();
        let cache = self.inner.instances.lock();
        let mut descriptors: Vec<RegistrationDescriptor> = registry
            .names()
            .map(|name| {
                let (kind, lifetime, dependencies) = if let Some(class) = registry.class(name) {
                    (ProviderKind::Class, Some(class.lifetime), class.deps.to_vec())
                } else if let Some(factory) = registry.factory(name) {
                    (ProviderKind::Factory, None, factory.deps.to_vec())
                } else {
                    (ProviderKind::Value, None, Vec::new())
                };
                RegistrationDescriptor {
                    name: name.clone(),
                    kind,
                    lifetime,
                    dependencies,
                    cached: cache.contains_key(name),
                }
            })
            .collect();
        descriptors.sort_by(|a, b| a.name.cmp(&b.name));
        descriptors
    }
}
