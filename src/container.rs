//! The container: registration surface and scope hierarchy.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::construct::{Args, Construct};
use crate::error::DiResult;
use crate::lifetime::Lifetime;
use crate::observer::{ContainerObserver, Observers};
use crate::registration::{ClassEntry, CtorFn, FactoryEntry, Registry, SharedAny};

/// A name-keyed dependency container with optional parent delegation.
///
/// Register producers under string names (constructible classes,
/// factories, or plain values), then request fully built instances with
/// [`get_instance`]. The container resolves each producer's declared
/// dependencies recursively, applies the singleton caching policy, and
/// falls through to the parent scope for anything not registered locally.
///
/// `Container` is a cheap [`Clone`] handle (`Arc` inside); clones share
/// the same scope. Child scopes created with [`create_child`] hold a
/// shared handle to their parent and may shadow its registrations without
/// conflict, since duplicate rejection is scope-local.
///
/// All methods take `&self`: registration and resolution interleave freely
/// on a shared container, guarded internally.
///
/// [`get_instance`]: Container::get_instance
/// [`create_child`]: Container::create_child
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use wirebox::{Args, Construct, Container, DiResult, Lifetime};
///
/// struct Database {
///     url: Arc<String>,
/// }
///
/// impl Construct for Database {
///     fn dependencies() -> &'static [&'static str] {
///         &["db_url"]
///     }
///
///     fn construct(args: &Args) -> DiResult<Self> {
///         Ok(Database { url: args.get::<String>(0)? })
///     }
/// }
///
/// let container = Container::new();
/// container.register_value("db_url", "postgres://localhost".to_string()).unwrap();
/// container.register_class::<Database>("database", Lifetime::Singleton).unwrap();
///
/// let db = container.get_instance::<Database>("database").unwrap();
/// assert_eq!(*db.url, "postgres://localhost");
///
/// // Singleton: the same instance comes back
/// let again = container.get_instance::<Database>("database").unwrap();
/// assert!(Arc::ptr_eq(&db, &again));
/// ```
#[derive(Clone)]
pub struct Container {
    pub(crate) inner: Arc<ContainerInner>,
}

pub(crate) struct ContainerInner {
    pub(crate) registry: RwLock<Registry>,
    /// Singleton instances constructed by resolutions invoked on this
    /// scope. A child resolving a parent-registered singleton writes here,
    /// never into the parent.
    pub(crate) instances: Mutex<HashMap<String, SharedAny>>,
    pub(crate) observers: RwLock<Observers>,
    pub(crate) parent: Option<Container>,
}

impl Container {
    /// Creates a root container with no parent.
    pub fn new() -> Self {
        Self::with_parent(None)
    }

    fn with_parent(parent: Option<Container>) -> Self {
        Container {
            inner: Arc::new(ContainerInner {
                registry: RwLock::new(Registry::new()),
                instances: Mutex::new(HashMap::new()),
                observers: RwLock::new(Observers::new()),
                parent,
            }),
        }
    }

    /// Creates a child scope delegating to this container.
    ///
    /// The child starts empty. Lookups that miss in the child fall through
    /// to this container (and its ancestors); registrations go to the
    /// child alone and may shadow parent names.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wirebox::Container;
    ///
    /// let root = Container::new();
    /// root.register_value("region", "eu-west".to_string()).unwrap();
    ///
    /// let child = root.create_child();
    /// let region = child.get_instance::<String>("region").unwrap();
    /// assert_eq!(*region, "eu-west");
    /// ```
    pub fn create_child(&self) -> Container {
        Self::with_parent(Some(self.clone()))
    }

    /// The parent scope, if this container has one.
    pub fn parent(&self) -> Option<&Container> {
        self.inner.parent.as_ref()
    }

    /// True for containers created without a parent.
    pub fn is_root(&self) -> bool {
        self.inner.parent.is_none()
    }

    // ----- Registration -----

    /// Registers a constructible class under `name`.
    ///
    /// The type's [`Construct::dependencies`] list is captured now and
    /// drives resolution later. `Lifetime::Transient` constructs per
    /// request; `Lifetime::Singleton` constructs once per resolving scope
    /// and caches the instance there.
    ///
    /// Fails with [`DiError::DuplicateName`] if `name` is already
    /// registered in this scope (any category); parent scopes are not
    /// consulted.
    ///
    /// [`DiError::DuplicateName`]: crate::DiError::DuplicateName
    pub fn register_class<T: Construct>(&self, name: &str, lifetime: Lifetime) -> DiResult<()> {
        let deps: Arc<[String]> = T::dependencies().iter().map(|s| s.to_string()).collect();
        let ctor: CtorFn =
            Arc::new(|args: &Args| T::construct(args).map(|value| Arc::new(value) as SharedAny));
        self.inner.registry.write().insert_class(
            name,
            ClassEntry {
                ctor,
                deps,
                lifetime,
            },
        )
    }

    /// Registers a factory under `name` with its declared dependencies.
    ///
    /// The factory receives the resolved dependencies positionally in
    /// `deps` order and runs on every request; results are never cached.
    ///
    /// Fails with [`DiError::DuplicateName`] on a scope-local duplicate.
    ///
    /// [`DiError::DuplicateName`]: crate::DiError::DuplicateName
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wirebox::{Args, Container};
    ///
    /// let container = Container::new();
    /// container.register_value("base", 40u32).unwrap();
    /// container
    ///     .register_factory("answer", &["base"], |args: &Args| {
    ///         Ok(*args.get::<u32>(0)? + 2)
    ///     })
    ///     .unwrap();
    ///
    /// assert_eq!(*container.get_instance::<u32>("answer").unwrap(), 42);
    /// ```
    pub fn register_factory<T, F>(&self, name: &str, deps: &[&str], factory: F) -> DiResult<()>
    where
        T: Send + Sync + 'static,
        F: Fn(&Args) -> DiResult<T> + Send + Sync + 'static,
    {
        let deps: Arc<[String]> = deps.iter().map(|s| s.to_string()).collect();
        let produce: CtorFn =
            Arc::new(move |args: &Args| factory(args).map(|value| Arc::new(value) as SharedAny));
        self.inner
            .registry
            .write()
            .insert_factory(name, FactoryEntry { produce, deps })
    }

    /// Registers a precomputed value under `name`.
    ///
    /// The value is stored shared and returned verbatim on every
    /// resolution; it is its own cached form and is never constructed.
    ///
    /// Fails with [`DiError::DuplicateName`] on a scope-local duplicate.
    ///
    /// [`DiError::DuplicateName`]: crate::DiError::DuplicateName
    pub fn register_value<T: Send + Sync + 'static>(&self, name: &str, value: T) -> DiResult<()> {
        self.inner
            .registry
            .write()
            .insert_value(name, Arc::new(value) as SharedAny)
    }

    // ----- Introspection -----

    /// True when `name` is registered in this scope or any ancestor.
    pub fn contains(&self, name: &str) -> bool {
        self.contains_local(name)
            || self
                .inner
                .parent
                .as_ref()
                .is_some_and(|parent| parent.contains(name))
    }

    /// True when `name` is registered in this scope itself.
    pub fn contains_local(&self, name: &str) -> bool {
        self.inner.registry.read().contains_name(name)
    }

    /// Number of names registered in this scope, across all categories.
    pub fn len(&self) -> usize {
        self.inner.registry.read().len()
    }

    /// True when this scope has no registrations of its own.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names registered in this scope, sorted.
    ///
    /// Parent registrations are not included; walk [`parent`] for those.
    ///
    /// [`parent`]: Container::parent
    pub fn registered_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.inner.registry.read().names().cloned().collect();
        names.sort();
        names
    }

    /// Registers an observer for resolution events on this scope.
    ///
    /// Observers fire for resolutions invoked on this container, including
    /// nested dependency resolutions; they do not fire for resolutions
    /// invoked directly on a parent or child scope.
    pub fn add_observer(&self, observer: Arc<dyn ContainerObserver>) {
        self.inner.observers.write().add(observer);
    }

    // ----- Chain-aware lookups -----
    //
    // Each category falls through to the parent independently, so an
    // inherited entry in a higher-priority category outranks a local one
    // in a lower category. Entries come back as cheap clones; no lock is
    // held once a lookup returns.

    pub(crate) fn lookup_instance(&self, name: &str) -> Option<SharedAny> {
        let local = self.inner.instances.lock().get(name).cloned();
        if local.is_some() {
            return local;
        }
        self.inner
            .parent
            .as_ref()
            .and_then(|parent| parent.lookup_instance(name))
    }

    pub(crate) fn lookup_value(&self, name: &str) -> Option<SharedAny> {
        let local = self.inner.registry.read().value(name).cloned();
        if local.is_some() {
            return local;
        }
        self.inner
            .parent
            .as_ref()
            .and_then(|parent| parent.lookup_value(name))
    }

    pub(crate) fn lookup_class(&self, name: &str) -> Option<ClassEntry> {
        let local = self.inner.registry.read().class(name).cloned();
        if local.is_some() {
            return local;
        }
        self.inner
            .parent
            .as_ref()
            .and_then(|parent| parent.lookup_class(name))
    }

    pub(crate) fn lookup_factory(&self, name: &str) -> Option<FactoryEntry> {
        let local = self.inner.registry.read().factory(name).cloned();
        if local.is_some() {
            return local;
        }
        self.inner
            .parent
            .as_ref()
            .and_then(|parent| parent.lookup_factory(name))
    }

    /// Caches a singleton in this scope's instance map.
    ///
    /// Under concurrent first-resolution the first cached instance wins;
    /// the returned handle is always the cached one.
    pub(crate) fn cache_singleton(&self, name: &str, instance: SharedAny) -> SharedAny {
        let mut cache = self.inner.instances.lock();
        cache.entry(name.to_string()).or_insert(instance).clone()
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}
