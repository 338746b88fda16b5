//! Resolution engine: priority lookup, recursive construction, validation.

use std::sync::Arc;
use std::time::Instant;

use crate::construct::Args;
use crate::container::Container;
use crate::error::{DiError, DiResult};
use crate::internal::ResolveGuard;
use crate::registration::SharedAny;

impl Container {
    /// Resolves `name` and downcasts the instance to `T`.
    ///
    /// The typed front door over [`resolve_any`]: same resolution, plus a
    /// downcast that fails with [`DiError::TypeMismatch`] when the
    /// registered producer yields some other concrete type.
    ///
    /// [`resolve_any`]: Container::resolve_any
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wirebox::{Container, DiError};
    ///
    /// let container = Container::new();
    /// container.register_value("greeting", "hello".to_string()).unwrap();
    ///
    /// let greeting = container.get_instance::<String>("greeting").unwrap();
    /// assert_eq!(*greeting, "hello");
    ///
    /// // The value is a String, not a u32
    /// match container.get_instance::<u32>("greeting") {
    ///     Err(DiError::TypeMismatch { name, .. }) => assert_eq!(name, "greeting"),
    ///     _ => unreachable!(),
    /// }
    /// ```
    pub fn get_instance<T: Send + Sync + 'static>(&self, name: &str) -> DiResult<Arc<T>> {
        self.resolve_any(name)?
            .downcast::<T>()
            .map_err(|_| DiError::TypeMismatch {
                name: name.to_string(),
                expected: std::any::type_name::<T>(),
            })
    }

    /// Resolves `name` to its type-erased instance.
    ///
    /// Priority order, each step falling through to the parent chain
    /// before the next step is tried:
    ///
    /// 1. a cached singleton instance (local or inherited),
    /// 2. a registered value, returned verbatim,
    /// 3. a registered class: dependencies resolved depth-first
    ///    left-to-right at this scope, then constructed; singletons are
    ///    cached in this container (never the parent's),
    /// 4. a registered factory: same dependency resolution, invoked per
    ///    request, never cached,
    /// 5. failure with [`DiError::NotFound`].
    ///
    /// Re-entering a name already being resolved on this call tree fails
    /// with [`DiError::CycleDetected`] carrying the cycle path.
    pub fn resolve_any(&self, name: &str) -> DiResult<SharedAny> {
        let observers = {
            let guard = self.inner.observers.read();
            guard.has_observers().then(|| guard.clone())
        };
        match observers {
            Some(observers) => {
                observers.resolving(name);
                let started = Instant::now();
                let outcome = self.resolve_guarded(name);
                match &outcome {
                    Ok(_) => observers.resolved(name, started.elapsed()),
                    Err(error) => observers.resolve_failed(name, error),
                }
                outcome
            }
            None => self.resolve_guarded(name),
        }
    }

    fn resolve_guarded(&self, name: &str) -> DiResult<SharedAny> {
        let _guard = ResolveGuard::enter(name)?;
        self.resolve_entry(name)
    }

    fn resolve_entry(&self, name: &str) -> DiResult<SharedAny> {
        if let Some(instance) = self.lookup_instance(name) {
            return Ok(instance);
        }
        if let Some(value) = self.lookup_value(name) {
            return Ok(value);
        }
        if let Some(class) = self.lookup_class(name) {
            let args = self.resolve_args(&class.deps)?;
            let instance = (class.ctor)(&args)?;
            if class.lifetime.is_singleton() {
                // Cached in the invoked scope even when the class entry
                // came from an ancestor.
                return Ok(self.cache_singleton(name, instance));
            }
            return Ok(instance);
        }
        if let Some(factory) = self.lookup_factory(name) {
            let args = self.resolve_args(&factory.deps)?;
            return (factory.produce)(&args);
        }
        Err(DiError::NotFound(name.to_string()))
    }

    /// Resolves a declared dependency list into positional [`Args`].
    ///
    /// Every dependency resolves at this scope; a producer inherited from
    /// an ancestor still has its dependencies looked up starting here,
    /// which is what lets a child shadow a single name inside a larger
    /// inherited graph.
    fn resolve_args(&self, deps: &Arc<[String]>) -> DiResult<Args> {
        let mut values: Vec<SharedAny> = Vec::with_capacity(deps.len());
        for dep in deps.iter() {
            values.push(self.resolve_any(dep)?);
        }
        Ok(Args::new(deps.clone(), values))
    }

    /// Verifies that every name registered in this scope resolves.
    ///
    /// Attempts a real resolution for each local name in turn, wrapping
    /// the first failure as [`DiError::ResolutionFailed`] naming the
    /// registration that broke; the underlying error rides along as the
    /// wrapper's source. After the local pass the check delegates to the
    /// parent scope, whose failures arrive already wrapped by its own
    /// pass.
    ///
    /// This is a verification pass, not a dry run: singletons constructed
    /// along the way are cached exactly as a normal resolution would.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wirebox::{Args, Container, DiError};
    ///
    /// let container = Container::new();
    /// container
    ///     .register_factory("report", &["printer"], |args: &Args| {
    ///         args.get::<String>(0).map(|p| format!("sent to {}", p))
    ///     })
    ///     .unwrap();
    ///
    /// // "printer" is not registered anywhere
    /// match container.check_dependencies() {
    ///     Err(DiError::ResolutionFailed { name, .. }) => assert_eq!(name, "report"),
    ///     _ => unreachable!(),
    /// }
    ///
    /// container.register_value("printer", "laserjet".to_string()).unwrap();
    /// assert!(container.check_dependencies().is_ok());
    /// ```
    pub fn check_dependencies(&self) -> DiResult<()> {
        let names: Vec<String> = self.inner.registry.read().names().cloned().collect();
        for name in names {
            if let Err(cause) = self.resolve_any(&name) {
                return Err(DiError::ResolutionFailed {
                    name,
                    cause: Box::new(cause),
                });
            }
        }
        match self.parent() {
            Some(parent) => parent.check_dependencies(),
            None => Ok(()),
        }
    }
}
