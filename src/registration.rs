//! Registration storage: erased entries, the per-scope registry, NameSet.

use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::construct::Args;
use crate::error::{DiError, DiResult};
use crate::lifetime::Lifetime;

/// Type-erased shared instance, the currency every resolved value travels as.
///
/// Values regain their concrete type at the edges: [`Container::get_instance`]
/// and [`Args::get`] downcast back to `Arc<T>`.
///
/// [`Container::get_instance`]: crate::Container::get_instance
/// [`Args::get`]: crate::Args::get
pub type SharedAny = Arc<dyn Any + Send + Sync>;

/// Erased producer: builds a [`SharedAny`] from resolved arguments.
pub(crate) type CtorFn = Arc<dyn Fn(&Args) -> DiResult<SharedAny> + Send + Sync>;

/// Class registration: constructor, declared dependency names, lifetime.
#[derive(Clone)]
pub(crate) struct ClassEntry {
    pub(crate) ctor: CtorFn,
    pub(crate) deps: Arc<[String]>,
    pub(crate) lifetime: Lifetime,
}

/// Factory registration: callable plus declared dependency names.
///
/// Factories carry no lifetime field; their results are never cached.
#[derive(Clone)]
pub(crate) struct FactoryEntry {
    pub(crate) produce: CtorFn,
    pub(crate) deps: Arc<[String]>,
}

/// Per-scope registration storage.
///
/// Three maps for the registration categories plus the NameSet of every
/// name registered in this scope. The singleton instance cache is a sibling
/// of the registry on the container, since it mutates during resolution
/// while these maps mutate only during registration.
pub(crate) struct Registry {
    pub(crate) classes: HashMap<String, ClassEntry>,
    pub(crate) factories: HashMap<String, FactoryEntry>,
    pub(crate) values: HashMap<String, SharedAny>,
    /// Union of all registered names, for duplicate rejection and the
    /// completeness check. Not the resolution index.
    pub(crate) names: HashSet<String>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self {
            classes: HashMap::new(),
            factories: HashMap::new(),
            values: HashMap::new(),
            names: HashSet::new(),
        }
    }

    /// Claims `name` in this scope, rejecting duplicates.
    ///
    /// Checked before any map is touched, so a rejected registration leaves
    /// the registry untouched.
    fn claim_name(&mut self, name: &str) -> DiResult<()> {
        if self.names.contains(name) {
            return Err(DiError::DuplicateName(name.to_string()));
        }
        self.names.insert(name.to_string());
        Ok(())
    }

    pub(crate) fn insert_class(&mut self, name: &str, entry: ClassEntry) -> DiResult<()> {
        self.claim_name(name)?;
        self.classes.insert(name.to_string(), entry);
        Ok(())
    }

    pub(crate) fn insert_factory(&mut self, name: &str, entry: FactoryEntry) -> DiResult<()> {
        self.claim_name(name)?;
        self.factories.insert(name.to_string(), entry);
        Ok(())
    }

    pub(crate) fn insert_value(&mut self, name: &str, value: SharedAny) -> DiResult<()> {
        self.claim_name(name)?;
        self.values.insert(name.to_string(), value);
        Ok(())
    }

    #[inline]
    pub(crate) fn class(&self, name: &str) -> Option<&ClassEntry> {
        self.classes.get(name)
    }

    #[inline]
    pub(crate) fn factory(&self, name: &str) -> Option<&FactoryEntry> {
        self.factories.get(name)
    }

    #[inline]
    pub(crate) fn value(&self, name: &str) -> Option<&SharedAny> {
        self.values.get(name)
    }

    #[inline]
    pub(crate) fn contains_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub(crate) fn names(&self) -> impl Iterator<Item = &String> {
        self.names.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.names.len()
    }
}
