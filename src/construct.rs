//! Constructible types and their resolved-argument view.
//!
//! Wiring in wirebox is declared, not inferred: every class producer names
//! the dependencies it needs, in order, and receives them back positionally
//! through [`Args`] once the container has resolved each one. The declared
//! list is the only dependency metadata there is.

use std::sync::Arc;

use crate::error::{DiError, DiResult};
use crate::registration::SharedAny;

/// A type the container can construct from named dependencies.
///
/// Implementors declare an ordered list of dependency names and build
/// themselves from the resolved values. The container resolves each name
/// (depth-first, left-to-right) before calling [`construct`], so the
/// [`Args`] indices line up with the declared order.
///
/// The default `dependencies` is empty, matching producers that need
/// nothing from the container.
///
/// [`construct`]: Construct::construct
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use wirebox::{Args, Construct, Container, DiResult, Lifetime};
///
/// struct Engine {
///     fuel: Arc<String>,
/// }
///
/// impl Construct for Engine {
///     fn dependencies() -> &'static [&'static str] {
///         &["fuel"]
///     }
///
///     fn construct(args: &Args) -> DiResult<Self> {
///         Ok(Engine { fuel: args.get::<String>(0)? })
///     }
/// }
///
/// let container = Container::new();
/// container.register_value("fuel", "diesel".to_string()).unwrap();
/// container.register_class::<Engine>("engine", Lifetime::Transient).unwrap();
///
/// let engine = container.get_instance::<Engine>("engine").unwrap();
/// assert_eq!(*engine.fuel, "diesel");
/// ```
pub trait Construct: Sized + Send + Sync + 'static {
    /// Ordered names of the dependencies this type is constructed from.
    ///
    /// The order fixes the positional indices seen by [`construct`] and the
    /// resolution order of the dependencies themselves.
    ///
    /// [`construct`]: Construct::construct
    fn dependencies() -> &'static [&'static str] {
        &[]
    }

    /// Builds the value from its resolved dependencies.
    ///
    /// Returning `Err` aborts the resolution that requested this type and
    /// propagates to the caller; this is the place to report a dependency
    /// of the wrong concrete type or any construction failure of your own.
    fn construct(args: &Args) -> DiResult<Self>;
}

/// Resolved dependency values, positionally ordered.
///
/// Handed to [`Construct::construct`] and to factory closures. Values
/// travel type-erased and regain their concrete type here, via
/// [`get`](Args::get) (by declared position) or
/// [`get_named`](Args::get_named) (by declared name). Both return an
/// `Arc<T>` clone of the resolved instance.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use wirebox::{Args, Container, DiResult};
///
/// let container = Container::new();
/// container.register_value("host", "localhost".to_string()).unwrap();
/// container.register_value("port", 5432u16).unwrap();
/// container
///     .register_factory("conn_string", &["host", "port"], |args: &Args| {
///         let host = args.get::<String>(0)?;
///         let port = args.get_named::<u16>("port")?;
///         Ok(format!("{}:{}", host, port))
///     })
///     .unwrap();
///
/// let conn = container.get_instance::<String>("conn_string").unwrap();
/// assert_eq!(*conn, "localhost:5432");
/// ```
pub struct Args {
    names: Arc<[String]>,
    values: Vec<SharedAny>,
}

impl Args {
    pub(crate) fn new(names: Arc<[String]>, values: Vec<SharedAny>) -> Self {
        debug_assert_eq!(names.len(), values.len());
        Args { names, values }
    }

    /// Number of resolved dependencies.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the producer declared no dependencies.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Declared dependency names, in positional order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the dependency at `index` downcast to `T`.
    ///
    /// Fails with [`DiError::ArgumentOutOfRange`] past the declared list and
    /// with [`DiError::TypeMismatch`] (naming the dependency) when the
    /// resolved value is not a `T`.
    pub fn get<T: Send + Sync + 'static>(&self, index: usize) -> DiResult<Arc<T>> {
        let value = self.values.get(index).ok_or(DiError::ArgumentOutOfRange {
            index,
            count: self.values.len(),
        })?;
        downcast_named::<T>(value, &self.names[index])
    }

    /// Returns the dependency declared under `name` downcast to `T`.
    ///
    /// Fails with [`DiError::UndeclaredDependency`] for names absent from
    /// the declared list.
    pub fn get_named<T: Send + Sync + 'static>(&self, name: &str) -> DiResult<Arc<T>> {
        let index = self
            .names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| DiError::UndeclaredDependency(name.to_string()))?;
        downcast_named::<T>(&self.values[index], name)
    }

    /// Returns the type-erased value at `index`, if declared.
    pub fn raw(&self, index: usize) -> Option<&SharedAny> {
        self.values.get(index)
    }
}

fn downcast_named<T: Send + Sync + 'static>(value: &SharedAny, name: &str) -> DiResult<Arc<T>> {
    value
        .clone()
        .downcast::<T>()
        .map_err(|_| DiError::TypeMismatch {
            name: name.to_string(),
            expected: std::any::type_name::<T>(),
        })
}
