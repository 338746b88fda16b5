//! # wirebox
//!
//! Name-keyed dependency injection with hierarchical scopes.
//!
//! ## Features
//!
//! - **Named wiring**: producers and values register under string names;
//!   dependencies are declared as ordered name lists and resolved for you
//! - **Three registration categories**: constructible classes, factories,
//!   and precomputed values
//! - **Singleton or transient classes**: cached per resolving scope, or
//!   constructed per request
//! - **Hierarchical scopes**: child containers shadow or extend a parent
//!   without touching it
//! - **Cycle detection**: cyclic graphs fail with the full resolution path
//!   instead of blowing the stack
//! - **Completeness checking**: verify every registered name resolves
//!   before serving traffic
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use wirebox::{Args, Construct, Container, DiResult, Lifetime};
//!
//! struct Database {
//!     url: Arc<String>,
//! }
//!
//! impl Construct for Database {
//!     fn dependencies() -> &'static [&'static str] {
//!         &["db_url"]
//!     }
//!
//!     fn construct(args: &Args) -> DiResult<Self> {
//!         Ok(Database { url: args.get::<String>(0)? })
//!     }
//! }
//!
//! struct UserService {
//!     db: Arc<Database>,
//! }
//!
//! impl Construct for UserService {
//!     fn dependencies() -> &'static [&'static str] {
//!         &["database"]
//!     }
//!
//!     fn construct(args: &Args) -> DiResult<Self> {
//!         Ok(UserService { db: args.get::<Database>(0)? })
//!     }
//! }
//!
//! let container = Container::new();
//! container.register_value("db_url", "postgres://localhost".to_string()).unwrap();
//! container.register_class::<Database>("database", Lifetime::Singleton).unwrap();
//! container.register_class::<UserService>("users", Lifetime::Transient).unwrap();
//!
//! let users = container.get_instance::<UserService>("users").unwrap();
//! assert_eq!(*users.db.url, "postgres://localhost");
//!
//! // The singleton database is shared with every later consumer
//! let db = container.get_instance::<Database>("database").unwrap();
//! assert!(Arc::ptr_eq(&users.db, &db));
//! ```
//!
//! ## Hierarchical scopes
//!
//! ```rust
//! use wirebox::Container;
//!
//! let root = Container::new();
//! root.register_value("env", "production".to_string()).unwrap();
//!
//! let test_scope = root.create_child();
//! // Shadowing the parent's name is allowed; duplicates are only
//! // rejected within one scope
//! test_scope.register_value("env", "test".to_string()).unwrap();
//!
//! assert_eq!(*root.get_instance::<String>("env").unwrap(), "production");
//! assert_eq!(*test_scope.get_instance::<String>("env").unwrap(), "test");
//! ```
//!
//! ## Validating wiring
//!
//! ```rust
//! use wirebox::{Args, Container, DiError};
//!
//! let container = Container::new();
//! container
//!     .register_factory("mailer", &["smtp_host"], |args: &Args| {
//!         args.get::<String>(0).map(|host| format!("mailer@{}", host))
//!     })
//!     .unwrap();
//!
//! // Fails: nothing registered "smtp_host"
//! assert!(matches!(
//!     container.check_dependencies(),
//!     Err(DiError::ResolutionFailed { .. })
//! ));
//!
//! container.register_value("smtp_host", "localhost".to_string()).unwrap();
//! assert!(container.check_dependencies().is_ok());
//! ```

// Module declarations
pub mod construct;
pub mod container;
pub mod descriptors;
pub mod error;
pub mod global;
pub mod lifetime;
pub mod observer;

// Internal modules
mod internal;
mod registration;
mod resolver;

// Re-export core types
pub use construct::{Args, Construct};
pub use container::Container;
pub use descriptors::{ProviderKind, RegistrationDescriptor};
pub use error::{DiError, DiResult};
pub use global::global;
pub use lifetime::Lifetime;
pub use observer::{ContainerObserver, LoggingObserver, MetricsObserver};
pub use registration::SharedAny;
