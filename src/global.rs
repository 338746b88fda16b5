//! The process-global container instance and its access function.

use once_cell::sync::Lazy;

use crate::container::Container;

// The one global container, created on first access.
static GLOBAL_CONTAINER: Lazy<Container> = Lazy::new(Container::new);

/// Returns the process-global root container.
///
/// A convenience for applications that wire everything through one shared
/// scope: registrations made here are visible from anywhere, and child
/// scopes created from it inherit them like from any other root.
///
/// # Examples
///
/// ```rust
/// use wirebox::global;
///
/// global()
///     .register_value("global_app_name", "wirebox-demo".to_string())
///     .unwrap();
///
/// let name = global().get_instance::<String>("global_app_name").unwrap();
/// assert_eq!(*name, "wirebox-demo");
/// ```
pub fn global() -> &'static Container {
    &GLOBAL_CONTAINER
}
