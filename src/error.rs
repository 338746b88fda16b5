//! Error types for the container.

use std::fmt;

/// Container errors
///
/// Represents the error conditions that can occur while registering
/// dependencies, resolving them, or validating a container in wirebox.
/// Every fallible operation in the crate returns these through
/// [`DiResult`].
///
/// # Examples
///
/// ```rust
/// use wirebox::{Container, DiError};
///
/// // Resolving a name nobody registered
/// let container = Container::new();
/// match container.get_instance::<String>("greeting") {
///     Err(DiError::NotFound(name)) => assert_eq!(name, "greeting"),
///     _ => unreachable!(),
/// }
/// ```
///
/// ```rust
/// use wirebox::DiError;
///
/// let duplicate = DiError::DuplicateName("db".to_string());
/// let cycle = DiError::CycleDetected(vec!["a".into(), "b".into(), "a".into()]);
///
/// // All errors implement Display
/// println!("Error: {}", duplicate);
/// println!("Error: {}", cycle);
/// ```
#[derive(Debug, Clone)]
pub enum DiError {
    /// Name already registered in this scope
    DuplicateName(String),
    /// Name absent through the entire scope chain
    NotFound(String),
    /// A name was re-entered while still being resolved (includes path)
    CycleDetected(Vec<String>),
    /// Downcast to the requested concrete type failed
    TypeMismatch {
        /// Dependency name whose value had an unexpected type
        name: String,
        /// Type the caller asked for
        expected: &'static str,
    },
    /// Positional argument index past the declared dependency list
    ArgumentOutOfRange {
        /// Index the producer asked for
        index: usize,
        /// Number of declared dependencies
        count: usize,
    },
    /// Argument requested by a name the producer never declared
    UndeclaredDependency(String),
    /// A registration failed to resolve during a completeness check
    ResolutionFailed {
        /// Name of the failing registration
        name: String,
        /// Underlying error
        cause: Box<DiError>,
    },
}

impl fmt::Display for DiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiError::DuplicateName(name) => write!(f, "Duplicate dependency name: {}", name),
            DiError::NotFound(name) => write!(f, "Dependency not found: {}", name),
            DiError::CycleDetected(path) => {
                write!(f, "Dependency cycle: {}", path.join(" -> "))
            }
            DiError::TypeMismatch { name, expected } => {
                write!(f, "Type mismatch for {}: expected {}", name, expected)
            }
            DiError::ArgumentOutOfRange { index, count } => {
                write!(f, "Argument {} out of range ({} declared)", index, count)
            }
            DiError::UndeclaredDependency(name) => {
                write!(f, "Undeclared dependency: {}", name)
            }
            DiError::ResolutionFailed { name, cause } => {
                write!(f, "Dependency \"{}\" failed: {}", name, cause)
            }
        }
    }
}

impl std::error::Error for DiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DiError::ResolutionFailed { cause, .. } => Some(cause.as_ref()),
            _ => None,
        }
    }
}

/// Result type for container operations
///
/// A convenience alias for `Result<T, DiError>` used throughout wirebox.
///
/// # Examples
///
/// ```rust
/// use wirebox::{DiResult, DiError};
///
/// fn lookup() -> DiResult<String> {
///     Ok("found".to_string())
/// }
///
/// fn missing() -> DiResult<()> {
///     Err(DiError::NotFound("cache".to_string()))
/// }
///
/// assert!(lookup().is_ok());
/// assert!(missing().is_err());
/// ```
pub type DiResult<T> = Result<T, DiError>;
