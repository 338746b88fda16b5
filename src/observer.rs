//! Diagnostic observers for resolution traceability.
//!
//! Hooks for observing container resolution events: what names are being
//! resolved, how long each resolution took, and which ones failed. Useful
//! for debugging wiring problems and for watching cache behavior without
//! touching the container's logic.

use std::sync::Arc;
use std::time::Duration;

use crate::error::DiError;

/// Observer trait for container resolution events.
///
/// Observers see every `get_instance`/`resolve_any` call, nested
/// resolutions included, so a single top-level request for a deep graph
/// produces one event pair per name touched.
///
/// # Performance
///
/// Observer calls are made synchronously during resolution. Keep
/// implementations lightweight; for expensive processing, queue the events
/// and handle them elsewhere.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::time::Duration;
/// use wirebox::{Container, ContainerObserver, DiError};
///
/// struct TraceObserver;
///
/// impl ContainerObserver for TraceObserver {
///     fn resolving(&self, name: &str) {
///         println!("resolving: {}", name);
///     }
///
///     fn resolved(&self, name: &str, duration: Duration) {
///         println!("resolved: {} in {:?}", name, duration);
///     }
///
///     fn resolve_failed(&self, name: &str, error: &DiError) {
///         eprintln!("failed: {}: {}", name, error);
///     }
/// }
///
/// let container = Container::new();
/// container.add_observer(Arc::new(TraceObserver));
/// container.register_value("answer", 42u32).unwrap();
///
/// // Both events fire for this resolution
/// let answer = container.get_instance::<u32>("answer").unwrap();
/// assert_eq!(*answer, 42);
/// ```
pub trait ContainerObserver: Send + Sync {
    /// Called when resolution of a name starts.
    fn resolving(&self, name: &str);

    /// Called when a name resolved successfully.
    ///
    /// `duration` is the time elapsed since the matching [`resolving`]
    /// event, nested resolutions included.
    ///
    /// [`resolving`]: ContainerObserver::resolving
    fn resolved(&self, name: &str, duration: Duration);

    /// Called when resolution of a name failed.
    ///
    /// The error still propagates to the caller after this event.
    fn resolve_failed(&self, name: &str, error: &DiError);
}

/// Registered observers for one container.
///
/// Fan-out is skipped entirely when no observers are registered, keeping
/// the unobserved resolution path free of overhead. Cloning snapshots the
/// current list so no lock is held while events fire.
#[derive(Default, Clone)]
pub(crate) struct Observers {
    observers: Vec<Arc<dyn ContainerObserver>>,
}

impl Observers {
    pub(crate) fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, observer: Arc<dyn ContainerObserver>) {
        self.observers.push(observer);
    }

    #[inline]
    pub(crate) fn has_observers(&self) -> bool {
        !self.observers.is_empty()
    }

    #[inline]
    pub(crate) fn resolving(&self, name: &str) {
        for observer in &self.observers {
            observer.resolving(name);
        }
    }

    #[inline]
    pub(crate) fn resolved(&self, name: &str, duration: Duration) {
        for observer in &self.observers {
            observer.resolved(name, duration);
        }
    }

    #[inline]
    pub(crate) fn resolve_failed(&self, name: &str, error: &DiError) {
        for observer in &self.observers {
            observer.resolve_failed(name, error);
        }
    }
}

/// Built-in observer that logs events to stdout/stderr.
///
/// A simple implementation for development and debugging. For production
/// use, implement [`ContainerObserver`] against your own logging setup.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use wirebox::{Container, LoggingObserver};
///
/// let container = Container::new();
/// container.add_observer(Arc::new(LoggingObserver::with_prefix("[app-di]")));
/// ```
pub struct LoggingObserver {
    prefix: String,
}

impl LoggingObserver {
    /// Creates a logging observer with the default prefix.
    pub fn new() -> Self {
        Self {
            prefix: "[wirebox]".to_string(),
        }
    }

    /// Creates a logging observer with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerObserver for LoggingObserver {
    fn resolving(&self, name: &str) {
        println!("{} Resolving: {}", self.prefix, name);
    }

    fn resolved(&self, name: &str, duration: Duration) {
        println!("{} Resolved: {} in {:?}", self.prefix, name, duration);
    }

    fn resolve_failed(&self, name: &str, error: &DiError) {
        eprintln!("{} FAILED {}: {}", self.prefix, name, error);
    }
}

/// Observer that aggregates resolution metrics.
///
/// Collects resolution counts, cumulative timing, and failure counts for
/// post-run analysis. All counters are atomic; the observer can be shared
/// across threads and read while resolution continues.
pub struct MetricsObserver {
    resolution_count: std::sync::atomic::AtomicU64,
    total_resolution_time: std::sync::atomic::AtomicU64,
    failure_count: std::sync::atomic::AtomicU64,
}

impl MetricsObserver {
    /// Creates a metrics observer with zeroed counters.
    pub fn new() -> Self {
        Self {
            resolution_count: std::sync::atomic::AtomicU64::new(0),
            total_resolution_time: std::sync::atomic::AtomicU64::new(0),
            failure_count: std::sync::atomic::AtomicU64::new(0),
        }
    }

    /// Total successful resolutions observed.
    pub fn resolution_count(&self) -> u64 {
        self.resolution_count
            .load(std::sync::atomic::Ordering::Relaxed)
    }

    /// Total failed resolutions observed.
    pub fn failure_count(&self) -> u64 {
        self.failure_count
            .load(std::sync::atomic::Ordering::Relaxed)
    }

    /// Mean time per successful resolution, if any occurred.
    pub fn average_resolution_time(&self) -> Option<Duration> {
        let count = self.resolution_count();
        if count == 0 {
            return None;
        }
        let total_ns = self
            .total_resolution_time
            .load(std::sync::atomic::Ordering::Relaxed);
        Some(Duration::from_nanos(total_ns / count))
    }

    /// Cumulative time across successful resolutions.
    pub fn total_resolution_time(&self) -> Duration {
        let total_ns = self
            .total_resolution_time
            .load(std::sync::atomic::Ordering::Relaxed);
        Duration::from_nanos(total_ns)
    }

    /// Zeroes all counters.
    pub fn reset(&self) {
        self.resolution_count
            .store(0, std::sync::atomic::Ordering::Relaxed);
        self.total_resolution_time
            .store(0, std::sync::atomic::Ordering::Relaxed);
        self.failure_count
            .store(0, std::sync::atomic::Ordering::Relaxed);
    }
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ContainerObserver for MetricsObserver {
    fn resolving(&self, _name: &str) {
        // Counted on completion
    }

    fn resolved(&self, _name: &str, duration: Duration) {
        self.resolution_count
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        self.total_resolution_time.fetch_add(
            duration.as_nanos() as u64,
            std::sync::atomic::Ordering::Relaxed,
        );
    }

    fn resolve_failed(&self, _name: &str, _error: &DiError) {
        self.failure_count
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
    }
}
