//! Application wiring walkthrough: registration kinds, startup validation,
//! request scopes, and resolution metrics.
//!
//! Run with: cargo run --example app_wiring

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use wirebox::{
    Args, Construct, Container, DiResult, Lifetime, MetricsObserver,
};

/// Connection-counting repository; one instance serves the whole process.
struct UserRepository {
    url: Arc<String>,
    queries: AtomicUsize,
}

impl UserRepository {
    fn find_user(&self, id: u32) -> String {
        self.queries.fetch_add(1, Ordering::Relaxed);
        format!("user-{} via {}", id, self.url)
    }

    fn query_count(&self) -> usize {
        self.queries.load(Ordering::Relaxed)
    }
}

impl Construct for UserRepository {
    fn dependencies() -> &'static [&'static str] {
        &["database_url"]
    }

    fn construct(args: &Args) -> DiResult<Self> {
        Ok(UserRepository {
            url: args.get::<String>(0)?,
            queries: AtomicUsize::new(0),
        })
    }
}

/// Stateless service layer; rebuilt on every resolution.
struct UserService {
    repository: Arc<UserRepository>,
}

impl UserService {
    fn greet(&self, id: u32) -> String {
        format!("hello, {}", self.repository.find_user(id))
    }
}

impl Construct for UserService {
    fn dependencies() -> &'static [&'static str] {
        &["user_repository"]
    }

    fn construct(args: &Args) -> DiResult<Self> {
        Ok(UserService {
            repository: args.get::<UserRepository>(0)?,
        })
    }
}

/// Per-request handler; lives in a child scope next to the request id.
struct RequestHandler {
    service: Arc<UserService>,
    request_id: Arc<String>,
}

impl RequestHandler {
    fn handle(&self, user_id: u32) -> String {
        format!("[{}] {}", self.request_id, self.service.greet(user_id))
    }
}

impl Construct for RequestHandler {
    fn dependencies() -> &'static [&'static str] {
        &["user_service", "request_id"]
    }

    fn construct(args: &Args) -> DiResult<Self> {
        Ok(RequestHandler {
            service: args.get::<UserService>(0)?,
            request_id: args.get::<String>(1)?,
        })
    }
}

fn main() -> DiResult<()> {
    println!("=== Registration ===");
    let app = Container::new();
    let metrics = Arc::new(MetricsObserver::new());
    app.add_observer(metrics.clone());

    app.register_value("database_url", "postgres://localhost/demo".to_string())?;
    app.register_class::<UserRepository>("user_repository", Lifetime::Singleton)?;
    app.register_class::<UserService>("user_service", Lifetime::Transient)?;
    app.register_factory("motd", &["database_url"], |args| {
        args.get::<String>(0)
            .map(|url| format!("serving users from {}", url))
    })?;

    for descriptor in app.descriptors() {
        println!(
            "  {} ({}{})",
            descriptor.name,
            descriptor.kind,
            descriptor
                .lifetime
                .map(|l| format!(", {}", l))
                .unwrap_or_default()
        );
    }

    println!("\n=== Startup validation ===");
    // Resolves every registered name, which also caches the repository
    // singleton at the app scope; request scopes below share it.
    app.check_dependencies()?;
    println!("  all names resolve");
    println!("  {}", app.get_instance::<String>("motd")?);

    println!("\n=== Request scopes ===");
    for request_id in ["req-001", "req-002"] {
        let scope = app.create_child();
        scope.register_value("request_id", request_id.to_string())?;
        scope.register_class::<RequestHandler>("handler", Lifetime::Transient)?;

        let handler = scope.get_instance::<RequestHandler>("handler")?;
        println!("  {}", handler.handle(42));
    }

    println!("\n=== Wrap up ===");
    let repository = app.get_instance::<UserRepository>("user_repository")?;
    println!("  repository handled {} queries", repository.query_count());
    println!(
        "  container observed {} resolutions ({} failed)",
        metrics.resolution_count(),
        metrics.failure_count()
    );

    Ok(())
}
