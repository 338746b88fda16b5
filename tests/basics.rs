use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use wirebox::{Args, Construct, Container, DiError, DiResult, Lifetime};

#[test]
fn register_and_get_value() {
    let container = Container::new();
    container
        .register_value("greeting", "hello world!".to_string())
        .unwrap();

    let first = container.get_instance::<String>("greeting").unwrap();
    let second = container.get_instance::<String>("greeting").unwrap();

    assert_eq!(*first, "hello world!");
    assert!(Arc::ptr_eq(&first, &second)); // Same stored value every time
}

#[test]
fn register_and_get_transient_class() {
    struct Widget {
        label: Arc<String>,
    }

    impl Construct for Widget {
        fn dependencies() -> &'static [&'static str] {
            &["label"]
        }

        fn construct(args: &Args) -> DiResult<Self> {
            Ok(Widget {
                label: args.get::<String>(0)?,
            })
        }
    }

    let container = Container::new();
    container
        .register_value("label", "spanner".to_string())
        .unwrap();
    container
        .register_class::<Widget>("widget", Lifetime::Transient)
        .unwrap();

    let a = container.get_instance::<Widget>("widget").unwrap();
    let b = container.get_instance::<Widget>("widget").unwrap();

    assert_eq!(*a.label, "spanner");
    assert!(!Arc::ptr_eq(&a, &b)); // Transient builds a fresh instance per request
    assert!(Arc::ptr_eq(&a.label, &b.label)); // But the value dependency is shared
}

#[test]
fn singleton_class_constructs_once() {
    static BUILDS: AtomicUsize = AtomicUsize::new(0);

    struct Engine {
        fuel: Arc<String>,
    }

    impl Construct for Engine {
        fn dependencies() -> &'static [&'static str] {
            &["fuel"]
        }

        fn construct(args: &Args) -> DiResult<Self> {
            BUILDS.fetch_add(1, Ordering::SeqCst);
            Ok(Engine {
                fuel: args.get::<String>(0)?,
            })
        }
    }

    let container = Container::new();
    container
        .register_value("fuel", "diesel".to_string())
        .unwrap();
    container
        .register_class::<Engine>("engine", Lifetime::Singleton)
        .unwrap();

    let a = container.get_instance::<Engine>("engine").unwrap();
    let b = container.get_instance::<Engine>("engine").unwrap();

    assert!(Arc::ptr_eq(&a, &b)); // Same instance
    assert_eq!(BUILDS.load(Ordering::SeqCst), 1);
    assert_eq!(*a.fuel, "diesel");
}

#[test]
fn shared_singleton_reached_through_two_paths() {
    static B_BUILDS: AtomicUsize = AtomicUsize::new(0);

    struct B {
        value: Arc<String>,
    }

    impl Construct for B {
        fn dependencies() -> &'static [&'static str] {
            &["my_value"]
        }

        fn construct(args: &Args) -> DiResult<Self> {
            B_BUILDS.fetch_add(1, Ordering::SeqCst);
            Ok(B {
                value: args.get::<String>(0)?,
            })
        }
    }

    struct D;

    impl Construct for D {
        fn construct(_args: &Args) -> DiResult<Self> {
            Ok(D)
        }
    }

    struct C {
        b: Arc<B>,
        _d: Arc<D>,
    }

    impl Construct for C {
        fn dependencies() -> &'static [&'static str] {
            &["b", "d"]
        }

        fn construct(args: &Args) -> DiResult<Self> {
            Ok(C {
                b: args.get::<B>(0)?,
                _d: args.get::<D>(1)?,
            })
        }
    }

    struct A {
        b: Arc<B>,
        c: Arc<C>,
    }

    impl Construct for A {
        fn dependencies() -> &'static [&'static str] {
            &["b", "c"]
        }

        fn construct(args: &Args) -> DiResult<Self> {
            Ok(A {
                b: args.get::<B>(0)?,
                c: args.get::<C>(1)?,
            })
        }
    }

    let container = Container::new();
    container
        .register_value("my_value", "hello world!".to_string())
        .unwrap();
    container
        .register_class::<B>("b", Lifetime::Singleton)
        .unwrap();
    container
        .register_class::<D>("d", Lifetime::Transient)
        .unwrap();
    container
        .register_class::<C>("c", Lifetime::Transient)
        .unwrap();
    container
        .register_class::<A>("a", Lifetime::Transient)
        .unwrap();

    // "a" needs "b" directly and again through "c"; the singleton is built once.
    let a = container.get_instance::<A>("a").unwrap();

    assert_eq!(B_BUILDS.load(Ordering::SeqCst), 1);
    assert!(Arc::ptr_eq(&a.b, &a.c.b));
    assert_eq!(*a.b.value, "hello world!");
}

#[test]
fn factory_runs_on_every_resolution() {
    let counter = Arc::new(std::sync::Mutex::new(0));
    let counter_clone = Arc::clone(&counter);

    let container = Container::new();
    container
        .register_factory("stamp", &[], move |_args| {
            let mut c = counter_clone.lock().unwrap();
            *c += 1;
            Ok(format!("stamp-{}", *c))
        })
        .unwrap();

    let first = container.get_instance::<String>("stamp").unwrap();
    let second = container.get_instance::<String>("stamp").unwrap();

    assert_eq!(*first, "stamp-1");
    assert_eq!(*second, "stamp-2");
    assert_eq!(*counter.lock().unwrap(), 2);
}

#[test]
fn factory_receives_resolved_dependencies() {
    struct B {
        value: Arc<String>,
    }

    impl Construct for B {
        fn dependencies() -> &'static [&'static str] {
            &["my_value"]
        }

        fn construct(args: &Args) -> DiResult<Self> {
            Ok(B {
                value: args.get::<String>(0)?,
            })
        }
    }

    struct Report {
        b: Arc<B>,
        line: String,
    }

    let container = Container::new();
    container
        .register_value("my_value", "hello world!".to_string())
        .unwrap();
    container
        .register_class::<B>("b", Lifetime::Singleton)
        .unwrap();
    container
        .register_factory("report", &["b"], |args| {
            let b = args.get::<B>(0)?;
            let line = format!("seen: {}", b.value);
            Ok(Report { b, line })
        })
        .unwrap();

    let report = container.get_instance::<Report>("report").unwrap();
    let b = container.get_instance::<B>("b").unwrap();

    assert_eq!(report.line, "seen: hello world!");
    assert!(Arc::ptr_eq(&report.b, &b)); // Factory saw the cached singleton
}

#[test]
fn class_can_depend_on_factory_product() {
    struct Session {
        token: Arc<String>,
    }

    impl Construct for Session {
        fn dependencies() -> &'static [&'static str] {
            &["token"]
        }

        fn construct(args: &Args) -> DiResult<Self> {
            Ok(Session {
                token: args.get::<String>(0)?,
            })
        }
    }

    let container = Container::new();
    container
        .register_factory("token", &[], |_args| Ok("tok-1234".to_string()))
        .unwrap();
    container
        .register_class::<Session>("session", Lifetime::Transient)
        .unwrap();

    let session = container.get_instance::<Session>("session").unwrap();
    assert_eq!(*session.token, "tok-1234");
}

#[test]
fn unknown_name_is_not_found() {
    let container = Container::new();

    match container.get_instance::<String>("missing") {
        Err(DiError::NotFound(name)) => assert_eq!(name, "missing"),
        other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn wrong_type_requested_is_a_mismatch() {
    let container = Container::new();
    container.register_value("port", 8080u16).unwrap();

    match container.get_instance::<String>("port") {
        Err(DiError::TypeMismatch { name, expected }) => {
            assert_eq!(name, "port");
            assert!(expected.contains("String"));
        }
        other => panic!("expected TypeMismatch, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn factory_dependency_mismatch_reports_identically_on_repeat() {
    let container = Container::new();
    container
        .register_value("flag", "verbose".to_string())
        .unwrap();
    container
        .register_factory("threshold", &["flag"], |args| {
            args.get::<u64>(0).map(|v| *v + 1)
        })
        .unwrap();

    // The wiring is wrong but stable: both resolutions fail the same way,
    // naming the dependency, not as NotFound or a cycle.
    let first = container.get_instance::<u64>("threshold").unwrap_err();
    let second = container.get_instance::<u64>("threshold").unwrap_err();

    match (&first, &second) {
        (
            DiError::TypeMismatch { name, .. },
            DiError::TypeMismatch { name: name_again, .. },
        ) => {
            assert_eq!(name, "flag");
            assert_eq!(name_again, "flag");
        }
        other => panic!("expected a TypeMismatch pair, got {:?}", other),
    }
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn duplicate_names_are_rejected_across_kinds() {
    struct Unit;

    impl Construct for Unit {
        fn construct(_args: &Args) -> DiResult<Self> {
            Ok(Unit)
        }
    }

    let container = Container::new();
    container.register_value("thing", 1u32).unwrap();

    match container.register_class::<Unit>("thing", Lifetime::Transient) {
        Err(DiError::DuplicateName(name)) => assert_eq!(name, "thing"),
        other => panic!("expected DuplicateName, got {:?}", other),
    }
    match container.register_factory("thing", &[], |_args| Ok(2u32)) {
        Err(DiError::DuplicateName(name)) => assert_eq!(name, "thing"),
        other => panic!("expected DuplicateName, got {:?}", other),
    }
    match container.register_value("thing", 3u32) {
        Err(DiError::DuplicateName(name)) => assert_eq!(name, "thing"),
        other => panic!("expected DuplicateName, got {:?}", other),
    }

    // The original registration is untouched.
    let v = container.get_instance::<u32>("thing").unwrap();
    assert_eq!(*v, 1);
}

#[test]
fn failed_registration_leaves_no_trace() {
    let container = Container::new();
    container.register_value("a", 1u32).unwrap();

    let _ = container.register_factory("a", &[], |_args| Ok(2u32));

    // Only the first registration exists.
    assert_eq!(container.registered_names(), vec!["a".to_string()]);
    assert_eq!(*container.get_instance::<u32>("a").unwrap(), 1);
}

#[test]
fn constructor_errors_propagate_to_caller() {
    struct Fussy;

    impl Construct for Fussy {
        fn dependencies() -> &'static [&'static str] {
            &["setting"]
        }

        fn construct(args: &Args) -> DiResult<Self> {
            // Asks for the wrong type on purpose.
            let _ = args.get::<u64>(0)?;
            Ok(Fussy)
        }
    }

    let container = Container::new();
    container
        .register_value("setting", "text".to_string())
        .unwrap();
    container
        .register_class::<Fussy>("fussy", Lifetime::Transient)
        .unwrap();

    match container.get_instance::<Fussy>("fussy") {
        Err(DiError::TypeMismatch { name, .. }) => assert_eq!(name, "setting"),
        other => panic!("expected TypeMismatch, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn contains_and_registered_names() {
    struct Unit;

    impl Construct for Unit {
        fn construct(_args: &Args) -> DiResult<Self> {
            Ok(Unit)
        }
    }

    let container = Container::new();
    assert!(container.is_empty());

    container.register_value("zeta", 1u8).unwrap();
    container
        .register_class::<Unit>("alpha", Lifetime::Transient)
        .unwrap();
    container
        .register_factory("mid", &[], |_args| Ok(0u8))
        .unwrap();

    assert!(container.contains("alpha"));
    assert!(container.contains("mid"));
    assert!(container.contains("zeta"));
    assert!(!container.contains("omega"));

    // Sorted, one entry per name; the count spans all three categories.
    assert_eq!(
        container.registered_names(),
        vec!["alpha".to_string(), "mid".to_string(), "zeta".to_string()]
    );
    assert_eq!(container.len(), 3);
    assert!(!container.is_empty());
}

#[test]
fn empty_string_value_still_resolves() {
    let container = Container::new();
    container.register_value("blank", String::new()).unwrap();

    let v = container.get_instance::<String>("blank").unwrap();
    assert!(v.is_empty());
}

#[test]
fn zero_value_still_resolves() {
    let container = Container::new();
    container.register_value("count", 0u32).unwrap();

    let v = container.get_instance::<u32>("count").unwrap();
    assert_eq!(*v, 0);
}
