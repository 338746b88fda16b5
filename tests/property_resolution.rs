//! Property-based tests for resolution behavior: identity guarantees and
//! chain traversal hold for arbitrary graph shapes and scope depths.

use proptest::prelude::*;
use std::sync::Arc;

use wirebox::{Args, Construct, Container, DiResult, Lifetime};

#[derive(Debug)]
struct Leaf {
    tag: Arc<String>,
}

impl Construct for Leaf {
    fn dependencies() -> &'static [&'static str] {
        &["tag"]
    }

    fn construct(args: &Args) -> DiResult<Self> {
        Ok(Leaf {
            tag: args.get::<String>(0)?,
        })
    }
}

// Property: singleton identity is stable however many times it is resolved.
proptest! {
    #[test]
    fn singleton_identity_is_stable(tag in "\\PC{0,40}", rounds in 1usize..12) {
        let container = Container::new();
        container.register_value("tag", tag.clone()).unwrap();
        container.register_class::<Leaf>("leaf", Lifetime::Singleton).unwrap();

        let first = container.get_instance::<Leaf>("leaf").unwrap();
        for _ in 0..rounds {
            let again = container.get_instance::<Leaf>("leaf").unwrap();
            prop_assert!(Arc::ptr_eq(&first, &again));
        }
        prop_assert_eq!(&*first.tag, &tag);
    }
}

// Property: every transient resolution is a fresh instance.
proptest! {
    #[test]
    fn transient_identity_is_always_fresh(tag in "\\PC{0,40}", rounds in 2usize..10) {
        let container = Container::new();
        container.register_value("tag", tag).unwrap();
        container.register_class::<Leaf>("leaf", Lifetime::Transient).unwrap();

        let mut seen: Vec<Arc<Leaf>> = Vec::new();
        for _ in 0..rounds {
            seen.push(container.get_instance::<Leaf>("leaf").unwrap());
        }
        for i in 0..seen.len() {
            for j in (i + 1)..seen.len() {
                prop_assert!(!Arc::ptr_eq(&seen[i], &seen[j]));
            }
        }
    }
}

// Property: a linear factory chain of any depth resolves and its result
// counts every hop.
proptest! {
    #[test]
    fn factory_chains_resolve_at_any_depth(depth in 1usize..20) {
        let container = Container::new();
        container.register_value("link_0", 0u32).unwrap();
        for i in 1..=depth {
            let dep = format!("link_{}", i - 1);
            container
                .register_factory(&format!("link_{}", i), &[dep.as_str()], |args| {
                    args.get::<u32>(0).map(|v| *v + 1)
                })
                .unwrap();
        }

        let top = container.get_instance::<u32>(&format!("link_{}", depth)).unwrap();
        prop_assert_eq!(*top, depth as u32);
    }
}

// Property: lookup through a scope chain of any depth finds root entries.
proptest! {
    #[test]
    fn scope_chains_delegate_at_any_depth(depth in 1usize..16, payload in any::<u64>()) {
        let root = Container::new();
        root.register_value("anchor", payload).unwrap();

        let mut scope = root.clone();
        for _ in 0..depth {
            scope = scope.create_child();
        }

        prop_assert!(scope.contains("anchor"));
        prop_assert!(!scope.contains_local("anchor"));
        prop_assert_eq!(*scope.get_instance::<u64>("anchor").unwrap(), payload);
    }
}

// Property: declared dependency names arrive in positional order.
proptest! {
    #[test]
    fn argument_order_matches_declaration(values in prop::collection::vec(any::<u16>(), 1..6)) {
        let container = Container::new();
        let names: Vec<String> = (0..values.len()).map(|i| format!("arg_{}", i)).collect();
        for (name, value) in names.iter().zip(&values) {
            container.register_value(name, *value).unwrap();
        }

        let deps: Vec<&str> = names.iter().map(String::as_str).collect();
        let expected = values.clone();
        container
            .register_factory("collector", &deps, |args| {
                let mut got = Vec::new();
                for i in 0..args.len() {
                    got.push(*args.get::<u16>(i)?);
                }
                Ok(got)
            })
            .unwrap();

        let collected = container.get_instance::<Vec<u16>>("collector").unwrap();
        prop_assert_eq!(&*collected, &expected);
    }
}
