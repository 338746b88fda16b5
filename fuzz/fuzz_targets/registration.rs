#![no_main]

use libfuzzer_sys::fuzz_target;
use wirebox::{Container, DiError};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let parent = Container::new();
    let child = parent.create_child();

    // Each byte pair picks a scope, a kind, and one of eight names.
    for pair in data.chunks_exact(2) {
        let scope = if pair[0] % 2 == 0 { &parent } else { &child };
        let name = format!("name_{}", pair[1] % 8);

        let already_claimed = scope.contains_local(&name);
        let outcome = match pair[0] % 6 {
            0 | 1 => scope.register_value(&name, u64::from(pair[1])),
            2 | 3 => {
                let payload = u64::from(pair[1]);
                scope.register_factory(&name, &[], move |_args| Ok(payload))
            }
            _ => {
                let dep = format!("name_{}", pair[0] % 8);
                let seed = u64::from(pair[1]);
                scope.register_factory(&name, &[dep.as_str()], move |args| {
                    args.get::<u64>(0).map(|v| *v + seed)
                })
            }
        };

        // Registration fails exactly when the scope already holds the name.
        match outcome {
            Ok(()) => assert!(!already_claimed),
            Err(DiError::DuplicateName(reported)) => {
                assert!(already_claimed);
                assert_eq!(reported, name);
            }
            Err(other) => panic!("unexpected registration error: {:?}", other),
        }
        assert!(scope.contains_local(&name));
    }

    // The listings stay coherent whatever order things landed in.
    let mut names = parent.registered_names();
    names.extend(child.registered_names());
    for name in names {
        assert!(child.contains(&name) || parent.contains(&name));
    }

    // Wiring checks may reject the generated graph but must not panic.
    let _ = parent.check_dependencies();
    let _ = child.check_dependencies();
});
