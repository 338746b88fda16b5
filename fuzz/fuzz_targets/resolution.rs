#![no_main]

use libfuzzer_sys::fuzz_target;
use wirebox::{Args, Construct, Container, DiError, DiResult, Lifetime};

const NAMES: usize = 6;

struct ChildConsumer;

impl Construct for ChildConsumer {
    fn dependencies() -> &'static [&'static str] {
        &["node_0"]
    }

    fn construct(_args: &Args) -> DiResult<Self> {
        Ok(ChildConsumer)
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < NAMES {
        return;
    }

    // One byte per name decides its kind and, for factories, a dependency
    // edge. Arbitrary bytes can wire self-loops and longer cycles.
    let container = Container::new();
    for (i, &byte) in data.iter().take(NAMES).enumerate() {
        let name = format!("node_{}", i);
        match byte % 3 {
            0 => container.register_value(&name, u64::from(byte)),
            1 => {
                let dep = format!("node_{}", byte % NAMES as u8);
                container.register_factory(&name, &[dep.as_str()], |args| {
                    args.get::<u64>(0).map(|v| *v + 1)
                })
            }
            _ => container.register_value(&name, format!("leaf_{}", byte)),
        }
        .unwrap();
    }

    for i in 0..NAMES {
        let name = format!("node_{}", i);

        // Every outcome must be an orderly error or a success, and repeat
        // resolution must agree with the first. Type mismatches are as
        // legitimate here as cycles: a factory expecting u64 can land on a
        // String-valued dependency.
        let first = container.resolve_any(&name);
        let second = container.resolve_any(&name);
        match (&first, &second) {
            (Ok(_), Ok(_)) => {}
            (Err(error), Err(error2)) => {
                assert_eq!(error.to_string(), error2.to_string());
                if let DiError::CycleDetected(path) = error {
                    assert!(path.len() >= 2);
                    assert_eq!(path.first(), path.last());
                }
            }
            _ => panic!(
                "resolution was not deterministic: {:?} then {:?}",
                first.as_ref().err(),
                second.as_ref().err()
            ),
        }
    }

    // A scope on top of the fuzzed graph keeps working too.
    let child = container.create_child();
    child
        .register_class::<ChildConsumer>("consumer", Lifetime::Transient)
        .unwrap();
    let _ = child.resolve_any("consumer");
    for i in 0..NAMES {
        let _ = child.resolve_any(&format!("node_{}", i));
    }
});
