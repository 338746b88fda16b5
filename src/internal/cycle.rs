//! Cycle detection infrastructure.

use std::cell::RefCell;

use crate::error::{DiError, DiResult};

// Thread-local stack of names currently being resolved in this call tree.
thread_local! {
    static RESOLUTION_STACK: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// RAII entry on the thread-local resolution stack.
///
/// [`enter`] pushes the name and fails with [`DiError::CycleDetected`] when
/// the name is already on the stack; dropping the guard pops it, including
/// during unwinds, so the stack is clean between top-level resolutions.
///
/// [`enter`]: ResolveGuard::enter
pub(crate) struct ResolveGuard {
    name: String,
}

impl ResolveGuard {
    pub(crate) fn enter(name: &str) -> DiResult<Self> {
        RESOLUTION_STACK.with(|stack| {
            let mut stack = stack.borrow_mut();

            // Cycle check BEFORE pushing: the reported path runs from the
            // first occurrence of the name through the repeated name,
            // e.g. ["a", "b", "a"].
            if let Some(first) = stack.iter().position(|n| n == name) {
                let mut path: Vec<String> = stack[first..].to_vec();
                path.push(name.to_string());
                return Err(DiError::CycleDetected(path));
            }

            stack.push(name.to_string());
            Ok(ResolveGuard {
                name: name.to_string(),
            })
        })
    }
}

impl Drop for ResolveGuard {
    fn drop(&mut self) {
        RESOLUTION_STACK.with(|stack| {
            let popped = stack.borrow_mut().pop();
            debug_assert_eq!(popped.as_deref(), Some(self.name.as_str()));
        });
    }
}
