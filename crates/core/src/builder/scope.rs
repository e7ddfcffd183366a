//! A scoped ambient slot for the "current" [`GameBuilder`].
//!
//! This exists so an author-facing DSL crate (out of scope here) has
//! somewhere to push a builder while it records top-level calls, without
//! threading a `&mut GameBuilder` through every macro-generated function.
//! The core only owns the slot and its lifetime guarantees, not any DSL
//! syntax built on top of it.

use std::cell::RefCell;

use super::GameBuilder;

thread_local! {
    static CURRENT: RefCell<Option<GameBuilder>> = RefCell::new(None);
}

/// Releases the ambient builder slot when dropped, even if the scope's body
/// panics.
pub struct ScopeGuard(());

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        CURRENT.with(|cell| {
            cell.borrow_mut().take();
        });
    }
}

/// Establishes `builder` as the thread's current builder for the lifetime
/// of the returned guard. Nesting scopes is not supported: entering a new
/// scope while one is already active replaces it.
#[must_use = "the ambient builder is released when this guard drops"]
pub fn enter(builder: GameBuilder) -> ScopeGuard {
    CURRENT.with(|cell| {
        *cell.borrow_mut() = Some(builder);
    });
    ScopeGuard(())
}

/// Runs `f` against the thread's current builder, if one is active.
/// Returns `None` if no scope is currently entered.
pub fn with_builder<R>(f: impl FnOnce(&mut GameBuilder) -> R) -> Option<R> {
    CURRENT.with(|cell| cell.borrow_mut().as_mut().map(f))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_is_active_only_while_guard_is_alive() {
        assert!(with_builder(|_| ()).is_none());
        {
            let _guard = enter(GameBuilder::new("demo"));
            assert!(with_builder(|_| ()).is_some());
        }
        assert!(with_builder(|_| ()).is_none());
    }

    #[test]
    fn scope_releases_on_panic_via_drop() {
        let result = std::panic::catch_unwind(|| {
            let _guard = enter(GameBuilder::new("demo"));
            panic!("boom");
        });
        assert!(result.is_err());
        assert!(with_builder(|_| ()).is_none());
    }
}
