//! Scoped subscriptions.
//!
//! Everything the page controller registers with the browser (listeners,
//! observers, timers, pending frames) is paired with a disposer and collected
//! in a [`Scope`]. Disposing the scope, explicitly or by dropping it, tears the
//! registrations down in reverse order.

#[cfg(test)]
#[path = "scope_test.rs"]
mod scope_test;

type Disposer = Box<dyn FnOnce()>;

#[derive(Default)]
pub struct Scope {
    disposers: Vec<Disposer>,
}

impl Scope {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect registrations into a fresh scope.
    ///
    /// If `register` fails, whatever it registered before the failure is
    /// disposed and the error returned, so a half-finished setup leaves
    /// nothing behind.
    pub fn try_build<E>(register: impl FnOnce(&mut Scope) -> Result<(), E>) -> Result<Scope, E> {
        let mut scope = Self::new();
        register(&mut scope)?;
        Ok(scope)
    }

    /// Register a teardown action.
    pub fn on_dispose(&mut self, disposer: impl FnOnce() + 'static) {
        self.disposers.push(Box::new(disposer));
    }

    /// Keep `value` alive until the scope is disposed, then drop it.
    ///
    /// Suits handles whose `Drop` cancels them, such as timers.
    pub fn hold<T: 'static>(&mut self, value: T) {
        self.on_dispose(move || drop(value));
    }

    /// Move every registration of `other` into this scope.
    pub fn absorb(&mut self, mut other: Scope) {
        self.disposers.append(&mut other.disposers);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.disposers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.disposers.is_empty()
    }

    /// Run all disposers, most recent first. The scope is reusable afterwards.
    pub fn dispose(&mut self) {
        while let Some(disposer) = self.disposers.pop() {
            disposer();
        }
    }
}

impl Drop for Scope {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scope").field("registrations", &self.disposers.len()).finish()
    }
}
