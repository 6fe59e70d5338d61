//! Observable state handles.
//!
//! SYSTEM CONTEXT
//! ==============
//! Deferred completions (account creation, bot replies) can resolve after the
//! page that started them is gone. Every write therefore goes through
//! [`StateHandle::apply`], which reports a disposed owner as `None` instead of
//! panicking, and callers treat that as a no-op.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::{GetUntracked, RwSignal, Update};

/// A handle to state owned by a single view.
pub trait StateHandle<T> {
    /// Mutate the state in place. Returns `None` if the owner has been disposed.
    fn apply<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;

    /// Clone the current value without subscribing. `None` once disposed.
    fn snapshot(&self) -> Option<T>;
}

impl<T> StateHandle<T> for RwSignal<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn apply<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Update::try_update(self, f)
    }

    fn snapshot(&self) -> Option<T> {
        GetUntracked::try_get_untracked(self)
    }
}

/// Single-threaded state container with explicit disposal.
///
/// Every successful [`StateHandle::apply`] bumps [`LocalStore::revision`],
/// which is the change notification for callers that are not driven by the
/// Leptos reactive graph.
#[derive(Debug)]
pub struct LocalStore<T> {
    inner: Rc<Inner<T>>,
}

#[derive(Debug)]
struct Inner<T> {
    value: RefCell<Option<T>>,
    revision: Cell<u64>,
}

impl<T> Clone for LocalStore<T> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<T: Default> Default for LocalStore<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> LocalStore<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self { inner: Rc::new(Inner { value: RefCell::new(Some(value)), revision: Cell::new(0) }) }
    }

    /// Drop the owned value. Later writes through any clone become no-ops.
    pub fn dispose(&self) {
        self.inner.value.borrow_mut().take();
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.inner.value.borrow().is_none()
    }

    /// Number of applied mutations since creation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.inner.revision.get()
    }

    /// Read the value through a closure. `None` once disposed.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.inner.value.borrow().as_ref().map(f)
    }
}

impl<T: Clone> StateHandle<T> for LocalStore<T> {
    fn apply<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        let out = self.inner.value.borrow_mut().as_mut().map(f);
        if out.is_some() {
            self.inner.revision.set(self.inner.revision.get() + 1);
        }
        out
    }

    fn snapshot(&self) -> Option<T> {
        self.inner.value.borrow().clone()
    }
}
