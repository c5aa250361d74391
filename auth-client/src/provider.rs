//! Session-provider contract and subscription plumbing.
//!
//! This module defines the identity-service operations the views consume.
//! The contract can be implemented by the production HTTP client as well as
//! by in-memory doubles for tests.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use futures_util::future::LocalBoxFuture;

use crate::types::{AuthError, AuthEvent, Session};

/// Callback invoked with each auth state change.
pub type AuthChangeListener = Rc<dyn Fn(AuthEvent, Option<&Session>)>;

/// Identity-service operations authenticated views depend on.
pub trait SessionProvider {
    /// Register `listener` for auth state changes. Delivery stops as soon as
    /// the returned [`Subscription`] is dropped.
    fn on_auth_state_change(&self, listener: AuthChangeListener) -> Subscription;

    /// One-shot query for the current session. A missing session is a valid
    /// outcome, not an error.
    fn current_session(&self) -> LocalBoxFuture<'static, Option<Session>>;

    /// End the current session on the identity service.
    ///
    /// This is the only operation with an error path; its message is what
    /// reaches the user.
    fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), AuthError>>;
}

#[derive(Default)]
struct Listeners {
    next_id: Cell<u64>,
    table: RefCell<Vec<(u64, AuthChangeListener)>>,
}

/// Listener registry shared by provider implementations.
///
/// All delivery happens on the single-threaded UI event loop; interior
/// mutability is enough, no lock involved.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    inner: Rc<Listeners>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listener; it stays registered until the handle is dropped.
    pub fn subscribe(&self, listener: AuthChangeListener) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.table.borrow_mut().push((id, listener));
        Subscription {
            registry: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Deliver `(event, session)` to every registered listener.
    ///
    /// Dispatches to a snapshot of the current table, so a listener may
    /// unsubscribe (itself or others) mid-delivery.
    pub fn notify(&self, event: AuthEvent, session: Option<&Session>) {
        let snapshot: Vec<AuthChangeListener> = self
            .inner
            .table
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in snapshot {
            listener(event, session);
        }
    }

    /// Number of currently registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.table.borrow().len()
    }
}

/// RAII handle for a registered listener; unsubscribes on drop.
pub struct Subscription {
    registry: Weak<Listeners>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            inner.table.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}
