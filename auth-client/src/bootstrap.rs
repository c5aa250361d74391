//! Session bootstrap and sign-out control flow for authenticated views.
//!
//! A view that requires a signed-in user calls [`start`] on mount: the
//! auth-state listener is registered first, then the one-shot session query
//! runs, so an event firing between the two cannot be missed. Updates are
//! pushed through a callback as plain assignments; the owning view maps them
//! onto its local state and navigation.

use std::cell::Cell;
use std::rc::Rc;

use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;

use crate::provider::{SessionProvider, Subscription};
use crate::types::{AuthEvent, Session};

/// State updates pushed to the owning view while the bootstrap is live.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthUpdate {
    /// The current session changed; overwrite local session and derived
    /// user state (last-write-wins).
    Session(Option<Session>),
    /// The initial session check resolved; the view can stop showing its
    /// loading state. Emitted exactly once.
    Ready,
    /// The user is, or became, unauthenticated; navigate to the auth entry
    /// route.
    RedirectToAuth,
}

/// Keeps the auth-state subscription alive.
///
/// Dropping it releases the subscription and suppresses any late async
/// updates, so a query or event resolving after teardown cannot write into
/// destroyed view state.
pub struct Bootstrap {
    live: Rc<Cell<bool>>,
    _subscription: Subscription,
}

impl Drop for Bootstrap {
    fn drop(&mut self) {
        self.live.set(false);
    }
}

/// Start tracking auth state for a view.
///
/// The change listener is registered before this function returns, strictly
/// ahead of the one-shot session query carried by the returned future. The
/// caller spawns that future; its resolution may race listener callbacks,
/// which is tolerated since every update is a last-write-wins assignment.
///
/// Redirect rules: a `SignedOut` event always emits
/// [`AuthUpdate::RedirectToAuth`]; the initial query emits it when it
/// resolves without a session, and emits [`AuthUpdate::Ready`] regardless of
/// outcome.
pub fn start<F>(
    provider: Rc<dyn SessionProvider>,
    on_update: F,
) -> (Bootstrap, LocalBoxFuture<'static, ()>)
where
    F: Fn(AuthUpdate) + 'static,
{
    let live = Rc::new(Cell::new(true));
    let on_update = Rc::new(on_update);

    let subscription = {
        let live = live.clone();
        let on_update = on_update.clone();
        provider.on_auth_state_change(Rc::new(move |event, session| {
            if !live.get() {
                return;
            }
            on_update(AuthUpdate::Session(session.cloned()));
            if event == AuthEvent::SignedOut {
                on_update(AuthUpdate::RedirectToAuth);
            }
        }))
    };

    let initial_check = {
        let live = live.clone();
        async move {
            let session = provider.current_session().await;
            if !live.get() {
                return;
            }
            let signed_out = session.is_none();
            on_update(AuthUpdate::Session(session));
            if signed_out {
                on_update(AuthUpdate::RedirectToAuth);
            }
            on_update(AuthUpdate::Ready);
        }
        .boxed_local()
    };

    (
        Bootstrap {
            live,
            _subscription: subscription,
        },
        initial_check,
    )
}

/// Outcome of a sign-out attempt, ready for the view to notify on.
#[derive(Debug, Clone, PartialEq)]
pub enum SignOutOutcome {
    /// The service ended the session. Navigation away is expected to happen
    /// through the auth-state listener once the `SignedOut` event lands, not
    /// here.
    SignedOut,
    /// The service rejected the sign-out; the message is its error text.
    Failed(String),
}

/// Ask the identity service to end the current session.
pub async fn sign_out(provider: Rc<dyn SessionProvider>) -> SignOutOutcome {
    match provider.sign_out().await {
        Ok(()) => SignOutOutcome::SignedOut,
        Err(err) => SignOutOutcome::Failed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{AuthChangeListener, ListenerRegistry};
    use crate::types::{AuthError, User};
    use chrono::{TimeZone, Utc};
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Scripted provider double: records call order, serves a canned
    /// session, and lets tests fire auth events by hand.
    struct ScriptedProvider {
        calls: RefCell<Vec<&'static str>>,
        session: Option<Session>,
        sign_out_result: Result<(), AuthError>,
        listeners: ListenerRegistry,
    }

    impl ScriptedProvider {
        fn new(session: Option<Session>) -> Rc<Self> {
            Rc::new(Self {
                calls: RefCell::new(Vec::new()),
                session,
                sign_out_result: Ok(()),
                listeners: ListenerRegistry::new(),
            })
        }

        fn failing_sign_out(err: AuthError) -> Rc<Self> {
            Rc::new(Self {
                calls: RefCell::new(Vec::new()),
                session: None,
                sign_out_result: Err(err),
                listeners: ListenerRegistry::new(),
            })
        }

        fn fire(&self, event: AuthEvent, session: Option<&Session>) {
            self.listeners.notify(event, session);
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.borrow().clone()
        }
    }

    impl SessionProvider for ScriptedProvider {
        fn on_auth_state_change(&self, listener: AuthChangeListener) -> Subscription {
            self.calls.borrow_mut().push("subscribe");
            self.listeners.subscribe(listener)
        }

        fn current_session(&self) -> LocalBoxFuture<'static, Option<Session>> {
            self.calls.borrow_mut().push("get_session");
            let session = self.session.clone();
            async move { session }.boxed_local()
        }

        fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), AuthError>> {
            self.calls.borrow_mut().push("sign_out");
            let result = self.sign_out_result.clone();
            async move { result }.boxed_local()
        }
    }

    fn session(id: &str, email: &str) -> Session {
        Session {
            access_token: "jwt".to_string(),
            expires_at: Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
            user: User {
                id: id.to_string(),
                email: email.to_string(),
                name: None,
                created_at: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            },
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<AuthUpdate>>>, impl Fn(AuthUpdate) + 'static) {
        let updates = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let updates = updates.clone();
            move |update| updates.borrow_mut().push(update)
        };
        (updates, sink)
    }

    fn redirect_count(updates: &[AuthUpdate]) -> usize {
        updates
            .iter()
            .filter(|u| **u == AuthUpdate::RedirectToAuth)
            .count()
    }

    #[test]
    fn listener_registered_before_session_query() {
        let provider = ScriptedProvider::new(Some(session("u1", "a@b.com")));
        let (_updates, sink) = recorder();

        let (_bootstrap, initial_check) = start(provider.clone(), sink);
        // Subscribed synchronously, before the query future even runs
        assert_eq!(provider.calls(), vec!["subscribe"]);

        block_on(initial_check);
        assert_eq!(provider.calls(), vec!["subscribe", "get_session"]);
    }

    #[test]
    fn active_session_mount() {
        let provider = ScriptedProvider::new(Some(session("u1", "a@b.com")));
        let (updates, sink) = recorder();

        let (_bootstrap, initial_check) = start(provider, sink);
        block_on(initial_check);

        let updates = updates.borrow();
        assert_eq!(redirect_count(&updates), 0);
        match &updates[..] {
            [AuthUpdate::Session(Some(s)), AuthUpdate::Ready] => {
                assert_eq!(s.user.email, "a@b.com");
                assert_eq!(s.user.id, "u1");
            }
            other => panic!("unexpected updates: {:?}", other),
        }
    }

    #[test]
    fn missing_session_redirects_once_and_clears_loading() {
        let provider = ScriptedProvider::new(None);
        let (updates, sink) = recorder();

        let (_bootstrap, initial_check) = start(provider, sink);
        block_on(initial_check);

        assert_eq!(
            *updates.borrow(),
            vec![
                AuthUpdate::Session(None),
                AuthUpdate::RedirectToAuth,
                AuthUpdate::Ready,
            ]
        );
    }

    #[test]
    fn signed_out_event_redirects_before_loading_clears() {
        let provider = ScriptedProvider::new(Some(session("u1", "a@b.com")));
        let (updates, sink) = recorder();

        // Event arrives while the initial query is still in flight
        let (_bootstrap, initial_check) = start(provider.clone(), sink);
        provider.fire(AuthEvent::SignedOut, None);

        assert_eq!(
            *updates.borrow(),
            vec![AuthUpdate::Session(None), AuthUpdate::RedirectToAuth]
        );

        block_on(initial_check);
        assert_eq!(redirect_count(&updates.borrow()), 1);
    }

    #[test]
    fn listener_overwrites_session_unconditionally() {
        let provider = ScriptedProvider::new(Some(session("u1", "a@b.com")));
        let (updates, sink) = recorder();

        let (_bootstrap, initial_check) = start(provider.clone(), sink);
        block_on(initial_check);

        let refreshed = session("u1", "new@b.com");
        provider.fire(AuthEvent::TokenRefreshed, Some(&refreshed));

        let updates = updates.borrow();
        match updates.last() {
            Some(AuthUpdate::Session(Some(s))) => assert_eq!(s.user.email, "new@b.com"),
            other => panic!("unexpected last update: {:?}", other),
        }
        assert_eq!(redirect_count(&updates), 0);
    }

    #[test]
    fn no_updates_after_bootstrap_dropped() {
        let provider = ScriptedProvider::new(Some(session("u1", "a@b.com")));
        let (updates, sink) = recorder();

        let (bootstrap, initial_check) = start(provider.clone(), sink);
        drop(bootstrap);

        // Subscription released immediately
        assert_eq!(provider.listeners.listener_count(), 0);
        provider.fire(AuthEvent::SignedOut, None);

        // A query resolving after teardown is discarded too
        block_on(initial_check);
        assert!(updates.borrow().is_empty());
    }

    #[test]
    fn sign_out_success() {
        let provider = ScriptedProvider::new(Some(session("u1", "a@b.com")));
        let outcome = block_on(sign_out(provider.clone()));

        assert_eq!(outcome, SignOutOutcome::SignedOut);
        assert_eq!(provider.calls(), vec!["sign_out"]);
    }

    #[test]
    fn sign_out_failure_carries_provider_message() {
        let provider =
            ScriptedProvider::failing_sign_out(AuthError::Network("network down".to_string()));
        let outcome = block_on(sign_out(provider));

        match outcome {
            SignOutOutcome::Failed(message) => assert!(message.contains("network down")),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
