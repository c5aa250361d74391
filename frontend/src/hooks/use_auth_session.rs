//! Hook that tracks the current auth session and redirects when signed out.

use auth_client::bootstrap::{self, AuthUpdate};
use auth_client::{Session, User};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthContext;
use crate::Route;

/// Return value from the use_auth_session hook.
pub struct UseAuthSession {
    /// The signed-in user, if any
    pub user: Option<User>,
    /// The current session, if any
    pub session: Option<Session>,
    /// True until the initial session check resolves (never true again after)
    pub loading: bool,
}

/// Hook that keeps a page's view of the auth session live.
///
/// On mount the auth-state listener is registered first and the one-shot
/// session query issued second, so an event firing between the two cannot be
/// missed. Redirects to the auth entry route when no session exists or a
/// sign-out event arrives. The subscription is released when the component
/// unmounts; updates resolving after that are discarded.
///
/// # Returns
/// * `UseAuthSession` - current user/session and the initial loading flag
#[hook]
pub fn use_auth_session() -> UseAuthSession {
    let auth = use_context::<AuthContext>().expect("AuthContext not provided");
    let navigator = use_navigator().unwrap();
    let session = use_state(|| None::<Session>);
    let loading = use_state(|| true);

    {
        let session = session.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            let (bootstrap, initial_check) =
                bootstrap::start(auth.provider(), move |update| match update {
                    AuthUpdate::Session(value) => session.set(value),
                    AuthUpdate::Ready => loading.set(false),
                    AuthUpdate::RedirectToAuth => navigator.push(&Route::Auth),
                });
            spawn_local(initial_check);
            move || drop(bootstrap)
        });
    }

    UseAuthSession {
        user: session.as_ref().map(|s| s.user.clone()),
        session: (*session).clone(),
        loading: *loading,
    }
}
