//! Client for the hosted identity service, plus its context injection.

use std::rc::Rc;

use auth_client::{
    AuthChangeListener, AuthError, AuthEvent, ListenerRegistry, Session, SessionProvider,
    Subscription,
};
use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;
use gloo_net::http::Request;
use serde::Deserialize;

use crate::utils;

/// Response body of `GET /api/auth/session`.
#[derive(Deserialize)]
struct SessionResponse {
    session: Option<Session>,
}

/// HTTP `SessionProvider` backed by the hosted identity service.
///
/// The service does not push state changes; listeners hear the events this
/// client itself produces, which today is the sign-out path.
pub struct HostedAuthClient {
    base_url: String,
    listeners: ListenerRegistry,
}

impl HostedAuthClient {
    /// Client against the origin the app is served from.
    pub fn new() -> Self {
        Self::with_base_url(utils::get_base_url())
    }

    /// Client against an explicit base URL.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            listeners: ListenerRegistry::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for HostedAuthClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionProvider for HostedAuthClient {
    fn on_auth_state_change(&self, listener: AuthChangeListener) -> Subscription {
        self.listeners.subscribe(listener)
    }

    fn current_session(&self) -> LocalBoxFuture<'static, Option<Session>> {
        let url = self.endpoint("/api/auth/session");
        async move {
            match Request::get(&url).send().await {
                Ok(response) if response.ok() => response
                    .json::<SessionResponse>()
                    .await
                    .ok()
                    .and_then(|body| body.session),
                // 401 and friends mean "not signed in", not a failure
                Ok(_) => None,
                Err(e) => {
                    log::error!("Failed to fetch current session: {:?}", e);
                    None
                }
            }
        }
        .boxed_local()
    }

    fn sign_out(&self) -> LocalBoxFuture<'static, Result<(), AuthError>> {
        let url = self.endpoint("/api/auth/signout");
        let listeners = self.listeners.clone();
        async move {
            match Request::post(&url).send().await {
                Ok(response) if response.ok() => {
                    listeners.notify(AuthEvent::SignedOut, None);
                    Ok(())
                }
                Ok(response) => {
                    let message = response.text().await.unwrap_or_default();
                    Err(AuthError::Server {
                        status: response.status(),
                        message,
                    })
                }
                Err(e) => Err(AuthError::Network(e.to_string())),
            }
        }
        .boxed_local()
    }
}

/// Session provider handed to the component tree at the app root.
///
/// Keeps the network-backed client substitutable: anything that implements
/// [`SessionProvider`] can stand in.
#[derive(Clone)]
pub struct AuthContext {
    provider: Rc<dyn SessionProvider>,
}

impl AuthContext {
    pub fn new(provider: Rc<dyn SessionProvider>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> Rc<dyn SessionProvider> {
        self.provider.clone()
    }
}

impl PartialEq for AuthContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.provider, &other.provider)
    }
}
