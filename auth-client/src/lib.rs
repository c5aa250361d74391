//! Client-side abstraction over a hosted identity service.
//!
//! The service owns all actual authentication (credential checks, token
//! issuance, session persistence). This crate exposes the three operations
//! authenticated views depend on — auth-state subscription, a one-shot
//! session query, and sign-out — behind a substitutable trait, plus the
//! bootstrap control flow that keeps a view's session state consistent and
//! redirects when the user is not signed in.

pub mod bootstrap;
pub mod provider;
pub mod types;

pub use provider::{AuthChangeListener, ListenerRegistry, SessionProvider, Subscription};
pub use types::{AuthError, AuthEvent, Session, User};
