//! Wire types for the hosted identity service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile of the signed-in user, as reported by the identity service.
///
/// Views read these fields for display only; the service owns the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Service-issued opaque identifier
    pub id: String,
    pub email: String,
    /// Display name from the user's profile metadata, if any
    #[serde(default)]
    pub name: Option<String>,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// An active session issued by the identity service.
///
/// Opaque to the views: created, refreshed, and destroyed exclusively by the
/// service. Views hold a transient copy for rendering and never mutate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
    pub user: User,
}

/// Auth lifecycle events delivered to state-change subscribers.
///
/// Serialized in the identity service's wire spelling (`SIGNED_IN`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthEvent {
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

/// Errors surfaced by identity-service operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    /// Network or connection error
    #[error("Network error: {0}")]
    Network(String),
    /// Service returned an error status
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
}
