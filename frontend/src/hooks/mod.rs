//! Custom Yew hooks for the frontend application.

mod use_auth_session;

pub use use_auth_session::{use_auth_session, UseAuthSession};
