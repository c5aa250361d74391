//! Dashboard page - signed-in home showing account details and sign-out.

use auth_client::bootstrap::{self, SignOutOutcome};
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::auth::AuthContext;
use crate::components::use_toasts;
use crate::hooks::use_auth_session;
use crate::utils;

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let auth = use_context::<AuthContext>().expect("AuthContext not provided");
    let toasts = use_toasts();
    let auth_session = use_auth_session();
    let logging_out = use_state(|| false);

    let on_logout = {
        let auth = auth.clone();
        let toasts = toasts.clone();
        let logging_out = logging_out.clone();
        Callback::from(move |_: MouseEvent| {
            // A second sign-out while one is in flight is ignored
            if *logging_out {
                return;
            }
            logging_out.set(true);

            let provider = auth.provider();
            let toasts = toasts.clone();
            let logging_out = logging_out.clone();
            spawn_local(async move {
                match bootstrap::sign_out(provider).await {
                    SignOutOutcome::SignedOut => {
                        // Still logging out: navigation away happens via the
                        // auth-state listener once the SignedOut event lands
                        toasts.success("Logged out", "You've been successfully logged out.");
                    }
                    SignOutOutcome::Failed(message) => {
                        log::error!("Sign-out failed: {}", message);
                        toasts.error("Logout failed", &message);
                        logging_out.set(false);
                    }
                }
            });
        })
    };

    if auth_session.loading {
        return html! {
            <div class="loading">
                <div class="spinner"></div>
                <p>{ "Loading..." }</p>
            </div>
        };
    }

    html! {
        <div class="dashboard-container">
            <header class="dashboard-header">
                <h1>{ "Dashboard" }</h1>
                <button
                    class="header-button logout"
                    onclick={on_logout}
                    disabled={*logging_out}
                >
                    { if *logging_out { "Logging out..." } else { "Logout" } }
                </button>
            </header>

            <div class="dashboard-card">
                <div class="card-header">
                    <div class="card-badge">{ "👤" }</div>
                    <div>
                        <h2>{ "Welcome back!" }</h2>
                        <p class="card-subtitle">{ "You're successfully authenticated" }</p>
                    </div>
                </div>

                {
                    if let Some(user) = auth_session.user.as_ref() {
                        html! {
                            <div class="user-info">
                                <h3>{ "User Information" }</h3>
                                <p>
                                    <span class="field-label">{ "Email: " }</span>
                                    <span class="field-value">{ &user.email }</span>
                                </p>
                                <p>
                                    <span class="field-label">{ "User ID: " }</span>
                                    <span class="field-value">{ &user.id }</span>
                                </p>
                                <p>
                                    <span class="field-label">{ "Name: " }</span>
                                    <span class="field-value">
                                        { user.name.clone().unwrap_or_else(|| "Not provided".to_string()) }
                                    </span>
                                </p>
                                <p>
                                    <span class="field-label">{ "Account created: " }</span>
                                    <span class="field-value">
                                        { utils::format_created_at(&user.created_at) }
                                    </span>
                                </p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <div class="session-status">
                    <h3>{ "Session Status" }</h3>
                    <div class="status-row">
                        <span class="status-dot active"></span>
                        <span class="status-text">{ "Active session" }</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
