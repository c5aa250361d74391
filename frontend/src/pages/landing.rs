use yew::prelude::*;
use yew_router::prelude::*;

use crate::{Route, VERSION};

/// Public landing page. Stateless: both actions lead to the auth entry
/// route, nothing else happens here.
#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let navigator = use_navigator().unwrap();

    let go_to_auth = Callback::from(move |_| navigator.push(&Route::Auth));

    html! {
        <div class="landing-container">
            <div class="landing-content">
                <div class="landing-header">
                    <div class="landing-badge">{ "🛡" }</div>
                    <h1>{ "Secure Authentication" }</h1>
                    <p class="tagline">
                        { "Modern authentication backed by a hosted identity service" }
                    </p>
                </div>

                <div class="landing-features">
                    <div class="feature">
                        <h3>{ "🔒 Secure" }</h3>
                        <p>{ "Enterprise-grade security for every account" }</p>
                    </div>
                    <div class="feature">
                        <h3>{ "⚡ Fast" }</h3>
                        <p>{ "Lightning-fast sign-in from any device" }</p>
                    </div>
                    <div class="feature">
                        <h3>{ "🛡 Reliable" }</h3>
                        <p>{ "99.9% uptime guaranteed" }</p>
                    </div>
                </div>

                <div class="landing-actions">
                    <button class="primary-button" onclick={go_to_auth.clone()}>
                        { "Get Started" }
                    </button>
                    <button class="secondary-button" onclick={go_to_auth}>
                        { "Sign In" }
                    </button>
                </div>

                <div class="landing-footer">
                    <span class="version">{ format!("v{}", VERSION) }</span>
                </div>
            </div>
        </div>
    }
}
