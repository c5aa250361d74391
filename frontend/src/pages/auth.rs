use yew::prelude::*;

use crate::utils;

/// Auth entry route. Sign-in itself lives on the hosted identity service;
/// this page forwards the browser there.
#[function_component(AuthPage)]
pub fn auth_page() -> Html {
    use_effect_with((), |_| {
        let window = web_sys::window().expect("no global `window` exists");
        let sign_in_url = utils::api_url("/api/auth/sign-in");
        let _ = window.location().set_href(&sign_in_url);
        || ()
    });

    html! {
        <div class="loading">
            <div class="spinner"></div>
            <p>{ "Redirecting to sign-in..." }</p>
        </div>
    }
}
