mod auth;
mod components;
mod hooks;
mod pages;
pub mod utils;

use std::rc::Rc;

use pages::{auth::AuthPage, dashboard::DashboardPage, landing::LandingPage};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::{AuthContext, HostedAuthClient};
use crate::components::ToastProvider;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/auth")]
    Auth,
    #[at("/dashboard")]
    Dashboard,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <LandingPage /> },
        Route::Auth => html! { <AuthPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    // One provider instance for the whole app, injected through context so
    // pages and hooks never reach for a global client
    let auth = use_state(|| AuthContext::new(Rc::new(HostedAuthClient::new())));

    html! {
        <ContextProvider<AuthContext> context={(*auth).clone()}>
            <ToastProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ToastProvider>
        </ContextProvider<AuthContext>>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
