use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod csrf;
mod components {
    pub mod copy_button;
    pub mod nav;
}
mod pages {
    pub mod pricing;
}
mod donate {
    pub mod reward_models;
    pub mod reward_selector;
    pub mod donate;
}
mod billing {
    pub mod vat_models;
    pub mod vat_client;
    pub mod vat_autofill;
    pub mod billing_form;
    pub mod billing;
}

use components::nav::Nav;
use pages::pricing::Pricing;
use donate::donate::DonatePage;
use billing::billing::BillingPage;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/pricing")]
    Pricing,
    #[at("/donate")]
    Donate,
    #[at("/billing")]
    Billing,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::Pricing => {
            info!("Rendering Pricing page");
            html! { <Pricing /> }
        },
        Route::Donate => {
            info!("Rendering Donate page");
            html! { <DonatePage /> }
        },
        Route::Billing => {
            info!("Rendering Billing page");
            html! { <BillingPage /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <h1 class="not-found">{"Page not found"}</h1> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
