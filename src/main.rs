use dioxus::prelude::*;
use std::rc::Rc;

// Module Declarations
mod components;
mod identity;
mod pages;
mod state;
mod types;

use components::layout::DashboardShell;
use identity::{IdentityContext, IdentityStore};
use pages::{
    Dashboard, Invoices, Login, NewProduct, Orders, Payouts, Products, Returns, Support,
};

#[cfg(target_arch = "wasm32")]
use identity::BrowserIdentityStore as PlatformIdentityStore;
#[cfg(not(target_arch = "wasm32"))]
use identity::MemoryIdentityStore as PlatformIdentityStore;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(DashboardShell)]
        #[route("/")]
        Dashboard {},
        #[route("/products")]
        Products {},
        #[route("/products/new")]
        NewProduct {},
        #[route("/orders")]
        Orders {},
        #[route("/orders/returns")]
        Returns {},
        #[route("/finance/payouts")]
        Payouts {},
        #[route("/finance/invoices")]
        Invoices {},
        #[route("/support")]
        Support {},
    #[end_layout]
    #[route("/login")]
    Login {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // identity storage is injected here so the components never reach for
    // ambient browser globals themselves
    use_context_provider(|| {
        IdentityContext(Rc::new(PlatformIdentityStore::new()) as Rc<dyn IdentityStore>)
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
