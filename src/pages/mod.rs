//! Placeholder page bodies. The routing layer mounts these inside the
//! dashboard shell's outlet; real page content is out of scope for the
//! presentation core.

use dioxus::prelude::*;

#[component]
fn PagePlaceholder(title: &'static str, blurb: &'static str) -> Element {
    rsx! {
        section { class: "page",
            h2 { class: "page-title", "{title}" }
            p { class: "page-blurb", "{blurb}" }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        PagePlaceholder {
            title: "Dashboard",
            blurb: "Sales, traffic and inventory summaries land here.",
        }
    }
}

#[component]
pub fn Products() -> Element {
    rsx! {
        PagePlaceholder { title: "All products", blurb: "Your product catalogue." }
    }
}

#[component]
pub fn NewProduct() -> Element {
    rsx! {
        PagePlaceholder { title: "Add product", blurb: "Create a new listing." }
    }
}

#[component]
pub fn Orders() -> Element {
    rsx! {
        PagePlaceholder { title: "All orders", blurb: "Open and fulfilled orders." }
    }
}

#[component]
pub fn Returns() -> Element {
    rsx! {
        PagePlaceholder { title: "Returns", blurb: "Return and refund requests." }
    }
}

#[component]
pub fn Payouts() -> Element {
    rsx! {
        PagePlaceholder { title: "Payouts", blurb: "Settlement history and upcoming payouts." }
    }
}

#[component]
pub fn Invoices() -> Element {
    rsx! {
        PagePlaceholder { title: "Invoices", blurb: "Monthly statements and invoices." }
    }
}

#[component]
pub fn Support() -> Element {
    rsx! {
        PagePlaceholder { title: "Support", blurb: "Help centre and contact options." }
    }
}

/// Post-sign-out landing page. The actual login flow is owned by the auth
/// service; this core only navigates here.
#[component]
pub fn Login() -> Element {
    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                h2 { "Signed out" }
                p { "Sign in again to manage your store." }
            }
        }
    }
}
