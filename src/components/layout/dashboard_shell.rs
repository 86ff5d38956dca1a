use dioxus::prelude::*;

use crate::components::layout::HeaderBar;
use crate::components::navigation::SideNav;
use crate::state::ShellState;
use crate::Route;

/// Router layout wrapping every dashboard page: header on top, side
/// navigation on the left, the active page in the outlet. Owns the only
/// piece of shared UI state, the sidebar-open flag.
#[component]
pub fn DashboardShell() -> Element {
    let mut shell = use_signal(ShellState::default);
    let sidebar_open = shell.read().sidebar_open;

    rsx! {
        div { class: "dashboard-container",
            HeaderBar { on_toggle_sidebar: move |_| shell.write().toggle_sidebar() }

            div { class: "dashboard-body",
                SideNav { expanded: sidebar_open }

                // small-viewport scrim behind the open sidebar; CSS hides it
                // on wide screens
                if sidebar_open {
                    div {
                        class: "sidenav-backdrop",
                        onclick: move |_| shell.write().toggle_sidebar(),
                    }
                }

                main { class: "content-area",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
