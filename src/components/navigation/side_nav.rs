use dioxus::prelude::*;

use crate::components::navigation::nav_items::{NavSection, NAV_SECTIONS};
use crate::state::NavExpansion;

/// Collapsible side navigation. `expanded` is owned by the dashboard shell;
/// when false the nav renders icon-only and section toggles are inert.
#[component]
pub fn SideNav(expanded: bool) -> Element {
    let sections = use_signal(NavExpansion::default);

    rsx! {
        aside {
            class: if expanded { "sidenav" } else { "sidenav sidenav-collapsed" },

            nav { class: "sidenav-menu",
                for section in NAV_SECTIONS.iter() {
                    if section.is_parent() {
                        SideNavGroup {
                            section: section.clone(),
                            nav_expanded: expanded,
                            sections,
                        }
                    } else {
                        SideNavLeaf {
                            section: section.clone(),
                            nav_expanded: expanded,
                        }
                    }
                }
            }
        }
    }
}

/// A top-level entry with sub-items. Always a toggle, even when the section
/// also carries a direct route.
#[component]
fn SideNavGroup(
    section: NavSection,
    nav_expanded: bool,
    sections: Signal<NavExpansion>,
) -> Element {
    let key = section.key;
    let is_open = sections.read().is_open(key);
    let shows_children = nav_expanded && is_open;
    let mut sections = sections;

    rsx! {
        div { class: "sidenav-group",
            div {
                class: if shows_children { "sidenav-entry sidenav-entry-open" } else { "sidenav-entry" },
                role: "button",
                tabindex: "0",
                title: "{section.label}",
                aria_expanded: "{shows_children}",
                onclick: move |_| sections.write().toggle(key, nav_expanded),
                onkeydown: move |evt: Event<KeyboardData>| {
                    let k = evt.key();
                    if k == Key::Enter || k == Key::Character(" ".to_string()) {
                        evt.prevent_default();
                        sections.write().toggle(key, nav_expanded);
                    }
                },

                span { class: "sidenav-icon", dangerous_inner_html: section.icon }
                if nav_expanded {
                    span { class: "sidenav-label", "{section.label}" }
                    span { class: "sidenav-chevron", "▾" }
                }
            }

            // sub-items only exist in the DOM while the nav is expanded
            if shows_children {
                ul { class: "sidenav-sublist",
                    for item in section.children.iter() {
                        li {
                            Link {
                                to: item.route.clone(),
                                class: "sidenav-sublink",
                                active_class: "sidenav-link-active",
                                span { class: "sidenav-subicon", dangerous_inner_html: item.icon }
                                span { class: "sidenav-label", "{item.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// A top-level entry with no sub-items: a plain router link. Active-route
/// highlighting comes from the router's `active_class`.
#[component]
fn SideNavLeaf(section: NavSection, nav_expanded: bool) -> Element {
    // leaf sections always carry a route; guarded by nav_items tests
    let Some(route) = section.route.clone() else {
        return rsx! {};
    };

    rsx! {
        Link {
            to: route,
            class: "sidenav-entry sidenav-link",
            active_class: "sidenav-link-active",
            span { class: "sidenav-icon", dangerous_inner_html: section.icon }
            if nav_expanded {
                span { class: "sidenav-label", "{section.label}" }
            }
        }
    }
}
