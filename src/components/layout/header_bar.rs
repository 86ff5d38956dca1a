use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::identity::{self, IdentityContext};
use crate::state::MenuFlags;
use crate::types::{sample_notifications, VendorData};
use crate::Route;

const ICON_MENU: &str = r#"<svg viewBox="0 0 24 24" stroke="currentColor" stroke-width="2" fill="none"><line x1="3" y1="6" x2="21" y2="6"/><line x1="3" y1="12" x2="21" y2="12"/><line x1="3" y1="18" x2="21" y2="18"/></svg>"#;
const ICON_SEARCH: &str = r#"<svg viewBox="0 0 24 24" stroke="currentColor" stroke-width="2" fill="none"><circle cx="11" cy="11" r="8"/><line x1="21" y1="21" x2="16.65" y2="16.65"/></svg>"#;
const ICON_BELL: &str = r#"<svg viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5" fill="none"><path d="M18 8a6 6 0 0 0-12 0c0 7-3 9-3 9h18s-3-2-3-9"/><path d="M13.73 21a2 2 0 0 1-3.46 0"/></svg>"#;
const ICON_VERIFIED: &str = r##"<svg viewBox="0 0 24 24" fill="currentColor"><path d="M12 2l2.4 2.4 3.3-.5.5 3.3L20.6 9.6 22 12l-1.4 2.4.6 3.3-3.3.5L15.5 21.6 12 20l-3.5 1.6-2.4-3.4-3.3-.5.6-3.3L2 12l1.4-2.4-.5-3.3 3.3-.5L8.5 2.4 12 4z"/><polyline points="9 12 11 14 15 10" stroke="#fff" stroke-width="2" fill="none"/></svg>"##;
const ICON_SIGN_OUT: &str = r#"<svg viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5" fill="none"><path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/><polyline points="16 17 21 12 16 7"/><line x1="21" y1="12" x2="9" y2="12"/></svg>"#;
const ICON_CHEVRON_DOWN: &str = r#"<svg viewBox="0 0 24 24" stroke="currentColor" stroke-width="2" fill="none"><polyline points="6 9 12 15 18 9"/></svg>"#;

/// Top header bar: brand, search affordance, notification bell and the
/// vendor account menu. The sidebar-toggle button reports back to the shell
/// through `on_toggle_sidebar`; the header holds no sidebar state itself.
#[component]
pub fn HeaderBar(
    on_toggle_sidebar: EventHandler<()>,
    vendor: Option<VendorData>,
    on_logout: Option<EventHandler<()>>,
) -> Element {
    let identity_ctx = use_context::<IdentityContext>();
    let navigator = use_navigator();

    // Resolve vendor identity once at mount: explicit prop wins, otherwise
    // synthesize from the identity store with placeholder fallbacks.
    let vendor = use_hook({
        let identity_ctx = identity_ctx.clone();
        move || vendor.unwrap_or_else(|| identity::stored_vendor(identity_ctx.0.as_ref()))
    });

    let mut menus = use_signal(MenuFlags::default);
    let notifications = use_hook(sample_notifications);
    let unread = notifications.iter().filter(|n| n.unread).count();

    // Badge and avatar blocks, precomputed so the markup below stays flat
    let badge = match vendor.badge_label() {
        Some(label) => rsx! {
            span { class: "header-badge", "{label}" }
        },
        None => rsx! {},
    };

    let initial = vendor.avatar_initial();
    let avatar = match &vendor.avatar {
        Some(src) => rsx! {
            img { src: "{src}", alt: "{vendor.business_name}" }
        },
        None => rsx! { "{initial}" },
    };

    let handle_sign_out = {
        let identity_ctx = identity_ctx.clone();
        move |_: MouseEvent| {
            info!("vendor signed out");
            identity::sign_out(identity_ctx.0.as_ref(), || {
                if let Some(cb) = &on_logout {
                    cb.call(());
                }
            });
            navigator.push(Route::Login {});
        }
    };

    rsx! {
        header { class: "header-bar",
            div { class: "header-left",
                button {
                    class: "btn-icon-only header-burger",
                    aria_label: "Toggle navigation",
                    onclick: move |_| on_toggle_sidebar.call(()),
                    span { class: "header-icon", dangerous_inner_html: ICON_MENU }
                }
                div { class: "header-brand",
                    span { class: "header-logo", "VC" }
                    span { class: "header-title", "Vendor Console" }
                }
            }

            // search affordance only; behavior belongs to the search service
            div { class: "header-search",
                span { class: "header-icon", dangerous_inner_html: ICON_SEARCH }
                input {
                    r#type: "search",
                    class: "header-search-input",
                    placeholder: "Search products, orders…",
                }
            }

            div { class: "header-right",
                div { class: "header-dropdown-anchor",
                    button {
                        class: "btn-icon-only header-bell",
                        aria_label: "Notifications",
                        onclick: move |_| menus.write().toggle_notifications(),
                        span { class: "header-icon", dangerous_inner_html: ICON_BELL }
                        {badge}
                    }
                    if menus.read().notifications_open {
                        NotificationsDropdown { unread }
                    }
                }

                div { class: "header-dropdown-anchor",
                    button {
                        class: "header-profile",
                        onclick: move |_| menus.write().toggle_user_menu(),
                        span { class: "header-avatar", {avatar} }
                        span { class: "header-profile-name",
                            "{vendor.business_name}"
                            if vendor.is_verified {
                                span {
                                    class: "header-verified",
                                    dangerous_inner_html: ICON_VERIFIED,
                                }
                            }
                        }
                        span { class: "header-icon header-caret", dangerous_inner_html: ICON_CHEVRON_DOWN }
                    }
                    if menus.read().user_menu_open {
                        div { class: "header-dropdown header-user-menu",
                            div { class: "header-user-summary",
                                p { class: "header-user-business", "{vendor.business_name}" }
                                p { class: "header-user-email", "{vendor.email}" }
                            }
                            button {
                                class: "header-sign-out",
                                onclick: handle_sign_out,
                                span { class: "header-icon", dangerous_inner_html: ICON_SIGN_OUT }
                                "Sign out"
                            }
                        }
                    }
                }
            }

            // click-away region: present while either dropdown is open,
            // dismisses both
            if menus.read().any_open() {
                div {
                    class: "header-overlay",
                    onclick: move |_| menus.write().close_all(),
                }
            }
        }
    }
}

#[component]
fn NotificationsDropdown(unread: usize) -> Element {
    let notifications = use_hook(sample_notifications);

    rsx! {
        div { class: "header-dropdown header-notifications",
            div { class: "header-dropdown-title",
                span { "Notifications" }
                if unread > 0 {
                    span { class: "header-unread-count", "{unread} unread" }
                }
            }
            ul { class: "header-notification-list",
                for item in notifications.iter() {
                    li {
                        key: "{item.id}",
                        class: if item.unread { "header-notification unread" } else { "header-notification" },
                        p { class: "header-notification-text", "{item.text}" }
                        span { class: "header-notification-time", "{item.time_label}" }
                    }
                }
            }
        }
    }
}
