//! Static two-level navigation tree for the vendor console.

use crate::Route;

// Clean SVG icons as inline strings
const ICON_DASHBOARD: &str = r#"<svg viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5" fill="none"><rect x="3" y="3" width="7" height="9" rx="1"/><rect x="14" y="3" width="7" height="5" rx="1"/><rect x="14" y="12" width="7" height="9" rx="1"/><rect x="3" y="16" width="7" height="5" rx="1"/></svg>"#;
const ICON_PRODUCTS: &str = r#"<svg viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5" fill="none"><path d="M21 8l-9-5-9 5 9 5 9-5zM3 8v8l9 5 9-5V8"/><line x1="12" y1="13" x2="12" y2="21"/></svg>"#;
const ICON_ORDERS: &str = r#"<svg viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5" fill="none"><path d="M6 2L3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4H6z"/><line x1="3" y1="6" x2="21" y2="6"/><path d="M16 10a4 4 0 0 1-8 0"/></svg>"#;
const ICON_FINANCE: &str = r#"<svg viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5" fill="none"><line x1="12" y1="2" x2="12" y2="22"/><path d="M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"/></svg>"#;
const ICON_SUPPORT: &str = r#"<svg viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5" fill="none"><circle cx="12" cy="12" r="10"/><path d="M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3"/><line x1="12" y1="17" x2="12" y2="17.01"/></svg>"#;
const ICON_LIST: &str = r#"<svg viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5" fill="none"><line x1="8" y1="6" x2="21" y2="6"/><line x1="8" y1="12" x2="21" y2="12"/><line x1="8" y1="18" x2="21" y2="18"/><line x1="3" y1="6" x2="3.01" y2="6"/><line x1="3" y1="12" x2="3.01" y2="12"/><line x1="3" y1="18" x2="3.01" y2="18"/></svg>"#;
const ICON_ADD: &str = r#"<svg viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5" fill="none"><circle cx="12" cy="12" r="10"/><line x1="12" y1="8" x2="12" y2="16"/><line x1="8" y1="12" x2="16" y2="12"/></svg>"#;
const ICON_RETURNS: &str = r#"<svg viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5" fill="none"><polyline points="9 14 4 9 9 4"/><path d="M4 9h11a5 5 0 0 1 0 10h-4"/></svg>"#;
const ICON_PAYOUTS: &str = r#"<svg viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5" fill="none"><rect x="2" y="5" width="20" height="14" rx="2"/><line x1="2" y1="10" x2="22" y2="10"/></svg>"#;
const ICON_INVOICES: &str = r#"<svg viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5" fill="none"><path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8l-6-6z"/><polyline points="14 2 14 8 20 8"/><line x1="8" y1="13" x2="16" y2="13"/><line x1="8" y1="17" x2="16" y2="17"/></svg>"#;

#[derive(Clone, Debug, PartialEq)]
pub struct NavSection {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// Direct target for leaf sections. Ignored when `children` is
    /// non-empty: a section with sub-items is always a toggle.
    pub route: Option<Route>,
    pub children: &'static [NavSubItem],
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavSubItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub route: Route,
}

impl NavSection {
    pub fn is_parent(&self) -> bool {
        !self.children.is_empty()
    }
}

pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection {
        key: "dashboard",
        label: "Dashboard",
        icon: ICON_DASHBOARD,
        route: Some(Route::Dashboard {}),
        children: &[],
    },
    NavSection {
        key: "products",
        label: "Products",
        icon: ICON_PRODUCTS,
        route: None,
        children: &[
            NavSubItem {
                label: "All products",
                icon: ICON_LIST,
                route: Route::Products {},
            },
            NavSubItem {
                label: "Add product",
                icon: ICON_ADD,
                route: Route::NewProduct {},
            },
        ],
    },
    NavSection {
        key: "orders",
        label: "Orders",
        icon: ICON_ORDERS,
        // carries a direct path too, but the sub-items win
        route: Some(Route::Orders {}),
        children: &[
            NavSubItem {
                label: "All orders",
                icon: ICON_LIST,
                route: Route::Orders {},
            },
            NavSubItem {
                label: "Returns",
                icon: ICON_RETURNS,
                route: Route::Returns {},
            },
        ],
    },
    NavSection {
        key: "finance",
        label: "Finance",
        icon: ICON_FINANCE,
        route: None,
        children: &[
            NavSubItem {
                label: "Payouts",
                icon: ICON_PAYOUTS,
                route: Route::Payouts {},
            },
            NavSubItem {
                label: "Invoices",
                icon: ICON_INVOICES,
                route: Route::Invoices {},
            },
        ],
    },
    NavSection {
        key: "support",
        label: "Support",
        icon: ICON_SUPPORT,
        route: Some(Route::Support {}),
        children: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_has_the_five_expected_sections() {
        let keys: Vec<&str> = NAV_SECTIONS.iter().map(|s| s.key).collect();
        assert_eq!(
            keys,
            vec!["dashboard", "products", "orders", "finance", "support"]
        );
    }

    #[test]
    fn sections_with_children_are_toggles_even_with_a_direct_route() {
        let orders = NAV_SECTIONS.iter().find(|s| s.key == "orders").unwrap();
        assert!(orders.route.is_some());
        assert!(orders.is_parent());

        let dashboard = NAV_SECTIONS.iter().find(|s| s.key == "dashboard").unwrap();
        assert!(!dashboard.is_parent());
        assert!(dashboard.route.is_some());
    }

    #[test]
    fn leaf_sections_always_have_a_route() {
        for section in NAV_SECTIONS.iter().filter(|s| !s.is_parent()) {
            assert!(
                section.route.is_some(),
                "leaf section '{}' has nowhere to link",
                section.key
            );
        }
    }

    #[test]
    fn every_entry_carries_an_inline_svg_icon() {
        for section in NAV_SECTIONS {
            assert!(section.icon.starts_with("<svg"), "section {}", section.key);
            for item in section.children {
                assert!(item.icon.starts_with("<svg"), "sub-item {}", item.label);
            }
        }
    }

    #[test]
    fn section_keys_are_unique() {
        let mut keys: Vec<&str> = NAV_SECTIONS.iter().map(|s| s.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), NAV_SECTIONS.len());
    }
}
