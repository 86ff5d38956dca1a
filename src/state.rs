//! UI state for the dashboard shell, kept as plain structs so the
//! interaction rules can be tested without a running renderer. Components
//! wrap these in signals.

use std::collections::HashMap;

/// State owned by the dashboard shell. The sidebar starts open.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShellState {
    pub sidebar_open: bool,
}

impl Default for ShellState {
    fn default() -> Self {
        Self { sidebar_open: true }
    }
}

impl ShellState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }
}

/// Header dropdown flags. The two dropdowns toggle independently and are not
/// mutually exclusive; the click-away overlay closes both at once.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuFlags {
    pub notifications_open: bool,
    pub user_menu_open: bool,
}

impl MenuFlags {
    pub fn toggle_notifications(&mut self) {
        self.notifications_open = !self.notifications_open;
    }

    pub fn toggle_user_menu(&mut self) {
        self.user_menu_open = !self.user_menu_open;
    }

    pub fn close_all(&mut self) {
        *self = Self::default();
    }

    pub fn any_open(&self) -> bool {
        self.notifications_open || self.user_menu_open
    }
}

/// Per-section expansion flags for the side navigation, keyed by section key.
/// Sections all start collapsed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavExpansion {
    open: HashMap<String, bool>,
}

impl NavExpansion {
    /// Flip one section's flag. Interaction is gated on the nav being in
    /// expanded mode; while collapsed this is a no-op.
    pub fn toggle(&mut self, key: &str, nav_expanded: bool) {
        if !nav_expanded {
            return;
        }
        let flag = self.open.entry(key.to_string()).or_insert(false);
        *flag = !*flag;
    }

    pub fn is_open(&self, key: &str) -> bool {
        self.open.get(key).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_starts_open_and_strictly_flips() {
        let mut shell = ShellState::default();
        assert!(shell.sidebar_open);

        // even number of toggles restores the initial value
        for _ in 0..4 {
            shell.toggle_sidebar();
        }
        assert!(shell.sidebar_open);

        // odd number inverts it
        shell.toggle_sidebar();
        assert!(!shell.sidebar_open);
    }

    #[test]
    fn dropdowns_toggle_independently() {
        let mut menus = MenuFlags::default();
        assert!(!menus.any_open());

        menus.toggle_notifications();
        assert!(menus.notifications_open);
        assert!(!menus.user_menu_open);

        // opening the user menu does not close the notifications dropdown
        menus.toggle_user_menu();
        assert!(menus.notifications_open);
        assert!(menus.user_menu_open);

        menus.toggle_notifications();
        assert!(!menus.notifications_open);
        assert!(menus.user_menu_open);
    }

    #[test]
    fn overlay_click_closes_both_dropdowns() {
        let mut menus = MenuFlags {
            notifications_open: true,
            user_menu_open: true,
        };
        menus.close_all();
        assert_eq!(menus, MenuFlags::default());

        // also when only one was open
        let mut menus = MenuFlags {
            notifications_open: false,
            user_menu_open: true,
        };
        assert!(menus.any_open());
        menus.close_all();
        assert!(!menus.any_open());
    }

    #[test]
    fn section_toggle_leaves_siblings_alone() {
        let mut nav = NavExpansion::default();
        nav.toggle("products", true);
        nav.toggle("finance", true);
        assert!(nav.is_open("products"));
        assert!(nav.is_open("finance"));
        assert!(!nav.is_open("orders"));

        nav.toggle("products", true);
        assert!(!nav.is_open("products"));
        assert!(nav.is_open("finance"));
    }

    #[test]
    fn toggle_is_gated_while_nav_collapsed() {
        let mut nav = NavExpansion::default();
        nav.toggle("orders", false);
        assert!(!nav.is_open("orders"));

        // stored state survives the collapsed no-op
        nav.toggle("orders", true);
        nav.toggle("orders", false);
        assert!(nav.is_open("orders"));
    }

    #[test]
    fn unknown_keys_read_as_collapsed() {
        let nav = NavExpansion::default();
        assert!(!nav.is_open("nonexistent"));
    }
}
