use serde::{Deserialize, Serialize};

/// Vendor identity shown in the header. Normally synthesized from the
/// identity store at mount; callers can override it with an explicit prop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VendorData {
    pub business_name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub notifications: u32,
    pub is_verified: bool,
}

impl VendorData {
    /// First letter of the business name, used when no avatar image is set.
    pub fn avatar_initial(&self) -> String {
        self.business_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "?".to_string())
    }

    /// Badge text for the notification bell, capped at "9+".
    pub fn badge_label(&self) -> Option<String> {
        match self.notifications {
            0 => None,
            n if n > 9 => Some("9+".to_string()),
            n => Some(n.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationItem {
    pub id: u32,
    pub text: String,
    pub time_label: String,
    pub unread: bool,
}

/// Static notification feed. A real deployment would fetch these from the
/// notifications service; this core only renders them.
pub fn sample_notifications() -> Vec<NotificationItem> {
    vec![
        NotificationItem {
            id: 1,
            text: "New order #1042 received".to_string(),
            time_label: "2 min ago".to_string(),
            unread: true,
        },
        NotificationItem {
            id: 2,
            text: "Payout of $1,250.00 processed".to_string(),
            time_label: "1 hr ago".to_string(),
            unread: true,
        },
        NotificationItem {
            id: 3,
            text: "Product \"Walnut Desk\" is low on stock".to_string(),
            time_label: "3 hrs ago".to_string(),
            unread: true,
        },
        NotificationItem {
            id: 4,
            text: "Monthly statement is ready".to_string(),
            time_label: "Yesterday".to_string(),
            unread: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vendor(notifications: u32) -> VendorData {
        VendorData {
            business_name: "Acme Timber".to_string(),
            email: "ops@acmetimber.com".to_string(),
            avatar: None,
            notifications,
            is_verified: true,
        }
    }

    #[test]
    fn avatar_initial_is_uppercased_first_char() {
        let mut v = vendor(0);
        assert_eq!(v.avatar_initial(), "A");
        v.business_name = "birchworks".to_string();
        assert_eq!(v.avatar_initial(), "B");
        v.business_name = String::new();
        assert_eq!(v.avatar_initial(), "?");
    }

    #[test]
    fn badge_label_caps_at_nine() {
        assert_eq!(vendor(0).badge_label(), None);
        assert_eq!(vendor(3).badge_label(), Some("3".to_string()));
        assert_eq!(vendor(9).badge_label(), Some("9".to_string()));
        assert_eq!(vendor(27).badge_label(), Some("9+".to_string()));
    }

    #[test]
    fn sample_feed_has_unread_entries() {
        let feed = sample_notifications();
        assert!(!feed.is_empty());
        assert!(feed.iter().any(|n| n.unread));
        // ids are unique
        let mut ids: Vec<u32> = feed.iter().map(|n| n.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), feed.len());
    }
}
