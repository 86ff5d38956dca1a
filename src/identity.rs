//! Vendor identity storage.
//!
//! The header never touches browser storage directly; it goes through the
//! injected [`IdentityStore`], so the web build reads localStorage while
//! native builds and tests use the in-memory store.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

use crate::types::VendorData;

/// Storage keys written by the external login flow. This core only reads
/// them, and deletes them on sign-out.
pub const BUSINESS_KEY: &str = "vendorBusiness";
pub const EMAIL_KEY: &str = "vendorEmail";

const FALLBACK_BUSINESS: &str = "Unknown Business";
const FALLBACK_EMAIL: &str = "noemail@example.com";

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("browser storage is unavailable")]
    StorageUnavailable,
}

/// Key-value identity storage, injected into the header via context.
pub trait IdentityStore {
    fn get(&self, key: &str) -> Option<String>;
    fn remove(&self, key: &str);
}

/// Context handle so components can consume the store without knowing which
/// implementation the app picked.
#[derive(Clone)]
pub struct IdentityContext(pub Rc<dyn IdentityStore>);

/// In-memory store, used on native targets and as the test double.
#[derive(Default)]
pub struct MemoryIdentityStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(business: &str, email: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(BUSINESS_KEY.to_string(), business.to_string());
        store
            .values
            .borrow_mut()
            .insert(EMAIL_KEY.to_string(), email.to_string());
        store
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// localStorage-backed store for the web build. Storage failures degrade to
/// "absent" so the header falls back to placeholder identity.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
pub struct BrowserIdentityStore;

#[cfg(target_arch = "wasm32")]
impl BrowserIdentityStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, IdentityError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(IdentityError::StorageUnavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl IdentityStore for BrowserIdentityStore {
    fn get(&self, key: &str) -> Option<String> {
        match Self::storage() {
            Ok(storage) => storage.get_item(key).ok().flatten(),
            Err(err) => {
                dioxus::logger::tracing::warn!("identity read failed: {err}");
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        match Self::storage() {
            Ok(storage) => {
                if storage.remove_item(key).is_err() {
                    dioxus::logger::tracing::warn!("failed to remove key '{key}'");
                }
            }
            Err(err) => {
                dioxus::logger::tracing::warn!("identity remove failed: {err}");
            }
        }
    }
}

/// Synthesize the header's vendor data from stored identity, with the
/// documented fallbacks when the login flow never populated the keys.
pub fn stored_vendor(store: &dyn IdentityStore) -> VendorData {
    VendorData {
        business_name: store
            .get(BUSINESS_KEY)
            .unwrap_or_else(|| FALLBACK_BUSINESS.to_string()),
        email: store
            .get(EMAIL_KEY)
            .unwrap_or_else(|| FALLBACK_EMAIL.to_string()),
        avatar: None,
        notifications: 3,
        is_verified: true,
    }
}

/// Sign-out sequence: clear both identity keys, then run the caller's hook
/// (the optional external logout callback). Navigation to the login route is
/// the component's final step, after this returns.
pub fn sign_out(store: &dyn IdentityStore, after_clear: impl FnOnce()) {
    store.remove(BUSINESS_KEY);
    store.remove(EMAIL_KEY);
    after_clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn absent_keys_fall_back_to_placeholders() {
        let store = MemoryIdentityStore::new();
        let vendor = stored_vendor(&store);
        assert_eq!(vendor.business_name, "Unknown Business");
        assert_eq!(vendor.email, "noemail@example.com");
        assert_eq!(vendor.notifications, 3);
        assert!(vendor.is_verified);
    }

    #[test]
    fn stored_keys_are_used_when_present() {
        let store = MemoryIdentityStore::seeded("Acme Timber", "ops@acmetimber.com");
        let vendor = stored_vendor(&store);
        assert_eq!(vendor.business_name, "Acme Timber");
        assert_eq!(vendor.email, "ops@acmetimber.com");
    }

    #[test]
    fn partial_identity_falls_back_per_key() {
        let store = MemoryIdentityStore::new();
        store
            .values
            .borrow_mut()
            .insert(BUSINESS_KEY.to_string(), "Acme Timber".to_string());
        let vendor = stored_vendor(&store);
        assert_eq!(vendor.business_name, "Acme Timber");
        assert_eq!(vendor.email, "noemail@example.com");
    }

    #[test]
    fn sign_out_clears_keys_before_invoking_callback() {
        let store = MemoryIdentityStore::seeded("Acme Timber", "ops@acmetimber.com");
        let keys_cleared_at_callback = RefCell::new(None);

        sign_out(&store, || {
            let cleared =
                store.get(BUSINESS_KEY).is_none() && store.get(EMAIL_KEY).is_none();
            *keys_cleared_at_callback.borrow_mut() = Some(cleared);
        });

        assert_eq!(*keys_cleared_at_callback.borrow(), Some(true));
        assert!(store.get(BUSINESS_KEY).is_none());
        assert!(store.get(EMAIL_KEY).is_none());
    }

    #[test]
    fn sign_out_without_observer_does_not_panic() {
        let store = MemoryIdentityStore::new();
        sign_out(&store, || {});
        assert!(store.get(BUSINESS_KEY).is_none());
    }
}
