//! Browser storage and location helpers

use activity_points_core::constants::ROLE_STORAGE_KEY;
use activity_points_core::{Role, RoleStore, StoreError};

fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?
        .local_storage()
        .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?
        .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))
}

// ============================================================================
// Role Flag
// ============================================================================

/// Role flag kept in `localStorage` under the shared key
#[derive(Debug, Default)]
pub struct LocalStorageRoleStore;

impl RoleStore for LocalStorageRoleStore {
    fn load(&self) -> Result<Option<Role>, StoreError> {
        let value = local_storage()?
            .get_item(ROLE_STORAGE_KEY)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))?;
        value.map(|v| v.parse::<Role>()).transpose()
    }

    fn save(&mut self, role: Role) -> Result<(), StoreError> {
        local_storage()?
            .set_item(ROLE_STORAGE_KEY, role.as_str())
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        local_storage()?
            .remove_item(ROLE_STORAGE_KEY)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }
}

// ============================================================================
// URL Helpers
// ============================================================================

/// Path the page was opened at (e.g. /staff/students)
pub fn get_path_from_location() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .filter(|p| !p.is_empty())
}

/// Reflect the current route in the address bar without reloading
pub fn replace_location_path(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path)) {
            tracing::warn!(path, "failed to update location: {:?}", e);
        }
    }
}

/// Open a same-origin document in a new tab
pub fn open_in_new_tab(path: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(path, "_blank") {
        tracing::warn!(path, "failed to open document: {:?}", e);
    }
}
