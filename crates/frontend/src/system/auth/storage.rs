use web_sys::window;

const ADMIN_TOKEN_KEY: &str = "admin_token";
const ADMIN_USER_KEY: &str = "admin_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Mark the session as authenticated and remember the account record
pub fn save_session(user_json: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(ADMIN_TOKEN_KEY, "true");
        let _ = storage.set_item(ADMIN_USER_KEY, user_json);
    }
}

/// Whether an admin session marker is present
pub fn is_logged_in() -> bool {
    get_local_storage()
        .and_then(|s| s.get_item(ADMIN_TOKEN_KEY).ok().flatten())
        .is_some()
}

/// Clear the session marker and the stored account record
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ADMIN_TOKEN_KEY);
        let _ = storage.remove_item(ADMIN_USER_KEY);
    }
}
