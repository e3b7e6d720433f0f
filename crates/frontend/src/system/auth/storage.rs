//! The three persistent session keys. Everything else is in-memory.

use contracts::system::auth::UserInfo;
use web_sys::window;

const USER_KEY: &str = "user";
const ACCESS_TOKEN_KEY: &str = "access";
const REFRESH_TOKEN_KEY: &str = "refresh";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn save_session(user: &UserInfo, access: &str, refresh: &str) {
    if let Some(storage) = get_local_storage() {
        if let Ok(user_json) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &user_json);
        }
        let _ = storage.set_item(ACCESS_TOKEN_KEY, access);
        let _ = storage.set_item(REFRESH_TOKEN_KEY, refresh);
    }
}

pub fn get_access_token() -> Option<String> {
    get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

pub fn get_user() -> Option<UserInfo> {
    let raw = get_local_storage()?.get_item(USER_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

/// Wipe the whole session. Called on logout and by the HTTP layer's 401
/// handler.
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(USER_KEY);
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(REFRESH_TOKEN_KEY);
    }
}
