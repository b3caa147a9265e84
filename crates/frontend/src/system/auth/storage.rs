use contracts::system::auth::UserInfo;
use web_sys::window;

use crate::shared::config::app_config;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn save_session(token: &str, user: &UserInfo) {
    let auth = &app_config().auth;
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(&auth.token_key, token);
        match serde_json::to_string(user) {
            Ok(json) => {
                let _ = storage.set_item(&auth.user_key, &json);
            }
            Err(e) => log::warn!("Could not store user info: {}", e),
        }
    }
}

pub fn get_token() -> Option<String> {
    get_local_storage()?
        .get_item(&app_config().auth.token_key)
        .ok()?
        .filter(|t| !t.is_empty())
}

/// User stored next to the token at sign-in. A corrupt entry reads as absent.
pub fn get_user() -> Option<UserInfo> {
    let json = get_local_storage()?
        .get_item(&app_config().auth.user_key)
        .ok()??;
    serde_json::from_str(&json).ok()
}

pub fn clear_session() {
    let auth = &app_config().auth;
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(&auth.token_key);
        let _ = storage.remove_item(&auth.user_key);
    }
}
