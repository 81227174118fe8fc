//! Browser Helpers
//!
//! Thin wrappers over `window` for navigation, session storage, scrolling and
//! alerts.

use web_sys::{HtmlElement, Storage};

use crate::error::{ApiError, ApiResult};
use crate::models::UserType;

const USER_TYPE_KEY: &str = "complaint-desk.user_type";

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

pub fn navigate(path: &str) {
    let Some(window) = web_sys::window() else { return };
    if let Err(e) = window.location().set_href(path) {
        log::error!("[NAV] failed to navigate to {}: {:?}", path, e);
    }
}

/// Blocking alert; silently dropped when no window exists
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Scroll so the element sits just below the top edge
pub fn scroll_to_element(el: &HtmlElement) {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, f64::from(el.offset_top() - 20));
    }
}

fn session_storage() -> ApiResult<Storage> {
    web_sys::window()
        .ok_or(ApiError::Unavailable("window"))?
        .session_storage()
        .map_err(ApiError::from_js)?
        .ok_or(ApiError::Unavailable("sessionStorage"))
}

/// Keep the role reported by the last successful login
pub fn remember_user_type(user_type: UserType) {
    let result = session_storage().and_then(|s| {
        s.set_item(USER_TYPE_KEY, user_type.as_str()).map_err(ApiError::from_js)
    });
    if let Err(e) = result {
        log::warn!("[SESSION] could not store user type: {}", e);
    }
}

pub fn stored_user_type() -> Option<UserType> {
    session_storage()
        .ok()?
        .get_item(USER_TYPE_KEY)
        .ok()
        .flatten()
        .and_then(|raw| UserType::parse(&raw))
}

pub fn forget_user_type() {
    if let Ok(storage) = session_storage() {
        let _ = storage.remove_item(USER_TYPE_KEY);
    }
}
