//! Persistence and environment helpers for the app shell.

use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use serde::Serialize;
use web_sys::Url;

/// Storage key the bearer token persists under. The key is shared with the
/// deployed backend's expectations, so it stays un-namespaced.
pub(crate) const TOKEN_KEY: &str = "auth_token";

pub(crate) fn load_token() -> Option<String> {
    let value = LocalStorage::get::<String>(TOKEN_KEY).ok()?;
    if value.trim().is_empty() {
        return None;
    }
    Some(value)
}

pub(crate) fn persist_token(token: &str) {
    set_storage(TOKEN_KEY, token);
}

pub(crate) fn clear_token_storage() {
    LocalStorage::delete(TOKEN_KEY);
}

/// Derive the API base URL from the page origin. The Trunk dev server runs
/// on 8080 while the backend listens on 3000; any other port is assumed to
/// front the API itself. The backend mounts everything under `/api`.
pub(crate) fn api_base_url() -> String {
    let href = window()
        .location()
        .href()
        .unwrap_or_else(|_| "http://localhost:3000".to_string());

    if let Ok(url) = Url::new(&href) {
        let protocol = url.protocol();
        let host = url.hostname();
        let port = url.port();
        let mapped_port = match port.as_str() {
            "" => None,
            "8080" => Some("3000"),
            other => Some(other),
        };

        let mut base = format!("{protocol}//{host}");
        if let Some(port) = mapped_port {
            base.push(':');
            base.push_str(port);
        }
        base.push_str("/api");
        return base;
    }

    "http://localhost:3000/api".to_string()
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
