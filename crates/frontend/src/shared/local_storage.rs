//! `window.localStorage` access; every call degrades to a no-op when storage
//! is unavailable (private mode, non-browser test runs).

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn get_item(key: &str) -> Option<String> {
    storage()?.get_item(key).ok().flatten()
}

pub fn set_item(key: &str, value: &str) {
    if let Some(storage) = storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("Failed to write '{}' to localStorage", key);
        }
    }
}

/// Read a JSON value stored under `key`
pub fn get_json<T: serde::de::DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get_item(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("Ignoring malformed localStorage entry '{}': {}", key, err);
            None
        }
    }
}

pub fn set_json<T: serde::Serialize>(key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => set_item(key, &raw),
        Err(err) => log::warn!("Failed to serialize '{}': {}", key, err),
    }
}
