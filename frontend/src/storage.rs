//! `localStorage`-backed [`KeyValueStore`].

use byline_shared::{CacheError, KeyValueStore};
use web_sys::{window, Storage};

/// The browser's persistent `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

fn local_storage() -> Option<Storage> {
    window().and_then(|win| win.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let storage = local_storage().ok_or(CacheError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| CacheError::Write(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Milliseconds since the epoch, for cache timestamps.
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}
