//! Persistent author cache.
//!
//! Entries are wrapped in a versioned envelope with a save timestamp, so a
//! schema bump or an old entry falls back to a network refresh instead of
//! being served forever.

use std::{cell::RefCell, collections::HashMap};

use serde::{Deserialize, Serialize};

use crate::{error::CacheError, models::Author};

/// Storage key for the enriched author collection.
pub const AUTHOR_CACHE_KEY: &str = "authorData";
/// Bump when [`Author`] changes shape.
pub const CACHE_VERSION: u32 = 1;
/// Default lifetime of a cached author collection.
pub const DEFAULT_CACHE_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// String key-value storage (`localStorage`, a JSON file, memory).
pub trait KeyValueStore {
    /// Stored value, or `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;
    /// Drop `key` if present.
    fn remove(&self, key: &str);
}

/// In-process store, used for `--no-cache` runs and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CacheEnvelope {
    version: u32,
    saved_at_ms: i64,
    authors: Vec<Author>,
}

/// Typed view over a [`KeyValueStore`] for the author collection.
pub struct AuthorCache<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
    ttl_ms: i64,
}

impl<'a, S: KeyValueStore + ?Sized> AuthorCache<'a, S> {
    /// Cache with the default 24h lifetime.
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            ttl_ms: DEFAULT_CACHE_TTL_MS,
        }
    }

    /// Override the lifetime of entries.
    pub fn with_ttl_ms(mut self, ttl_ms: i64) -> Self {
        self.ttl_ms = ttl_ms;
        self
    }

    /// Cached authors, unless the entry is missing, corrupt, from another
    /// schema version or older than the TTL.
    pub fn load(&self, now_ms: i64) -> Option<Vec<Author>> {
        let raw = self.store.get(AUTHOR_CACHE_KEY)?;
        let envelope: CacheEnvelope = match serde_json::from_str(&raw) {
            Ok(envelope) => envelope,
            Err(err) => {
                tracing::warn!("Ignoring unreadable author cache: {err}");
                return None;
            },
        };
        if envelope.version != CACHE_VERSION {
            tracing::debug!(
                "Ignoring author cache version {} (want {CACHE_VERSION})",
                envelope.version
            );
            return None;
        }
        let age_ms = now_ms.saturating_sub(envelope.saved_at_ms);
        if age_ms > self.ttl_ms {
            tracing::debug!("Author cache expired ({age_ms} ms old)");
            return None;
        }
        Some(envelope.authors)
    }

    /// Overwrite the cached collection.
    pub fn save(&self, authors: &[Author], now_ms: i64) -> Result<(), CacheError> {
        let envelope = CacheEnvelope {
            version: CACHE_VERSION,
            saved_at_ms: now_ms,
            authors: authors.to_vec(),
        };
        let raw =
            serde_json::to_string(&envelope).map_err(|err| CacheError::Encode(err.to_string()))?;
        self.store.set(AUTHOR_CACHE_KEY, &raw)
    }

    /// Forget the cached collection.
    pub fn clear(&self) {
        self.store.remove(AUTHOR_CACHE_KEY);
    }
}
