//! Per-process TTL cache.
//!
//! [`TtlCache`] is a bounded key-value map whose entries expire a fixed time after they
//! were written. Expiry is checked lazily on read; there is no background sweeper. Each
//! process owns its own instances through [`AppState`](crate::server::model::app::AppState),
//! so cached values are a latency optimisation and never a source of truth.

use std::{
    collections::HashMap,
    hash::Hash,
    sync::{Arc, Mutex, MutexGuard},
    time::{Duration, Instant},
};

/// Size and lifetime limits for a [`TtlCache`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of live entries
    pub capacity: usize,
    /// Time an entry stays readable after `set`
    pub ttl: Duration,
}

impl CacheConfig {
    pub const DEFAULT_CAPACITY: usize = 512;
    pub const DEFAULT_TTL: Duration = Duration::from_secs(300);
    /// Longest TTL accepted from configuration
    pub const MAX_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: Self::DEFAULT_CAPACITY,
            ttl: Self::DEFAULT_TTL,
        }
    }
}

#[derive(Debug)]
struct Entry<V> {
    value: V,
    expires_at: Instant,
}

/// Bounded cache with time-based expiry, cheap to clone and share between handlers.
#[derive(Clone, Debug)]
pub struct TtlCache<K, V> {
    entries: Arc<Mutex<HashMap<K, Entry<V>>>>,
    config: CacheConfig,
}

impl<K, V> TtlCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            config,
        }
    }

    pub fn config(&self) -> CacheConfig {
        self.config
    }

    /// Returns a clone of the value for `key` if present and not expired.
    ///
    /// An expired entry found here is removed.
    pub fn get(&self, key: &K) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    /// Inserts or replaces the value for `key`.
    ///
    /// When the cache is full, expired entries are dropped first; if it is still full the
    /// entry closest to expiry is evicted. A zero capacity disables caching.
    pub fn set(&self, key: K, value: V) {
        self.set_at(key, value, Instant::now())
    }

    /// Removes the entry for `key`, returning whether one was present.
    pub fn invalidate(&self, key: &K) -> bool {
        self.lock().remove(key).is_some()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of stored entries, including expired ones not yet read.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get_at(&self, key: &K, now: Instant) -> Option<V> {
        let mut entries = self.lock();

        let expired = match entries.get(key) {
            Some(entry) if entry.expires_at > now => return Some(entry.value.clone()),
            Some(_) => true,
            None => false,
        };

        if expired {
            entries.remove(key);
        }

        None
    }

    fn set_at(&self, key: K, value: V, now: Instant) {
        if self.config.capacity == 0 {
            return;
        }

        // A TTL past the clock's range would never expire
        let Some(expires_at) = now.checked_add(self.config.ttl) else {
            return;
        };

        let mut entries = self.lock();

        if !entries.contains_key(&key) && entries.len() >= self.config.capacity {
            entries.retain(|_, entry| entry.expires_at > now);

            if entries.len() >= self.config.capacity {
                let oldest = entries
                    .iter()
                    .min_by_key(|(_, entry)| entry.expires_at)
                    .map(|(key, _)| key.clone());

                if let Some(oldest) = oldest {
                    entries.remove(&oldest);
                }
            }
        }

        entries.insert(
            key,
            Entry {
                value,
                expires_at,
            },
        );
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<K, Entry<V>>> {
        // Entries are inserted whole, so a poisoned map is still consistent
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
