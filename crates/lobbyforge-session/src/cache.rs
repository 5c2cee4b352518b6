//! The session cache: an expiring key → value map.
//!
//! # Concurrency note
//!
//! The cache is shared directly between request tasks rather than owned by
//! one task, so it carries its own reader/writer lock. Reads take the
//! shared side; `set`, `remove`, and sweeping take the exclusive side.
//! Every critical section is a single map operation and never waits on
//! anything else.
//!
//! # Time
//!
//! Expiry uses Tokio's monotonic [`Instant`]. Outside a runtime it is the
//! plain system monotonic clock; inside a runtime with a paused clock
//! (tests), it follows `tokio::time::advance`.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Smallest sweep period accepted by [`SessionCache::spawn_sweeper`].
const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(1);

/// Expiry used when `now + ttl` doesn't fit in an `Instant`: about 30 years.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// A stored value and the instant it stops being readable.
#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    expires_at: Instant,
}

impl<V> Entry<V> {
    /// An entry is live up to and including its expiry instant.
    fn is_live(&self, now: Instant) -> bool {
        now <= self.expires_at
    }
}

/// Key → value store with per-entry absolute expiration.
///
/// ## Lifecycle of an entry
///
/// ```text
/// set(k, v, ttl) ──→ [live] ──(now > expires_at)──→ [expired] ──→ purge_expired()
///        ↑                                              │
///        └──────────── set(k, ..) overwrites ───────────┘
/// ```
///
/// There is no capacity bound and no LRU: expiration is the only eviction.
#[derive(Debug)]
pub struct SessionCache<V> {
    entries: RwLock<HashMap<String, Entry<V>>>,
}

impl<V: Clone> SessionCache<V> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Stores `value` under `key` until `now + ttl`.
    ///
    /// Any existing entry for `key` is replaced unconditionally, live or
    /// not. There is no versioning: the last writer wins. A TTL too large
    /// for the clock is capped at roughly 30 years from now.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let now = Instant::now();
        let expires_at = now
            .checked_add(ttl)
            .unwrap_or_else(|| now + FAR_FUTURE);
        let mut entries =
            self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.into(), Entry { value, expires_at });
    }

    /// Returns a copy of the value for `key` if it exists and has not
    /// expired.
    ///
    /// An expired entry reads as `None` but is left in place; it is freed
    /// by [`purge_expired`](Self::purge_expired), [`remove`](Self::remove),
    /// or the next `set` for the same key.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();
        let entries =
            self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(key)
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.value.clone())
    }

    /// Returns `true` if `key` currently has a live entry.
    pub fn contains(&self, key: &str) -> bool {
        let now = Instant::now();
        let entries =
            self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(key).is_some_and(|entry| entry.is_live(now))
    }

    /// Removes `key`, returning its value if it was still live.
    pub fn remove(&self, key: &str) -> Option<V> {
        let now = Instant::now();
        let mut entries =
            self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries
            .remove(key)
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.value)
    }

    /// Drops every expired entry and returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut entries =
            self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|_, entry| entry.is_live(now));
        before - entries.len()
    }

    /// Returns the number of stored entries, including expired ones that
    /// have not been purged yet.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: Clone + Send + Sync + 'static> SessionCache<V> {
    /// Spawns a Tokio task that calls [`purge_expired`](Self::purge_expired)
    /// every `every`.
    ///
    /// The task holds only a weak reference: once the last `Arc` to the
    /// cache is dropped the task exits on its next tick. Abort the returned
    /// handle to stop it sooner. Must be called from within a Tokio runtime.
    pub fn spawn_sweeper(self: &Arc<Self>, every: Duration) -> JoinHandle<()> {
        let cache = Arc::downgrade(self);
        let every = every.max(MIN_SWEEP_INTERVAL);

        tokio::spawn(async move {
            let mut ticker = time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately; skip it so the first
            // sweep happens one full period after spawning.
            ticker.tick().await;

            loop {
                ticker.tick().await;
                let Some(cache) = cache.upgrade() else {
                    tracing::debug!("session cache dropped, sweeper exiting");
                    break;
                };
                let purged = cache.purge_expired();
                if purged > 0 {
                    tracing::debug!(purged, "swept expired sessions");
                }
            }
        })
    }
}

impl<V: Clone> Default for SessionCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================================
// Tests
// =========================================================================
