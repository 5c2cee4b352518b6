//! Session cache for Lobbyforge.
//!
//! A key → value store where every entry carries an absolute expiry. It
//! stands in for a networked cache (Redis and friends) and holds login
//! session tokens apart from the durable account records in the store.
//!
//! 1. **Writes**: [`SessionCache::set`] stores a value for a TTL,
//!    overwriting whatever was there (last writer wins).
//! 2. **Reads**: [`SessionCache::get`] returns the value only while the
//!    entry is unexpired. Expired entries read as absent even if they are
//!    still physically stored (lazy expiration).
//! 3. **Sweeping**: [`SessionCache::purge_expired`] frees expired entries;
//!    [`SessionCache::spawn_sweeper`] runs it periodically on Tokio.
//!
//! # How it fits in the stack
//!
//! ```text
//! Account service  ── login ──→  Store (write txn)  then  SessionCache::set
//! ```
//!
//! The cache has its own lock and is never locked while the store's lock
//! is held. Dropping a cache entry never touches the account: a token is
//! valid exactly as long as its cache entry is present.

mod cache;
mod config;
mod token;

pub use cache::SessionCache;
pub use config::CacheConfig;
pub use token::{generate_token, session_key};
