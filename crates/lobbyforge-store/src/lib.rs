//! In-memory domain store for Lobbyforge.
//!
//! The [`Store`] owns every durable collection (accounts, players, items,
//! mail, bags, chat, rooms) behind one reader/writer lock and hands
//! callers scoped access through two primitives:
//!
//! - [`Store::with_read`]: shared access; any number run in parallel.
//! - [`Store::with_write`]: exclusive access; excludes readers and writers.
//!
//! The closure passed to either primitive is the *transaction*. It runs
//! against the live [`World`] while the lock is held and the lock is
//! released on every exit path, unwinding panics included.
//!
//! # Contract for transactions
//!
//! - Computation only. No network, cache, or file I/O and no waiting on
//!   other locks: the lock is held for the whole closure.
//! - Never call back into `with_read`/`with_write` from inside a
//!   transaction. The lock is not reentrant and doing so deadlocks. This
//!   is a programming error, not a recoverable condition.
//! - Domain rules (duplicate usernames, room capacity) are the
//!   transaction's job. The store only guarantees mutual exclusion.

mod seed;
mod store;
mod world;

pub use store::Store;
pub use world::{ChatLog, World};
