//! The store itself: a `World` behind an `RwLock` plus an id sequence.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use crate::World;

/// Single source of truth for all domain collections.
///
/// `Store` is `Send + Sync`; share it as `Arc<Store>` and pass it to each
/// collaborator at construction. There is no global instance, so tests can
/// create as many independent stores as they need.
#[derive(Debug)]
pub struct Store {
    world: RwLock<World>,
    /// Lives outside the lock so ids can be allocated before a write
    /// transaction starts.
    sequence: AtomicU64,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::from_world(World::default())
    }

    /// Creates a store pre-populated with the demo data set
    /// (see [`World::demo`]).
    pub fn seeded() -> Self {
        Self::from_world(World::demo())
    }

    /// Wraps an existing world.
    pub fn from_world(world: World) -> Self {
        Self {
            world: RwLock::new(world),
            sequence: AtomicU64::new(1),
        }
    }

    /// Runs `transaction` with exclusive access to the world.
    ///
    /// No other reader or writer observes the world until the transaction
    /// returns, so check-then-insert sequences inside one call are atomic.
    ///
    /// A panic inside the transaction releases the lock as it unwinds.
    /// Writes made before the panic are kept (there is no rollback) and
    /// later transactions proceed normally.
    pub fn with_write<R>(&self, transaction: impl FnOnce(&mut World) -> R) -> R {
        let mut world =
            self.world.write().unwrap_or_else(PoisonError::into_inner);
        transaction(&mut world)
    }

    /// Runs `transaction` with shared access to the world.
    ///
    /// Read transactions run concurrently with each other and are excluded
    /// while a write transaction holds the lock.
    pub fn with_read<R>(&self, transaction: impl FnOnce(&World) -> R) -> R {
        let world = self.world.read().unwrap_or_else(PoisonError::into_inner);
        transaction(&world)
    }

    /// Returns the next value of the store-wide sequence.
    ///
    /// Values are unique for the lifetime of the store regardless of how
    /// many threads call this concurrently. Does not take the world lock.
    pub fn next_sequence(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
