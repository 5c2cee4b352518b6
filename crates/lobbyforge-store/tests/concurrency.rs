//! Concurrency properties of the store: linearizable writes, isolated
//! reads, and atomic check-then-insert.

use std::sync::Barrier;
use std::thread;

use chrono::Utc;
use lobbyforge_model::{
    Account, BagEntry, ChatMessage, ItemId, Player, PlayerId,
};
use lobbyforge_store::Store;

const THREADS: usize = 8;
const WRITES_PER_THREAD: usize = 250;

fn pid(id: &str) -> PlayerId {
    PlayerId::new(id)
}

fn player(id: &str) -> Player {
    Player {
        id: pid(id),
        name: id.into(),
        level: 1,
        experience: 0,
        last_login: Utc::now(),
    }
}

#[test]
fn test_concurrent_writes_lose_no_updates() {
    let store = Store::new();
    store.with_write(|world| {
        world.players.insert(pid("p"), player("p"));
    });

    thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                for _ in 0..WRITES_PER_THREAD {
                    store.with_write(|world| {
                        if let Some(p) = world.players.get_mut("p") {
                            p.experience += 1;
                        }
                    });
                }
            });
        }
    });

    let experience = store.with_read(|world| world.players["p"].experience);
    assert_eq!(experience, (THREADS * WRITES_PER_THREAD) as u64);
}

#[test]
fn test_concurrent_chat_appends_keep_every_message() {
    let store = Store::new();

    thread::scope(|scope| {
        for t in 0..THREADS {
            let store = &store;
            scope.spawn(move || {
                for i in 0..WRITES_PER_THREAD {
                    store.with_write(|world| {
                        world.chats.push(ChatMessage {
                            from: PlayerId::new(format!("t{t}")),
                            to: None,
                            room_id: None,
                            body: i.to_string(),
                            channel: "world".into(),
                            sent_at: Utc::now(),
                        });
                    });
                }
            });
        }
    });

    store.with_read(|world| {
        assert_eq!(world.chats.len(), THREADS * WRITES_PER_THREAD);
        // Within each sender, the log preserves that sender's order.
        for t in 0..THREADS {
            let sender = format!("t{t}");
            let bodies: Vec<usize> = world
                .chats
                .iter()
                .filter(|m| m.from.as_str() == sender)
                .map(|m| m.body.parse().unwrap())
                .collect();
            assert_eq!(bodies, (0..WRITES_PER_THREAD).collect::<Vec<_>>());
        }
    });
}

#[test]
fn test_readers_never_observe_partial_writes() {
    // Each write pushes a bag entry AND bumps experience in one
    // transaction. A reader must always see the two in lockstep.
    let store = Store::new();
    store.with_write(|world| {
        world.players.insert(pid("p"), player("p"));
        world.bags.insert(pid("p"), Vec::new());
    });

    thread::scope(|scope| {
        scope.spawn(|| {
            for _ in 0..1_000 {
                store.with_write(|world| {
                    if let Some(bag) = world.bags.get_mut("p") {
                        bag.push(BagEntry {
                            item_id: ItemId::new("potion"),
                            quantity: 1,
                        });
                    }
                    if let Some(p) = world.players.get_mut("p") {
                        p.experience += 1;
                    }
                });
            }
        });

        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..1_000 {
                    let (bag_len, experience) = store.with_read(|world| {
                        (world.bags["p"].len(), world.players["p"].experience)
                    });
                    assert_eq!(bag_len as u64, experience);
                }
            });
        }
    });
}

#[test]
fn test_check_then_insert_admits_exactly_one_winner() {
    let store = Store::new();
    let barrier = Barrier::new(THREADS);

    let created: Vec<bool> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let store = &store;
                let barrier = &barrier;
                scope.spawn(move || {
                    barrier.wait();
                    store.with_write(|world| {
                        if world.accounts.contains_key("alice") {
                            return false;
                        }
                        world.accounts.insert(
                            pid("alice"),
                            Account {
                                id: pid("alice"),
                                username: "alice".into(),
                                password: format!("pw{t}"),
                                token: format!("token{t}"),
                            },
                        );
                        true
                    })
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(created.iter().filter(|c| **c).count(), 1);
    assert_eq!(store.with_read(|world| world.accounts.len()), 1);
}

#[test]
fn test_next_sequence_is_unique_across_threads() {
    let store = Store::new();

    let mut all: Vec<u64> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(|| {
                    (0..WRITES_PER_THREAD)
                        .map(|_| store.next_sequence())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), THREADS * WRITES_PER_THREAD);
}

#[test]
fn test_seeded_store_distinguishes_missing_and_empty_bags() {
    let store = Store::seeded();
    store.with_write(|world| {
        world.bags.insert(pid("demo"), Vec::new());
    });

    store.with_read(|world| {
        assert!(world.bags.get("unknown-player").is_none());
        let demo = world.bags.get("demo").expect("demo bag exists");
        assert!(demo.is_empty());
    });
}
