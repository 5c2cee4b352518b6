//! Room lifecycle under concurrent callers sharing one store.

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use lobbyforge_model::{PlayerId, RoomId, RoomStatus};
use lobbyforge_room::{RoomError, RoomManager};
use lobbyforge_store::Store;

const THREADS: usize = 8;

fn pid(id: impl Into<String>) -> PlayerId {
    PlayerId::new(id)
}

#[test]
fn test_concurrent_enqueue_opens_distinct_rooms() {
    let manager = RoomManager::new(Arc::new(Store::new()));
    let barrier = Barrier::new(THREADS);

    let ids: Vec<RoomId> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let manager = &manager;
                let barrier = &barrier;
                scope.spawn(move || {
                    barrier.wait();
                    manager.enqueue(pid(format!("p{t}")), "duel").0
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let unique: HashSet<&RoomId> = ids.iter().collect();
    assert_eq!(unique.len(), THREADS);

    let rooms = manager.list();
    assert_eq!(rooms.len(), THREADS);
    for room in rooms {
        assert_eq!(room.players.len(), 1);
        assert_eq!(room.status, RoomStatus::Matching);
    }
}

#[test]
fn test_concurrent_join_never_overfills() {
    let manager = RoomManager::new(Arc::new(Store::new()));
    let room = manager.create("squad", Vec::new(), 3).unwrap();
    let barrier = Barrier::new(THREADS);

    let results: Vec<Result<_, RoomError>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let manager = &manager;
                let barrier = &barrier;
                let room_id = room.id.clone();
                scope.spawn(move || {
                    barrier.wait();
                    manager.join(&room_id, pid(format!("p{t}")))
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let joined = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(joined, 3);
    // Losers see either a full room or one already flipped to ready.
    for err in results.iter().filter_map(|r| r.as_ref().err()) {
        assert!(matches!(
            err,
            RoomError::RoomFull(_) | RoomError::InvalidState { .. }
        ));
    }

    let room = manager.get(&room.id).unwrap();
    assert_eq!(room.players.len(), 3);
    assert_eq!(room.status, RoomStatus::Ready);
}

#[test]
fn test_rooms_and_matches_share_one_id_space() {
    let manager = RoomManager::new(Arc::new(Store::new()));

    let room = manager.create("duel", Vec::new(), 2).unwrap();
    let (match_id, _) = manager.enqueue(pid("p1"), "duel");

    assert_eq!(room.id.as_str(), "room-1");
    assert_eq!(match_id.as_str(), "match-2");
}

#[test]
fn test_full_lifecycle_waiting_ready_closed() {
    let manager = RoomManager::new(Arc::new(Store::new()));
    let room = manager.create("duel", vec![pid("a")], 2).unwrap();
    assert_eq!(room.status, RoomStatus::Waiting);

    let room = manager.join(&room.id, pid("b")).unwrap();
    assert_eq!(room.status, RoomStatus::Ready);

    let room = manager.close(&room.id).unwrap();
    assert_eq!(room.status, RoomStatus::Closed);
    assert!(manager.list().is_empty());
}
