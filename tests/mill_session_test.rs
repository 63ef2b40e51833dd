//! Tests for session management across threads.

use std::thread;
use strictly_mill::rules::legal_moves;
use strictly_mill::{OpponentMode, SessionManager, Side};

#[test]
fn test_parallel_sessions_do_not_interfere() {
    let manager = SessionManager::default();
    let ids: Vec<String> = (0..8).map(|i| format!("game-{}", i)).collect();
    for id in &ids {
        manager
            .create_session(id.clone(), OpponentMode::Ai)
            .unwrap();
    }

    let handles: Vec<_> = ids
        .iter()
        .cloned()
        .map(|id| {
            let manager = manager.clone();
            thread::spawn(move || {
                let snapshot = manager.snapshot(&id).unwrap();
                let mv = legal_moves(snapshot.game_state.board(), Side::Black)[0];
                manager
                    .submit_move(&id, mv.from, mv.to, Side::Black)
                    .unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    for id in &ids {
        let snapshot = manager.snapshot(id).unwrap();
        assert!(!snapshot.moves_history.is_empty());
        assert_eq!(snapshot.moves_history[0].player, Side::Black);
    }
}

#[test]
fn test_new_game_keeps_session_scores() {
    let manager = SessionManager::default();
    manager
        .create_session("g".into(), OpponentMode::Ai)
        .unwrap();
    let before = manager.snapshot("g").unwrap().scores;

    let snapshot = manager.new_game("g", OpponentMode::Human).unwrap();
    assert_eq!(snapshot.scores, before);
    assert!(snapshot.moves_history.is_empty());
    assert_eq!(*snapshot.game_state.opponent_type(), OpponentMode::Human);
}

#[test]
fn test_remove_session() {
    let manager = SessionManager::default();
    manager
        .create_session("gone".into(), OpponentMode::Ai)
        .unwrap();
    manager.remove_session("gone").unwrap();
    assert!(manager.list_sessions().is_empty());
}
