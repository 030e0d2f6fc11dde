//! Tests for the exploration session state machine.
//!
//! Walks the fixed manor along known routes and checks the clue index and
//! suspect ledger contents after each, plus the terminal-state rules.

use crate::config::QuestConfig;
use crate::data_structures::manor_map::Direction;
use crate::error::exploration::ExplorationError;
use crate::session::{ExplorationSession, SessionState};
use crate::tests::test_utils::single_corridor_map;
use test_case::test_case;

/// Hall → Biblioteca → Escritorio: two clues, one per suspect.
#[test]
fn test_left_wing_walk() {
    let mut session = ExplorationSession::start();

    session.move_to(Direction::Left).unwrap();
    session.move_to(Direction::Left).unwrap();

    assert!(session.is_stopped(), "Escritorio is a dead end");
    assert_eq!(
        session.list_clues(),
        vec![
            "documento rasgado".to_string(),
            "marcas de poeira no chão".to_string(),
        ]
    );

    let suspects = session.list_suspects();
    assert_eq!(suspects.len(), 2);
    for suspect in &suspects {
        assert_eq!(suspect.count, 1);
        assert_eq!(suspect.clues.len(), 1);
    }

    // A tie at count 1; the winner is fixed by ledger scan order. With the
    // checksum hash and 53 buckets, "Sr. Black" sits in the earlier bucket.
    let (name, count) = session.most_likely_suspect().unwrap();
    assert_eq!(count, 1);
    assert_eq!(name, "Sr. Black");
}

/// Hall → Cozinha → Sotao: both clues implicate Sr. Black.
#[test]
fn test_right_wing_walk_convicts_sr_black() {
    let mut session = ExplorationSession::start();

    session.move_to(Direction::Right).unwrap();
    session.move_to(Direction::Left).unwrap();

    assert!(session.is_stopped());
    assert_eq!(
        session.most_likely_suspect(),
        Some(("Sr. Black".to_string(), 2))
    );

    let suspects = session.list_suspects();
    assert_eq!(suspects.len(), 1);
    assert_eq!(
        suspects[0].clues,
        vec![
            "faca ausente do suporte".to_string(),
            "chave antiga enferrujada".to_string(),
        ]
    );
}

#[test_case(Direction::Left, "Biblioteca"; "left to the library")]
#[test_case(Direction::Right, "Cozinha"; "right to the kitchen")]
fn test_first_move_from_hall(direction: Direction, expected: &str) {
    let mut session = ExplorationSession::start();
    let room = session.move_to(direction).unwrap();
    assert_eq!(room.name(), expected);
    assert_eq!(session.state(), SessionState::Exploring);
}

#[test]
fn test_no_such_path_preserves_position() {
    let mut session =
        ExplorationSession::with_map(single_corridor_map(), &QuestConfig::default());

    let err = session.move_to(Direction::Right).unwrap_err();
    assert_eq!(
        err,
        ExplorationError::NoSuchPath {
            direction: Direction::Right
        }
    );
    assert_eq!(session.current_room().name(), "Corredor");

    // The left path still works after the failed attempt.
    let room = session.move_to(Direction::Left).unwrap();
    assert_eq!(room.name(), "Despensa");
}

#[test]
fn test_leaf_entry_processes_clue_before_stopping() {
    let mut session =
        ExplorationSession::with_map(single_corridor_map(), &QuestConfig::default());
    session.move_to(Direction::Left).unwrap();

    assert!(session.is_stopped());
    assert_eq!(session.list_clues(), vec!["farinha derramada".to_string()]);
    assert_eq!(
        session.most_likely_suspect(),
        Some(("Sr. Green".to_string(), 1))
    );
}

#[test]
fn test_queries_still_answer_after_stop() {
    let mut session = ExplorationSession::start();
    session.move_to(Direction::Left).unwrap();
    session.stop();

    assert_eq!(session.list_clues().len(), 1);
    assert_eq!(session.list_suspects().len(), 1);
    assert_eq!(
        session.move_to(Direction::Left).unwrap_err(),
        ExplorationError::SessionStopped
    );
}

#[test]
fn test_custom_bucket_count_changes_nothing_logical() {
    let config = QuestConfig {
        ledger: crate::config::LedgerConfig { bucket_count: 7 },
        ..QuestConfig::default()
    };
    let mut session = ExplorationSession::with_config(&config);

    session.move_to(Direction::Right).unwrap();
    session.move_to(Direction::Right).unwrap();

    assert_eq!(
        session.most_likely_suspect(),
        Some(("Sr. Black".to_string(), 2))
    );
}
