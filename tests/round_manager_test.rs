//! Tests for round sequencing, pass counting, and player replacement.

use chrono::Duration;
use std::collections::HashSet;
use tilecross::{Action, Board, Player, RoundError, RoundManager, DEFAULT_PASS_THRESHOLD};

fn players() -> Vec<Player> {
    vec![Player::new("p1", "Alice"), Player::new("p2", "Bob")]
}

fn manager() -> RoundManager {
    RoundManager::new(
        vec!["p1".to_string(), "p2".to_string()],
        Duration::seconds(60),
        DEFAULT_PASS_THRESHOLD,
    )
}

#[test]
fn test_no_round_before_begin() {
    let manager = manager();
    assert!(manager.current_round().is_none());
    assert_eq!(
        manager.game_start_time(),
        Err(RoundError::NoFirstRoundExists)
    );
}

#[test]
fn test_first_round_snapshots_rack_and_timer() {
    let mut manager = manager();
    let players = players();
    let round = manager.begin_round(&players);
    assert!(round.player_id == "p1" || round.player_id == "p2");
    assert_eq!(round.limit_time - round.start_time, Duration::seconds(60));
    assert!(manager.game_start_time().is_ok());
}

#[test]
fn test_first_player_is_randomized() {
    // Over enough fresh games, both players start at least once.
    let players = players();
    let mut starters = HashSet::new();
    for _ in 0..100 {
        let mut manager = manager();
        starters.insert(manager.begin_round(&players).player_id.clone());
    }
    assert_eq!(starters.len(), 2);
}

#[test]
fn test_rounds_alternate_after_the_first() {
    let mut manager = manager();
    let players = players();
    let board = Board::classic();
    let first = manager.begin_round(&players).player_id.clone();
    let second = manager
        .next_round(Action::Pass, &board, &players)
        .player_id
        .clone();
    let third = manager
        .next_round(Action::Pass, &board, &players)
        .player_id
        .clone();
    assert_ne!(first, second);
    assert_eq!(first, third);
}

#[test]
fn test_completed_rounds_accumulate() {
    let mut manager = manager();
    let players = players();
    let board = Board::classic();
    manager.begin_round(&players);
    manager.next_round(Action::Pass, &board, &players);
    manager.next_round(Action::Pass, &board, &players);
    assert_eq!(manager.completed_rounds().len(), 2);
    assert!(manager.completed_rounds()[0].action_played.is_pass());
}

#[test]
fn test_pass_limit_counts_every_player() {
    let mut manager = manager();
    let players = players();
    let board = Board::classic();
    manager.begin_round(&players);

    // Threshold 3 with 2 players: six passes in a row end the game.
    for turn in 0..6 {
        assert!(!manager.pass_limit_reached(), "ended early at turn {turn}");
        manager.next_round(Action::Pass, &board, &players);
    }
    assert!(manager.pass_limit_reached());
}

#[test]
fn test_non_pass_resets_the_counter() {
    let mut manager = manager();
    let players = players();
    let board = Board::classic();
    manager.begin_round(&players);

    for _ in 0..5 {
        manager.next_round(Action::Pass, &board, &players);
    }
    manager.next_round(Action::Exchange(Vec::new()), &board, &players);
    for _ in 0..5 {
        manager.next_round(Action::Pass, &board, &players);
    }
    assert!(!manager.pass_limit_reached());
    manager.next_round(Action::Pass, &board, &players);
    assert!(manager.pass_limit_reached());
}

#[test]
fn test_replace_player_retargets_current_round() {
    let mut manager = manager();
    let players = players();
    let active = manager.begin_round(&players).player_id.clone();

    manager.replace_player(&active, "sub").unwrap();
    assert_eq!(
        manager.current_round().unwrap().player_id,
        "sub".to_string()
    );
}

#[test]
fn test_replace_inactive_player_keeps_current_round() {
    let mut manager = manager();
    let players = players();
    let active = manager.begin_round(&players).player_id.clone();
    let inactive = if active == "p1" { "p2" } else { "p1" };

    manager.replace_player(inactive, "sub").unwrap();
    assert_eq!(manager.current_round().unwrap().player_id, active);
}

#[test]
fn test_replace_unknown_player_is_rejected() {
    let mut manager = manager();
    assert_eq!(
        manager.replace_player("ghost", "sub"),
        Err(RoundError::UnknownPlayer("ghost".to_string()))
    );
}

#[test]
fn test_game_start_time_survives_round_turnover() {
    let mut manager = manager();
    let players = players();
    let board = Board::classic();
    manager.begin_round(&players);
    let start = manager.game_start_time().unwrap();
    manager.next_round(Action::Pass, &board, &players);
    assert_eq!(manager.game_start_time().unwrap(), start);
}
