//! Session lifecycle integration tests.
//!
//! These tests verify that reset, start, play-again and difficulty changes
//! always discard the running session completely, and that rejected
//! requests leave it untouched.

use memory_match::cards::{NumberedDeck, StandardDeck};
use memory_match::core::{Difficulty, GameError, GridSize, SessionConfig};
use memory_match::engine::MemoryGame;
use memory_match::session::{FlipOutcome, Scoreboard, SessionPhase};
use memory_match::signals::{Signal, SoundCue};

fn game_with_deck(size: u32) -> MemoryGame {
    MemoryGame::new(SessionConfig::new().with_seed(2024), NumberedDeck::new(size)).unwrap()
}

fn pairs(game: &MemoryGame) -> Vec<[usize; 2]> {
    game.board()
        .faces()
        .iter()
        .map(|face| {
            let positions = game.board().positions_of(face.id);
            [positions[0], positions[1]]
        })
        .collect()
}

/// Play until the scoreboard shows five moves and two matched pairs.
fn play_partial(game: &mut MemoryGame) {
    let all = pairs(game);

    for [a, b] in &all[..2] {
        game.attempt_flip(*a);
        game.attempt_flip(*b);
    }
    for i in 2..5 {
        game.attempt_flip(all[i][0]);
        if let FlipOutcome::Mismatched(pending) = game.attempt_flip(all[i + 1][0]).outcome {
            game.resolve(pending.token).unwrap();
        }
    }

    let scoreboard = game.scoreboard();
    assert_eq!(scoreboard.moves, 5);
    assert_eq!(scoreboard.matched_pairs, 2);
}

fn is_fresh(game: &MemoryGame) -> bool {
    let board = game.board();
    game.session().phase() == SessionPhase::Idle
        && game.session().face_up().is_empty()
        && !game.session().is_locked()
        && game.session().pending().is_none()
        && board.cards().all(|c| c.is_face_down())
        && game.scoreboard() == Scoreboard::new(board.pair_count() as u32)
}

// =============================================================================
// Difficulty Tests
// =============================================================================

/// Test that switching to medium mid-game starts completely fresh.
#[test]
fn test_medium_mid_game_resets() {
    let mut game = game_with_deck(18);
    play_partial(&mut game);
    game.on_tick(game.session().epoch());

    let signals = game.set_difficulty("medium").unwrap();

    assert_eq!(game.difficulty(), Difficulty::Medium);
    assert_eq!(game.board().grid(), GridSize::SIX);
    assert_eq!(game.board().len(), 36);
    assert!(is_fresh(&game));
    assert_eq!(game.scoreboard().total_pairs, 18);
    assert_eq!(game.scoreboard().timer_text(), "0s");
    assert!(signals.contains(&Signal::DifficultySelected(Difficulty::Medium)));
    assert!(signals.contains(&Signal::CountersChanged(Scoreboard::new(18))));
}

/// Test that an unsupported label leaves the game exactly as it was.
#[test]
fn test_hard_is_rejected() {
    let mut game = game_with_deck(18);
    play_partial(&mut game);
    let before = game.scoreboard();
    let layout = game.board().layout();

    let result = game.set_difficulty("hard");

    assert_eq!(result, Err(GameError::UnsupportedDifficulty("hard".to_string())));
    assert_eq!(game.difficulty(), Difficulty::Easy);
    assert_eq!(game.scoreboard(), before);
    assert_eq!(game.board().layout(), layout);
}

/// Test that labels are matched exactly.
#[test]
fn test_difficulty_labels_are_case_sensitive() {
    let mut game = game_with_deck(18);
    assert!(game.set_difficulty("Medium").is_err());
    assert!(game.set_difficulty("").is_err());
    assert_eq!(game.difficulty(), Difficulty::Easy);
}

/// Test that the chosen difficulty sticks across resets.
#[test]
fn test_difficulty_persists_across_reset() {
    let mut game = MemoryGame::new(SessionConfig::new().with_seed(5), StandardDeck::new()).unwrap();
    game.set_difficulty("medium").unwrap();
    game.reset().unwrap();

    assert_eq!(game.difficulty(), Difficulty::Medium);
    assert_eq!(game.board().len(), 36);
}

/// Test that a configured difficulty is dealt from the start.
#[test]
fn test_configured_difficulty() {
    let config = SessionConfig::new()
        .with_seed(1)
        .with_difficulty(Difficulty::Medium);
    let game = MemoryGame::new(config, StandardDeck::new()).unwrap();
    assert_eq!(game.board().pair_count(), 18);
}

// =============================================================================
// Reset Tests
// =============================================================================

/// Test that reset discards progress and stops the running timer.
#[test]
fn test_reset_mid_game() {
    let mut game = game_with_deck(8);
    play_partial(&mut game);
    let old_epoch = game.session().epoch();

    let signals = game.reset().unwrap();

    assert!(is_fresh(&game));
    assert_eq!(signals[0], Signal::PlaySound(SoundCue::Select));
    assert!(signals.contains(&Signal::TimerStopped { epoch: old_epoch }));
    assert!(signals.contains(&Signal::HideWinPanel));

    // The old timer can no longer advance the new session
    assert_eq!(game.on_tick(old_epoch), None);
    assert_eq!(game.scoreboard().elapsed_secs, 0);
}

/// Test that reset while a mismatch is pending drops the revert.
#[test]
fn test_reset_with_pending_mismatch() {
    let mut game = game_with_deck(8);
    let all = pairs(&game);
    game.attempt_flip(all[0][0]);
    let FlipOutcome::Mismatched(pending) = game.attempt_flip(all[1][0]).outcome else {
        panic!("expected mismatch");
    };

    game.reset().unwrap();

    assert!(is_fresh(&game));
    assert_eq!(game.resolve(pending.token), None);
    assert!(is_fresh(&game));
}

/// Test that play-again after a win deals a new game.
#[test]
fn test_play_again_after_win() {
    let mut game = game_with_deck(8);
    for [a, b] in pairs(&game) {
        game.attempt_flip(a);
        game.attempt_flip(b);
    }
    assert_eq!(game.session().phase(), SessionPhase::Won);

    let signals = game.play_again().unwrap();

    assert!(is_fresh(&game));
    assert!(signals.contains(&Signal::HideWinPanel));
    // The timer already stopped at the win
    assert!(!signals
        .iter()
        .any(|s| matches!(s, Signal::TimerStopped { .. })));
}

/// Test that the same seed deals the same sequence of boards across resets.
#[test]
fn test_seeded_games_replay() {
    let mut first = game_with_deck(18);
    let mut second = game_with_deck(18);
    assert_eq!(first.board().layout(), second.board().layout());

    first.reset().unwrap();
    second.reset().unwrap();
    assert_eq!(first.board().layout(), second.board().layout());

    first.set_difficulty("medium").unwrap();
    second.set_difficulty("medium").unwrap();
    assert_eq!(first.board().layout(), second.board().layout());
}

/// Test that start behaves like reset.
#[test]
fn test_start_resets() {
    let mut game = game_with_deck(8);
    play_partial(&mut game);
    game.start().unwrap();
    assert!(is_fresh(&game));
}

// =============================================================================
// Sound Toggle
// =============================================================================

/// Test that the sound toggle survives resets and difficulty changes.
#[test]
fn test_sound_toggle_persists() {
    let mut game = MemoryGame::new(SessionConfig::new().with_seed(5), StandardDeck::new()).unwrap();
    game.toggle_sound();
    game.reset().unwrap();
    game.set_difficulty("medium").unwrap();
    assert!(!game.sound_enabled());
}
