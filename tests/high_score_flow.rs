mod common;

use std::time::{Duration, SystemTime};

use memoiry::app::{AppIntent, HIGH_SCORE_PROMPT_DELAY};
use memoiry::scores::{ScoresIntent, MAX_SCORES_PER_BOARD};
use memoiry::storage::StorageKey;

use common::{fixture, Fixture};

#[test]
fn winning_prompts_for_a_name_after_the_gap() {
    let mut fx = fixture();
    fx.win_game();
    assert!(!fx.runtime.state().is_new_high_score_presented);

    fx.advance(HIGH_SCORE_PROMPT_DELAY - Duration::from_millis(1));
    assert!(!fx.runtime.state().is_new_high_score_presented);

    fx.advance(Duration::from_millis(1));
    assert!(fx.runtime.state().is_new_high_score_presented);
}

#[test]
fn submitting_a_name_records_and_persists_the_score() {
    let mut fx = fixture();
    fx.win_game();
    fx.advance(HIGH_SCORE_PROMPT_DELAY);

    fx.runtime.dispatch(AppIntent::SubmitHighScore {
        name: "Ada".to_string(),
    });

    let state = fx.runtime.state();
    assert!(!state.is_new_high_score_presented);
    let board = state.boards.board(state.game.level);
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].name, "Ada");
    assert_eq!(board[0].score, state.game.moves);
    assert_eq!(board[0].date, SystemTime::UNIX_EPOCH);
    assert!(fx.storage.contains(StorageKey::HighScores));
}

#[test]
fn dismissing_the_prompt_records_nothing() {
    let mut fx = fixture();
    fx.win_game();
    fx.advance(HIGH_SCORE_PROMPT_DELAY);

    fx.runtime.dispatch(AppIntent::DismissNewHighScore);
    let state = fx.runtime.state();
    assert!(!state.is_new_high_score_presented);
    assert!(state.boards.board(state.game.level).is_empty());
    assert!(!fx.storage.contains(StorageKey::HighScores));
}

fn fill_board(fx: &mut Fixture, score: u32) {
    let level = fx.runtime.state().game.level;
    for i in 0..MAX_SCORES_PER_BOARD {
        fx.runtime.dispatch(AppIntent::HighScores(ScoresIntent::AddScore {
            level,
            score,
            name: format!("player-{i}"),
            date: SystemTime::UNIX_EPOCH,
        }));
    }
}

#[test]
fn a_full_board_of_better_scores_suppresses_the_prompt() {
    let mut fx = fixture();
    // Ten entries at the theoretical minimum; a perfect game cannot beat
    // them, only tie.
    let pairs = fx.runtime.state().game.level.pairs_count() as u32;
    fill_board(&mut fx, pairs);

    fx.win_game();
    fx.advance(HIGH_SCORE_PROMPT_DELAY + Duration::from_millis(1));
    assert!(!fx.runtime.state().is_new_high_score_presented);
}

#[test]
fn a_beatable_board_still_prompts() {
    let mut fx = fixture();
    fill_board(&mut fx, 999);

    fx.win_game();
    fx.advance(HIGH_SCORE_PROMPT_DELAY);
    assert!(fx.runtime.state().is_new_high_score_presented);
}
