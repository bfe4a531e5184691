mod common;

use std::time::Duration;

use memoiry::app::AppIntent;
use memoiry::art::ArtKind;
use memoiry::configuration::{ConfigurationIntent, MIN_SELECTED_ARTS, SAVE_DEBOUNCE};
use memoiry::game::{DifficultyLevel, GameIntent, SHUFFLE_DELAY};
use memoiry::storage::StorageKey;

use common::{fixture, Fixture};

fn unselect(fx: &mut Fixture, art: ArtKind) {
    fx.runtime
        .dispatch(AppIntent::Configuration(ConfigurationIntent::UnselectArt(
            art,
        )));
}

#[test]
fn rapid_edits_coalesce_into_one_save() {
    let mut fx = fixture();

    unselect(&mut fx, ArtKind::Cave);
    fx.advance(Duration::from_secs(1));
    assert_eq!(fx.storage.write_count(StorageKey::Configuration), 0);

    // The second edit restarts the window.
    unselect(&mut fx, ArtKind::Neon);
    fx.advance(SAVE_DEBOUNCE - Duration::from_millis(1));
    assert_eq!(fx.storage.write_count(StorageKey::Configuration), 0);

    fx.advance(Duration::from_millis(1));
    assert_eq!(fx.storage.write_count(StorageKey::Configuration), 1);
}

#[test]
fn selection_never_drops_below_the_floor() {
    let mut fx = fixture();
    let over_floor = ArtKind::ALL.len() - MIN_SELECTED_ARTS;
    for art in ArtKind::ALL.into_iter().take(over_floor) {
        unselect(&mut fx, art);
    }
    fx.advance(SAVE_DEBOUNCE);
    let writes = fx.storage.write_count(StorageKey::Configuration);
    assert_eq!(
        fx.runtime.state().configuration.selected_arts.len(),
        MIN_SELECTED_ARTS
    );

    // At the floor the unselect is rejected outright: no state change and
    // no save scheduled.
    unselect(&mut fx, ArtKind::Watercolor);
    assert_eq!(
        fx.runtime.state().configuration.selected_arts.len(),
        MIN_SELECTED_ARTS
    );
    fx.advance(SAVE_DEBOUNCE);
    assert_eq!(fx.storage.write_count(StorageKey::Configuration), writes);
}

#[test]
fn editing_the_selection_reshuffles_an_idle_game() {
    let mut fx = fixture();
    let writes = fx.storage.write_count(StorageKey::GameBackup);
    unselect(&mut fx, ArtKind::Cave);
    // The re-deal happens inline, not on a timer.
    assert_eq!(fx.storage.write_count(StorageKey::GameBackup), writes + 1);
    assert!(fx
        .runtime
        .state()
        .game
        .cards
        .iter()
        .all(|card| card.art != ArtKind::Cave));
}

#[test]
fn editing_the_selection_leaves_a_running_game_alone() {
    let mut fx = fixture();
    fx.flip(0);
    let cards_before = fx.runtime.state().game.cards.clone();
    unselect(&mut fx, ArtKind::Neon);
    assert_eq!(fx.runtime.state().game.cards, cards_before);
}

#[test]
fn level_change_restarts_an_idle_game_immediately() {
    let mut fx = fixture();
    fx.runtime.dispatch(AppIntent::Configuration(
        ConfigurationIntent::ChangeDifficultyLevel(DifficultyLevel::Hard),
    ));
    assert!(!fx.runtime.state().is_level_change_confirmation_presented);
    fx.advance(SHUFFLE_DELAY);
    let game = &fx.runtime.state().game;
    assert_eq!(game.level, DifficultyLevel::Hard);
    assert_eq!(game.cards.len(), DifficultyLevel::Hard.cards_count());
}

#[test]
fn level_change_during_a_game_waits_for_confirmation() {
    let mut fx = fixture();
    fx.flip(0);

    fx.runtime.dispatch(AppIntent::Configuration(
        ConfigurationIntent::ChangeDifficultyLevel(DifficultyLevel::Easy),
    ));
    let state = fx.runtime.state();
    assert!(state.is_level_change_confirmation_presented);
    assert_eq!(state.game.level, DifficultyLevel::Normal, "session untouched");
    assert_eq!(state.configuration.difficulty_level, DifficultyLevel::Easy);

    fx.runtime.dispatch(AppIntent::ConfirmLevelChange);
    fx.advance(SHUFFLE_DELAY);
    let game = &fx.runtime.state().game;
    assert_eq!(game.level, DifficultyLevel::Easy);
    assert_eq!(game.moves, 0);
}

#[test]
fn declining_the_level_change_keeps_the_session() {
    let mut fx = fixture();
    fx.flip(0);
    fx.runtime.dispatch(AppIntent::Configuration(
        ConfigurationIntent::ChangeDifficultyLevel(DifficultyLevel::Easy),
    ));
    fx.runtime.dispatch(AppIntent::DismissLevelChange);

    let state = fx.runtime.state();
    assert!(!state.is_level_change_confirmation_presented);
    assert_eq!(state.game.level, DifficultyLevel::Normal);
    assert!(state.game.cards[0].is_face_up);
    // The new preference still applies to the next game.
    assert_eq!(state.configuration.difficulty_level, DifficultyLevel::Easy);

    fx.runtime.dispatch(AppIntent::Game(GameIntent::NewGame));
    fx.advance(SHUFFLE_DELAY);
    assert_eq!(fx.runtime.state().game.level, DifficultyLevel::Easy);
}
