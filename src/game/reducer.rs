//! The game session reducer: match detection, mismatch recovery, win
//! detection, and two-player turn alternation.

use std::collections::BTreeSet;
use std::time::Duration;

use crate::art::ArtKind;
use crate::game::card::{DifficultyLevel, GameMode, Player};
use crate::game::deck::DeckSource;
use crate::game::intent::GameIntent;
use crate::game::state::GameState;
use crate::mvi::Reducer;

/// Gap between a new-game reset and the re-deal, letting the flip-down
/// animation settle before the cards change.
pub const SHUFFLE_DELAY: Duration = Duration::from_millis(500);

/// Follow-up work requested by the session reducer. The app reducer maps
/// these onto runtime effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEffect {
    /// Persist the session to backup storage.
    Save,
    /// Remove the session from backup storage (the game is over).
    ClearBackup,
    /// Dispatch `ShuffleCards` after [`SHUFFLE_DELAY`].
    ScheduleShuffle,
}

/// Configuration snapshot the session reducer needs per dispatch.
#[derive(Debug, Clone, Copy)]
pub struct GameContext<'a> {
    pub selected_arts: &'a BTreeSet<ArtKind>,
    /// Configured difficulty, applied to the session at new-game time.
    pub level: DifficultyLevel,
    pub deck: DeckSource,
}

pub struct GameReducer;

impl Reducer for GameReducer {
    type State = GameState;
    type Intent = GameIntent;
    type Effect = GameEffect;
    type Context<'a> = GameContext<'a>;

    fn reduce(
        state: Self::State,
        intent: Self::Intent,
        ctx: Self::Context<'_>,
    ) -> (Self::State, Vec<Self::Effect>) {
        let mut state = state;
        match intent {
            GameIntent::NewGame => {
                state.moves = 0;
                state.discovered_arts.clear();
                state.is_game_over = false;
                for card in &mut state.cards {
                    card.is_face_up = false;
                }
                state.level = ctx.level;
                state.mode = state.mode.reset();
                (state, vec![GameEffect::ScheduleShuffle])
            }
            GameIntent::ShuffleCards => {
                state.cards = ctx.deck.deal(ctx.selected_arts, state.level);
                (state, vec![GameEffect::Save])
            }
            GameIntent::CardReturned(id) => reduce_card_returned(state, id),
        }
    }
}

fn reduce_card_returned(mut state: GameState, id: usize) -> (GameState, Vec<GameEffect>) {
    // Out-of-range ids and already-face-up cards are documented no-ops.
    let Some(card) = state.cards.get_mut(id) else {
        tracing::debug!(id, "ignoring flip for out-of-range card id");
        return (state, Vec::new());
    };
    if card.is_face_up {
        tracing::debug!(id, "ignoring flip for already face-up card");
        return (state, Vec::new());
    }
    card.is_face_up = true;

    let turned_up: Vec<ArtKind> = state
        .cards
        .iter()
        .filter(|card| card.is_face_up && !state.discovered_arts.contains(&card.art))
        .map(|card| card.art)
        .collect();

    match turned_up.as_slice() {
        [] | [_] => (state, vec![GameEffect::Save]),
        [first, second] => {
            state.moves += 1;
            if first == second {
                let art = *first;
                state.discovered_arts.push(art);
                if let GameMode::TwoPlayers {
                    current,
                    first_player_arts,
                    second_player_arts,
                } = &mut state.mode
                {
                    // A successful match credits the current player, who
                    // keeps the turn.
                    match current {
                        Player::First => first_player_arts.push(art),
                        Player::Second => second_player_arts.push(art),
                    }
                }
                // Completion is checked here, before the >=3 branch can
                // ever apply, so game-over never coincides with a recall.
                if state.discovered_arts.len() == state.level.pairs_count() {
                    state.is_game_over = true;
                    tracing::info!(moves = state.moves, "game over");
                    return (state, vec![GameEffect::ClearBackup]);
                }
                (state, vec![GameEffect::Save])
            } else {
                // The turn changes only when the second card fails to
                // complete a match.
                if let GameMode::TwoPlayers { current, .. } = &mut state.mode {
                    *current = current.next();
                }
                (state, vec![GameEffect::Save])
            }
        }
        _ => {
            // Auto-recall: a third card was flipped while two unmatched
            // cards were still showing. Everything except the card just
            // returned and the discovered pairs goes face down again.
            let discovered = std::mem::take(&mut state.discovered_arts);
            for card in &mut state.cards {
                if card.id != id && !discovered.contains(&card.art) {
                    card.is_face_up = false;
                }
            }
            state.discovered_arts = discovered;
            (state, vec![GameEffect::Save])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_arts() -> BTreeSet<ArtKind> {
        ArtKind::ALL.into_iter().collect()
    }

    fn ctx(arts: &BTreeSet<ArtKind>) -> GameContext<'_> {
        GameContext {
            selected_arts: arts,
            level: DifficultyLevel::Normal,
            deck: DeckSource::Sequential,
        }
    }

    fn dealt_state(arts: &BTreeSet<ArtKind>) -> GameState {
        let (state, _) = GameReducer::reduce(GameState::default(), GameIntent::ShuffleCards, ctx(arts));
        state
    }

    #[test]
    fn new_game_resets_and_schedules_shuffle() {
        let arts = all_arts();
        let mut state = dealt_state(&arts);
        state.moves = 7;
        state.discovered_arts.push(ArtKind::Cave);
        state.cards[0].is_face_up = true;
        state.is_game_over = true;

        let (state, effects) = GameReducer::reduce(state, GameIntent::NewGame, ctx(&arts));
        assert_eq!(state.moves, 0);
        assert!(state.discovered_arts.is_empty());
        assert!(!state.is_game_over);
        assert!(!state.has_face_up_cards());
        assert_eq!(effects, vec![GameEffect::ScheduleShuffle]);
    }

    #[test]
    fn shuffle_replaces_cards_only() {
        let arts = all_arts();
        let mut state = GameState::default();
        state.moves = 3;
        let (state, effects) = GameReducer::reduce(state, GameIntent::ShuffleCards, ctx(&arts));
        assert_eq!(state.cards.len(), 20);
        assert_eq!(state.moves, 3);
        assert_eq!(effects, vec![GameEffect::Save]);
    }

    #[test]
    fn first_card_of_a_pair_only_saves() {
        let arts = all_arts();
        let state = dealt_state(&arts);
        let (state, effects) = GameReducer::reduce(state, GameIntent::CardReturned(0), ctx(&arts));
        assert!(state.cards[0].is_face_up);
        assert_eq!(state.moves, 0);
        assert_eq!(effects, vec![GameEffect::Save]);
    }

    #[test]
    fn matching_pair_is_discovered_in_order() {
        let arts = all_arts();
        let state = dealt_state(&arts);
        let (state, _) = GameReducer::reduce(state, GameIntent::CardReturned(1), ctx(&arts));
        let (state, effects) = GameReducer::reduce(state, GameIntent::CardReturned(11), ctx(&arts));
        assert_eq!(state.moves, 1);
        assert_eq!(state.discovered_arts, vec![state.cards[1].art]);
        assert!(!state.is_game_over);
        assert_eq!(effects, vec![GameEffect::Save]);
    }

    #[test]
    fn out_of_range_flip_is_a_no_op() {
        let arts = all_arts();
        let state = dealt_state(&arts);
        let before = state.clone();
        let (state, effects) = GameReducer::reduce(state, GameIntent::CardReturned(99), ctx(&arts));
        assert_eq!(state, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn face_up_flip_is_a_no_op() {
        let arts = all_arts();
        let state = dealt_state(&arts);
        let (state, _) = GameReducer::reduce(state, GameIntent::CardReturned(0), ctx(&arts));
        let before = state.clone();
        let (state, effects) = GameReducer::reduce(state, GameIntent::CardReturned(0), ctx(&arts));
        assert_eq!(state, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn auto_recall_keeps_latest_and_discovered_cards() {
        let arts = all_arts();
        let state = dealt_state(&arts);
        // Discover the pair at ids 0 and 10 first.
        let (state, _) = GameReducer::reduce(state, GameIntent::CardReturned(0), ctx(&arts));
        let (state, _) = GameReducer::reduce(state, GameIntent::CardReturned(10), ctx(&arts));
        // Mismatch, then a third flip.
        let (state, _) = GameReducer::reduce(state, GameIntent::CardReturned(1), ctx(&arts));
        let (state, _) = GameReducer::reduce(state, GameIntent::CardReturned(2), ctx(&arts));
        let moves_before = state.moves;
        let (state, effects) = GameReducer::reduce(state, GameIntent::CardReturned(3), ctx(&arts));

        assert!(!state.cards[1].is_face_up);
        assert!(!state.cards[2].is_face_up);
        assert!(state.cards[3].is_face_up, "just-returned card stays up");
        assert!(state.cards[0].is_face_up, "discovered cards stay up");
        assert!(state.cards[10].is_face_up);
        assert_eq!(state.moves, moves_before, "recall itself is not a move");
        assert_eq!(effects, vec![GameEffect::Save]);
    }
}
