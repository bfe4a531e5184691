use std::time::Duration;

use crate::configuration::intent::ConfigurationIntent;
use crate::configuration::state::{ConfigurationState, MIN_SELECTED_ARTS};
use crate::mvi::Reducer;

/// Rapid edits within this window collapse into a single persisted write.
pub const SAVE_DEBOUNCE: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationEffect {
    /// Schedule a debounced `Save` dispatch; a newer edit under the same
    /// key cancels and restarts the pending timer.
    ScheduleSave,
    /// Persist the configuration now.
    Persist,
}

pub struct ConfigurationReducer;

impl Reducer for ConfigurationReducer {
    type State = ConfigurationState;
    type Intent = ConfigurationIntent;
    type Effect = ConfigurationEffect;
    type Context<'a> = ();

    fn reduce(
        state: Self::State,
        intent: Self::Intent,
        _ctx: Self::Context<'_>,
    ) -> (Self::State, Vec<Self::Effect>) {
        let mut state = state;
        match intent {
            ConfigurationIntent::SelectArt(art) => {
                if state.selected_arts.insert(art) {
                    (state, vec![ConfigurationEffect::ScheduleSave])
                } else {
                    (state, Vec::new())
                }
            }
            ConfigurationIntent::UnselectArt(art) => {
                if state.selected_arts.len() <= MIN_SELECTED_ARTS {
                    tracing::debug!(?art, "unselect rejected, selection is at the floor");
                    return (state, Vec::new());
                }
                if state.selected_arts.remove(&art) {
                    (state, vec![ConfigurationEffect::ScheduleSave])
                } else {
                    (state, Vec::new())
                }
            }
            ConfigurationIntent::ChangeDifficultyLevel(level) => {
                if state.difficulty_level == level {
                    return (state, Vec::new());
                }
                // The level updates immediately; whether the running game
                // is reset is decided one layer up.
                state.difficulty_level = level;
                (state, vec![ConfigurationEffect::ScheduleSave])
            }
            ConfigurationIntent::Save => (state, vec![ConfigurationEffect::Persist]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::art::ArtKind;
    use crate::game::DifficultyLevel;

    #[test]
    fn unselect_schedules_a_debounced_save() {
        let state = ConfigurationState::default();
        let (state, effects) = ConfigurationReducer::reduce(
            state,
            ConfigurationIntent::UnselectArt(ArtKind::Cave),
            (),
        );
        assert!(!state.is_selected(ArtKind::Cave));
        assert_eq!(effects, vec![ConfigurationEffect::ScheduleSave]);
    }

    #[test]
    fn unselect_is_rejected_at_the_floor() {
        let mut state = ConfigurationState::default();
        state.selected_arts = ArtKind::ALL.into_iter().take(MIN_SELECTED_ARTS).collect();

        let art = *state.selected_arts.iter().next().unwrap();
        let (state, effects) =
            ConfigurationReducer::reduce(state, ConfigurationIntent::UnselectArt(art), ());
        assert_eq!(state.selected_arts.len(), MIN_SELECTED_ARTS);
        assert!(state.is_selected(art));
        assert!(effects.is_empty(), "a rejected edit must not schedule a save");
    }

    #[test]
    fn selecting_an_already_selected_art_is_inert() {
        let state = ConfigurationState::default();
        let (_, effects) =
            ConfigurationReducer::reduce(state, ConfigurationIntent::SelectArt(ArtKind::Cave), ());
        assert!(effects.is_empty());
    }

    #[test]
    fn level_change_updates_immediately() {
        let state = ConfigurationState::default();
        let (state, effects) = ConfigurationReducer::reduce(
            state,
            ConfigurationIntent::ChangeDifficultyLevel(DifficultyLevel::Hard),
            (),
        );
        assert_eq!(state.difficulty_level, DifficultyLevel::Hard);
        assert_eq!(effects, vec![ConfigurationEffect::ScheduleSave]);
    }

    #[test]
    fn same_level_change_is_inert() {
        let state = ConfigurationState::default();
        let (_, effects) = ConfigurationReducer::reduce(
            state,
            ConfigurationIntent::ChangeDifficultyLevel(DifficultyLevel::Normal),
            (),
        );
        assert!(effects.is_empty());
    }
}
