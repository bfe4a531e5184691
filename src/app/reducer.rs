//! Orchestration across the sub-reducers: delegation, cross-cutting
//! rules, and the mapping from sub-effects to runtime effects.

use std::time::Duration;

use crate::app::effect::{AppEffect, DebounceKey};
use crate::app::environment::AppEnvironment;
use crate::app::intent::AppIntent;
use crate::app::state::AppState;
use crate::configuration::{
    ConfigurationEffect, ConfigurationIntent, ConfigurationReducer, SAVE_DEBOUNCE,
};
use crate::game::{GameContext, GameEffect, GameIntent, GameMode, GameReducer, SHUFFLE_DELAY};
use crate::mvi::Reducer;
use crate::scores::{ScoresEffect, ScoresIntent, ScoresReducer};

/// Gap between a winning flip and the new-high-score prompt, letting the
/// win animation play out first.
pub const HIGH_SCORE_PROMPT_DELAY: Duration = Duration::from_millis(800);

pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Intent = AppIntent;
    type Effect = AppEffect;
    type Context<'a> = &'a AppEnvironment;

    fn reduce(
        state: Self::State,
        intent: Self::Intent,
        env: Self::Context<'_>,
    ) -> (Self::State, Vec<Self::Effect>) {
        let mut state = state;
        let mut effects = Vec::new();
        match intent {
            AppIntent::Game(intent) => {
                let was_game_over = state.game.is_game_over;
                let ctx = GameContext {
                    selected_arts: &state.configuration.selected_arts,
                    level: state.configuration.difficulty_level,
                    deck: env.deck,
                };
                let (game, game_effects) =
                    GameReducer::reduce(std::mem::take(&mut state.game), intent, ctx);
                state.game = game;
                for effect in game_effects {
                    effects.push(match effect {
                        GameEffect::Save => AppEffect::SaveGame,
                        GameEffect::ClearBackup => AppEffect::ClearGameBackup,
                        GameEffect::ScheduleShuffle => AppEffect::DispatchAfter {
                            delay: SHUFFLE_DELAY,
                            intent: AppIntent::Game(GameIntent::ShuffleCards),
                        },
                    });
                }
                if state.game.is_game_over && !was_game_over {
                    match &state.game.mode {
                        GameMode::SinglePlayer => {
                            // Only a qualifying score gets the prompt; the
                            // 0.8s gap lets the win animation finish.
                            if state.boards.qualifies(state.game.level, state.game.moves) {
                                effects.push(AppEffect::DispatchAfter {
                                    delay: HIGH_SCORE_PROMPT_DELAY,
                                    intent: AppIntent::PresentNewHighScore,
                                });
                            }
                        }
                        GameMode::TwoPlayers { .. } => {
                            state.is_two_players_results_presented = true;
                        }
                    }
                }
            }
            AppIntent::Configuration(intent) => {
                let level_before = state.configuration.difficulty_level;
                let selection_before = state.configuration.selected_arts.clone();
                let (configuration, config_effects) = ConfigurationReducer::reduce(
                    std::mem::take(&mut state.configuration),
                    intent,
                    (),
                );
                state.configuration = configuration;
                for effect in config_effects {
                    effects.push(match effect {
                        ConfigurationEffect::ScheduleSave => AppEffect::Debounce {
                            key: DebounceKey::SaveConfiguration,
                            delay: SAVE_DEBOUNCE,
                            intent: AppIntent::Configuration(ConfigurationIntent::Save),
                        },
                        ConfigurationEffect::Persist => AppEffect::SaveConfiguration,
                    });
                }
                if state.configuration.difficulty_level != level_before {
                    if state.game.is_in_progress() {
                        // The level is already updated in configuration;
                        // only the game reset waits for confirmation.
                        state.is_level_change_confirmation_presented = true;
                    } else {
                        effects.push(AppEffect::Dispatch(AppIntent::Game(GameIntent::NewGame)));
                    }
                } else if state.configuration.selected_arts != selection_before
                    && !state.game.is_in_progress()
                {
                    effects.push(AppEffect::Dispatch(AppIntent::Game(
                        GameIntent::ShuffleCards,
                    )));
                }
            }
            AppIntent::HighScores(intent) => {
                let (boards, score_effects) =
                    ScoresReducer::reduce(std::mem::take(&mut state.boards), intent, ());
                state.boards = boards;
                for effect in score_effects {
                    effects.push(match effect {
                        ScoresEffect::Save => AppEffect::SaveHighScores,
                    });
                }
            }
            AppIntent::PresentNewHighScore => {
                if state.game.is_game_over && !state.game.mode.is_two_players() {
                    state.is_new_high_score_presented = true;
                }
            }
            AppIntent::DismissNewHighScore => {
                state.is_new_high_score_presented = false;
            }
            AppIntent::SubmitHighScore { name } => {
                state.is_new_high_score_presented = false;
                effects.push(AppEffect::Dispatch(AppIntent::HighScores(
                    ScoresIntent::AddScore {
                        level: state.game.level,
                        score: state.game.moves,
                        name,
                        date: (env.now)(),
                    },
                )));
            }
            AppIntent::ConfirmLevelChange => {
                state.is_level_change_confirmation_presented = false;
                effects.push(AppEffect::Dispatch(AppIntent::Game(GameIntent::NewGame)));
            }
            AppIntent::DismissLevelChange => {
                state.is_level_change_confirmation_presented = false;
            }
            AppIntent::DismissTwoPlayersResults => {
                state.is_two_players_results_presented = false;
            }
            AppIntent::ToggleGameMode => {
                state.game.mode = match state.game.mode {
                    GameMode::SinglePlayer => GameMode::two_players(),
                    GameMode::TwoPlayers { .. } => GameMode::SinglePlayer,
                };
                effects.push(AppEffect::Dispatch(AppIntent::Game(GameIntent::NewGame)));
            }
        }
        (state, effects)
    }
}
