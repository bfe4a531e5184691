use crate::configuration::ConfigurationState;
use crate::game::GameState;
use crate::mvi::State;
use crate::scores::Boards;

/// Aggregate root. Owns one instance of each sub-state plus transient
/// presentation flags; the flags are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub game: GameState,
    pub configuration: ConfigurationState,
    pub boards: Boards,
    pub is_new_high_score_presented: bool,
    pub is_two_players_results_presented: bool,
    pub is_level_change_confirmation_presented: bool,
}

impl State for AppState {}
