use serde::{Deserialize, Serialize};

use crate::art::ArtKind;
use crate::game::card::{Card, DifficultyLevel, GameMode};
use crate::mvi::State;

/// One playthrough from deal to game-over.
///
/// The lifecycle is implicit in the fields: idle (no moves, nothing face
/// up), in progress, complete (`is_game_over`). Persisted after every
/// settling action and cleared from backup storage on game-over.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    pub moves: u32,
    pub cards: Vec<Card>,
    /// Arts whose pairs have been found, in discovery order.
    pub discovered_arts: Vec<ArtKind>,
    pub is_game_over: bool,
    pub level: DifficultyLevel,
    #[serde(default)]
    pub mode: GameMode,
}

impl State for GameState {}

impl GameState {
    /// Freshly dealt session, used at bootstrap when no backup exists.
    pub fn dealt(level: DifficultyLevel, cards: Vec<Card>) -> Self {
        Self {
            moves: 0,
            cards,
            discovered_arts: Vec::new(),
            is_game_over: false,
            level,
            mode: GameMode::SinglePlayer,
        }
    }

    pub fn has_face_up_cards(&self) -> bool {
        self.cards.iter().any(|card| card.is_face_up)
    }

    pub fn is_in_progress(&self) -> bool {
        self.moves > 0 || self.has_face_up_cards()
    }

    pub fn is_discovered(&self, art: ArtKind) -> bool {
        self.discovered_arts.contains(&art)
    }
}
