use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::art::ArtKind;
use crate::game::DifficultyLevel;
use crate::mvi::State;

/// The selection can never drop below half of the smallest difficulty's
/// card count, so every level always has enough arts to deal full pairs.
pub const MIN_SELECTED_ARTS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationState {
    pub selected_arts: BTreeSet<ArtKind>,
    pub difficulty_level: DifficultyLevel,
}

impl Default for ConfigurationState {
    fn default() -> Self {
        Self {
            selected_arts: ArtKind::ALL.into_iter().collect(),
            difficulty_level: DifficultyLevel::default(),
        }
    }
}

impl State for ConfigurationState {}

impl ConfigurationState {
    pub fn is_selected(&self, art: ArtKind) -> bool {
        self.selected_arts.contains(&art)
    }
}
