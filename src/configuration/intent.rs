use crate::art::ArtKind;
use crate::game::DifficultyLevel;
use crate::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationIntent {
    SelectArt(ArtKind),
    UnselectArt(ArtKind),
    ChangeDifficultyLevel(DifficultyLevel),
    /// Debounced follow-up that actually persists the configuration.
    Save,
}

impl Intent for ConfigurationIntent {}
