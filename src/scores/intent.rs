use std::time::SystemTime;

use crate::game::DifficultyLevel;
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoresIntent {
    AddScore {
        level: DifficultyLevel,
        score: u32,
        name: String,
        date: SystemTime,
    },
}

impl Intent for ScoresIntent {}
