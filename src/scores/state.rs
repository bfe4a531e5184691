use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::game::DifficultyLevel;
use crate::mvi::State;

/// Each board keeps at most this many entries.
pub const MAX_SCORES_PER_BOARD: usize = 10;

/// One ledger entry. Identity is the composite of all three fields; there
/// is no generated id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    /// Moves at game-over. Lower is better.
    pub score: u32,
    pub name: String,
    pub date: SystemTime,
}

/// The ranked high-score lists, ascending by score, ties broken by most
/// recent date first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Boards {
    #[serde(default)]
    pub easy: Vec<HighScore>,
    #[serde(default)]
    pub normal: Vec<HighScore>,
    #[serde(default)]
    pub hard: Vec<HighScore>,
}

impl State for Boards {}

impl Boards {
    pub fn board(&self, level: DifficultyLevel) -> &[HighScore] {
        match level {
            DifficultyLevel::Easy => &self.easy,
            DifficultyLevel::Normal => &self.normal,
            DifficultyLevel::Hard => &self.hard,
        }
    }

    pub(crate) fn board_mut(&mut self, level: DifficultyLevel) -> &mut Vec<HighScore> {
        match level {
            DifficultyLevel::Easy => &mut self.easy,
            DifficultyLevel::Normal => &mut self.normal,
            DifficultyLevel::Hard => &mut self.hard,
        }
    }

    /// Whether a finished game with this score earns a ledger entry: the
    /// board has room, or the score beats the current worst entry.
    pub fn qualifies(&self, level: DifficultyLevel, score: u32) -> bool {
        let board = self.board(level);
        board.len() < MAX_SCORES_PER_BOARD
            || board.last().is_some_and(|worst| score < worst.score)
    }
}
