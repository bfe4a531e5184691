use serde::{Deserialize, Serialize};

use crate::art::ArtKind;

/// One playing card. `id` is the stable position index in the deck,
/// assigned once at deal time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: usize,
    pub art: ArtKind,
    pub is_face_up: bool,
}

impl Card {
    pub fn face_down(id: usize, art: ArtKind) -> Self {
        Self {
            id,
            art,
            is_face_up: false,
        }
    }
}

/// Difficulty determines the card count. Immutable once a session starts;
/// changing it triggers a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DifficultyLevel {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 3] = [
        DifficultyLevel::Easy,
        DifficultyLevel::Normal,
        DifficultyLevel::Hard,
    ];

    pub fn cards_count(self) -> usize {
        match self {
            DifficultyLevel::Easy => 18,
            DifficultyLevel::Normal => 20,
            DifficultyLevel::Hard => 22,
        }
    }

    pub fn pairs_count(self) -> usize {
        self.cards_count() / 2
    }

    pub fn label(self) -> &'static str {
        match self {
            DifficultyLevel::Easy => "Easy",
            DifficultyLevel::Normal => "Normal",
            DifficultyLevel::Hard => "Hard",
        }
    }

    /// Next level in cycling order, for the UI level switcher.
    pub fn next(self) -> Self {
        match self {
            DifficultyLevel::Easy => DifficultyLevel::Normal,
            DifficultyLevel::Normal => DifficultyLevel::Hard,
            DifficultyLevel::Hard => DifficultyLevel::Easy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub fn next(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Player::First => "Player 1",
            Player::Second => "Player 2",
        }
    }
}

/// Session mode. Two-player mode tracks whose turn is active and which
/// pairs each player has discovered.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum GameMode {
    #[default]
    SinglePlayer,
    TwoPlayers {
        current: Player,
        first_player_arts: Vec<ArtKind>,
        second_player_arts: Vec<ArtKind>,
    },
}

impl GameMode {
    /// Fresh sub-state for a new session, preserving the mode kind.
    pub fn reset(&self) -> Self {
        match self {
            GameMode::SinglePlayer => GameMode::SinglePlayer,
            GameMode::TwoPlayers { .. } => GameMode::two_players(),
        }
    }

    pub fn two_players() -> Self {
        GameMode::TwoPlayers {
            current: Player::First,
            first_player_arts: Vec::new(),
            second_player_arts: Vec::new(),
        }
    }

    pub fn is_two_players(&self) -> bool {
        matches!(self, GameMode::TwoPlayers { .. })
    }

    /// Winner of a finished two-player session, `None` on a draw or in
    /// single-player mode.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameMode::SinglePlayer => None,
            GameMode::TwoPlayers {
                first_player_arts,
                second_player_arts,
                ..
            } => match first_player_arts.len().cmp(&second_player_arts.len()) {
                std::cmp::Ordering::Greater => Some(Player::First),
                std::cmp::Ordering::Less => Some(Player::Second),
                std::cmp::Ordering::Equal => None,
            },
        }
    }
}
