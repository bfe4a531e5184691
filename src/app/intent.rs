use crate::configuration::ConfigurationIntent;
use crate::game::GameIntent;
use crate::mvi::Intent;
use crate::scores::ScoresIntent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppIntent {
    Game(GameIntent),
    Configuration(ConfigurationIntent),
    HighScores(ScoresIntent),
    /// Scheduled after a winning single-player game; shows the name entry
    /// prompt.
    PresentNewHighScore,
    DismissNewHighScore,
    /// Name entry was confirmed; records the finished game on the board.
    SubmitHighScore { name: String },
    /// The user confirmed restarting a running game at the new level.
    ConfirmLevelChange,
    DismissLevelChange,
    DismissTwoPlayersResults,
    /// Switch between single- and two-player mode; starts a new game.
    ToggleGameMode,
}

impl Intent for AppIntent {}
