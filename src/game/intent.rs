use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameIntent {
    /// Reset the session and schedule a re-deal once the flip-down
    /// animation window has passed.
    NewGame,
    /// Replace the cards with a freshly generated deck. Other fields are
    /// untouched.
    ShuffleCards,
    /// The card at this id was turned face up by the player.
    CardReturned(usize),
}

impl Intent for GameIntent {}
