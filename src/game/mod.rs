//! Game session: cards, deck generation, and the session reducer.

mod card;
mod deck;
mod intent;
mod reducer;
mod state;

pub use card::{Card, DifficultyLevel, GameMode, Player};
pub use deck::DeckSource;
pub use intent::GameIntent;
pub use reducer::{GameContext, GameEffect, GameReducer, SHUFFLE_DELAY};
pub use state::GameState;
