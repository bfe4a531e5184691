//! High-score boards: one ranked list per difficulty level.

mod intent;
mod reducer;
mod state;

pub use intent::ScoresIntent;
pub use reducer::{ScoresEffect, ScoresReducer};
pub use state::{Boards, HighScore, MAX_SCORES_PER_BOARD};
