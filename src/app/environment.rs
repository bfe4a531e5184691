use std::time::SystemTime;

use crate::game::DeckSource;

/// Injected capabilities the reducers are not allowed to reach for
/// directly: randomness (via the deck source) and wall-clock dates.
#[derive(Debug, Clone, Copy)]
pub struct AppEnvironment {
    pub deck: DeckSource,
    pub now: fn() -> SystemTime,
}

impl Default for AppEnvironment {
    fn default() -> Self {
        Self {
            deck: DeckSource::Shuffled,
            now: SystemTime::now,
        }
    }
}
