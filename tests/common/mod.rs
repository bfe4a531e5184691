//! Shared test fixture: a runtime on virtual time with in-memory storage
//! and a deterministic deck.

#![allow(dead_code, unused_imports)]

use std::time::{Duration, SystemTime};

use memoiry::app::{AppEnvironment, AppIntent};
use memoiry::game::{DeckSource, GameIntent};
use memoiry::runtime::{ManualClock, Runtime};
use memoiry::storage::MemoryStorage;

pub struct Fixture {
    pub runtime: Runtime<MemoryStorage, ManualClock>,
    pub clock: ManualClock,
    pub storage: MemoryStorage,
}

/// A bootstrapped runtime. The sequential deck pairs the card at id `i`
/// with the card at id `i + pairs_count`, and `now` is pinned to the
/// epoch so score dates are predictable.
pub fn fixture() -> Fixture {
    let storage = MemoryStorage::new();
    let clock = ManualClock::new();
    let env = AppEnvironment {
        deck: DeckSource::Sequential,
        now: || SystemTime::UNIX_EPOCH,
    };
    let mut runtime = Runtime::new(storage.clone(), env, clock.clone());
    runtime.bootstrap();
    Fixture {
        runtime,
        clock,
        storage,
    }
}

impl Fixture {
    /// Advance virtual time and fire whatever came due.
    pub fn advance(&mut self, delta: Duration) {
        self.clock.advance(delta);
        self.runtime.run_due();
    }

    pub fn flip(&mut self, id: usize) {
        self.runtime.dispatch(AppIntent::Game(GameIntent::CardReturned(id)));
    }

    /// Play the whole board to game-over by flipping each pair in order.
    pub fn win_game(&mut self) {
        let pairs = self.runtime.state().game.level.pairs_count();
        for i in 0..pairs {
            self.flip(i);
            self.flip(i + pairs);
        }
        assert!(self.runtime.state().game.is_game_over);
    }
}
