//! The single-threaded dispatch loop.
//!
//! Intents are reduced strictly in order; no two intents are ever reduced
//! concurrently. Effects returned by the reducer are executed as they are
//! encountered: immediate re-dispatches join the back of the queue,
//! timers land in the scheduler, and persistence writes go straight to
//! the storage collaborator (fire-and-forget; failures are logged, never
//! propagated into game state).

mod clock;

pub use clock::{Clock, ManualClock, SystemClock};

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::app::{AppEffect, AppEnvironment, AppIntent, AppReducer, AppState, DebounceKey};
use crate::configuration::ConfigurationState;
use crate::game::GameState;
use crate::mvi::Reducer;
use crate::storage::{self, Storage, StorageKey};

struct ScheduledIntent {
    deadline: Instant,
    /// Monotonic tiebreaker so same-deadline timers fire in scheduling
    /// order.
    seq: u64,
    slot: Option<DebounceKey>,
    intent: AppIntent,
}

pub struct Runtime<S, C> {
    state: AppState,
    env: AppEnvironment,
    storage: S,
    clock: C,
    timers: Vec<ScheduledIntent>,
    next_seq: u64,
}

impl<S: Storage, C: Clock> Runtime<S, C> {
    pub fn new(storage: S, env: AppEnvironment, clock: C) -> Self {
        Self {
            state: AppState::default(),
            env,
            storage,
            clock,
            timers: Vec::new(),
            next_seq: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load persisted state, falling back to defaults and a fresh deal
    /// when nothing (or nothing readable) is stored.
    pub fn bootstrap(&mut self) {
        let configuration: ConfigurationState =
            storage::load(&self.storage, StorageKey::Configuration).unwrap_or_default();
        let boards = storage::load(&self.storage, StorageKey::HighScores).unwrap_or_default();
        let game = storage::load(&self.storage, StorageKey::GameBackup).unwrap_or_else(|| {
            let level = configuration.difficulty_level;
            let cards = self.env.deck.deal(&configuration.selected_arts, level);
            GameState::dealt(level, cards)
        });
        self.state = AppState {
            game,
            configuration,
            boards,
            ..AppState::default()
        };
    }

    /// Reduce one intent plus everything it re-dispatches immediately.
    pub fn dispatch(&mut self, intent: AppIntent) {
        let mut queue = VecDeque::new();
        queue.push_back(intent);
        while let Some(intent) = queue.pop_front() {
            tracing::trace!(?intent, "reducing");
            let (state, effects) =
                AppReducer::reduce(std::mem::take(&mut self.state), intent, &self.env);
            self.state = state;
            for effect in effects {
                match effect {
                    AppEffect::Dispatch(intent) => queue.push_back(intent),
                    AppEffect::DispatchAfter { delay, intent } => {
                        self.schedule(delay, None, intent);
                    }
                    AppEffect::Debounce { key, delay, intent } => {
                        self.schedule(delay, Some(key), intent);
                    }
                    AppEffect::SaveGame => {
                        self.persist(StorageKey::GameBackup);
                    }
                    AppEffect::ClearGameBackup => {
                        if let Err(err) = self.storage.remove(StorageKey::GameBackup) {
                            tracing::error!(error = %err, "failed to clear game backup");
                        }
                    }
                    AppEffect::SaveHighScores => {
                        self.persist(StorageKey::HighScores);
                    }
                    AppEffect::SaveConfiguration => {
                        self.persist(StorageKey::Configuration);
                    }
                }
            }
        }
    }

    /// Fire every timer whose deadline has passed, in deadline order.
    /// Intents fired here can schedule further timers; those are honored
    /// within the same call if already due.
    pub fn run_due(&mut self) {
        loop {
            let now = self.clock.now();
            let due = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, timer)| timer.deadline <= now)
                .min_by_key(|(_, timer)| (timer.deadline, timer.seq))
                .map(|(index, _)| index);
            let Some(index) = due else { break };
            let timer = self.timers.swap_remove(index);
            tracing::trace!(?timer.intent, "timer fired");
            self.dispatch(timer.intent);
        }
    }

    /// Earliest pending deadline, for the driver's sleep calculation.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.iter().map(|timer| timer.deadline).min()
    }

    fn schedule(&mut self, delay: Duration, slot: Option<DebounceKey>, intent: AppIntent) {
        if let Some(key) = slot {
            // Supersede-on-repeat: the newer edit owns the slot.
            self.timers.retain(|timer| timer.slot != Some(key));
        }
        self.next_seq += 1;
        self.timers.push(ScheduledIntent {
            deadline: self.clock.now() + delay,
            seq: self.next_seq,
            slot,
            intent,
        });
    }

    fn persist(&self, key: StorageKey) {
        let result = match key {
            StorageKey::GameBackup => storage::store(&self.storage, key, &self.state.game),
            StorageKey::HighScores => storage::store(&self.storage, key, &self.state.boards),
            StorageKey::Configuration => {
                storage::store(&self.storage, key, &self.state.configuration)
            }
        };
        if let Err(err) = result {
            tracing::error!(key = key.as_str(), error = %err, "persistence failed");
        }
    }
}
