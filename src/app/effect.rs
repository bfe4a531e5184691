use std::time::Duration;

use crate::app::intent::AppIntent;

/// Named timer slots for supersede-on-repeat scheduling. Scheduling a new
/// effect under a key cancels the previous timer in that slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebounceKey {
    SaveConfiguration,
}

/// Follow-up work returned by the orchestration reducer and executed by
/// the runtime, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEffect {
    /// Re-dispatch immediately, after the current intent settles.
    Dispatch(AppIntent),
    /// One-shot timer: re-dispatch after the delay.
    DispatchAfter { delay: Duration, intent: AppIntent },
    /// Debounced re-dispatch under a named slot.
    Debounce {
        key: DebounceKey,
        delay: Duration,
        intent: AppIntent,
    },
    /// Persist the game session to backup storage.
    SaveGame,
    /// Remove the game session from backup storage.
    ClearGameBackup,
    /// Persist the high-score boards.
    SaveHighScores,
    /// Persist the configuration.
    SaveConfiguration,
}
