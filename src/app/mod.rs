//! Top-level composition: the aggregate state, the orchestration reducer,
//! and the effect vocabulary the runtime executes.

mod effect;
mod environment;
mod intent;
mod reducer;
mod state;

pub use effect::{AppEffect, DebounceKey};
pub use environment::AppEnvironment;
pub use intent::AppIntent;
pub use reducer::{AppReducer, HIGH_SCORE_PROMPT_DELAY};
pub use state::AppState;
