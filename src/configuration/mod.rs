//! Player configuration: which arts are in play and the difficulty level.

mod intent;
mod reducer;
mod state;

pub use intent::ConfigurationIntent;
pub use reducer::{ConfigurationEffect, ConfigurationReducer, SAVE_DEBOUNCE};
pub use state::{ConfigurationState, MIN_SELECTED_ARTS};
