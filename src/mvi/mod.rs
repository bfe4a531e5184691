//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow across the game engine.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑           │
//!    │           └──→ Effects ──→ (timers, persistence)
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of one sub-domain
//! - **Intent**: User actions or scheduled follow-ups
//! - **Reducer**: Pure function that transforms state and lists effects
//!
//! Unlike a plain `(State, Intent) -> State` reducer, every reducer here
//! also returns the effects the runtime must perform afterwards, so that
//! delayed re-dispatch and persistence stay out of the transition logic.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
