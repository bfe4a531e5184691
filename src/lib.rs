//! Memoiry: a memory-matching card game.
//!
//! The engine is a set of pure MVI reducers composed under a single
//! dispatch loop; the terminal UI in [`ui`] is just one collaborator that
//! renders state snapshots and dispatches intents.

pub mod app;
pub mod art;
pub mod configuration;
pub mod game;
pub mod mvi;
pub mod runtime;
pub mod scores;
pub mod storage;
pub mod ui;
