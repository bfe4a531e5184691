//! Terminal front-end: a thin rendering collaborator over the engine.
//!
//! The UI holds only presentation-local state (cursor positions, the name
//! being typed); every game rule lives behind the dispatch handle.

pub mod app;
pub mod events;
pub mod input;
pub mod layout;
pub mod render;
pub mod run;
pub mod terminal_guard;
pub mod theme;
