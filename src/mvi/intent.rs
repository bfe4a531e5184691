//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (card flips, configuration edits)
/// - Scheduled follow-ups (delayed shuffle, debounced save)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
