//! Base trait for state objects in MVI architecture.

/// Marker trait for state containers.
///
/// `Default` is required so the dispatch loop can take ownership of the
/// current state with `std::mem::take` while reducing.
pub trait State: Default {}
