//! Observer-based change notification.
//!
//! Replaces the original's direct DOM pokes: state mutations notify
//! registered observers with a snapshot of the new state, and frontends
//! re-render from that.

use crate::views::ViewState;

/// Receives a snapshot after every state mutation.
///
/// Observers are called synchronously from the mutating call, outside the
/// state lock; implementations should hand off to their own executor if
/// rendering is slow.
pub trait StateObserver: Send + Sync {
    fn state_changed(&self, state: &ViewState);
}
