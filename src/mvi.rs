//! State/intent/reducer seams used by the user store.
//!
//! Store operations never edit state in place. They resolve everything
//! non-deterministic (ids, avatars, network results) into an [`Intent`],
//! then hand the current state and the intent to a [`Reducer`].

/// Store state that readers receive as cloned snapshots.
pub trait State: Clone + PartialEq + Default + Send + 'static {}

/// A fully resolved change request.
pub trait Intent: Send + 'static {}

/// Computes the next state from the current one and an intent.
///
/// Implementations do no I/O and draw no randomness, so the same inputs
/// always give the same state.
pub trait Reducer {
    type State: State;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
