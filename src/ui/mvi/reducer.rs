use super::intent::Intent;
use super::state::UiState;

/// Pure state transition: `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Side effects (network, terminal) stay with the caller.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
