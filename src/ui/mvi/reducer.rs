use super::intent::Intent;
use super::state::UiState;

/// Pure `(state, intent) -> state` transition for one slice.
///
/// Side effects (starting fetches, cancelling scopes) stay in `App`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
