use super::intent::Intent;
use super::state::UiState;

/// Turns `(State, Intent)` into the next state.
///
/// Reducers are total and side-effect free. Anything that must happen
/// around a transition (starting a timer, hitting the store) is done by the
/// caller, which compares the state before and after the dispatch.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
