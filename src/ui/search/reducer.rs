use crate::ui::mvi::Reducer;
use crate::ui::search::intent::SearchIntent;
use crate::ui::search::state::SearchState;

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::Input(ch) => {
                let mut state = state;
                state.input.push(ch);
                state
            }
            SearchIntent::Backspace => {
                let mut state = state;
                state.input.pop();
                state
            }
            SearchIntent::Submit => {
                let username = state.input.trim().to_string();
                if username.is_empty() {
                    // Empty submission: no request, prior state kept
                    return state;
                }
                let mut state = state;
                state.profile.begin(username);
                state
            }
            SearchIntent::Resolved { key, result } => {
                let mut state = state;
                state.profile.resolve(&key, result);
                state
            }
        }
    }
}
