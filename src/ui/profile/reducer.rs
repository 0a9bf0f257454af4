use crate::ui::mvi::Reducer;
use crate::ui::profile::intent::ProfileIntent;
use crate::ui::profile::state::ProfileState;

pub struct ProfileReducer;

impl Reducer for ProfileReducer {
    type State = ProfileState;
    type Intent = ProfileIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProfileIntent::Load { username } => {
                let mut state = state;
                state.profile.begin(username);
                state
            }
            ProfileIntent::Resolved { key, result } => {
                let mut state = state;
                state.profile.resolve(&key, result);
                state
            }
        }
    }
}
