use crate::ui::followers::intent::FollowerGridIntent;
use crate::ui::followers::state::FollowerGridState;
use crate::ui::mvi::Reducer;

pub struct FollowerGridReducer;

impl Reducer for FollowerGridReducer {
    type State = FollowerGridState;
    type Intent = FollowerGridIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FollowerGridIntent::Load { url } => {
                let mut state = state;
                state.followers.begin(url);
                state
            }
            FollowerGridIntent::Resolved { key, result } => {
                let mut state = state;
                state.followers.resolve(&key, result);
                state
            }
            FollowerGridIntent::Reset => {
                let mut state = state;
                state.followers.reset();
                state
            }
        }
    }
}
