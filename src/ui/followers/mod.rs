mod intent;
mod reducer;
mod state;

pub use intent::FollowerGridIntent;
pub use reducer::FollowerGridReducer;
pub use state::FollowerGridState;
