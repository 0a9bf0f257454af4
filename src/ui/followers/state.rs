use crate::github::FollowerSummary;
use crate::remote::RemoteResource;
use crate::ui::mvi::UiState;

/// State of a follower grid: one remote resource keyed on the followers
/// collection URL it was mounted with.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FollowerGridState {
    pub followers: RemoteResource<String, Vec<FollowerSummary>>,
}

impl UiState for FollowerGridState {}

impl FollowerGridState {
    /// True once a fetch succeeded with an empty follower list.
    pub fn is_empty_result(&self) -> bool {
        matches!(self.followers.state().value(), Some(list) if list.is_empty())
    }
}
