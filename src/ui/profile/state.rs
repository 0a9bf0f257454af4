use crate::github::Profile;
use crate::remote::RemoteResource;
use crate::ui::mvi::UiState;

/// State of the route-driven profile view: one remote profile resource
/// keyed on the username taken from the navigation route.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileState {
    pub profile: RemoteResource<String, Profile>,
}

impl UiState for ProfileState {}

impl ProfileState {
    /// Username this view is currently showing or loading, if any.
    pub fn username(&self) -> Option<&String> {
        self.profile.key()
    }
}
