use crate::github::Profile;
use crate::remote::RemoteResource;
use crate::ui::mvi::UiState;

/// State of the search view: the input field plus one remote profile
/// resource keyed on the submitted username.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    /// Current content of the search field.
    pub input: String,
    /// Profile fetch for the most recently submitted username.
    pub profile: RemoteResource<String, Profile>,
}

impl UiState for SearchState {}

impl SearchState {
    /// Username of the request currently owning the resource, if any.
    pub fn submitted_username(&self) -> Option<&String> {
        self.profile.key()
    }
}
