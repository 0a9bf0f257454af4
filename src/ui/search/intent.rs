use crate::github::Profile;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    /// A character typed into the search field.
    Input(char),
    /// Backspace in the search field.
    Backspace,
    /// Form submitted. A no-op when the field is empty.
    Submit,
    /// The fetch issued for `key` resolved. Discarded if the view has
    /// since submitted a different username.
    Resolved {
        key: String,
        result: Result<Profile, String>,
    },
}

impl Intent for SearchIntent {}
