use crate::github::Profile;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ProfileIntent {
    /// The route parameter changed; start loading this username.
    Load { username: String },
    /// The fetch issued for `key` resolved. Discarded if the route has
    /// since moved to a different username.
    Resolved {
        key: String,
        result: Result<Profile, String>,
    },
}

impl Intent for ProfileIntent {}
