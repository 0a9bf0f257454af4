use serde::Deserialize;

/// A public user profile from the `/users/{username}` endpoint.
///
/// Optional fields are absent for accounts that never filled them in;
/// views render fallback text in that case.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub html_url: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub blog: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub followers_url: String,
}

impl Profile {
    /// Display name, falling back to the login handle.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }
}

/// One entry from a `{followers_url}` collection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FollowerSummary {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
}
