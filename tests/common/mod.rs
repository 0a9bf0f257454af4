//! Shared test fixtures.

#![allow(dead_code)]

use octoview::github::{FollowerSummary, Profile};

pub fn make_profile(login: &str) -> Profile {
    Profile {
        login: login.to_string(),
        name: Some(format!("{} Display", login)),
        avatar_url: format!("https://avatars.example.com/{}", login),
        html_url: format!("https://github.com/{}", login),
        bio: Some("Writes code.".to_string()),
        location: Some("Seattle, WA".to_string()),
        blog: Some("https://example.com".to_string()),
        public_repos: 42,
        followers: 100,
        following: 10,
        followers_url: format!("https://api.github.com/users/{}/followers", login),
    }
}

pub fn make_follower(id: u64, login: &str) -> FollowerSummary {
    FollowerSummary {
        id,
        login: login.to_string(),
        avatar_url: format!("https://avatars.example.com/{}", login),
        html_url: format!("https://github.com/{}", login),
    }
}
