//! GitHub REST API client and response models.

mod client;
mod error;
mod models;

pub use client::{build_client, fetch_followers, fetch_profile, FOLLOWERS_PAGE_SIZE};
pub use error::ApiError;
pub use models::{FollowerSummary, Profile};
