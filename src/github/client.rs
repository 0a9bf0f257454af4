use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::github::error::ApiError;
use crate::github::models::{FollowerSummary, Profile};

/// Fixed page size for the follower grid. Not user-configurable.
pub const FOLLOWERS_PAGE_SIZE: u32 = 12;

/// Creates a preconfigured HTTP client with the headers GitHub requires.
pub fn build_client() -> Result<Client, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert("User-Agent", HeaderValue::from_static("octoview"));
    headers.insert(
        "Accept",
        HeaderValue::from_static("application/vnd.github.v3+json"),
    );

    let client = Client::builder().default_headers(headers).build()?;
    Ok(client)
}

/// Fetches a single user profile.
///
/// 404 maps to [`ApiError::NotFound`]; any other non-2xx status maps to
/// [`ApiError::RequestFailed`].
pub async fn fetch_profile(
    client: &Client,
    base_url: &str,
    username: &str,
) -> Result<Profile, ApiError> {
    let url = format!("{}/users/{}", base_url.trim_end_matches('/'), username);
    debug!(%url, "fetching profile");

    let response = client.get(&url).send().await?;
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }
    if !status.is_success() {
        return Err(ApiError::RequestFailed {
            status: status.as_u16(),
        });
    }

    let profile = response.json::<Profile>().await?;
    Ok(profile)
}

/// Fetches the first page of followers from a profile's `followers_url`.
///
/// The page size is appended as a query parameter to bound the result
/// for grid layout; no further pages are requested.
pub async fn fetch_followers(
    client: &Client,
    followers_url: &str,
) -> Result<Vec<FollowerSummary>, ApiError> {
    debug!(%followers_url, "fetching followers");

    let response = client
        .get(followers_url)
        .query(&[("per_page", FOLLOWERS_PAGE_SIZE)])
        .send()
        .await?;
    let status = response.status();

    if !status.is_success() {
        return Err(ApiError::RequestFailed {
            status: status.as_u16(),
        });
    }

    let followers = response.json::<Vec<FollowerSummary>>().await?;
    Ok(followers)
}
