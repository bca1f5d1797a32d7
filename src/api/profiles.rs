//! Stored Profile Operations
//!
//! Listing, fetching, and deleting profiles the backend has already
//! scraped and persisted.

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{check_status, log_request, parse_json, API_BASE};
use crate::models::{ProfileDetailResponse, ProfileQuery, ProfilesResponse};

/// GET /profiles — paginated stored-profile listing
pub async fn list_profiles(query: &ProfileQuery) -> Result<ProfilesResponse, String> {
    let url = format!(
        "{}/profiles?page={}&per_page={}&search={}&sort_by={}&sort_order={}",
        API_BASE,
        query.page,
        query.per_page,
        utf8_percent_encode(&query.search, NON_ALPHANUMERIC),
        query.sort_by,
        query.sort_order,
    );
    log_request("GET", &url);
    let response = Request::get(&url).send().await.map_err(|e| e.to_string())?;
    parse_json(&url, response).await
}

/// GET /profile/{username} — one stored profile with its content
pub async fn get_profile(username: &str) -> Result<ProfileDetailResponse, String> {
    let url = format!(
        "{}/profile/{}",
        API_BASE,
        utf8_percent_encode(username, NON_ALPHANUMERIC)
    );
    log_request("GET", &url);
    let response = Request::get(&url).send().await.map_err(|e| e.to_string())?;
    parse_json(&url, response).await
}

/// DELETE /profile/{username}
pub async fn delete_profile(username: &str) -> Result<(), String> {
    let url = format!(
        "{}/profile/{}",
        API_BASE,
        utf8_percent_encode(username, NON_ALPHANUMERIC)
    );
    log_request("DELETE", &url);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_status(&url, response).await
}
