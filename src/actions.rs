//! Async Operation Dispatch
//!
//! One function per backend-facing operation: open the slice's request
//! sequence, await the HTTP wrapper, then commit the resolution through
//! the slice reducer. The reducer drops any resolution that is no longer
//! the latest issued for its slice, so overlapping dispatches settle on
//! the last-issued request rather than the last-resolved one.

use leptos::prelude::*;

use crate::api;
use crate::models::{ContentItem, Profile};
use crate::store::{AppStateStoreFields, AppStore};

/// Fetch profile + tweets + posts and replace the user slice wholesale.
/// The returned outcome lets the caller raise a toast; the slice already
/// holds the error either way.
pub async fn fetch_user_data(
    store: AppStore,
    username: String,
    max_tweets: u32,
) -> Result<(), String> {
    let seq = store.user().write().begin_request();
    let result = api::get_user_info(&username, max_tweets).await;
    let outcome = result.as_ref().map(|_| ()).map_err(|e| e.clone());
    store.user().write().finish_user_info(seq, result);
    outcome
}

/// Fetch tweets only, leaving the profile and posts untouched.
pub async fn fetch_user_tweets(store: AppStore, username: String, max_tweets: u32) {
    let seq = store.user().write().begin_request();
    let result = api::get_user_tweets(&username, max_tweets).await;
    store.user().write().finish_tweets(seq, result);
}

/// Fetch media posts only.
pub async fn fetch_user_posts(store: AppStore, username: String, max_posts: u32) {
    let seq = store.user().write().begin_request();
    let result = api::get_user_posts(&username, max_posts).await;
    store.user().write().finish_posts(seq, result);
}

/// Load a stored profile (navigation from the users list); the endpoint
/// supplies tweets and posts in the same call.
pub async fn fetch_user_profile(store: AppStore, username: String) {
    let seq = store.user().write().begin_request();
    let result = api::get_profile(&username).await;
    store.user().write().finish_profile(seq, result);
}

/// Trigger the backend classification pipeline for a username.
pub async fn analyze_user_profile(store: AppStore, username: String, args: api::AnalyzeArgs) {
    let seq = store.analysis().write().begin_analyze();
    let result = api::analyze_user_profile(&username, &args).await;
    store.analysis().write().finish_analyze(seq, result);
}

/// Re-trigger backend data collection. Only touches the refresh flags; a
/// user-slice fetch is not chained automatically.
pub async fn refresh_user_data(store: AppStore, username: String) {
    let seq = store.analysis().write().begin_refresh();
    let result = api::refresh_user_data(&username).await;
    store.analysis().write().finish_refresh(seq, result);
}

/// Hydrate the user slice directly, bypassing the async lifecycle. Used
/// when another flow (the users list) already holds the data.
pub fn hydrate_user(
    store: AppStore,
    profile: Profile,
    tweets: Vec<ContentItem>,
    posts: Vec<ContentItem>,
) {
    let user_field = store.user();
    let mut user = user_field.write();
    user.set_current_user(profile);
    user.set_tweets(tweets);
    user.set_posts(posts);
}
