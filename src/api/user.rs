//! User Data Operations
//!
//! Scrape-backed user lookup, content fetches, analysis trigger, and the
//! raw-data refresh.

use gloo_net::http::Request;
use serde::Serialize;

use super::{check_status, log_request, parse_json, API_BASE};
use crate::models::{
    AnalysisResponse, ContentItem, PostsResponse, TweetsResponse, UserInfoResponse,
};

#[derive(Serialize)]
struct UserInfoArgs<'a> {
    username: &'a str,
    max_tweets: u32,
}

#[derive(Serialize)]
struct PostsArgs<'a> {
    username: &'a str,
    max_posts: u32,
}

#[derive(Serialize)]
pub struct AnalyzeArgs {
    pub image_model: Vec<String>,
    pub text_model: Vec<String>,
    pub fusion_technique: String,
    pub alpha: f64,
}

/// POST /user/get-info — scrape profile, tweets, and posts in one call
pub async fn get_user_info(username: &str, max_tweets: u32) -> Result<UserInfoResponse, String> {
    let url = format!("{}/user/get-info", API_BASE);
    log_request("POST", &url);
    let response = Request::post(&url)
        .json(&UserInfoArgs {
            username,
            max_tweets,
        })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(&url, response).await
}

/// POST /user/get-tweets — tweets only
pub async fn get_user_tweets(username: &str, max_tweets: u32) -> Result<Vec<ContentItem>, String> {
    let url = format!("{}/user/get-tweets", API_BASE);
    log_request("POST", &url);
    let response = Request::post(&url)
        .json(&UserInfoArgs {
            username,
            max_tweets,
        })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let body: TweetsResponse = parse_json(&url, response).await?;
    Ok(body.tweets)
}

/// POST /user/get-posts — media posts only
pub async fn get_user_posts(username: &str, max_posts: u32) -> Result<Vec<ContentItem>, String> {
    let url = format!("{}/user/get-posts", API_BASE);
    log_request("POST", &url);
    let response = Request::post(&url)
        .json(&PostsArgs {
            username,
            max_posts,
        })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let body: PostsResponse = parse_json(&url, response).await?;
    Ok(body.posts)
}

/// POST /user/{username}/analyze — run the classification pipeline
pub async fn analyze_user_profile(
    username: &str,
    args: &AnalyzeArgs,
) -> Result<AnalysisResponse, String> {
    let url = format!("{}/user/{}/analyze", API_BASE, username);
    log_request("POST", &url);
    let response = Request::post(&url)
        .json(args)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    parse_json(&url, response).await
}

/// POST /user/{username}/refresh — re-trigger backend data collection
pub async fn refresh_user_data(username: &str) -> Result<(), String> {
    let url = format!("{}/user/{}/refresh", API_BASE, username);
    log_request("POST", &url);
    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    check_status(&url, response).await
}
