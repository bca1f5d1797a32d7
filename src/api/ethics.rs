//! Ethical AI Reporting Operations
//!
//! Bias, social-impact, and outreach reports computed by the analytics
//! service. These are read per view and never cached in the store.

use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{log_request, parse_json, API_BASE};
use crate::models::{BiasReport, OutreachReport, SocialImpactReport};

/// GET /bias-detection?username=
pub async fn get_bias_report(username: &str) -> Result<BiasReport, String> {
    let url = format!(
        "{}/bias-detection?username={}",
        API_BASE,
        utf8_percent_encode(username, NON_ALPHANUMERIC)
    );
    log_request("GET", &url);
    let response = Request::get(&url).send().await.map_err(|e| e.to_string())?;
    parse_json(&url, response).await
}

/// GET /social-impact?username=
pub async fn get_social_impact(username: &str) -> Result<SocialImpactReport, String> {
    let url = format!(
        "{}/social-impact?username={}",
        API_BASE,
        utf8_percent_encode(username, NON_ALPHANUMERIC)
    );
    log_request("GET", &url);
    let response = Request::get(&url).send().await.map_err(|e| e.to_string())?;
    parse_json(&url, response).await
}

/// GET /community-outreach
pub async fn get_community_outreach() -> Result<OutreachReport, String> {
    let url = format!("{}/community-outreach", API_BASE);
    log_request("GET", &url);
    let response = Request::get(&url).send().await.map_err(|e| e.to_string())?;
    parse_json(&url, response).await
}
