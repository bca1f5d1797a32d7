//! Backend API Wrappers
//!
//! Thin HTTP bindings to the analysis backend, organized by domain. Every
//! wrapper returns `Result<T, String>`: the parsed success payload, or a
//! normalized error message taken from the response body's `error` field
//! when present, falling back to the transport error. No retries here;
//! callers decide whether to expose a manual retry.

mod ethics;
mod profiles;
mod user;

use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use serde::Deserialize;

// Re-export all public items
pub use ethics::*;
pub use profiles::*;
pub use user::*;

/// Fixed local backend address
pub const API_BASE: &str = "http://localhost:8000/api";

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

pub(crate) fn log_request(method: &str, url: &str) {
    web_sys::console::log_1(&format!("[API] {} {}", method, url).into());
}

pub(crate) fn log_failure(url: &str, message: &str) {
    web_sys::console::error_1(&format!("[API] {} failed: {}", url, message).into());
}

/// Unwrap a response: parse the JSON body on 2xx, otherwise extract the
/// backend's error field (verbatim) or synthesize a transport message.
pub(crate) async fn parse_json<T: DeserializeOwned>(
    url: &str,
    response: Response,
) -> Result<T, String> {
    if !response.ok() {
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => format!("request failed with status {}", response.status()),
        };
        log_failure(url, &message);
        return Err(message);
    }
    response.json::<T>().await.map_err(|e| {
        let message = e.to_string();
        log_failure(url, &message);
        message
    })
}

/// Like `parse_json` but discards the body; used for status-only calls.
pub(crate) async fn check_status(url: &str, response: Response) -> Result<(), String> {
    if !response.ok() {
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => format!("request failed with status {}", response.status()),
        };
        log_failure(url, &message);
        return Err(message);
    }
    Ok(())
}
