//! Calls against the portfolio backend.

use crate::config::{CREATIVES_ENDPOINT, TRACK_VISIT_ENDPOINT};
use crate::dom;
use log::{error, info, warn};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// A published piece of creative work.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreativeWork {
    pub title: String,
    pub url: String,
}

/// Body returned by the visit tracker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrackVisitResponse {
    pub status: String,
}

impl TrackVisitResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response.
    Network(String),
    /// The server answered with a non-2xx status.
    Status { code: u16, text: String },
    /// The body was not the JSON shape we expected.
    Decode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status { code, text } => {
                write!(f, "Network response was not ok: {} {}", code, text)
            }
            ApiError::Decode(msg) => write!(f, "Unexpected response body: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Issue a request and decode its JSON body.
async fn fetch_json<T: DeserializeOwned>(url: &str, method: &str) -> Result<T, ApiError> {
    let window = dom::window().map_err(|e| ApiError::Network(e.to_string()))?;

    let init = RequestInit::new();
    init.set_method(method);
    let request = Request::new_with_str_and_init(url, &init)
        .map_err(|e| ApiError::Network(js_message(&e)))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| ApiError::Network(js_message(&e)))?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Network(js_message(&e)))?
        .dyn_into()
        .map_err(|e| ApiError::Network(js_message(&e)))?;

    if !response.ok() {
        return Err(ApiError::Status {
            code: response.status(),
            text: response.status_text(),
        });
    }

    let body = response
        .json()
        .map_err(|e| ApiError::Decode(js_message(&e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| ApiError::Decode(js_message(&e)))?;
    serde_wasm_bindgen::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fetch the published creative works, newest first as served.
pub async fn fetch_creative_works() -> Result<Vec<CreativeWork>, ApiError> {
    let works: Vec<CreativeWork> = fetch_json(CREATIVES_ENDPOINT, "GET").await?;
    info!("Loaded {} creative works", works.len());
    Ok(works)
}

/// Record a page visit. Fire-and-forget: failures are only logged.
pub async fn track_page_visit() {
    match fetch_json::<TrackVisitResponse>(TRACK_VISIT_ENDPOINT, "POST").await {
        Ok(body) if body.is_success() => info!("Page visit tracked successfully."),
        Ok(body) => warn!("Visit tracker answered with status {:?}", body.status),
        Err(e) => error!("Error tracking page visit: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creative_works_decode_from_backend_shape() {
        let works: Vec<CreativeWork> =
            serde_json::from_str(r#"[{"title":"X","url":"http://x"}]"#).unwrap();
        assert_eq!(
            works,
            vec![CreativeWork {
                title: "X".into(),
                url: "http://x".into()
            }]
        );
    }

    #[test]
    fn empty_list_is_valid() {
        let works: Vec<CreativeWork> = serde_json::from_str("[]").unwrap();
        assert!(works.is_empty());
    }

    #[test]
    fn track_visit_status() {
        let ok: TrackVisitResponse = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert!(ok.is_success());
        let failed: TrackVisitResponse = serde_json::from_str(r#"{"status":"error"}"#).unwrap();
        assert!(!failed.is_success());
    }

    #[test]
    fn status_error_message() {
        let err = ApiError::Status {
            code: 503,
            text: "Service Unavailable".into(),
        };
        assert_eq!(
            err.to_string(),
            "Network response was not ok: 503 Service Unavailable"
        );
    }
}
