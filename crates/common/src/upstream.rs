//! HTTP client for the remote posts API.
//!
//! Every call is a single round trip. Failures are classified into a small
//! taxonomy so route handlers can translate them without inspecting
//! `reqwest` internals.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::types::{NewPost, PostPatch};

#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The upstream answered with a non-success status. `message` carries
    /// the `message` field of its JSON body when one was present.
    #[error("upstream returned {status}")]
    Status {
        status: StatusCode,
        message: Option<String>,
    },
    /// The request never produced a response (connect/timeout failures).
    #[error("no response from upstream: {0}")]
    Unreachable(String),
    /// The upstream answered but the body could not be decoded as JSON.
    #[error("bad upstream payload: {0}")]
    Decode(String),
}

#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    pub async fn list_posts(&self) -> Result<Value, UpstreamError> {
        let resp = self
            .http
            .get(self.url("posts"))
            .send()
            .await
            .map_err(unreachable)?;
        decode(check_status(resp).await?).await
    }

    pub async fn fetch_post(&self, id: u32) -> Result<Value, UpstreamError> {
        let resp = self
            .http
            .get(self.url(&format!("posts/{id}")))
            .send()
            .await
            .map_err(unreachable)?;
        decode(check_status(resp).await?).await
    }

    pub async fn create_post(&self, post: &NewPost) -> Result<Value, UpstreamError> {
        let resp = self
            .http
            .post(self.url("posts"))
            .json(post)
            .send()
            .await
            .map_err(unreachable)?;
        decode(check_status(resp).await?).await
    }

    pub async fn replace_post(&self, id: u32, post: &NewPost) -> Result<Value, UpstreamError> {
        let resp = self
            .http
            .put(self.url(&format!("posts/{id}")))
            .json(post)
            .send()
            .await
            .map_err(unreachable)?;
        decode(check_status(resp).await?).await
    }

    pub async fn patch_post(&self, id: u32, patch: &PostPatch) -> Result<Value, UpstreamError> {
        let resp = self
            .http
            .patch(self.url(&format!("posts/{id}")))
            .json(patch)
            .send()
            .await
            .map_err(unreachable)?;
        decode(check_status(resp).await?).await
    }

    pub async fn delete_post(&self, id: u32) -> Result<(), UpstreamError> {
        let resp = self
            .http
            .delete(self.url(&format!("posts/{id}")))
            .send()
            .await
            .map_err(unreachable)?;
        check_status(resp).await?;
        Ok(())
    }
}

/// The upstream reports a missing resource as a success with an empty body
/// (`{}` or null) instead of a 404 in some cases. Treat both as absent.
pub fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

fn unreachable(err: reqwest::Error) -> UpstreamError {
    UpstreamError::Unreachable(err.to_string())
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, UpstreamError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    // Pull the upstream's own message out of the error body when there is one.
    let message = resp
        .json::<Value>()
        .await
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from));
    debug!(%status, ?message, "upstream error response");
    Err(UpstreamError::Status { status, message })
}

async fn decode(resp: reqwest::Response) -> Result<Value, UpstreamError> {
    resp.json::<Value>()
        .await
        .map_err(|e| UpstreamError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let client = UpstreamClient::new("http://example.test/");
        assert_eq!(client.url("posts"), "http://example.test/posts");
        assert_eq!(client.url("posts/3"), "http://example.test/posts/3");
    }

    #[test]
    fn empty_payload_detection() {
        assert!(is_empty_payload(&Value::Null));
        assert!(is_empty_payload(&json!({})));
        assert!(!is_empty_payload(&json!({"id": 1})));
        assert!(!is_empty_payload(&json!([])));
    }
}
