//! Outward error mapping for the relay routes.
//!
//! Client-input problems answer with a `{"message": ...}` body; upstream and
//! transport problems answer with `{"error": ...}`, matching the shapes the
//! service has always produced.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use common::upstream::UpstreamError;

#[derive(Debug, Error, PartialEq)]
pub enum RouteError {
    /// The path id did not parse to a positive integer. Most routes answer
    /// 404 here; the patch route answers 400 (longstanding contract).
    #[error("Invalid post ID.")]
    InvalidId(StatusCode),
    #[error("{0}")]
    MissingFields(&'static str),
    #[error("Post not found.")]
    NotFound,
    /// Relayed upstream HTTP error, reason derived from the status line.
    #[error("API error: {reason}")]
    Relayed { status: StatusCode, reason: String },
    /// Upstream HTTP error relayed together with the upstream's own message.
    #[error("{message}")]
    Reported { status: StatusCode, message: String },
    #[error("No response from API. Please try again later.")]
    Unavailable,
    #[error("{0}")]
    Internal(&'static str),
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let (status, key) = match &self {
            RouteError::InvalidId(status) => (*status, "message"),
            RouteError::MissingFields(_) => (StatusCode::BAD_REQUEST, "message"),
            RouteError::NotFound => (StatusCode::NOT_FOUND, "message"),
            RouteError::Relayed { status, .. } => (*status, "error"),
            RouteError::Reported { status, .. } => (*status, "error"),
            RouteError::Unavailable => (StatusCode::INTERNAL_SERVER_ERROR, "error"),
            RouteError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "error"),
        };
        let body = serde_json::json!({ key: self.to_string() });
        (status, Json(body)).into_response()
    }
}

/// Full relay policy, used by the read routes: pass the upstream status
/// through, special-case 404, and collapse transport/decode failures to 500.
pub fn relay_failure(err: UpstreamError) -> RouteError {
    match err {
        UpstreamError::Status { status, .. } if status == StatusCode::NOT_FOUND => {
            RouteError::NotFound
        }
        UpstreamError::Status { status, .. } => RouteError::Relayed {
            status,
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        },
        UpstreamError::Unreachable(_) => RouteError::Unavailable,
        UpstreamError::Decode(_) => RouteError::Internal("An unexpected error occurred."),
    }
}

/// Collapse everything except an upstream 404 into a generic 500.
pub fn collapse(err: UpstreamError, fallback: &'static str) -> RouteError {
    match err {
        UpstreamError::Status { status, .. } if status == StatusCode::NOT_FOUND => {
            RouteError::NotFound
        }
        _ => RouteError::Internal(fallback),
    }
}

/// Relay the upstream status and its own message when present, falling back
/// to a generic 500 otherwise.
pub fn report_failure(err: UpstreamError, fallback: &'static str) -> RouteError {
    match err {
        UpstreamError::Status { status, message } => RouteError::Reported {
            status,
            message: message.unwrap_or_else(|| fallback.to_string()),
        },
        _ => RouteError::Reported {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: fallback.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_maps_404_to_not_found() {
        let err = UpstreamError::Status { status: StatusCode::NOT_FOUND, message: None };
        assert_eq!(relay_failure(err), RouteError::NotFound);
    }

    #[test]
    fn relay_passes_other_statuses_through() {
        let err = UpstreamError::Status { status: StatusCode::BAD_GATEWAY, message: None };
        match relay_failure(err) {
            RouteError::Relayed { status, reason } => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
                assert_eq!(reason, "Bad Gateway");
            }
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn relay_maps_transport_to_unavailable() {
        let err = UpstreamError::Unreachable("connection refused".into());
        assert_eq!(relay_failure(err), RouteError::Unavailable);
    }

    #[test]
    fn collapse_keeps_only_404() {
        let not_found = UpstreamError::Status { status: StatusCode::NOT_FOUND, message: None };
        assert_eq!(collapse(not_found, "boom"), RouteError::NotFound);

        let teapot = UpstreamError::Status { status: StatusCode::IM_A_TEAPOT, message: None };
        assert_eq!(collapse(teapot, "boom"), RouteError::Internal("boom"));
    }

    #[test]
    fn report_prefers_upstream_message() {
        let err = UpstreamError::Status {
            status: StatusCode::CONFLICT,
            message: Some("already exists".into()),
        };
        match report_failure(err, "fallback") {
            RouteError::Reported { status, message } => {
                assert_eq!(status, StatusCode::CONFLICT);
                assert_eq!(message, "already exists");
            }
            other => panic!("unexpected mapping: {other:?}"),
        }
    }
}
