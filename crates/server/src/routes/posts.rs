//! The six relay routes for the remote posts resource.
//!
//! Each handler validates its input first (no upstream call on invalid
//! input), performs one upstream round trip, and translates the outcome
//! through the policies in [`crate::errors`]. Delete is the exception: it
//! probes for existence before issuing the delete, so it costs two trips.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, info};

use common::types::{NewPost, PostPatch};
use common::upstream::is_empty_payload;

use crate::errors::{collapse, relay_failure, report_failure, RouteError};
use crate::routes::ServerState;
use crate::templates;

/// Inbound body for create/update/patch. Both fields optional so that
/// validation, not deserialization, decides the status code.
#[derive(Debug, Deserialize)]
pub struct PostForm {
    pub title: Option<String>,
    pub body: Option<String>,
}

/// A field counts as provided only when non-empty.
fn provided(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

/// Path ids must parse in full to a positive integer.
fn parse_id(raw: &str) -> Option<u32> {
    raw.parse::<u32>().ok().filter(|id| *id > 0)
}

pub async fn index() -> Html<&'static str> {
    Html(templates::INDEX)
}

pub async fn list_posts(State(state): State<ServerState>) -> Result<Json<Value>, RouteError> {
    match state.upstream.list_posts().await {
        Ok(data) => Ok(Json(data)),
        Err(e) => {
            error!(err = %e, "error fetching posts");
            Err(relay_failure(e))
        }
    }
}

pub async fn get_post(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, RouteError> {
    let id = parse_id(&id).ok_or(RouteError::InvalidId(StatusCode::NOT_FOUND))?;

    match state.upstream.fetch_post(id).await {
        Ok(data) if is_empty_payload(&data) => Err(RouteError::NotFound),
        Ok(data) => Ok(Json(data)),
        Err(e) => {
            error!(err = %e, id, "error fetching post");
            Err(relay_failure(e))
        }
    }
}

pub async fn create_post(
    State(state): State<ServerState>,
    Json(form): Json<PostForm>,
) -> Result<(StatusCode, Json<Value>), RouteError> {
    let (Some(title), Some(body)) = (provided(form.title), provided(form.body)) else {
        return Err(RouteError::MissingFields("Title and body are required."));
    };

    match state.upstream.create_post(&NewPost { title, body }).await {
        Ok(data) => {
            info!(id = %data.get("id").unwrap_or(&serde_json::Value::Null), "created post");
            Ok((StatusCode::CREATED, Json(data)))
        }
        Err(e) => {
            error!(err = %e, "error submitting post");
            Err(RouteError::Internal(
                "An error occurred while submitting the post.",
            ))
        }
    }
}

pub async fn update_post(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(form): Json<PostForm>,
) -> Result<Json<Value>, RouteError> {
    // Id is checked before the field validation, so a bad id wins with 404.
    let id = parse_id(&id).ok_or(RouteError::InvalidId(StatusCode::NOT_FOUND))?;
    let (Some(title), Some(body)) = (provided(form.title), provided(form.body)) else {
        return Err(RouteError::MissingFields("Title and body are required."));
    };

    match state
        .upstream
        .replace_post(id, &NewPost { title, body })
        .await
    {
        Ok(data) => Ok(Json(data)),
        Err(e) => {
            error!(err = %e, id, "error updating post");
            Err(report_failure(e, "An error occurred while updating the post."))
        }
    }
}

pub async fn edit_post(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(form): Json<PostForm>,
) -> Result<Json<Value>, RouteError> {
    // Longstanding contract: this route answers 400 for a bad id where the
    // others answer 404.
    let id = parse_id(&id).ok_or(RouteError::InvalidId(StatusCode::BAD_REQUEST))?;

    let patch = PostPatch {
        title: provided(form.title),
        body: provided(form.body),
    };
    if patch.title.is_none() && patch.body.is_none() {
        return Err(RouteError::MissingFields(
            "At least one field (title or body) is required.",
        ));
    }

    match state.upstream.patch_post(id, &patch).await {
        Ok(data) => Ok(Json(data)),
        Err(e) => {
            error!(err = %e, id, "error updating post");
            Err(collapse(e, "An error occurred while updating the post."))
        }
    }
}

pub async fn delete_post(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, RouteError> {
    let id = parse_id(&id).ok_or(RouteError::InvalidId(StatusCode::NOT_FOUND))?;

    // Existence probe first; the delete is only issued for a live post.
    let probe = match state.upstream.fetch_post(id).await {
        Ok(data) => data,
        Err(e) => {
            error!(err = %e, id, "error deleting post");
            return Err(collapse(e, "An error occurred while deleting the post."));
        }
    };
    if is_empty_payload(&probe) {
        return Err(RouteError::NotFound);
    }

    if let Err(e) = state.upstream.delete_post(id).await {
        error!(err = %e, id, "error deleting post");
        return Err(collapse(e, "An error occurred while deleting the post."));
    }

    info!(id, "deleted post");
    Ok(Json(json!({ "message": format!("Post with ID {id} deleted.") })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_positive_integers_only() {
        assert_eq!(parse_id("1"), Some(1));
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("0"), None);
        assert_eq!(parse_id("-3"), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("12abc"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("1.5"), None);
    }

    #[test]
    fn provided_rejects_empty_strings() {
        assert_eq!(provided(Some("x".into())), Some("x".to_string()));
        assert_eq!(provided(Some(String::new())), None);
        assert_eq!(provided(None), None);
    }
}
