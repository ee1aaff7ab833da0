use axum::{
    routing::{get, patch, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::{types::Health, upstream::UpstreamClient};

pub mod posts;

#[derive(Clone)]
pub struct ServerState {
    pub upstream: UpstreamClient,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: landing page, posts relay routes, and
/// static assets as the fallback (mirrors the old `express.static` mount).
pub fn build_router(cors: CorsLayer, state: ServerState, assets_dir: &str) -> Router {
    Router::new()
        .route("/", get(posts::index))
        .route("/health", get(health))
        .route("/posts", get(posts::list_posts))
        .route("/posts/:id", get(posts::get_post).delete(posts::delete_post))
        .route("/submit", post(posts::create_post))
        .route("/posts/:id/update", put(posts::update_post))
        .route("/posts/:id/edit", patch(posts::edit_post))
        .fallback_service(ServeDir::new(assets_dir))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
