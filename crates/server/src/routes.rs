use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{warn, Level};
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod resource;
pub mod users;
pub mod orders;
pub mod offers;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses(
        (status = 200, description = "Store reachable", body = crate::openapi::HealthResponse),
        (status = 503, description = "Store unreachable", body = crate::openapi::HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Health>) {
    match state.db.ping().await {
        Ok(()) => (StatusCode::OK, Json(Health { status: "ok" })),
        Err(e) => {
            warn!(error = %e, "health ping failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(Health { status: "unavailable" }))
        }
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: health, API docs and the three resources.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let users = Router::new()
        .route("/users", get(users::list).post(users::create))
        .route("/users/:id", get(users::get).put(users::update).delete(users::delete));

    let orders = Router::new()
        .route("/orders", get(orders::list).post(orders::create))
        .route("/orders/:id", get(orders::get).put(orders::update).delete(orders::delete));

    let offers = Router::new()
        .route("/offers", get(offers::list).post(offers::create))
        .route("/offers/:id", get(offers::get).put(offers::update).delete(offers::delete));

    Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(users)
        .merge(orders)
        .merge(offers)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one span per request, method and path included
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
