use axum::{
    middleware,
    routing::{get, patch, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;

pub mod auth;
pub mod bookings;
pub mod services;

pub use auth::ServerState;

pub const BANNER: &str = "Car Doctors Server is Running";

pub async fn root() -> &'static str {
    BANNER
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: public routes, the cookie-guarded
/// booking routes, CORS and request tracing.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/login", post(auth::login))
        .route("/jwt", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/services", get(services::list))
        .route("/services/:id", get(services::get));

    // Everything here sees a verified SessionContext in its extensions.
    let protected = Router::new()
        .route("/bookings", get(bookings::list).post(bookings::create))
        .route("/bookings/:id", patch(bookings::update_status).delete(bookings::delete))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_session));

    public
        .merge(protected)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
