use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::HttpConfig;
use crate::cors::build_cors_layer;
use crate::handlers::{echo_temperatures, healthz, readyz};
use crate::state::AppState;

pub fn build_router(state: AppState, http: &HttpConfig) -> Router {
    let body_limit = match http.max_body_bytes {
        0 => DefaultBodyLimit::disable(),
        max => DefaultBodyLimit::max(max),
    };

    let router = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/temperatures", post(echo_temperatures))
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    match build_cors_layer(&http.cors) {
        Some(cors) => router.layer(cors),
        None => router,
    }
}
